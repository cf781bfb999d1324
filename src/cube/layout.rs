use crate::cube::*;
use strum::IntoEnumIterator;

/// Where the faces live on the unfolded net.
///
/// ```text
///       U
///    L  F  R  B
///       D
/// ```
///
/// Every face block is stored as seen from outside the cube,
/// so all of them rotate the same way in place.
/// The net is `3 * size` rows high and `4 * size` columns wide.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct NetLayout {
	size: usize,
	/// Top left corner (row, column) of every face block, indexed by `Face`
	origin: [(usize, usize); NUM_FACES],
}

/// Position of a face block on the net in units of the face size.
const fn block(face: Face) -> (usize, usize) {
	match face {
		Face::Up => (0, 1),
		Face::Left => (1, 0),
		Face::Front => (1, 1),
		Face::Right => (1, 2),
		Face::Back => (1, 3),
		Face::Down => (2, 1),
	}
}

impl NetLayout {
	pub fn new(size: usize) -> Result<Self, CubeError> {
		if size == 0 {
			return Err(CubeError::ZeroSize);
		}

		let mut origin = [(0, 0); NUM_FACES];
		for face in Face::iter() {
			let (r, c) = block(face);
			origin[face as usize] = (r * size, c * size);
		}

		Ok(Self { size, origin })
	}

	pub const fn size(&self) -> usize {
		self.size
	}

	pub const fn rows(&self) -> usize {
		3 * self.size
	}

	pub const fn cols(&self) -> usize {
		4 * self.size
	}

	/// Number of cells on the whole net, blank ones included
	pub const fn area(&self) -> usize {
		self.rows() * self.cols()
	}

	/// Index into the flattened net of the given facelet.
	pub fn face_cell(&self, face: Face, row: usize, col: usize) -> Result<usize, CubeError> {
		if row >= self.size || col >= self.size {
			return Err(CubeError::OutOfRange {
				row,
				col,
				size: self.size,
			});
		}
		Ok(self.index_unchecked(face, row, col))
	}

	/// Same as `face_cell`, for callers that already checked the bounds.
	#[inline]
	pub(crate) fn index_unchecked(&self, face: Face, row: usize, col: usize) -> usize {
		let (r0, c0) = self.origin[face as usize];
		(r0 + row) * self.cols() + c0 + col
	}

	/// The face owning the given net cell, or None for blank cells.
	pub fn face_at(&self, row: usize, col: usize) -> Option<Face> {
		if row >= self.rows() || col >= self.cols() {
			return None;
		}
		let pos = (row / self.size, col / self.size);
		Face::iter().find(|f| block(*f) == pos)
	}
}
