use crate::cube::{grid::Grid, layout::NetLayout, turn::*, *};

/// The edge of a neighbouring face that is shared with the turned face.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Border {
	Top,
	Bottom,
	Left,
	Right,
}

/// One quarter of the ring of facelets moved by a slice turn.
#[derive(Clone, Copy, Debug)]
struct Segment {
	face: Face,
	border: Border,
	/// Walk the line from its far end
	reversed: bool,
}

const fn seg(face: Face, border: Border, reversed: bool) -> Segment {
	Segment {
		face,
		border,
		reversed,
	}
}

use Border::*;

/*
 * The neighbours of every face, indexed by `Face`.
 *
 * The four segments are listed in the order the facelets travel on a
 * clockwise turn: segment k moves onto segment k+1, element j onto element j.
 * The line at depth d lies d steps in from `border`.
 */
#[rustfmt::skip]
const ADJACENCY: [[Segment; 4]; NUM_FACES] = [
	// Up
	[seg(Face::Front, Top, false), seg(Face::Left, Top, false), seg(Face::Back, Top, false), seg(Face::Right, Top, false)],
	// Left
	[seg(Face::Up, Left, false), seg(Face::Front, Left, false), seg(Face::Down, Left, false), seg(Face::Back, Right, true)],
	// Front
	[seg(Face::Up, Bottom, false), seg(Face::Right, Left, false), seg(Face::Down, Top, true), seg(Face::Left, Right, true)],
	// Right
	[seg(Face::Up, Right, false), seg(Face::Back, Left, true), seg(Face::Down, Right, false), seg(Face::Front, Right, false)],
	// Back
	[seg(Face::Up, Top, false), seg(Face::Left, Left, true), seg(Face::Down, Bottom, true), seg(Face::Right, Right, false)],
	// Down
	[seg(Face::Front, Bottom, false), seg(Face::Right, Bottom, false), seg(Face::Back, Bottom, false), seg(Face::Left, Bottom, false)],
];

/// Row and column of the j-th facelet of a segment line at the given depth.
const fn line_cell(size: usize, s: Segment, depth: usize, j: usize) -> (usize, usize) {
	let k = if s.reversed { size - 1 - j } else { j };
	match s.border {
		Top => (depth, k),
		Bottom => (size - 1 - depth, k),
		Left => (k, depth),
		Right => (k, size - 1 - depth),
	}
}

/// Net indices of the 4N facelets turned with the layer at `depth` below `face`.
fn ring_indices(layout: &NetLayout, face: Face, depth: usize) -> Vec<usize> {
	let n = layout.size();
	ADJACENCY[face as usize]
		.iter()
		.flat_map(|s| {
			(0..n).map(move |j| {
				let (row, col) = line_cell(n, *s, depth, j);
				layout.index_unchecked(s.face, row, col)
			})
		})
		.collect()
}

/// Moves every segment of the ring onto the next one (or the previous one)
fn cycle_ring<T: Copy>(cells: &mut [T], ring: &[usize], size: usize, direction: Direction) {
	let mut buf: Vec<T> = ring.iter().map(|i| cells[*i]).collect();
	match direction {
		Direction::Clockwise => buf.rotate_right(size),
		Direction::CounterClockwise => buf.rotate_left(size),
	}
	for (i, col) in ring.iter().zip(buf) {
		cells[*i] = col;
	}
}

/// Rotate the facelets of the face itself by a quarter turn.
fn rotate_face<T: Copy>(cells: &mut [T], layout: &NetLayout, face: Face, direction: Direction) {
	let n = layout.size();
	let old: Vec<T> = (0..n * n)
		.map(|i| cells[layout.index_unchecked(face, i / n, i % n)])
		.collect();

	for r in 0..n {
		for c in 0..n {
			let (sr, sc) = match direction {
				Direction::Clockwise => (n - 1 - c, r),
				Direction::CounterClockwise => (c, n - 1 - r),
			};
			cells[layout.index_unchecked(face, r, c)] = old[sr * n + sc];
		}
	}
}

/// Moves the cells of a net the way `mv` moves facelets.
/// The move must already be validated for the layout's size.
fn permute<T: Copy>(cells: &mut [T], layout: &NetLayout, mv: Move) {
	match mv {
		Move::Slice {
			face,
			direction,
			depth,
		} => {
			let ring = ring_indices(layout, face, depth);
			cycle_ring(cells, &ring, layout.size(), direction);
			if depth == 0 {
				rotate_face(cells, layout, face, direction);
			}
		}
		Move::Rotation { axis, direction } => {
			let face = axis.face();
			for depth in 0..layout.size() {
				let ring = ring_indices(layout, face, depth);
				cycle_ring(cells, &ring, layout.size(), direction);
			}
			rotate_face(cells, layout, face, direction);
			// Seen from its own outside the opposite face turns the other way
			rotate_face(cells, layout, face.opposite(), direction.flip());
		}
	}
}

/// Applies moves to grids.
///
/// Every move is a permutation of the facelets:
/// it never creates or destroys a color and it is undone by its inverse.
pub struct TurnEngine;

impl TurnEngine {
	/// Apply the move to the grid in place.
	/// The move is validated first, an invalid move leaves the grid untouched.
	pub fn apply(grid: &mut Grid, mv: Move) -> Result<(), CubeError> {
		mv.validate(grid.size())?;
		log::trace!("applying {} to a size {} grid", mv, grid.size());

		let (layout, cells) = grid.parts_mut();
		permute(cells, layout, mv);

		Ok(())
	}

	/// Same as `apply`, but returns a new grid instead.
	pub fn applied(grid: &Grid, mv: Move) -> Result<Grid, CubeError> {
		let mut out = grid.clone();
		Self::apply(&mut out, mv)?;
		Ok(out)
	}

	/// The slice turns a rotation is made of on a cube of the given size:
	/// every inner layer turned like the axis face, then the opposite face turned back.
	pub fn rotation_as_slices(
		axis: Axis,
		direction: Direction,
		size: usize,
	) -> Result<Vec<Move>, CubeError> {
		let rot = Move::rotation(axis, direction);
		if size < 2 {
			return Err(CubeError::InvalidMove {
				mv: rot,
				size,
				reason: "slice turns need a cube of size 2 or more",
			});
		}

		let face = axis.face();
		let mut out: Vec<Move> = (0..size - 1)
			.map(|depth| Move::slice(face, depth, direction))
			.collect();
		out.push(Move::slice(face.opposite(), 0, direction.flip()));

		Ok(out)
	}
}
