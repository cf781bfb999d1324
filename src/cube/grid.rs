use std::fmt::Write;

use crate::cube::{engine::TurnEngine, layout::NetLayout, solved, turn::Move, *};
use strum::IntoEnumIterator;

/// An N×N×N cube as a flat net of colored cells.
///
/// Facelets have no identity beyond their color.
/// Cloning copies the whole net, a clone never aliases the original.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Grid {
	layout: NetLayout,
	cells: Vec<Color>,
}

impl Grid {
	/// Creates a *solved* cube of the given size!
	pub fn new(size: usize) -> Result<Self, CubeError> {
		let layout = NetLayout::new(size)?;
		let mut cells = vec![Color::Blank; layout.area()];

		for face in Face::iter() {
			for row in 0..size {
				for col in 0..size {
					cells[layout.index_unchecked(face, row, col)] = face.home_color();
				}
			}
		}

		Ok(Self { layout, cells })
	}

	pub const fn size(&self) -> usize {
		self.layout.size()
	}

	pub const fn layout(&self) -> &NetLayout {
		&self.layout
	}

	pub fn get(&self, face: Face, row: usize, col: usize) -> Result<Color, CubeError> {
		let idx = self.layout.face_cell(face, row, col)?;
		Ok(self.cells[idx])
	}

	pub fn set(&mut self, face: Face, row: usize, col: usize, color: Color) -> Result<(), CubeError> {
		let idx = self.layout.face_cell(face, row, col)?;
		self.cells[idx] = color;
		Ok(())
	}

	/// The raw net cell, blank cells included.
	pub fn net_cell(&self, row: usize, col: usize) -> Option<Color> {
		if row >= self.layout.rows() || col >= self.layout.cols() {
			return None;
		}
		Some(self.cells[row * self.layout.cols() + col])
	}

	/// All facelets of one face in row-major order
	pub fn face(&self, face: Face) -> impl Iterator<Item = Color> + '_ {
		let n = self.size();
		(0..n * n).map(move |i| self.cells[self.layout.index_unchecked(face, i / n, i % n)])
	}

	/// Every facelet of the cube, face by face.
	pub fn facelets(&self) -> impl Iterator<Item = Color> + '_ {
		Face::iter().flat_map(move |f| self.face(f))
	}

	pub fn is_solved(&self) -> bool {
		solved::is_solved(self)
	}

	pub(crate) fn parts_mut(&mut self) -> (&NetLayout, &mut [Color]) {
		(&self.layout, &mut self.cells)
	}

	/// Writes the faces in the order U, L, F, R, B, D,
	/// each row by row, one letter per facelet.
	pub fn to_facelet_string(&self) -> String {
		self.facelets().map(Color::letter).collect()
	}

	/// Parses the format written by `to_facelet_string`.
	/// Only the letters are checked, not whether a real cube could show them.
	pub fn from_facelets(size: usize, s: &str) -> Result<Self, CubeError> {
		let mut grid = Self::new(size)?;
		let expected = NUM_FACES * size * size;
		let got = s.chars().count();
		if got != expected {
			return Err(CubeError::FaceletCount { expected, got });
		}

		let n = size;
		let mut chars = s.chars();
		for face in Face::iter() {
			for i in 0..n * n {
				let c = chars.next().ok_or(CubeError::FaceletCount { expected, got })?;
				let col = Color::from_letter(c).ok_or(CubeError::InvalidColor(c))?;
				grid.cells[grid.layout.index_unchecked(face, i / n, i % n)] = col;
			}
		}

		Ok(grid)
	}

	/// Print the cube in the *standard output* with ANSI-colors
	pub fn print(&self) {
		for row in 0..self.layout.rows() {
			let mut line = String::new();
			for col in 0..self.layout.cols() {
				let c = self.cells[row * self.layout.cols() + col];
				if c == Color::Blank {
					line.push_str("  ");
				} else {
					let _ = write!(line, "{}▀ ", c.ansi_code());
				}
			}
			println!("{}", line.trim_end());
		}
		// Reset ansii color
		println!("\x1b[00m");
	}
}

impl RubiksCube for Grid {
	fn apply_move(&mut self, mv: Move) -> Result<(), CubeError> {
		TurnEngine::apply(self, mv)
	}

	fn apply_moves<I>(&mut self, moves: I) -> Result<(), CubeError>
	where
		I: IntoIterator<Item = Move>,
	{
		let moves: Vec<Move> = moves.into_iter().collect();
		// Check everything first so that a bad move can't leave a half turned cube
		for mv in moves.iter() {
			mv.validate(self.size())?;
		}
		for mv in moves {
			TurnEngine::apply(self, mv)?;
		}
		Ok(())
	}
}

impl std::fmt::Display for Grid {
	/// The net, one line per row, with `.` for cells that belong to no face.
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		for row in 0..self.layout.rows() {
			for col in 0..self.layout.cols() {
				f.write_char(self.cells[row * self.layout.cols() + col].letter())?;
			}
			writeln!(f)?;
		}
		Ok(())
	}
}
