pub mod engine;
pub mod grid;
pub mod layout;
pub mod solved;
pub mod turn;

use turn::Move;

/// The number of sides of a cube
pub const NUM_FACES: usize = 6;

/// The six faces of the cube.
/// The order is the order the faces are written in a facelet string.
#[derive(
	Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter, strum::EnumCount, strum::FromRepr,
	serde::Serialize, serde::Deserialize,
)]
#[repr(usize)]
pub enum Face {
	Up,
	Left,
	Front,
	Right,
	Back,
	Down,
}

impl Face {
	pub const fn opposite(self) -> Self {
		match self {
			Face::Up => Face::Down,
			Face::Down => Face::Up,
			Face::Front => Face::Back,
			Face::Back => Face::Front,
			Face::Left => Face::Right,
			Face::Right => Face::Left,
		}
	}

	/// The color every facelet of this face has on a solved cube.
	pub const fn home_color(self) -> Color {
		match self {
			Face::Up => Color::White,
			Face::Down => Color::Yellow,
			Face::Front => Color::Green,
			Face::Back => Color::Blue,
			Face::Left => Color::Orange,
			Face::Right => Color::Red,
		}
	}

	/// The axis this face is turned about.
	pub const fn axis(self) -> Axis {
		match self {
			Face::Right | Face::Left => Axis::X,
			Face::Up | Face::Down => Axis::Y,
			Face::Front | Face::Back => Axis::Z,
		}
	}

	/// The notation letter of the face
	pub const fn letter(self) -> char {
		match self {
			Face::Up => 'u',
			Face::Down => 'd',
			Face::Front => 'f',
			Face::Back => 'b',
			Face::Left => 'l',
			Face::Right => 'r',
		}
	}
}

/// The color of a single grid cell.
/// `Blank` marks net cells outside of the six faces.
#[derive(
	Clone, Copy, PartialEq, Eq, Hash, Debug, Default, strum::EnumIter, strum::EnumCount,
	strum::Display, serde::Serialize, serde::Deserialize,
)]
pub enum Color {
	White,
	Yellow,
	Green,
	Blue,
	Orange,
	Red,
	#[default]
	Blank,
}

impl Color {
	/// The character used in facelet strings and in the printed net.
	pub const fn letter(self) -> char {
		match self {
			Color::White => 'w',
			Color::Yellow => 'y',
			Color::Green => 'g',
			Color::Blue => 'b',
			Color::Orange => 'o',
			Color::Red => 'r',
			Color::Blank => '.',
		}
	}

	pub const fn from_letter(c: char) -> Option<Self> {
		let col = match c {
			'w' | 'W' => Color::White,
			'y' | 'Y' => Color::Yellow,
			'g' | 'G' => Color::Green,
			'b' | 'B' => Color::Blue,
			'o' | 'O' => Color::Orange,
			'r' | 'R' => Color::Red,
			_ => return None,
		};
		Some(col)
	}

	/// Returns the ANSI-colorcode for the given color.
	pub fn ansi_code(self) -> &'static str {
		match self {
			Color::White => "\x1b[00m",
			Color::Yellow => "\x1b[93m",
			Color::Green => "\x1b[32m",
			Color::Blue => "\x1b[34m",
			Color::Orange => "\x1b[33m",
			Color::Red => "\x1b[31m",
			Color::Blank => "\x1b[90m",
		}
	}
}

/// The three axes of a whole-body rotation.
/// Each one turns the cube like its positive face:
/// X like Right, Y like Up and Z like Front.
#[derive(
	Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter, strum::EnumCount,
	serde::Serialize, serde::Deserialize,
)]
pub enum Axis {
	X,
	Y,
	Z,
}

impl Axis {
	pub const fn face(self) -> Face {
		match self {
			Axis::X => Face::Right,
			Axis::Y => Face::Up,
			Axis::Z => Face::Front,
		}
	}

	pub const fn letter(self) -> char {
		match self {
			Axis::X => 'x',
			Axis::Y => 'y',
			Axis::Z => 'z',
		}
	}
}

/// Everything that can go wrong when reading, writing or turning a grid.
/// A call that fails never mutates the grid.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
	#[error("The cube size must be at least 1")]
	ZeroSize,
	#[error("Position ({row}, {col}) is outside of a face of size {size}")]
	OutOfRange { row: usize, col: usize, size: usize },
	#[error("Expected {expected} facelets but got {got}")]
	FaceletCount { expected: usize, got: usize },
	#[error("Move {mv} is invalid on a cube of size {size}: {reason}")]
	InvalidMove { mv: Move, size: usize, reason: &'static str },
	#[error("'{0}' is not a facelet color")]
	InvalidColor(char),
	#[error("A cube of size {0} has no moves to scramble with")]
	NoMoves(usize),
}

/// The RubiksCube trait.
pub trait RubiksCube {
	fn apply_move(&mut self, mv: Move) -> Result<(), CubeError>;

	/// Apply the given sequence of moves.
	/// Either every move is applied or none of them.
	fn apply_moves<I>(&mut self, moves: I) -> Result<(), CubeError>
	where
		I: IntoIterator<Item = Move>;
}
