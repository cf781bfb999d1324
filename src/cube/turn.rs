use std::str::FromStr;

use crate::cube::*;

/// You can either turn a layer clockwise or counter-clockwise,
/// as seen looking at the turned face from outside the cube.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter, serde::Serialize, serde::Deserialize)]
pub enum Direction {
	Clockwise,
	CounterClockwise,
}

impl Direction {
	pub const fn flip(self) -> Self {
		match self {
			Direction::Clockwise => Direction::CounterClockwise,
			Direction::CounterClockwise => Direction::Clockwise,
		}
	}
}

impl std::fmt::Display for Direction {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Direction::Clockwise => Ok(()),
			Direction::CounterClockwise => write!(f, "'"),
		}
	}
}

/// One transformation request.
///
/// A slice turn rotates the layer `depth` steps in from `face`
/// (0 is the face itself). A rotation turns the whole cube about `axis`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Move {
	Slice {
		face: Face,
		direction: Direction,
		depth: usize,
	},
	Rotation {
		axis: Axis,
		direction: Direction,
	},
}

impl Move {
	/// A clockwise turn of the outer layer of `face`.
	pub const fn face(face: Face) -> Self {
		Move::Slice {
			face,
			direction: Direction::Clockwise,
			depth: 0,
		}
	}

	pub const fn slice(face: Face, depth: usize, direction: Direction) -> Self {
		Move::Slice {
			face,
			direction,
			depth,
		}
	}

	pub const fn rotation(axis: Axis, direction: Direction) -> Self {
		Move::Rotation { axis, direction }
	}

	pub const fn direction(&self) -> Direction {
		match self {
			Move::Slice { direction, .. } | Move::Rotation { direction, .. } => *direction,
		}
	}

	/// The move undoing this one
	pub const fn inverse(self) -> Self {
		match self {
			Move::Slice {
				face,
				direction,
				depth,
			} => Move::Slice {
				face,
				direction: direction.flip(),
				depth,
			},
			Move::Rotation { axis, direction } => Move::Rotation {
				axis,
				direction: direction.flip(),
			},
		}
	}

	/// Turn itself into the inverse operation.
	pub fn invert(&mut self) {
		*self = self.inverse();
	}

	/// Whether both moves act on the same layer (or both rotate about the same axis),
	/// regardless of direction.
	pub fn same_layer(&self, other: &Move) -> bool {
		match (self, other) {
			(
				Move::Slice { face, depth, .. },
				Move::Slice {
					face: f2, depth: d2, ..
				},
			) => face == f2 && depth == d2,
			(Move::Rotation { axis, .. }, Move::Rotation { axis: a2, .. }) => axis == a2,
			_ => false,
		}
	}

	/// Check that this move can be applied to a cube of the given size.
	pub fn validate(&self, size: usize) -> Result<(), CubeError> {
		match *self {
			Move::Slice { depth, .. } => {
				if size < 2 {
					return Err(CubeError::InvalidMove {
						mv: *self,
						size,
						reason: "slice turns need a cube of size 2 or more",
					});
				}
				if depth >= size - 1 {
					return Err(CubeError::InvalidMove {
						mv: *self,
						size,
						reason: "depth must be smaller than size - 1",
					});
				}
				Ok(())
			}
			Move::Rotation { .. } => Ok(()),
		}
	}
}

impl std::fmt::Display for Move {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Move::Slice {
				face,
				direction,
				depth,
			} => {
				write!(f, "{}", face.letter())?;
				if *depth != 0 {
					write!(f, "{}", depth)?;
				}
				write!(f, "{}", direction)
			}
			Move::Rotation { axis, direction } => {
				write!(f, "{}", axis.letter())?;
				write!(f, "{}", direction)
			}
		}
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
	#[error("Empty move token")]
	Empty,
	#[error("'{0}' is not a face or axis letter")]
	Letter(char),
	#[error("Rotation \"{0}\" can't carry a depth")]
	RotationDepth(String),
	#[error("Depth of \"{0}\" is too large")]
	Depth(String),
	#[error("Unexpected trailing characters in \"{0}\"")]
	Trailing(String),
}

impl FromStr for Move {
	type Err = ParseMoveError;

	/// Parses `<letter><depth?><'?>`, e.g. `r`, `u2` or `f'`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut chars = s.chars();
		let letter = chars.next().ok_or(ParseMoveError::Empty)?;
		let rest = chars.as_str();

		// Split off the depth digits and the direction mark
		let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
		let (digits, mark) = rest.split_at(digits_end);

		let direction = match mark {
			"" => Direction::Clockwise,
			"'" => Direction::CounterClockwise,
			_ => return Err(ParseMoveError::Trailing(s.to_string())),
		};

		let face = match letter.to_ascii_lowercase() {
			'u' => Face::Up,
			'd' => Face::Down,
			'f' => Face::Front,
			'b' => Face::Back,
			'l' => Face::Left,
			'r' => Face::Right,
			'x' | 'y' | 'z' => {
				if !digits.is_empty() {
					return Err(ParseMoveError::RotationDepth(s.to_string()));
				}
				let axis = match letter.to_ascii_lowercase() {
					'x' => Axis::X,
					'y' => Axis::Y,
					_ => Axis::Z,
				};
				return Ok(Move::Rotation { axis, direction });
			}
			_ => return Err(ParseMoveError::Letter(letter)),
		};

		let depth = if digits.is_empty() {
			0
		} else {
			digits
				.parse::<usize>()
				.map_err(|_| ParseMoveError::Depth(s.to_string()))?
		};

		Ok(Move::Slice {
			face,
			direction,
			depth,
		})
	}
}

impl TryFrom<String> for Move {
	type Error = ParseMoveError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Move::from_str(&value)
	}
}

impl From<Move> for String {
	fn from(val: Move) -> Self {
		val.to_string()
	}
}

/// Parse a whitespace (or comma) separated list of move tokens.
pub fn parse_moves(string: &str) -> Result<Vec<Move>, ParseMoveError> {
	string
		.split(|c: char| c.is_whitespace() || c == ',')
		.filter(|t| !t.is_empty())
		.map(Move::from_str)
		.collect()
}

/// Write moves the way `parse_moves` reads them.
pub fn format_moves(moves: &[Move]) -> String {
	moves
		.iter()
		.map(Move::to_string)
		.collect::<Vec<_>>()
		.join(" ")
}
