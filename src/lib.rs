//! This is a simple example how to turn the cube.
//!
//! ```
//! use cubenet::prelude::*;
//!
//! let mut cube = Grid::new(3).unwrap();
//!
//! let moves = parse_moves("f f f").unwrap();
//! cube.apply_moves(moves.clone()).unwrap();
//! assert!(!cube.is_solved());
//!
//! // Three quarter turns are one quarter turn the other way
//! let short = simplify(&moves);
//! assert_eq!(format_moves(&short), "f'");
//!
//! let mut other = Grid::new(3).unwrap();
//! other.apply_moves(short).unwrap();
//! assert_eq!(cube, other);
//! ```
//!
//! Moves are written `<face><depth?><'?>`: `r` turns the right face clockwise,
//! `u1` the layer right below the up face, `f'` the front face counter-clockwise.
//! `x`, `y` and `z` turn the whole cube like `r`, `u` and `f`.

pub mod cube;
pub mod sequence;

pub mod prelude {
	pub use crate::cube::{engine::TurnEngine, grid::Grid, layout::NetLayout, solved::is_solved, turn::*, *};
	pub use crate::sequence::{
		scramble::{ScrambleConfig, Scrambler},
		simplify::{simplify, Canonicalizer},
	};
}
