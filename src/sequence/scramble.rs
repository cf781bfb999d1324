use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use strum::IntoEnumIterator;

use crate::cube::{grid::Grid, turn::*, *};

/// How to scramble a cube.
#[derive(Clone, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScrambleConfig {
	/// Number of moves
	pub length: usize,
	/// Fixed seed for reproducible scrambles
	pub seed: Option<u64>,
	/// Whether whole-body rotations may be part of the scramble
	pub rotations: bool,
}

impl Default for ScrambleConfig {
	fn default() -> Self {
		Self {
			length: 10,
			seed: None,
			rotations: false,
		}
	}
}

/// Generates random move sequences for one cube size.
pub struct Scrambler {
	config: ScrambleConfig,
	moves: Vec<Move>,
	rng: StdRng,
}

impl Scrambler {
	pub fn new(size: usize, config: ScrambleConfig) -> Result<Self, CubeError> {
		if size == 0 {
			return Err(CubeError::ZeroSize);
		}

		// Every move that is valid on this size
		let mut moves = Vec::new();
		for face in Face::iter() {
			for depth in 0..size.saturating_sub(1) {
				for direction in Direction::iter() {
					moves.push(Move::slice(face, depth, direction));
				}
			}
		}
		if config.rotations {
			for axis in Axis::iter() {
				for direction in Direction::iter() {
					moves.push(Move::rotation(axis, direction));
				}
			}
		}
		if moves.is_empty() && config.length > 0 {
			return Err(CubeError::NoMoves(size));
		}

		let rng = match config.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_entropy(),
		};

		Ok(Self { config, moves, rng })
	}

	pub fn config(&self) -> &ScrambleConfig {
		&self.config
	}

	/// A random sequence in which no move directly undoes the one before it.
	pub fn generate(&mut self) -> Vec<Move> {
		let mut out: Vec<Move> = Vec::with_capacity(self.config.length);

		while out.len() < self.config.length {
			let Some(mv) = self.moves.choose(&mut self.rng).copied() else {
				break;
			};
			if out.last().is_some_and(|last| last.inverse() == mv) {
				continue;
			}
			out.push(mv);
		}

		log::debug!("generated scramble: {}", format_moves(&out));
		out
	}

	/// Scramble the grid and return the moves used.
	pub fn scramble(&mut self, grid: &mut Grid) -> Result<Vec<Move>, CubeError> {
		let moves = self.generate();
		grid.apply_moves(moves.iter().copied())?;
		Ok(moves)
	}
}
