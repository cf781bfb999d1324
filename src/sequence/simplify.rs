use crate::cube::{turn::*, *};

/// Rewrites move sequences into shorter ones with the same effect.
///
/// The rules, tried in this order on every pass:
/// 1. `t t'` cancels out.
/// 2. `t t t` becomes `t'`.
/// 3. One turn of every layer along an axis, all in the same sense,
///    becomes a whole-body rotation (only when the cube size is known).
///
/// Every rewrite makes the sequence shorter, so the rewriting always stops.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Canonicalizer {
	size: Option<usize>,
}

impl Canonicalizer {
	/// Cancels and folds turns, without knowing the size of the cube.
	pub const fn new() -> Self {
		Self { size: None }
	}

	/// Also folds complete layer runs into rotations, which needs the size.
	pub const fn for_size(size: usize) -> Self {
		Self { size: Some(size) }
	}

	pub fn simplify(&self, moves: &[Move]) -> Vec<Move> {
		let mut out = moves.to_vec();

		// Restart after every rewrite, it can create a new match further back
		while cancel_pair(&mut out) || fold_triple(&mut out) || self.fold_rotation(&mut out) {}

		if out.len() < moves.len() {
			log::debug!("simplified {} moves to {}", moves.len(), out.len());
		}
		out
	}

	fn fold_rotation(&self, moves: &mut Vec<Move>) -> bool {
		let size = match self.size {
			Some(s) if s >= 2 => s,
			_ => return false,
		};
		if moves.len() < size {
			return false;
		}

		for start in 0..=moves.len() - size {
			if let Some(rot) = full_axis_turn(&moves[start..start + size], size) {
				moves.drain(start..start + size);
				moves.insert(start, rot);
				return true;
			}
		}
		false
	}
}

/// Shorthand for `Canonicalizer::new().simplify(moves)`.
pub fn simplify(moves: &[Move]) -> Vec<Move> {
	Canonicalizer::new().simplify(moves)
}

/// Rule 1: a move directly followed by its inverse.
fn cancel_pair(moves: &mut Vec<Move>) -> bool {
	for i in 1..moves.len() {
		if moves[i] == moves[i - 1].inverse() {
			moves.drain(i - 1..=i);
			return true;
		}
	}
	false
}

/// Rule 2: three quarter turns are one quarter turn the other way.
fn fold_triple(moves: &mut Vec<Move>) -> bool {
	for i in 2..moves.len() {
		if moves[i - 2] == moves[i - 1] && moves[i - 1] == moves[i] {
			let folded = moves[i].inverse();
			moves.drain(i - 2..=i);
			moves.insert(i - 2, folded);
			return true;
		}
	}
	false
}

/// Where a slice turn sits on its axis: the axis, the layer counted from the
/// axis face and the sense of the turn as seen from the axis face.
fn axis_layer(mv: &Move, size: usize) -> Option<(Axis, usize, Direction)> {
	match *mv {
		Move::Slice {
			face,
			direction,
			depth,
		} if depth + 1 < size => {
			let axis = face.axis();
			if face == axis.face() {
				Some((axis, depth, direction))
			} else {
				Some((axis, size - 1 - depth, direction.flip()))
			}
		}
		_ => None,
	}
}

/// Rule 3: the rotation a run of `size` slice turns amounts to, if it turns
/// every layer of one axis exactly once in the same sense.
fn full_axis_turn(run: &[Move], size: usize) -> Option<Move> {
	let (axis, _, direction) = axis_layer(run.first()?, size)?;
	let mut covered = vec![false; size];

	for mv in run {
		let (a, layer, d) = axis_layer(mv, size)?;
		if a != axis || d != direction || covered[layer] {
			return None;
		}
		covered[layer] = true;
	}

	// run has exactly `size` distinct layers at this point
	Some(Move::rotation(axis, direction))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cube::grid::Grid;
	use std::error::Error;

	fn simplified(s: &str) -> Result<String, Box<dyn Error>> {
		Ok(format_moves(&simplify(&parse_moves(s)?)))
	}

	fn simplified_sized(s: &str, size: usize) -> Result<String, Box<dyn Error>> {
		Ok(format_moves(&Canonicalizer::for_size(size).simplify(&parse_moves(s)?)))
	}

	#[test]
	fn triple_turn_folds() -> Result<(), Box<dyn Error>> {
		assert_eq!(simplified("f f f")?, "f'");
		assert_eq!(simplified("r1' r1' r1'")?, "r1");
		assert_eq!(simplified("x x x")?, "x'");

		let moves = parse_moves("f f f")?;
		let mut a = Grid::new(3)?;
		let mut b = Grid::new(3)?;
		a.apply_moves(moves.clone())?;
		b.apply_moves(simplify(&moves))?;
		assert_eq!(a, b);
		Ok(())
	}

	#[test]
	fn inverse_pairs_cancel() -> Result<(), Box<dyn Error>> {
		assert_eq!(simplified("r r'")?, "");
		assert_eq!(simplified("u r r' u'")?, "");
		assert_eq!(simplified("y' y f")?, "f");
		// Different depth or face never cancels
		assert_eq!(simplified("r r1'")?, "r r1'");
		assert_eq!(simplified("r l'")?, "r l'");
		Ok(())
	}

	#[test]
	/// A fold can expose a new cancellation two positions away
	fn rewrites_cascade() -> Result<(), Box<dyn Error>> {
		assert_eq!(simplified("u f f f f u'")?, "");
		assert_eq!(simplified("r u u u u r'")?, "");
		// d' d cancels first, then d d d folds
		assert_eq!(simplified("l d' d d d d")?, "l d'");
		Ok(())
	}

	#[test]
	fn four_turns_shrink_to_one() -> Result<(), Box<dyn Error>> {
		// f f f -> f', then f' f cancels
		assert_eq!(simplified("f f f f")?, "");
		assert_eq!(simplified("f f f f f")?, "f");
		Ok(())
	}

	#[test]
	fn nothing_to_do() -> Result<(), Box<dyn Error>> {
		assert_eq!(simplified("")?, "");
		assert_eq!(simplified("r u r' u'")?, "r u r' u'");
		assert_eq!(simplified("f f")?, "f f");
		Ok(())
	}

	#[test]
	fn full_layer_runs_become_rotations() -> Result<(), Box<dyn Error>> {
		assert_eq!(simplified_sized("r r1 l'", 3)?, "x");
		assert_eq!(simplified_sized("l' r r1", 3)?, "x");
		assert_eq!(simplified_sized("u' d", 2)?, "y'");
		assert_eq!(simplified_sized("f b1' f1 b'", 4)?, "z");
		assert_eq!(simplified_sized("b' b1' f", 3)?, "z");
		// Without the size nothing is folded
		assert_eq!(simplified("r r1 l'")?, "r r1 l'");
		Ok(())
	}

	#[test]
	fn incomplete_runs_stay() -> Result<(), Box<dyn Error>> {
		// A layer missing
		assert_eq!(simplified_sized("r r1 u l'", 3)?, "r r1 u l'");
		// Mixed senses
		assert_eq!(simplified_sized("r r1 l", 3)?, "r r1 l");
		// The same layer twice
		assert_eq!(simplified_sized("r r l'", 3)?, "r r l'");
		// Depth out of range for the size
		assert_eq!(simplified_sized("r r5 l'", 3)?, "r r5 l'");
		Ok(())
	}

	#[test]
	fn rotations_fold_and_cancel_further() -> Result<(), Box<dyn Error>> {
		assert_eq!(simplified_sized("r r1 l' x'", 3)?, "");
		assert_eq!(simplified_sized("x r r1 l'", 3)?, "x x");
		Ok(())
	}

	#[test]
	fn simplify_is_idempotent() -> Result<(), Box<dyn Error>> {
		let moves = parse_moves("r r r u u' f f f f b1 b1 b1 x' x l")?;
		let once = Canonicalizer::for_size(3).simplify(&moves);
		let twice = Canonicalizer::for_size(3).simplify(&once);
		assert_eq!(once, twice);
		assert_eq!(format_moves(&once), "r' b1' l");
		Ok(())
	}
}
