use std::error::Error;

use cubenet::prelude::*;

fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
/// f f f simplifies to f' and both leave the cube in the same state
fn triple_front_turn() -> Result<(), Box<dyn Error>> {
	init_logger();
	let recorded = parse_moves("f f f")?;
	let short = simplify(&recorded);
	assert_eq!(short, parse_moves("f'")?);

	let mut a = Grid::new(3)?;
	let mut b = Grid::new(3)?;
	a.apply_moves(recorded)?;
	b.apply_moves(short)?;
	assert_eq!(a, b);
	assert!(!a.is_solved());
	Ok(())
}

#[test]
/// r u r' u' has order 6: six repetitions restore the cube, fewer don't
fn sexy_move_restores_after_six() -> Result<(), Box<dyn Error>> {
	init_logger();
	let seq = parse_moves("r u r' u'")?;
	let mut grid = Grid::new(3)?;
	for reps in 1..=6 {
		grid.apply_moves(seq.iter().copied())?;
		assert_eq!(grid.is_solved(), reps == 6, "after {} repetitions", reps);
	}
	Ok(())
}

#[test]
fn only_fresh_grids_are_solved() -> Result<(), Box<dyn Error>> {
	for size in 1..7 {
		assert!(Grid::new(size)?.is_solved());
	}
	for size in 2..6 {
		let mut scrambler = Scrambler::new(size, ScrambleConfig {
			length: 1,
			seed: Some(size as u64),
			rotations: false,
		})?;
		let mut grid = Grid::new(size)?;
		scrambler.scramble(&mut grid)?;
		assert!(!grid.is_solved());
	}
	Ok(())
}

#[test]
/// Lookahead works on a private copy, the original stays as it was
fn lookahead_on_clones() -> Result<(), Box<dyn Error>> {
	let mut grid = Grid::new(3)?;
	grid.apply_moves(parse_moves("r u")?)?;
	let snapshot = grid.to_facelet_string();

	let candidates = [parse_moves("u' r'")?, parse_moves("r' u'")?];
	let solving: Vec<bool> = candidates
		.iter()
		.map(|c| {
			let mut trial = grid.clone();
			trial.apply_moves(c.iter().copied()).map(|_| trial.is_solved())
		})
		.collect::<Result<_, _>>()?;

	assert_eq!(solving, vec![true, false]);
	assert_eq!(grid.to_facelet_string(), snapshot);
	Ok(())
}

#[test]
/// Scramble, then undo it with the simplified inverse sequence
fn scramble_and_undo() -> Result<(), Box<dyn Error>> {
	init_logger();
	for size in 2..6 {
		let mut grid = Grid::new(size)?;
		let config = ScrambleConfig {
			length: 40,
			seed: Some(99),
			rotations: true,
		};
		let scramble = Scrambler::new(size, config)?.scramble(&mut grid)?;

		let undo: Vec<Move> = scramble.iter().rev().map(|m| m.inverse()).collect();
		let undo = Canonicalizer::for_size(size).simplify(&undo);
		grid.apply_moves(undo)?;
		assert!(grid.is_solved(), "size {}", size);
	}
	Ok(())
}

#[test]
fn invalid_input_is_rejected_without_change() -> Result<(), Box<dyn Error>> {
	let mut grid = Grid::new(2)?;
	grid.apply_move("r".parse()?)?;
	let before = grid.clone();

	assert!(matches!(grid.apply_move("r1".parse()?), Err(CubeError::InvalidMove { .. })));
	assert!(matches!(grid.get(Face::Up, 2, 0), Err(CubeError::OutOfRange { .. })));
	assert!(matches!(grid.set(Face::Up, 0, 5, Color::Red), Err(CubeError::OutOfRange { .. })));
	assert!("w".parse::<Move>().is_err());
	assert_eq!(grid, before);
	Ok(())
}
