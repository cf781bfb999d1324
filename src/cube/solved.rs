use crate::cube::{grid::Grid, *};
use strum::IntoEnumIterator;

/// Whether every facelet shows the home color of its face.
///
/// This only looks at colors: facelets of the same color can't be told apart,
/// so a pattern that looks solved counts as solved.
pub fn is_solved(grid: &Grid) -> bool {
	Face::iter().all(|face| grid.face(face).all(|c| c == face.home_color()))
}

/// The faces that still show a foreign color.
pub fn unsolved_faces(grid: &Grid) -> Vec<Face> {
	Face::iter()
		.filter(|face| grid.face(*face).any(|c| c != face.home_color()))
		.collect()
}
