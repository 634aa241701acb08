//! Hexagon lattice point construction
//!
//! Builds the triangular point lattice filling a regular hexagon, column by
//! column, tagging perimeter points as boundary.
//!
//! # Layout
//!
//! A grid of side size `n` spans `2n - 1` columns. Column heights grow from
//! `n` at the left edge to `2n - 1` in the middle, then shrink back to `n`.
//! Coordinates come from a closed-form formula that places the hexagon's six
//! corners on the unit circle, so no normalization pass is needed afterwards.

use crate::point::GridPoint;

/// Ratio between a regular hexagon's inradius and circumradius, sin 60° = √3/2
const INRADIUS_RATIO: f64 = 0.866_025_403_784_438_6;

/// Height in points of lattice column `x` for the given side size
pub(crate) fn column_height(side_size: usize, x: usize) -> usize {
    if x < side_size {
        side_size + x
    } else {
        side_size * 3 - 2 - x
    }
}

/// Generate the lattice points filling the hexagon
///
/// Points are emitted column by column, bottom to top within each column,
/// which fixes their permanent indices. A point is boundary iff it sits in
/// the first or last column, or in the first or last row of its column.
///
/// Callers validate `side_size >= 2` (the config builder and
/// `HexGrid::generate` both do).
pub fn generate_lattice(side_size: usize) -> Vec<GridPoint> {
    let columns = side_size * 2 - 1;
    // The middle column spans the full vertical diagonal.
    let max_height = columns as f64;
    let spread = (side_size - 1) as f64;

    let mut points = Vec::with_capacity(3 * side_size * side_size - 3 * side_size + 1);

    for x in 0..columns {
        let height = column_height(side_size, x);
        let column_offset = side_size as f64 - height as f64 * 0.5;

        for y in 0..height {
            let boundary = x == 0 || x == columns - 1 || y == 0 || y == height - 1;
            points.push(GridPoint::new(
                (x as f64 + 1.0 - side_size as f64) * INRADIUS_RATIO / spread,
                (y as f64 + column_offset - max_height * 0.5) / spread,
                boundary,
            ));
        }
    }

    points
}
