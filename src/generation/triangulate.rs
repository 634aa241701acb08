//! Hexagon lattice triangulation
//!
//! Connects each lattice column to the next with strips of triangles. The
//! left half of the hexagon needs a different stitch pattern from the right
//! half because column heights first grow and then shrink.

use crate::topology::Triangle;

use super::lattice::column_height;

/// Triangulate the hexagon lattice for the given side size
///
/// Purely deterministic: the triangle sequence depends only on `side_size`
/// and matches the lattice's column-major point indices. All triangles start
/// active; the pairing pass flips them inactive as it consumes them.
///
/// Callers validate `side_size >= 2` (the config builder and
/// `HexGrid::generate` both do).
pub fn triangulate_lattice(side_size: usize) -> Vec<Triangle> {
    let mut triangles = Vec::with_capacity(6 * (side_size - 1) * (side_size - 1));
    let mut offset = 0;

    for x in 0..side_size * 2 - 2 {
        let height = column_height(side_size, x);

        if x < side_size - 1 {
            // Growing half: the next column is one point taller.
            for y in 0..height {
                triangles.push(Triangle::new(
                    offset + y,
                    offset + y + height,
                    offset + y + height + 1,
                ));
                if y + 1 >= height {
                    break;
                }
                triangles.push(Triangle::new(offset + y + height + 1, offset + y + 1, offset + y));
            }
        } else {
            // Shrinking half: the next column is one point shorter.
            for y in 0..height - 1 {
                triangles.push(Triangle::new(offset + y, offset + y + height, offset + y + 1));
                if y + 2 >= height {
                    break;
                }
                triangles.push(Triangle::new(
                    offset + y + 1,
                    offset + y + height,
                    offset + y + height + 1,
                ));
            }
        }

        offset += height;
    }

    triangles
}
