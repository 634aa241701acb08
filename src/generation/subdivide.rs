//! Cell subdivision into final quads
//!
//! Splits every base quad and every leftover triangle into small quads that
//! fan around a fresh centroid. One midpoint is created per distinct edge and
//! reused by both cells on that edge, so adjacent fans stitch together
//! without cracks.

use std::collections::HashMap;

use glam::DVec2;

use crate::point::GridPoint;
use crate::topology::{BaseQuad, Quad, Triangle};

/// Map from an undirected edge, smaller index first, to its midpoint's index
type EdgeMidpointMap = HashMap<(usize, usize), usize>;

/// Subdivide base quads and leftover triangles into final quads
///
/// Processes all base quads first, then every triangle the pairing pass left
/// active, sharing a single midpoint map across the whole pass. Appends one
/// centroid per cell and one midpoint per distinct edge to `points`, and
/// returns one final quad per cell corner: four from a base quad, three from
/// a triangle.
pub fn subdivide_cells(
    points: &mut Vec<GridPoint>,
    base_quads: &[BaseQuad],
    triangles: &[Triangle],
) -> Vec<Quad> {
    let mut quads = Vec::with_capacity(
        base_quads.len() * 4 + triangles.iter().filter(|t| t.active).count() * 3,
    );
    let mut middles = EdgeMidpointMap::new();

    for base_quad in base_quads {
        subdivide_cell(points, &base_quad.vertices, &mut middles, &mut quads);
    }
    for triangle in triangles {
        if triangle.active {
            subdivide_cell(points, &triangle.vertices, &mut middles, &mut quads);
        }
    }

    quads
}

/// Subdivide one cell given its corner cycle
fn subdivide_cell(
    points: &mut Vec<GridPoint>,
    cycle: &[usize],
    middles: &mut EdgeMidpointMap,
    quads: &mut Vec<Quad>,
) {
    let centroid = centroid_of(points, cycle);
    let center = points.len();
    points.push(centroid);

    // Triangles only fill the first three slots.
    let mut edge_midpoints = [0_usize; 4];
    for (j, &a) in cycle.iter().enumerate() {
        let b = cycle[(j + 1) % cycle.len()];
        let key = (a.min(b), a.max(b));
        edge_midpoints[j] = match middles.get(&key) {
            Some(&existing) => existing,
            None => {
                let midpoint = GridPoint::midpoint(&points[a], &points[b]);
                let index = points.len();
                points.push(midpoint);
                middles.insert(key, index);
                index
            }
        };
    }

    for j in 0..cycle.len() {
        let next = (j + 1) % cycle.len();
        quads.push(Quad {
            vertices: [center, edge_midpoints[j], cycle[next], edge_midpoints[next]],
        });
    }
}

/// Compute a cell's centroid point
///
/// Centroids are always interior, even when every corner is boundary.
fn centroid_of(points: &[GridPoint], cycle: &[usize]) -> GridPoint {
    let mut sum = DVec2::ZERO;
    for &index in cycle {
        sum += points[index].position;
    }
    GridPoint {
        position: sum / cycle.len() as f64,
        boundary: false,
    }
}
