//! Randomized triangle pairing
//!
//! Greedy random matching over the triangulation: repeatedly sample a
//! triangle, find an active neighbor sharing an edge, and merge the two into
//! a base quad. A bounded retry budget ends the pass once active triangles
//! have become rare, leaving the stragglers for subdivision as-is.

use std::time::Instant;

use crate::error::{GridError, Result};
use crate::random::RandomSource;
use crate::topology::{BaseQuad, Triangle};

/// Pair adjacent active triangles into base quads
///
/// Each round draws triangle indices from `source` until it hits an active
/// triangle or exhausts `search_iteration_count` draws. Exhausting the budget
/// ends the whole pass; this is the normal termination, not an error. The
/// budget also caps the final confirming draw, so a budget of 1 pairs
/// nothing.
///
/// A sampled triangle with no active neighbor stays active and may be drawn
/// again later. Merged triangles are flipped inactive in place.
///
/// # Errors
///
/// Returns [`GridError::GenerationFailed`] if a merge does not yield exactly
/// four distinct vertices, which indicates a corrupted triangulation.
pub fn pair_triangles<S: RandomSource>(
    triangles: &mut [Triangle],
    search_iteration_count: usize,
    source: &mut S,
) -> Result<Vec<BaseQuad>> {
    eprintln!(
        "[Pairing] Starting: {} triangles, budget {}",
        triangles.len(),
        search_iteration_count
    );
    let start = Instant::now();

    let mut base_quads = Vec::new();
    let mut rounds = 0_usize;

    loop {
        let mut index;
        let mut search_count = 0;
        loop {
            index = (source.next_unit() * triangles.len() as f64) as usize;
            search_count += 1;
            if search_count >= search_iteration_count || triangles[index].active {
                break;
            }
        }
        if search_count == search_iteration_count {
            break;
        }
        rounds += 1;

        if let Some(adjacent) = first_active_adjacent(triangles, index) {
            base_quads.push(merge_pair(&triangles[index], &triangles[adjacent])?);
            triangles[index].active = false;
            triangles[adjacent].active = false;
        }
    }

    eprintln!(
        "[Pairing] Finished: {} base quads after {} rounds in {:?}",
        base_quads.len(),
        rounds,
        start.elapsed()
    );

    Ok(base_quads)
}

/// Find the first active triangle sharing exactly two vertices with `index`
///
/// Scans in index order, so ties always resolve to the lowest-numbered
/// neighbor. Returns `None` when every edge neighbor is already consumed.
fn first_active_adjacent(triangles: &[Triangle], index: usize) -> Option<usize> {
    let sample = triangles[index];
    triangles.iter().enumerate().find_map(|(i, other)| {
        if i != index && other.active && sample.shared_vertex_count(other) == 2 {
            Some(i)
        } else {
            None
        }
    })
}

/// Merge two edge-adjacent triangles into a base quad
///
/// Collects the six vertex references, drops the duplicated shared edge, and
/// reorders the four survivors into a traversal cycle: sorted as
/// `[s0, s1, s2, s3]`, the cycle runs s0, s2, s3, s1, which keeps the two
/// shared vertices on opposite corners of the quad.
fn merge_pair(a: &Triangle, b: &Triangle) -> Result<BaseQuad> {
    let mut indices = [
        a.vertices[0],
        a.vertices[1],
        a.vertices[2],
        b.vertices[0],
        b.vertices[1],
        b.vertices[2],
    ];
    indices.sort_unstable();

    let mut distinct: Vec<usize> = Vec::with_capacity(4);
    for &vertex in &indices {
        if distinct.last() != Some(&vertex) {
            distinct.push(vertex);
        }
    }

    if distinct.len() != 4 {
        return Err(GridError::GenerationFailed(format!(
            "merging triangles {:?} and {:?} yielded {} distinct vertices, expected 4",
            a.vertices,
            b.vertices,
            distinct.len()
        )));
    }

    Ok(BaseQuad {
        vertices: [distinct[0], distinct[2], distinct[3], distinct[1]],
    })
}
