//! Core hexagrid generation pipeline
//!
//! Builds the hexagon lattice, triangulates it, pairs random triangles into
//! base quads, subdivides every cell into final quads, and derives the point
//! adjacency used by the relaxation sweeps.

mod lattice;
mod neighbors;
mod pairing;
mod subdivide;
mod triangulate;

pub use lattice::generate_lattice;
pub use neighbors::build_neighbor_graph;
pub use pairing::pair_triangles;
pub use subdivide::subdivide_cells;
pub use triangulate::triangulate_lattice;

use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::point::GridPoint;
use crate::random::RandomSource;
use crate::topology::{BaseQuad, Quad, Triangle};

/// A fully generated grid before wrapping
///
/// Intermediate output of the pipeline: every structure a [`crate::HexGrid`]
/// owns, without the configuration or the spatial index. Useful on its own
/// for callers that feed the geometry straight into a renderer.
#[derive(Debug, Clone)]
pub struct RawGrid {
    /// All points: lattice first, then centroids and midpoints interleaved
    pub points: Vec<GridPoint>,
    /// The full triangulation; consumed triangles are flagged inactive
    pub triangles: Vec<Triangle>,
    /// Quads merged from triangle pairs
    pub base_quads: Vec<BaseQuad>,
    /// Final quads covering the hexagon
    pub quads: Vec<Quad>,
    /// Per-point neighbor lists over final quad edges
    pub neighbors: Vec<Vec<usize>>,
}

/// Generate a raw grid from configuration and a random source
///
/// # Errors
///
/// Returns [`GridError::InvalidConfig`] for configurations built by hand
/// with out-of-range fields, and [`GridError::GenerationFailed`] if the
/// pairing step produces a degenerate merge.
pub fn generate_raw_grid<S: RandomSource>(config: &GridConfig, source: &mut S) -> Result<RawGrid> {
    validate(config)?;

    // Step 1: Lattice points filling the hexagon
    let mut points = generate_lattice(config.side_size);

    // Step 2: Deterministic triangulation of the lattice
    let mut triangles = triangulate_lattice(config.side_size);

    // Step 3: Randomized pairing into base quads
    let base_quads = pair_triangles(&mut triangles, config.search_iteration_count, source)?;

    // Step 4: Subdivide base quads and leftover triangles into final quads
    let quads = subdivide_cells(&mut points, &base_quads, &triangles);

    // Step 5: Derive point adjacency from the final quads
    let neighbors = build_neighbor_graph(&quads, points.len());

    // Step 6: Optionally snap the boundary onto the unit circle
    if config.force_circle_shape {
        snap_boundary_to_circle(&mut points);
    }

    Ok(RawGrid {
        points,
        triangles,
        base_quads,
        quads,
        neighbors,
    })
}

/// Guard against hand-built configurations that skipped the builder
fn validate(config: &GridConfig) -> Result<()> {
    if config.side_size < 2 {
        return Err(GridError::InvalidConfig(format!(
            "side size must be >= 2 (got {})",
            config.side_size
        )));
    }
    if config.search_iteration_count == 0 {
        return Err(GridError::InvalidConfig(
            "search iteration count must be > 0".to_string(),
        ));
    }
    Ok(())
}

/// Rescale every boundary point to unit distance from the origin
///
/// The hexagon's corners already sit on the unit circle; the points between
/// them move radially outward onto it.
fn snap_boundary_to_circle(points: &mut [GridPoint]) {
    for point in points.iter_mut().filter(|p| p.boundary) {
        point.position /= point.position.length();
    }
}
