//! Point adjacency from final quads
//!
//! Walks every final quad's edge cycle and records a symmetric,
//! duplicate-free neighbor list per point. The relaxation sweeps average over
//! these lists, so they must cover every edge exactly once per direction.

use crate::topology::Quad;

/// Build the per-point neighbor lists for the final mesh
///
/// Two points are neighbors when some final quad joins them along an edge.
/// Both directions are recorded, duplicates are dropped, and indices appear
/// in first-seen order. Points referenced by no quad get an empty list.
pub fn build_neighbor_graph(quads: &[Quad], point_count: usize) -> Vec<Vec<usize>> {
    let mut neighbors = vec![Vec::new(); point_count];

    for quad in quads {
        for (a, b) in quad.edges() {
            if !neighbors[a].contains(&b) {
                neighbors[a].push(b);
            }
            if !neighbors[b].contains(&a) {
                neighbors[b].push(a);
            }
        }
    }

    neighbors
}
