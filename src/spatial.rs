//! Spatial indexing for fast position-to-quad lookups
//!
//! This module is only available with the `spatial-index` feature.

#[cfg(feature = "spatial-index")]
use glam::DVec2;
#[cfg(feature = "spatial-index")]
use kiddo::immutable::float::kdtree::ImmutableKdTree;
#[cfg(feature = "spatial-index")]
use kiddo::SquaredEuclidean;

/// Wrapper around a KD-tree over quad centers
///
/// Provides O(log n) nearest-neighbor lookups to convert plane positions
/// into quad indices, for picking, unit placement, and cursor queries.
///
/// # Performance
///
/// - Construction: O(n log n), negligible for typical grid sizes
/// - Query: O(log n)
#[cfg(feature = "spatial-index")]
#[derive(Clone)]
pub struct SpatialIndex {
    tree: ImmutableKdTree<f64, usize, 2, 32>,
}

#[cfg(feature = "spatial-index")]
impl SpatialIndex {
    /// Build a spatial index from quad centers
    ///
    /// The index answers by position in `centers`, so pass the centers in
    /// quad order.
    ///
    /// # Example
    ///
    /// ```
    /// use hexagrid::DVec2;
    ///
    /// # #[cfg(feature = "spatial-index")]
    /// # {
    /// use hexagrid::SpatialIndex;
    ///
    /// let centers = vec![
    ///     DVec2::new(-0.5, 0.0),
    ///     DVec2::new(0.5, 0.0),
    /// ];
    /// let index = SpatialIndex::new(&centers);
    /// assert_eq!(index.find_nearest(DVec2::new(0.4, 0.1)), 1);
    /// # }
    /// ```
    pub fn new(centers: &[DVec2]) -> Self {
        let points: Vec<[f64; 2]> = centers.iter().map(|c| [c.x, c.y]).collect();

        Self {
            tree: ImmutableKdTree::new_from_slice(&points),
        }
    }

    /// Find the index of the center nearest to a position
    ///
    /// Positions outside the hexagon still answer with the closest quad.
    pub fn find_nearest(&self, position: DVec2) -> usize {
        let result = self.tree.nearest_one::<SquaredEuclidean>(&[position.x, position.y]);
        result.item as usize
    }
}
