//! HexGrid main structure

use glam::DVec2;

use crate::config::GridConfig;
use crate::error::Result;
use crate::generation::{self, RawGrid};
use crate::point::GridPoint;
use crate::random::{RandomSource, SeededSource};
use crate::relax::{self, RelaxOptions};
use crate::topology::{BaseQuad, Quad, Triangle};

#[cfg(feature = "spatial-index")]
use crate::spatial::SpatialIndex;

/// A complete hexagon-shaped grid of irregular quads
///
/// Owns every structure the generation pipeline produces: the points, the
/// triangulation, the merged base quads, the final quads, and the per-point
/// neighbor lists. Generation is deterministic per configuration; the
/// relaxation methods mutate point positions afterwards without changing
/// any connectivity.
///
/// # Example
///
/// ```
/// use hexagrid::{GridConfigBuilder, HexGrid};
///
/// let config = GridConfigBuilder::new()
///     .seed(7)
///     .side_size(4)?
///     .build()?;
/// let mut grid = HexGrid::generate(config)?;
///
/// for _ in 0..20 {
///     grid.relax();
/// }
/// assert!(grid.quad_count() > 0);
/// # Ok::<(), hexagrid::GridError>(())
/// ```
#[derive(Clone)]
pub struct HexGrid {
    config: GridConfig,
    points: Vec<GridPoint>,
    triangles: Vec<Triangle>,
    base_quads: Vec<BaseQuad>,
    quads: Vec<Quad>,
    neighbors: Vec<Vec<usize>>,
    #[cfg(feature = "spatial-index")]
    spatial_index: SpatialIndex,
}

impl HexGrid {
    /// Generate a grid from configuration
    ///
    /// Seeds the internal random source from `config.seed`, so equal
    /// configurations always produce equal grids.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid configuration fields or a failed merge
    /// during triangle pairing.
    pub fn generate(config: GridConfig) -> Result<Self> {
        let mut source = SeededSource::new(config.seed);
        Self::generate_with_source(config, &mut source)
    }

    /// Generate a grid drawing randomness from a caller-supplied source
    ///
    /// `config.seed` is ignored in favor of `source`. Useful for driving the
    /// pairing step from a scripted sequence in tests, or from a shared
    /// world-generation stream.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`HexGrid::generate`].
    pub fn generate_with_source<S: RandomSource>(
        config: GridConfig,
        source: &mut S,
    ) -> Result<Self> {
        let raw = generation::generate_raw_grid(&config, source)?;

        #[cfg(feature = "spatial-index")]
        let spatial_index = build_spatial_index(&raw);

        let RawGrid {
            points,
            triangles,
            base_quads,
            quads,
            neighbors,
        } = raw;

        Ok(Self {
            config,
            points,
            triangles,
            base_quads,
            quads,
            neighbors,
            #[cfg(feature = "spatial-index")]
            spatial_index,
        })
    }

    /// Get the configuration used to generate this grid
    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Get all points
    #[inline]
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// Get the full triangulation, including consumed (inactive) triangles
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Get the base quads merged from triangle pairs
    #[inline]
    pub fn base_quads(&self) -> &[BaseQuad] {
        &self.base_quads
    }

    /// Get the final quads covering the hexagon
    #[inline]
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    /// Get the number of points
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Get the number of final quads
    #[inline]
    pub fn quad_count(&self) -> usize {
        self.quads.len()
    }

    /// Get a point by index
    pub fn get_point(&self, index: usize) -> Option<&GridPoint> {
        self.points.get(index)
    }

    /// Get the neighbor indices of a point (empty if the index is invalid)
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.neighbors
            .get(index)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    /// Get all per-point neighbor lists
    #[inline]
    pub fn neighbor_lists(&self) -> &[Vec<usize>] {
        &self.neighbors
    }

    /// Compute the center of a final quad as its corner average
    pub fn quad_center(&self, index: usize) -> Option<DVec2> {
        let quad = self.quads.get(index)?;
        let mut sum = DVec2::ZERO;
        for &vertex in &quad.vertices {
            sum += self.points[vertex].position;
        }
        Some(sum / 4.0)
    }

    /// Compute the area of a final quad by the shoelace formula
    pub fn quad_area(&self, index: usize) -> Option<f64> {
        let quad = self.quads.get(index)?;
        let mut doubled = 0.0;
        for (a, b) in quad.edges() {
            let pa = self.points[a].position;
            let pb = self.points[b].position;
            doubled += pa.x * pb.y - pb.x * pa.y;
        }
        Some(doubled.abs() * 0.5)
    }

    /// Compute the summed area of all final quads
    ///
    /// The quads tile the hexagon exactly, so right after generation this
    /// equals the hexagon area regardless of seed. Relaxation moves interior
    /// points and perturbs the total slightly.
    pub fn total_area(&self) -> f64 {
        (0..self.quads.len()).filter_map(|i| self.quad_area(i)).sum()
    }

    /// One uniform Laplacian sweep over the interior points
    ///
    /// Returns the maximum point displacement; see [`relax::relax_uniform`].
    pub fn relax(&mut self) -> f64 {
        relax::relax_uniform(&mut self.points, &self.neighbors)
    }

    /// One distance-weighted sweep over the interior points
    ///
    /// Returns the maximum point displacement; see [`relax::relax_weighted`].
    pub fn relax_weighted(&mut self) -> f64 {
        relax::relax_weighted(&mut self.points, &self.neighbors)
    }

    /// One radial sweep pulling boundary points toward the unit circle
    ///
    /// Returns the maximum point displacement; see [`relax::relax_boundary`].
    pub fn relax_boundary(&mut self) -> f64 {
        relax::relax_boundary(&mut self.points)
    }

    /// Run uniform sweeps until convergence or the iteration cap
    ///
    /// Returns the number of sweeps run; see [`relax::relax_until`].
    pub fn relax_until(&mut self, options: RelaxOptions) -> usize {
        relax::relax_until(&mut self.points, &self.neighbors, options)
    }

    /// Find the quad whose center is nearest to a position
    ///
    /// Answers against the positions current at generation or at the last
    /// [`HexGrid::rebuild_spatial_index`] call, so rebuild after a batch of
    /// relaxation sweeps before querying. O(log n) via KD-tree.
    ///
    /// This method is only available with the `spatial-index` feature.
    #[cfg(feature = "spatial-index")]
    pub fn find_quad_at(&self, position: DVec2) -> usize {
        self.spatial_index.find_nearest(position)
    }

    /// Rebuild the spatial index from the current point positions
    ///
    /// This method is only available with the `spatial-index` feature.
    #[cfg(feature = "spatial-index")]
    pub fn rebuild_spatial_index(&mut self) {
        let mut centers = Vec::with_capacity(self.quads.len());
        for quad in &self.quads {
            let mut sum = DVec2::ZERO;
            for &vertex in &quad.vertices {
                sum += self.points[vertex].position;
            }
            centers.push(sum / 4.0);
        }
        self.spatial_index = SpatialIndex::new(&centers);
    }
}

#[cfg(feature = "spatial-index")]
fn build_spatial_index(raw: &RawGrid) -> SpatialIndex {
    let mut centers = Vec::with_capacity(raw.quads.len());
    for quad in &raw.quads {
        let mut sum = DVec2::ZERO;
        for &vertex in &quad.vertices {
            sum += raw.points[vertex].position;
        }
        centers.push(sum / 4.0);
    }
    SpatialIndex::new(&centers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfigBuilder;

    fn config(side_size: usize, seed: u32) -> GridConfig {
        GridConfigBuilder::new()
            .seed(seed)
            .side_size(side_size)
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_generate() {
        let grid = HexGrid::generate(config(4, 42)).unwrap();
        assert_eq!(grid.config().side_size, 4);
        assert!(grid.point_count() > 37);
        assert!(grid.quad_count() > 0);
        assert_eq!(grid.neighbor_lists().len(), grid.point_count());
    }

    #[test]
    fn test_budget_of_one_keeps_all_triangles() {
        let config = GridConfigBuilder::new()
            .seed(42)
            .side_size(2)
            .unwrap()
            .search_iteration_count(1)
            .unwrap()
            .build()
            .unwrap();
        let grid = HexGrid::generate(config).unwrap();

        assert_eq!(grid.triangles().len(), 6);
        assert!(grid.triangles().iter().all(|t| t.active));
        assert!(grid.base_quads().is_empty());
        // 7 lattice points + 6 centroids + 12 edge midpoints
        assert_eq!(grid.point_count(), 25);
        assert_eq!(grid.quad_count(), 18);
    }

    #[test]
    fn test_generate_with_scripted_source() {
        // Always draws index 0, pairing exactly one triangle pair
        struct ZeroSource;
        impl RandomSource for ZeroSource {
            fn next_unit(&mut self) -> f64 {
                0.0
            }
        }

        let config = GridConfigBuilder::new()
            .seed(42)
            .side_size(2)
            .unwrap()
            .search_iteration_count(5)
            .unwrap()
            .build()
            .unwrap();
        let grid = HexGrid::generate_with_source(config, &mut ZeroSource).unwrap();

        assert_eq!(grid.base_quads().len(), 1);
        assert_eq!(grid.base_quads()[0].vertices, [0, 2, 3, 1]);
        // 1 merged quad + 4 leftover triangles: 7 lattice points, 5
        // centroids, 11 distinct edges
        assert_eq!(grid.point_count(), 23);
        assert_eq!(grid.quad_count(), 16);
    }

    #[test]
    fn test_deterministic_per_config() {
        let a = HexGrid::generate(config(4, 123)).unwrap();
        let b = HexGrid::generate(config(4, 123)).unwrap();
        assert_eq!(a.points(), b.points());
        assert_eq!(a.quads(), b.quads());
        assert_eq!(a.base_quads(), b.base_quads());
    }

    #[test]
    fn test_seeds_differ() {
        let a = HexGrid::generate(config(4, 1)).unwrap();
        let b = HexGrid::generate(config(4, 2)).unwrap();
        assert_ne!(a.base_quads(), b.base_quads());
    }

    #[test]
    fn test_total_area_matches_hexagon() {
        let hexagon_area = 1.5 * 3.0_f64.sqrt();
        for seed in [0, 7, 1000] {
            let grid = HexGrid::generate(config(5, seed)).unwrap();
            assert!(
                (grid.total_area() - hexagon_area).abs() < 1e-9,
                "seed {}: area {}",
                seed,
                grid.total_area()
            );
        }
    }

    #[test]
    fn test_quad_metrics() {
        let grid = HexGrid::generate(config(3, 5)).unwrap();
        for i in 0..grid.quad_count() {
            let area = grid.quad_area(i).unwrap();
            assert!(area > 0.0);
            let center = grid.quad_center(i).unwrap();
            assert!(center.length() <= 1.0 + 1e-9);
        }
        assert!(grid.quad_area(grid.quad_count()).is_none());
        assert!(grid.quad_center(usize::MAX).is_none());
    }

    #[test]
    fn test_out_of_range_accessors() {
        let grid = HexGrid::generate(config(2, 0)).unwrap();
        assert!(grid.get_point(grid.point_count()).is_none());
        assert!(grid.neighbors(usize::MAX).is_empty());
    }

    #[test]
    fn test_relax_moves_interior_only() {
        let mut grid = HexGrid::generate(config(4, 8)).unwrap();
        let before = grid.points().to_vec();
        let displacement = grid.relax();
        assert!(displacement > 0.0);

        for (a, b) in before.iter().zip(grid.points()) {
            if a.boundary {
                assert_eq!(a.position, b.position);
            }
        }
    }

    #[test]
    fn test_relax_weighted_moves_interior_only() {
        let mut grid = HexGrid::generate(config(4, 8)).unwrap();
        let before = grid.points().to_vec();
        let displacement = grid.relax_weighted();
        assert!(displacement > 0.0);

        for (a, b) in before.iter().zip(grid.points()) {
            if a.boundary {
                assert_eq!(a.position, b.position);
            }
        }
    }

    #[test]
    fn test_relax_boundary_approaches_circle() {
        let mut grid = HexGrid::generate(config(4, 3)).unwrap();
        let before: Vec<f64> = grid
            .points()
            .iter()
            .filter(|p| p.boundary)
            .map(|p| p.position.length())
            .collect();
        grid.relax_boundary();
        let after: Vec<f64> = grid
            .points()
            .iter()
            .filter(|p| p.boundary)
            .map(|p| p.position.length())
            .collect();

        for (r0, r1) in before.iter().zip(&after) {
            assert!(
                (1.0 - r1).abs() <= (1.0 - r0).abs() + 1e-12,
                "radius moved away from the circle: {} -> {}",
                r0,
                r1
            );
        }
    }

    #[test]
    fn test_relax_until_reaches_threshold() {
        let mut grid = HexGrid::generate(config(4, 21)).unwrap();
        let options = RelaxOptions::default();
        let iterations = grid.relax_until(options);
        assert!(iterations >= 1);
        assert!(iterations <= options.max_iterations);
        if iterations < options.max_iterations {
            assert!(grid.relax() < options.convergence_threshold * 2.0);
        }
    }

    #[test]
    fn test_force_circle_shape() {
        let config = GridConfigBuilder::new()
            .seed(6)
            .side_size(4)
            .unwrap()
            .force_circle_shape(true)
            .build()
            .unwrap();
        let grid = HexGrid::generate(config).unwrap();

        for point in grid.points() {
            if point.boundary {
                assert!((point.position.length() - 1.0).abs() < 1e-9);
            }
        }
    }

    #[cfg(feature = "spatial-index")]
    #[test]
    fn test_find_quad_at_center() {
        let grid = HexGrid::generate(config(3, 77)).unwrap();
        for index in [0, grid.quad_count() / 2, grid.quad_count() - 1] {
            let center = grid.quad_center(index).unwrap();
            assert_eq!(grid.find_quad_at(center), index);
        }
    }

    #[cfg(feature = "spatial-index")]
    #[test]
    fn test_rebuild_spatial_index_after_relax() {
        let mut grid = HexGrid::generate(config(3, 14)).unwrap();
        for _ in 0..10 {
            grid.relax();
        }
        grid.rebuild_spatial_index();

        let index = grid.quad_count() / 3;
        let center = grid.quad_center(index).unwrap();
        assert_eq!(grid.find_quad_at(center), index);
    }
}
