//! Relaxation sweeps
//!
//! Iterative smoothing passes that move points toward geometric equilibrium
//! without touching mesh structure. The interior sweeps never move boundary
//! points and the boundary sweep never moves interior points, so the hexagon
//! outline survives any number of passes.
//!
//! Sweeps update positions in place: later points in a pass see earlier
//! points' new positions. Convergence is iterative either way, and the
//! in-place form needs no scratch buffer.

use glam::DVec2;

use crate::point::GridPoint;

/// Fraction of the radial gap the boundary sweep closes per call
const BOUNDARY_PULL: f64 = 0.1;

/// Radius of the circle the boundary sweep pulls toward
const BOUNDARY_RADIUS: f64 = 1.0;

/// Options for the convergence-driven relaxation driver
#[derive(Debug, Clone, Copy)]
pub struct RelaxOptions {
    /// Maximum number of sweeps to run
    pub max_iterations: usize,
    /// Convergence threshold - stop when max displacement < this value
    /// Set to 0.0 to disable early termination
    pub convergence_threshold: f64,
}

impl Default for RelaxOptions {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            // The grid spans the unit circle, so this is a hundredth of a
            // percent of the diameter
            convergence_threshold: 1e-4,
        }
    }
}

/// One uniform Laplacian sweep
///
/// Every non-boundary point moves to the arithmetic mean of its neighbors'
/// positions. Points with an empty neighbor list stay put.
///
/// Returns the maximum displacement of any point during the sweep.
pub fn relax_uniform(points: &mut [GridPoint], neighbors: &[Vec<usize>]) -> f64 {
    let mut max_displacement = 0.0_f64;

    for i in 0..points.len() {
        if points[i].boundary || neighbors[i].is_empty() {
            continue;
        }

        let mut sum = DVec2::ZERO;
        for &j in &neighbors[i] {
            sum += points[j].position;
        }
        let target = sum / neighbors[i].len() as f64;

        max_displacement = max_displacement.max(points[i].position.distance(target));
        points[i].position = target;
    }

    max_displacement
}

/// One distance-weighted sweep
///
/// Like [`relax_uniform`], but each neighbor is weighted by its current
/// distance, so long edges pull harder than short ones. Long edges shrink,
/// short edges grow, and quad areas even out faster than under the uniform
/// sweep. A point coinciding with all its neighbors has zero total weight
/// and stays put.
///
/// Returns the maximum displacement of any point during the sweep.
pub fn relax_weighted(points: &mut [GridPoint], neighbors: &[Vec<usize>]) -> f64 {
    let mut max_displacement = 0.0_f64;

    for i in 0..points.len() {
        if points[i].boundary || neighbors[i].is_empty() {
            continue;
        }

        let mut sum = DVec2::ZERO;
        let mut total_weight = 0.0;
        for &j in &neighbors[i] {
            let weight = points[i].position.distance(points[j].position);
            sum += points[j].position * weight;
            total_weight += weight;
        }
        if total_weight == 0.0 {
            continue;
        }
        let target = sum / total_weight;

        max_displacement = max_displacement.max(points[i].position.distance(target));
        points[i].position = target;
    }

    max_displacement
}

/// One boundary sweep
///
/// Nudges every boundary point radially, closing a tenth of its gap to the
/// unit circle per call. A soft counterpart to the hard snap of
/// `force_circle_shape`: repeated sweeps round the hexagon outline into a
/// circle gradually, which composes well with the interior sweeps.
///
/// Returns the maximum displacement of any point during the sweep.
pub fn relax_boundary(points: &mut [GridPoint]) -> f64 {
    let mut max_displacement = 0.0_f64;

    for point in points.iter_mut().filter(|p| p.boundary) {
        let gap = BOUNDARY_RADIUS - point.position.length();
        let offset = point.position * (gap * BOUNDARY_PULL);
        point.position += offset;
        max_displacement = max_displacement.max(offset.length());
    }

    max_displacement
}

/// Run uniform sweeps until convergence or the iteration cap
///
/// Stops early once a sweep's maximum displacement falls below
/// `convergence_threshold`. Returns the number of sweeps actually run.
pub fn relax_until(
    points: &mut [GridPoint],
    neighbors: &[Vec<usize>],
    options: RelaxOptions,
) -> usize {
    let mut iterations = 0;

    for _ in 0..options.max_iterations {
        let max_displacement = relax_uniform(points, neighbors);
        iterations += 1;
        if options.convergence_threshold > 0.0 && max_displacement < options.convergence_threshold {
            break;
        }
    }

    iterations
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One interior point surrounded by six boundary points on the unit circle
    fn symmetric_ring(interior: DVec2) -> (Vec<GridPoint>, Vec<Vec<usize>>) {
        let mut points = vec![GridPoint {
            position: interior,
            boundary: false,
        }];
        let mut ring = Vec::new();
        for k in 0..6 {
            let angle = std::f64::consts::TAU * k as f64 / 6.0;
            points.push(GridPoint::new(angle.cos(), angle.sin(), true));
            ring.push(k + 1);
        }
        let mut neighbors = vec![ring];
        for k in 0..6 {
            neighbors.push(vec![0, 1 + (k + 1) % 6, 1 + (k + 5) % 6]);
        }
        (points, neighbors)
    }

    #[test]
    fn test_uniform_centers_symmetric_ring() {
        let (mut points, neighbors) = symmetric_ring(DVec2::new(0.2, 0.1));
        let displacement = relax_uniform(&mut points, &neighbors);

        assert!(points[0].position.length() < 1e-9, "interior point must reach the center");
        assert!((displacement - DVec2::new(0.2, 0.1).length()).abs() < 1e-12);
        for point in &points[1..] {
            assert!((point.position.length() - 1.0).abs() < 1e-12, "boundary must not move");
        }
    }

    #[test]
    fn test_uniform_fixed_point_is_stable() {
        let (mut points, neighbors) = symmetric_ring(DVec2::ZERO);
        let displacement = relax_uniform(&mut points, &neighbors);
        assert!(displacement < 1e-12);
    }

    #[test]
    fn test_weighted_target_hand_computed() {
        // Point at x=1 between neighbors at 0 and 3: weights 1 and 2, so the
        // weighted mean is (0*1 + 3*2) / 3 = 2.
        let mut points = vec![
            GridPoint::new(1.0, 0.0, false),
            GridPoint::new(0.0, 0.0, true),
            GridPoint::new(3.0, 0.0, true),
        ];
        let neighbors = vec![vec![1, 2], vec![0], vec![0]];

        let displacement = relax_weighted(&mut points, &neighbors);
        assert!((points[0].position.x - 2.0).abs() < 1e-12);
        assert!(points[0].position.y.abs() < 1e-12);
        assert!((displacement - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_skips_coincident_cluster() {
        let mut points = vec![
            GridPoint::new(0.5, 0.5, false),
            GridPoint::new(0.5, 0.5, true),
            GridPoint::new(0.5, 0.5, true),
        ];
        let neighbors = vec![vec![1, 2], vec![0], vec![0]];
        let displacement = relax_weighted(&mut points, &neighbors);
        assert_eq!(displacement, 0.0);
        assert_eq!(points[0].position, DVec2::new(0.5, 0.5));
    }

    #[test]
    fn test_boundary_pull_inward_and_outward() {
        let mut points = vec![
            GridPoint::new(2.0, 0.0, true),
            GridPoint::new(0.5, 0.0, true),
            GridPoint::new(0.25, 0.0, false),
        ];
        relax_boundary(&mut points);

        // Each coordinate moves by position * gap * 0.1, where gap = 1 - |p|.
        // Outside the circle: 2.0 * -1.0 * 0.1 pulls x in to 1.8
        assert!((points[0].position.x - 1.8).abs() < 1e-12);
        // Inside the circle: 0.5 * 0.5 * 0.1 pushes x out to 0.525
        assert!((points[1].position.x - 0.525).abs() < 1e-12);
        // Interior points are never touched
        assert!((points[2].position.x - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_boundary_sweep_converges_to_circle() {
        let mut points = vec![GridPoint::new(0.6, 0.0, true)];
        for _ in 0..200 {
            relax_boundary(&mut points);
        }
        assert!((points[0].position.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_relax_until_stops_on_convergence() {
        let (mut points, neighbors) = symmetric_ring(DVec2::new(0.3, -0.2));
        let options = RelaxOptions::default();
        let iterations = relax_until(&mut points, &neighbors, options);

        // The symmetric ring converges in one sweep; the driver needs a
        // second to observe it.
        assert!(iterations <= 2);
        assert!(points[0].position.length() < 1e-9);
    }

    #[test]
    fn test_relax_until_honors_iteration_cap() {
        let (mut points, neighbors) = symmetric_ring(DVec2::new(0.3, -0.2));
        let options = RelaxOptions {
            max_iterations: 7,
            convergence_threshold: 0.0,
        };
        assert_eq!(relax_until(&mut points, &neighbors, options), 7);
    }

    #[test]
    fn test_empty_neighbor_list_is_skipped() {
        let mut points = vec![GridPoint::new(0.4, 0.4, false)];
        let neighbors = vec![Vec::new()];
        assert_eq!(relax_uniform(&mut points, &neighbors), 0.0);
        assert_eq!(points[0].position, DVec2::new(0.4, 0.4));
    }
}
