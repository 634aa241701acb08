//! Grid point structure
//!
//! Represents a single mesh vertex with its position and boundary membership.

use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single point of the grid mesh
///
/// Points are created in three waves and never removed:
/// - the initial triangular lattice filling the hexagon,
/// - one centroid per subdivided cell,
/// - one midpoint per distinct cell edge.
///
/// A point's index in the grid's point sequence is its permanent identity;
/// triangles, quads and neighbor lists all reference points by index.
///
/// # Design Notes
///
/// Positions use f64 (`DVec2`): the grid is normalized to unit scale (the
/// hexagon is inscribed in the unit circle), and repeated relaxation sweeps
/// accumulate error too quickly in f32 for tight postcondition checks.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    /// Position in the plane
    ///
    /// Lattice coordinates place the hexagon's six corners at distance 1 from
    /// the origin. Relaxation and boundary snapping mutate this field;
    /// nothing else about a point ever changes.
    pub position: DVec2,

    /// Whether the point lies on the grid's perimeter
    ///
    /// Boundary points anchor the relaxation operators: the interior sweeps
    /// skip them and the boundary sweep moves only them. The flag is set at
    /// creation and never updated.
    pub boundary: bool,
}

impl GridPoint {
    /// Create a new grid point
    pub fn new(x: f64, y: f64, boundary: bool) -> Self {
        Self {
            position: DVec2::new(x, y),
            boundary,
        }
    }

    /// Create the midpoint of two parent points
    ///
    /// The position is the average of the parents. The midpoint is a boundary
    /// point only when both parents are boundary points: an edge with one
    /// interior endpoint crosses the interior, so its midpoint cannot lie on
    /// the perimeter.
    pub fn midpoint(a: &GridPoint, b: &GridPoint) -> Self {
        Self {
            position: (a.position + b.position) * 0.5,
            boundary: a.boundary && b.boundary,
        }
    }

    /// Get the Euclidean distance to another point
    #[inline]
    pub fn distance_to(&self, other: &GridPoint) -> f64 {
        self.position.distance(other.position)
    }
}
