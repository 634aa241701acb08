//! Hexagrid configuration and builder
//!
//! This module provides configuration types for deterministic hexagrid generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Configuration for deterministic hexagrid generation
///
/// The same configuration will always produce the identical grid, because the
/// default random source is seeded from `seed`.
///
/// # Serialization
///
/// Only the configuration is serialized (~16 bytes), not the generated grid.
/// The grid is regenerated from the configuration when loading a save file.
///
/// # Example
///
/// ```rust
/// use hexagrid::*;
///
/// let config = GridConfigBuilder::new()
///     .seed(42)
///     .side_size(8)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// // Config is serializable (with "serde" feature)
/// # #[cfg(feature = "serde")]
/// # {
/// let json = serde_json::to_string(&config).unwrap();
/// let restored: GridConfig = serde_json::from_str(&json).unwrap();
/// assert_eq!(config.seed, restored.seed);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Random seed for deterministic grid generation
    ///
    /// The same seed (with the same other parameters) will always produce the
    /// exact same grid with identical point positions and quads.
    pub seed: u32,

    /// Hexagon radius in lattice rows (>= 2)
    ///
    /// A grid of side size `n` spans `2n - 1` columns of lattice points; the
    /// middle column holds `2n - 1` points.
    pub side_size: usize,

    /// Retry budget per sampling round when pairing triangles into quads
    ///
    /// Each pairing round draws random triangle indices until an unconsumed
    /// triangle turns up or the budget is hit; hitting the budget ends the
    /// pairing pass. Larger budgets pair more triangles (fewer leftover
    /// triangle cells) at the cost of more sampling near the end of the pass.
    pub search_iteration_count: usize,

    /// Snap boundary points onto the unit circle after construction
    ///
    /// - `false` (default): the perimeter stays a hexagon
    /// - `true`: every boundary point is rescaled to distance 1 from the origin
    pub force_circle_shape: bool,
}

impl GridConfig {
    /// Get the number of lattice columns for this configuration
    #[inline]
    pub fn column_count(&self) -> usize {
        self.side_size * 2 - 1
    }

    /// Get the number of initial lattice points for this configuration
    ///
    /// This is the centered hexagonal number `3n² - 3n + 1`. Subdivision adds
    /// one centroid per cell and one midpoint per distinct edge on top of it.
    #[inline]
    pub fn lattice_point_count(&self) -> usize {
        3 * self.side_size * self.side_size - 3 * self.side_size + 1
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfigBuilder::new().build().unwrap()
    }
}

/// Builder for creating GridConfig with validation
///
/// Uses the builder pattern to create configurations with sensible defaults.
/// Setters with invariants return `Result` so invalid parameters fail fast,
/// before any generation work happens.
///
/// # Example
///
/// ```rust
/// use hexagrid::*;
///
/// // Use defaults
/// let config = GridConfigBuilder::new().build().unwrap();
///
/// // Customize
/// let config = GridConfigBuilder::new()
///     .seed(12345)
///     .side_size(10)
///     .unwrap()
///     .search_iteration_count(64)
///     .unwrap()
///     .force_circle_shape(true)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct GridConfigBuilder {
    seed: Option<u32>,
    side_size: usize,
    search_iteration_count: usize,
    force_circle_shape: bool,
}

impl GridConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: Random (generated from thread_rng)
    /// - side_size: 16 (~1,350 final quads)
    /// - search_iteration_count: 32
    /// - force_circle_shape: false
    pub fn new() -> Self {
        Self {
            seed: None,
            side_size: 16,
            search_iteration_count: 32,
            force_circle_shape: false,
        }
    }

    /// Set the random seed for grid generation
    ///
    /// Using the same seed with the same other parameters will produce an
    /// identical grid every time.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the hexagon side size in lattice rows
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `side_size < 2` (anything smaller has no
    /// interior to triangulate)
    pub fn side_size(mut self, side_size: usize) -> Result<Self> {
        if side_size < 2 {
            return Err(GridError::InvalidConfig(format!(
                "side size must be >= 2 (got {})",
                side_size
            )));
        }
        self.side_size = side_size;
        Ok(self)
    }

    /// Set the retry budget per pairing sampling round
    ///
    /// Controls how persistently the pairing pass hunts for unconsumed
    /// triangles before giving up. Small budgets terminate earlier and leave
    /// more unpaired triangles.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `count == 0` (a zero budget could never
    /// complete a single sampling round)
    pub fn search_iteration_count(mut self, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(GridError::InvalidConfig(
                "search iteration count must be > 0 (got 0)".to_string(),
            ));
        }
        self.search_iteration_count = count;
        Ok(self)
    }

    /// Force the hexagon perimeter onto the unit circle
    ///
    /// When enabled, every boundary point is rescaled to unit distance from
    /// the origin once construction finishes. Interior points are untouched;
    /// use the relaxation operators afterwards to re-balance them.
    pub fn force_circle_shape(mut self, force: bool) -> Self {
        self.force_circle_shape = force;
        self
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random seed using thread_rng.
    pub fn build(self) -> Result<GridConfig> {
        let seed = self.seed.unwrap_or_else(|| rand::random());

        Ok(GridConfig {
            seed,
            side_size: self.side_size,
            search_iteration_count: self.search_iteration_count,
            force_circle_shape: self.force_circle_shape,
        })
    }
}

impl Default for GridConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
