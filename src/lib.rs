//! Hexagon-shaped irregular quad grid generation
//!
//! A standalone library for generating hexagon-shaped meshes of irregular
//! quadrilateral cells, suitable as the board or terrain chunk of any game
//! engine (Bevy, Godot, etc.)
//!
//! The pipeline triangulates a hexagonal point lattice, merges random
//! adjacent triangle pairs into quads, subdivides every cell into smaller
//! quads with shared edge midpoints, and derives the point adjacency driving
//! the relaxation sweeps that smooth the result.
//!
//! # Quick Start
//!
//! ```rust
//! use hexagrid::*;
//!
//! // Generate a grid
//! let config = GridConfigBuilder::new()
//!     .seed(42)
//!     .side_size(8).unwrap()
//!     .force_circle_shape(true)
//!     .build().unwrap();
//!
//! let mut grid = HexGrid::generate(config).unwrap();
//!
//! // Smooth the cells toward even sizes
//! for _ in 0..50 {
//!     grid.relax_weighted();
//!     grid.relax_boundary();
//! }
//! println!("Generated {} quads", grid.quad_count());
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): Enables O(log n) position-to-quad lookups using KD-tree
//! - `serde`: Enables serialization support for configuration and geometry

// Modules
pub mod error;
pub mod config;
pub mod point;
pub mod topology;
pub mod random;
pub mod generation;
pub mod relax;
pub mod grid;

#[cfg(feature = "spatial-index")]
pub mod spatial;

// Re-export core types for convenience
pub use error::{GridError, Result};
pub use config::{GridConfig, GridConfigBuilder};
pub use point::GridPoint;
pub use topology::{BaseQuad, Quad, Triangle};
pub use random::{RandomSource, SeededSource};
pub use grid::HexGrid;
pub use relax::RelaxOptions;
pub use generation::RawGrid;

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;

// Re-export glam::DVec2 for convenience
pub use glam::DVec2;
