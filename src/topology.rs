//! Index-based mesh topology
//!
//! Triangles and quads reference grid points by index and carry no positions
//! of their own; positions live in the grid's point sequence.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle of the initial hexagon triangulation
///
/// Triangles are created once by the triangulator and never destroyed. The
/// pairing pass flips `active` to false when it consumes a triangle into a
/// base quad; triangles still active after pairing are subdivided directly.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    /// Vertex point indices (all distinct)
    pub vertices: [usize; 3],
    /// False once consumed by the pairing pass
    pub active: bool,
}

impl Triangle {
    /// Create a new, unconsumed triangle
    pub fn new(v0: usize, v1: usize, v2: usize) -> Self {
        Self {
            vertices: [v0, v1, v2],
            active: true,
        }
    }

    /// Count the vertices this triangle shares with another
    ///
    /// Two triangles are adjacent exactly when they share two vertices, i.e.
    /// one full edge.
    pub fn shared_vertex_count(&self, other: &Triangle) -> usize {
        self.vertices
            .iter()
            .filter(|v| other.vertices.contains(v))
            .count()
    }

    /// Get the three edges as cyclic vertex pairs
    pub fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.vertices;
        [(a, b), (b, c), (c, a)]
    }
}

/// A quadrilateral formed by merging two adjacent triangles
///
/// Vertices are ordered consecutively around the quad boundary, with the two
/// vertices exclusive to one parent triangle sitting opposite each other.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseQuad {
    /// Vertex point indices, in traversal order
    pub vertices: [usize; 4],
}

impl BaseQuad {
    /// Get the four edges as cyclic vertex pairs
    pub fn edges(&self) -> [(usize, usize); 4] {
        let [a, b, c, d] = self.vertices;
        [(a, b), (b, c), (c, d), (d, a)]
    }
}

/// A cell of the final output mesh
///
/// Every final quad fans out from its parent cell's centroid: the vertices
/// are, in order, the centroid, an edge midpoint, an original vertex of the
/// parent cell, and the next edge midpoint.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quad {
    /// Vertex point indices, in traversal order starting at the centroid
    pub vertices: [usize; 4],
}

impl Quad {
    /// Get the four edges as cyclic vertex pairs
    pub fn edges(&self) -> [(usize, usize); 4] {
        let [a, b, c, d] = self.vertices;
        [(a, b), (b, c), (c, d), (d, a)]
    }
}
