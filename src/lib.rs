#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Incremental convex hull of a planar point set, with a triangulation of the
//! hull interior that is kept valid by edge flips.
//!
//! The hull vertices live in a [`PlanarGraph`](data::PlanarGraph). Points are
//! inserted one at a time; points that fall inside the hull are ignored and hull
//! vertices that become interior are pruned. Every vertex keeps its neighbors in
//! counterclockwise order so flips can find the quadrilateral around an edge.
//!
//! ```rust
//! # use incremental_hull::data::PlanarGraph;
//! # use incremental_hull::Error;
//! let mut graph = PlanarGraph::new();
//! graph.insert(0.0, 0.0)?;
//! graph.insert(4.0, 0.0)?;
//! graph.insert(0.0, 4.0)?;
//!
//! assert!(graph.contains(1.0, 1.0)?);
//! assert!(!graph.contains(5.0, 5.0)?);
//! assert_eq!(graph.edges().count(), 3);
//! # Ok::<(), Error>(())
//! ```

pub mod algorithms;
mod config;
pub mod data;
mod orientation;
mod utils;

pub use config::Config;
pub use orientation::{orient, Orientation, Predicate};

/// Reasons an edge flip is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipBlocker {
  /// The edge lies on the hull boundary and has only one adjacent triangle.
  HullEdge,
  /// The two vertices opposite the edge do not close triangles with it.
  MissingTriangle,
  /// The quadrilateral around the edge is concave or degenerate.
  Concave,
}

impl std::fmt::Display for FlipBlocker {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      FlipBlocker::HullEdge => write!(f, "edge is on the hull"),
      FlipBlocker::MissingTriangle => write!(f, "edge is not shared by two triangles"),
      FlipBlocker::Concave => write!(f, "quadrilateral is not strictly convex"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  /// Too few vertices for the operation, or the input point is degenerate
  /// (on the hull boundary, or colinear with a two-vertex hull).
  #[error("Degenerate input")]
  DegenerateInput,
  #[error("Edge not found")]
  EdgeNotFound,
  #[error("Edge cannot be flipped: {0}")]
  NotFlippable(FlipBlocker),
  #[error("Vertex not found")]
  VertexNotFound,
  #[error("Index out of range")]
  IndexOutOfRange,
  /// A coordinate was NaN or infinite.
  #[error("Invalid coordinate")]
  InvalidCoordinate,
  /// Three consecutive hull vertices are either colinear or oriented clockwise.
  #[error("Convex violation")]
  ConvexViolation,
  #[error("Neighbors are not in counterclockwise order")]
  NeighborOrderViolation,
  /// An edge is recorded on only one of its endpoints.
  #[error("Asymmetric edge")]
  AsymmetricEdge,
  #[error("Self intersections")]
  SelfIntersections,
  /// The hull interior is not fully triangulated.
  #[error("Incomplete triangulation")]
  IncompleteTriangulation,
}

#[cfg(test)]
pub mod testing;
