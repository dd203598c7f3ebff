use super::VertexId;

/// Undirected edge between two vertices. The endpoints are stored in a canonical
/// order so `Edge::new(a, b) == Edge::new(b, a)`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
  pub min: VertexId,
  pub max: VertexId,
  _private: (),
}

impl Edge {
  pub fn new(a: VertexId, b: VertexId) -> Edge {
    Edge {
      min: std::cmp::min(a, b),
      max: std::cmp::max(a, b),
      _private: (),
    }
  }

  pub fn contains(&self, v: VertexId) -> bool {
    self.min == v || self.max == v
  }

  /// The endpoint that isn't `v`, if `v` is an endpoint.
  pub fn opposite(&self, v: VertexId) -> Option<VertexId> {
    if self.min == v {
      Some(self.max)
    } else if self.max == v {
      Some(self.min)
    } else {
      None
    }
  }
}

impl std::fmt::Debug for Edge {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Edge")
      .field("min", &self.min)
      .field("max", &self.max)
      .finish()
  }
}

/// Boundary edge of the hull, oriented counterclockwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirectedEdge {
  pub src: VertexId,
  pub dst: VertexId,
}

impl From<DirectedEdge> for Edge {
  fn from(directed: DirectedEdge) -> Edge {
    Edge::new(directed.src, directed.dst)
  }
}
