// Legalization: clearing a path for a new hull chord by flipping every edge
// that crosses it.
use claims::debug_assert_ok;
use tracing::{debug, trace};

use crate::data::{Edge, PlanarGraph, Vertex, VertexId};
use crate::Error;

impl PlanarGraph {
  /// Edges crossing the chord between the hull vertices at positions `ai` and
  /// `bi`. These are the edges joining the vertices strictly between `ai` and
  /// `bi` (walking forward) to those strictly between `bi` and `ai`.
  ///
  /// # Errors
  ///
  /// - [`Error::IndexOutOfRange`] if the graph is empty.
  /// - [`Error::DegenerateInput`] if both positions name the same vertex.
  pub fn crossing_edges(&self, ai: isize, bi: isize) -> Result<Vec<Edge>, Error> {
    let (right, left) = self.chord_sides(ai, bi)?;
    let mut crossing = Vec::new();
    for &r in &right {
      let vertex = self.vertex(r).ok_or(Error::VertexNotFound)?;
      crossing.extend(
        vertex
          .neighbors()
          .filter(|n| left.contains(n))
          .map(|l| Edge::new(r, l)),
      );
    }
    Ok(crossing)
  }

  /// Flip edges until the hull vertices at positions `ai` and `bi` are adjacent.
  /// Returns the number of flips.
  ///
  /// Every flip replaces the crossing edge closest to `a = at(ai)` with an edge
  /// incident to `a`, so each flip removes exactly one crossing and the number
  /// of flips equals the initial [`crossing_edges`](PlanarGraph::crossing_edges)
  /// count.
  ///
  /// ```rust
  /// # use incremental_hull::data::PlanarGraph;
  /// # use incremental_hull::Error;
  /// let mut graph = PlanarGraph::new();
  /// for (x, y) in [(0., 0.), (4., 0.), (6., 2.), (6., 5.), (4., 7.), (0., 7.)] {
  ///   graph.insert(x, y)?;
  /// }
  /// let crossing = graph.crossing_edges(0, 3)?.len();
  /// assert_eq!(graph.flip_between(0, 3)?, crossing);
  /// assert!(graph.crossing_edges(0, 3)?.is_empty());
  /// assert!(graph.has_edge(graph.at(0)?, graph.at(3)?)?);
  /// # Ok::<(), Error>(())
  /// ```
  ///
  /// # Errors
  ///
  /// Same as [`crossing_edges`](PlanarGraph::crossing_edges), plus any error of
  /// [`flip_edge`](PlanarGraph::flip_edge) if the graph is not a valid
  /// triangulation.
  pub fn flip_between(&mut self, ai: isize, bi: isize) -> Result<usize, Error> {
    let (a, b) = (self.at(ai)?, self.at(bi)?);
    let (right, left) = self.chord_sides(ai, bi)?;
    let budget = self.crossing_edges(ai, bi)?.len();
    let mut flips = 0;
    while flips < budget {
      // Around `a`, the chord enters the triangle between a right-side
      // neighbor and the left-side neighbor that follows it.
      let entering = self
        .vertex(a)
        .ok_or(Error::VertexNotFound)?
        .neighbor_pairs()
        .find(|(r, l)| right.contains(r) && left.contains(l));
      let Some((r, l)) = entering else {
        break;
      };
      trace!(?a, ?r, ?l, "flipping edge across chord");
      self.flip_edge(r, l)?;
      flips += 1;
    }
    debug!(?a, ?b, flips, "cleared chord");
    Ok(flips)
  }

  /// Remove a hull vertex while keeping the triangulation valid. The vertex is
  /// first flipped down to an ear, connected only to its two hull neighbors.
  ///
  /// # Errors
  ///
  /// Returns [`Error::VertexNotFound`] if `id` is not part of the graph.
  pub fn dissolve_vertex(&mut self, id: VertexId) -> Result<Vertex, Error> {
    let i = self.index_of(id)? as isize;
    if self.len() > 3 {
      self.flip_between(i - 1, i + 1)?;
    }
    let vertex = self.remove_vertex(id)?;
    if self.config().validate {
      debug_assert_ok!(self.validate());
    }
    Ok(vertex)
  }

  // Vertices strictly right of the chord a -> b, and strictly left of it.
  fn chord_sides(&self, ai: isize, bi: isize) -> Result<(Vec<VertexId>, Vec<VertexId>), Error> {
    if self.at(ai)? == self.at(bi)? {
      return Err(Error::DegenerateInput);
    }
    Ok((self.at_range(ai + 1..bi)?, self.at_range(bi + 1..ai)?))
  }
}
