use claims::debug_assert_ok;
use slotmap::SlotMap;
use std::collections::HashSet;
use std::ops::{Index, Range};
use tracing::{debug, trace};

use super::{DirectedEdge, Edge, Point, Vertex, VertexId};
use crate::utils::{cyclic_pairs, wrap_index};
use crate::{Config, Error, FlipBlocker, Orientation};

/// Convex hull of a point set together with a triangulation of its interior.
///
/// Every vertex of the graph is a hull vertex. The hull is stored as a
/// counterclockwise cycle, indexed modulo its length, and the triangulation
/// lives in the neighbor lists of the vertices.
#[derive(Debug, Clone)]
pub struct PlanarGraph {
  vertices: SlotMap<VertexId, Vertex>,
  hull: Vec<VertexId>,
  config: Config,
}

impl Default for PlanarGraph {
  fn default() -> Self {
    PlanarGraph::new()
  }
}

impl Index<VertexId> for PlanarGraph {
  type Output = Vertex;
  fn index(&self, id: VertexId) -> &Vertex {
    &self.vertices[id]
  }
}

///////////////////////////////////////////////////////////////////////////////
// Construction and lookup

impl PlanarGraph {
  pub fn new() -> PlanarGraph {
    PlanarGraph::with_config(Config::default())
  }

  pub fn with_config(config: Config) -> PlanarGraph {
    PlanarGraph {
      vertices: SlotMap::with_key(),
      hull: Vec::new(),
      config,
    }
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn len(&self) -> usize {
    self.hull.len()
  }

  pub fn is_empty(&self) -> bool {
    self.hull.is_empty()
  }

  pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
    self.vertices.get(id)
  }

  /// Hull vertices in counterclockwise order.
  pub fn hull(&self) -> &[VertexId] {
    &self.hull
  }

  /// Vertices in hull order.
  pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
    self
      .hull
      .iter()
      .filter_map(move |&id| self.vertices.get(id).map(|v| (id, v)))
  }

  /// Vertex positions in hull order.
  pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
    self.vertices().map(|(_, v)| *v.point())
  }

  fn point_of(&self, id: VertexId) -> Result<Point, Error> {
    self
      .vertices
      .get(id)
      .map(|v| *v.point())
      .ok_or(Error::VertexNotFound)
  }

  fn orient(&self, p: &Point, q: &Point, r: &Point) -> Orientation {
    self.config.predicate.orient(p, q, r)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Circular indexing

impl PlanarGraph {
  /// The hull vertex at position `idx`, wrapping around in both directions.
  ///
  /// # Errors
  ///
  /// Returns [`Error::IndexOutOfRange`] if the graph is empty.
  pub fn at(&self, idx: isize) -> Result<VertexId, Error> {
    if self.hull.is_empty() {
      return Err(Error::IndexOutOfRange);
    }
    Ok(self.hull[wrap_index(idx, self.hull.len())])
  }

  /// Hull vertices visited walking forward from `range.start` up to, but not
  /// including, `range.end`. Both ends wrap, so `at_range(n-2..2)` visits
  /// positions `n-2, n-1, 0, 1`. A span of `n` or more yields every vertex once.
  ///
  /// # Errors
  ///
  /// Returns [`Error::IndexOutOfRange`] if the graph is empty.
  pub fn at_range(&self, range: Range<isize>) -> Result<Vec<VertexId>, Error> {
    let n = self.hull.len();
    if n == 0 {
      return Err(Error::IndexOutOfRange);
    }
    let span = range.end - range.start;
    let count = if span >= n as isize {
      n
    } else {
      wrap_index(span, n)
    };
    Ok(
      (0..count)
        .map(|k| self.hull[wrap_index(range.start + k as isize, n)])
        .collect(),
    )
  }

  /// Position of `id` in the hull cycle.
  ///
  /// # Errors
  ///
  /// Returns [`Error::VertexNotFound`] if `id` is not part of the graph.
  pub fn index_of(&self, id: VertexId) -> Result<usize, Error> {
    self
      .hull
      .iter()
      .position(|&v| v == id)
      .ok_or(Error::VertexNotFound)
  }

  /// Boundary edges, oriented counterclockwise. A two-vertex hull has a single
  /// boundary edge.
  pub fn hull_edges(&self) -> impl Iterator<Item = DirectedEdge> + '_ {
    let count = match self.hull.len() {
      0 | 1 => 0,
      2 => 1,
      n => n,
    };
    cyclic_pairs(&self.hull)
      .take(count)
      .map(|(&src, &dst)| DirectedEdge { src, dst })
  }

  pub fn is_hull_edge(&self, a: VertexId, b: VertexId) -> bool {
    let n = self.hull.len();
    match (self.index_of(a), self.index_of(b)) {
      (Ok(ia), Ok(ib)) if n >= 2 && ia != ib => (ia + 1) % n == ib || (ib + 1) % n == ia,
      _ => false,
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Hull queries

impl PlanarGraph {
  /// True if `p` lies inside the hull or on its boundary. A hull with fewer than
  /// three vertices contains nothing.
  pub fn hull_contains(&self, p: &Point) -> bool {
    let pts: Vec<Point> = self.positions().collect();
    pts.len() >= 3 && cyclic_pairs(&pts).all(|(a, b)| !self.orient(a, b, p).is_cw())
  }

  /// The tangent vertices `(start, end)` of the boundary arc visible from `p`,
  /// in counterclockwise order. A boundary edge is visible if `p` lies strictly
  /// to its right.
  ///
  /// A boundary edge colinear with `p` that touches the visible arc is absorbed
  /// into it, so the vertex between them does not end up colinear on the hull.
  ///
  /// Returns `None` if no edge is visible: `p` is inside the hull, on its
  /// boundary, or colinear with a two-vertex hull.
  ///
  /// # Errors
  ///
  /// Returns [`Error::DegenerateInput`] with fewer than two vertices.
  pub fn find_convex_nbrs(&self, p: &Point) -> Result<Option<(VertexId, VertexId)>, Error> {
    let n = self.hull.len();
    if n < 2 {
      return Err(Error::DegenerateInput);
    }
    let pts: Vec<Point> = self.positions().collect();
    let turns: Vec<Orientation> = cyclic_pairs(&pts)
      .map(|(a, b)| self.orient(a, b, p))
      .collect();
    let turn = |i: isize| turns[wrap_index(i, n)];
    let visible = |i: isize| turn(i).is_cw();

    let start = (0..n as isize).find(|&i| visible(i) && !visible(i - 1));
    let end = (0..n as isize).find(|&i| visible(i - 1) && !visible(i));
    let (Some(mut start), Some(mut end)) = (start, end) else {
      trace!(?p, "no visible hull edge");
      return Ok(None);
    };
    if turn(start - 1).is_colinear() {
      trace!(?p, start, "absorbing colinear edge before the visible arc");
      start -= 1;
    }
    if turn(end).is_colinear() {
      trace!(?p, end, "absorbing colinear edge after the visible arc");
      end += 1;
    }
    Ok(Some((self.at(start)?, self.at(end)?)))
  }
}

///////////////////////////////////////////////////////////////////////////////
// Edges

impl PlanarGraph {
  // Connect `a` and `b` on both endpoints. Adding an existing edge is a no-op.
  pub(crate) fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<(), Error> {
    if a == b {
      return Err(Error::DegenerateInput);
    }
    let pa = self.point_of(a)?;
    let pb = self.point_of(b)?;
    let predicate = self.config.predicate;
    for (from, to, at) in [(a, b, pb), (b, a, pa)] {
      if let Some(vertex) = self.vertices.get_mut(from) {
        vertex.add_neighbor(to, at, predicate);
      }
    }
    Ok(())
  }

  pub(crate) fn remove_edge(&mut self, a: VertexId, b: VertexId) -> Result<(), Error> {
    if !self.has_edge(a, b)? {
      return Err(Error::EdgeNotFound);
    }
    for (from, to) in [(a, b), (b, a)] {
      if let Some(vertex) = self.vertices.get_mut(from) {
        vertex.remove_neighbor(to)?;
      }
    }
    Ok(())
  }

  /// # Errors
  ///
  /// Returns [`Error::VertexNotFound`] if either vertex is missing.
  pub fn has_edge(&self, a: VertexId, b: VertexId) -> Result<bool, Error> {
    let va = self.vertices.get(a).ok_or(Error::VertexNotFound)?;
    let vb = self.vertices.get(b).ok_or(Error::VertexNotFound)?;
    Ok(va.has_neighbor(b) && vb.has_neighbor(a))
  }

  /// Every undirected edge exactly once. Vertices are visited in hull order and
  /// each yields its edges to vertices not visited yet.
  pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
    let mut visited = HashSet::new();
    self.hull.iter().flat_map(move |&v| {
      visited.insert(v);
      self
        .vertices
        .get(v)
        .into_iter()
        .flat_map(|vertex| vertex.neighbors())
        .filter(|n| !visited.contains(n))
        .map(|n| Edge::new(v, n))
        .collect::<Vec<_>>()
    })
  }

  /// Replace the diagonal `(v1, v2)` of the quadrilateral formed by its two
  /// adjacent triangles with the other diagonal. Returns the new edge.
  ///
  /// The graph is left untouched if the flip is refused.
  ///
  /// # Errors
  ///
  /// - [`Error::VertexNotFound`] if either vertex is missing.
  /// - [`Error::EdgeNotFound`] if the vertices are not connected.
  /// - [`Error::NotFlippable`] if the edge is on the hull, is not shared by two
  ///   triangles, or the quadrilateral is not strictly convex.
  pub fn flip_edge(&mut self, v1: VertexId, v2: VertexId) -> Result<Edge, Error> {
    if !self.has_edge(v1, v2)? {
      return Err(Error::EdgeNotFound);
    }
    if self.is_hull_edge(v1, v2) {
      return Err(Error::NotFlippable(FlipBlocker::HullEdge));
    }
    let (n1, n2) = self.flip_apexes(v1, v2)?;

    let (p1, p2) = (self.point_of(v1)?, self.point_of(v2)?);
    let (q1, q2) = (self.point_of(n1)?, self.point_of(n2)?);
    let strictly_apart = |a: Orientation, b: Orientation| {
      !a.is_colinear() && !b.is_colinear() && a == b.reverse()
    };
    if !strictly_apart(self.orient(&p1, &p2, &q1), self.orient(&p1, &p2, &q2))
      || !strictly_apart(self.orient(&q1, &q2, &p1), self.orient(&q1, &q2, &p2))
    {
      return Err(Error::NotFlippable(FlipBlocker::Concave));
    }

    self.remove_edge(v1, v2)?;
    self.add_edge(n1, n2)?;
    debug!(?v1, ?v2, ?n1, ?n2, "flipped edge");
    if self.config.validate {
      debug_assert_ok!(self.validate());
    }
    Ok(Edge::new(n1, n2))
  }

  // The apexes of the two triangles on either side of `(v1, v2)`: `n1` follows
  // `v2` around `v1` and `n2` follows `v1` around `v2`.
  fn flip_apexes(&self, v1: VertexId, v2: VertexId) -> Result<(VertexId, VertexId), Error> {
    let missing = Error::NotFlippable(FlipBlocker::MissingTriangle);
    let a = self.vertices.get(v1).ok_or(Error::VertexNotFound)?;
    let b = self.vertices.get(v2).ok_or(Error::VertexNotFound)?;
    let n1 = a.get_next_nbr(v2)?;
    let n2 = b.get_next_nbr(v1)?;
    if n1 == v2 || n2 == v1 || n1 == n2 {
      return Err(missing);
    }
    // Both apexes must close faces: n1 precedes v1 around v2, n2 precedes v2
    // around v1.
    if b.get_prev_nbr(v1)? != n1 || a.get_prev_nbr(v2)? != n2 {
      return Err(missing);
    }
    if self.has_edge(n1, n2)? {
      return Err(missing);
    }
    Ok((n1, n2))
  }
}

///////////////////////////////////////////////////////////////////////////////
// Insertion and removal

impl PlanarGraph {
  /// Grow the hull to include `point`.
  ///
  /// Returns the handle of the new vertex, or `None` if the point is already
  /// covered: it duplicates a vertex or lies inside or on the hull. Hull vertices
  /// that end up inside the new hull are removed from the graph.
  ///
  /// # Errors
  ///
  /// Returns [`Error::DegenerateInput`] if the graph has two vertices and
  /// `point` is colinear with them.
  pub fn add_vertex(&mut self, point: Point) -> Result<Option<VertexId>, Error> {
    if self.positions().any(|p| p == point) {
      trace!(?point, "duplicate point ignored");
      return Ok(None);
    }
    if self.hull.len() < 2 {
      let first = self.hull.first().copied();
      let id = self.vertices.insert(Vertex::new(point));
      self.hull.push(id);
      if let Some(first) = first {
        self.add_edge(first, id)?;
      }
      debug!(?id, ?point, "added vertex");
      return Ok(Some(id));
    }
    if self.hull_contains(&point) {
      trace!(?point, "point inside the hull ignored");
      return Ok(None);
    }
    let (start, end) = self
      .find_convex_nbrs(&point)?
      .ok_or(Error::DegenerateInput)?;
    let si = self.index_of(start)? as isize;
    let ei = self.index_of(end)? as isize;

    let flips = self.flip_between(si, ei)?;
    let pruned = self.at_range(si + 1..ei)?;
    for &v in &pruned {
      self.remove_vertex(v)?;
    }

    let id = self.vertices.insert(Vertex::new(point));
    let at = self.index_of(end)?;
    self.hull.insert(at, id);
    self.add_edge(start, id)?;
    self.add_edge(end, id)?;
    debug!(
      ?id,
      ?point,
      ?start,
      ?end,
      flips,
      pruned = pruned.len(),
      "added vertex"
    );
    if self.config.validate {
      debug_assert_ok!(self.validate());
    }
    Ok(Some(id))
  }

  /// Remove `id` and every edge touching it. The rest of the graph is not
  /// re-triangulated; see [`PlanarGraph::dissolve_vertex`] for a removal that
  /// keeps the triangulation intact.
  ///
  /// # Errors
  ///
  /// Returns [`Error::VertexNotFound`] if `id` is not part of the graph.
  pub fn remove_vertex(&mut self, id: VertexId) -> Result<Vertex, Error> {
    let nbrs: Vec<VertexId> = self
      .vertices
      .get(id)
      .ok_or(Error::VertexNotFound)?
      .neighbors()
      .collect();
    for n in nbrs {
      if let Some(nbr) = self.vertices.get_mut(n) {
        let detached = nbr.remove_neighbor(id);
        debug_assert_ok!(detached);
      }
    }
    self.hull.retain(|&v| v != id);
    let vertex = self.vertices.remove(id).ok_or(Error::VertexNotFound)?;
    debug!(?id, point = ?vertex.point(), "removed vertex");
    Ok(vertex)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Coordinate-level interface

impl PlanarGraph {
  /// [`add_vertex`](PlanarGraph::add_vertex) for raw coordinates.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidCoordinate`] for NaN or infinite input, otherwise
  /// whatever `add_vertex` returns.
  pub fn insert(&mut self, x: f64, y: f64) -> Result<Option<VertexId>, Error> {
    self.add_vertex(Point::new(x, y)?)
  }

  /// Remove a vertex while keeping the triangulation valid. Returns its position.
  pub fn remove(&mut self, id: VertexId) -> Result<Point, Error> {
    self.dissolve_vertex(id).map(|v| *v.point())
  }

  pub fn flip(&mut self, a: VertexId, b: VertexId) -> Result<Edge, Error> {
    self.flip_edge(a, b)
  }

  pub fn contains(&self, x: f64, y: f64) -> Result<bool, Error> {
    Ok(self.hull_contains(&Point::new(x, y)?))
  }

  pub fn tangents(&self, x: f64, y: f64) -> Result<Option<(VertexId, VertexId)>, Error> {
    self.find_convex_nbrs(&Point::new(x, y)?)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Validation

impl PlanarGraph {
  /// $O(n^2)$ Check every structural invariant: the hull is strictly convex and
  /// counterclockwise, neighbor lists are sorted, edges are recorded on both
  /// endpoints, the interior is fully triangulated and no two edges cross.
  pub fn validate(&self) -> Result<(), Error> {
    let n = self.hull.len();
    if n != self.vertices.len() {
      return Err(Error::VertexNotFound);
    }
    let pts = self
      .hull
      .iter()
      .map(|&v| self.point_of(v))
      .collect::<Result<Vec<Point>, Error>>()?;

    if n >= 3 {
      for i in 0..n {
        let (a, b, c) = (&pts[i], &pts[(i + 1) % n], &pts[(i + 2) % n]);
        if !self.orient(a, b, c).is_ccw() {
          return Err(Error::ConvexViolation);
        }
      }
    }

    for (id, vertex) in self.vertices.iter() {
      vertex.validate(self.config.predicate)?;
      for nbr in vertex.neighbors() {
        match self.vertices.get(nbr) {
          Some(other) if other.has_neighbor(id) => {}
          _ => return Err(Error::AsymmetricEdge),
        }
      }
    }

    for edge in self.hull_edges() {
      if !self.has_edge(edge.src, edge.dst)? {
        return Err(Error::EdgeNotFound);
      }
    }

    let edges: Vec<Edge> = self.edges().collect();
    let expected = if n >= 3 { 2 * n - 3 } else { n.saturating_sub(1) };
    if edges.len() != expected {
      return Err(Error::IncompleteTriangulation);
    }

    for (i, e) in edges.iter().enumerate() {
      for f in &edges[i + 1..] {
        if e.contains(f.min) || e.contains(f.max) {
          continue;
        }
        let (a, b) = (self.point_of(e.min)?, self.point_of(e.max)?);
        let (c, d) = (self.point_of(f.min)?, self.point_of(f.max)?);
        if self.segments_cross(&a, &b, &c, &d) {
          return Err(Error::SelfIntersections);
        }
      }
    }
    Ok(())
  }

  // Proper crossing: each segment has the endpoints of the other strictly on
  // opposite sides.
  pub(crate) fn segments_cross(&self, a: &Point, b: &Point, c: &Point, d: &Point) -> bool {
    let apart = |x: Orientation, y: Orientation| x.sign() * y.sign() < 0;
    apart(self.orient(a, b, c), self.orient(a, b, d))
      && apart(self.orient(c, d, a), self.orient(c, d, b))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use claims::{assert_err_eq, assert_none, assert_ok, assert_ok_eq, assert_some_eq};
  use test_strategy::proptest;

  // a, b and c from the reference drawing: a wide triangle above the x-axis.
  fn abc() -> (PlanarGraph, VertexId, VertexId, VertexId) {
    let (graph, ids) = graph_from(&[pt(-5., 0.), pt(5., 0.), pt(0., 5.)]);
    (graph, ids[0].unwrap(), ids[1].unwrap(), ids[2].unwrap())
  }

  fn tangents(graph: &PlanarGraph, x: f64, y: f64) -> Option<(VertexId, VertexId)> {
    graph.find_convex_nbrs(&pt(x, y)).unwrap()
  }

  #[test]
  fn empty_graph() {
    let graph = PlanarGraph::new();
    assert!(graph.is_empty());
    assert_err_eq!(graph.at(0), Error::IndexOutOfRange);
    assert_err_eq!(graph.at_range(0..2), Error::IndexOutOfRange);
    assert_eq!(graph.edges().count(), 0);
    assert_eq!(graph.hull_edges().count(), 0);
    assert!(!graph.hull_contains(&pt(0., 0.)));
    assert_ok!(graph.validate());
  }

  #[test]
  fn tangents_need_two_vertices() {
    let mut graph = PlanarGraph::new();
    assert_err_eq!(graph.find_convex_nbrs(&pt(1., 1.)), Error::DegenerateInput);
    assert_ok!(graph.insert(0., 0.));
    assert_err_eq!(graph.find_convex_nbrs(&pt(1., 1.)), Error::DegenerateInput);
  }

  #[test]
  fn circular_indexing() {
    let (graph, ..) = graph_from(&[pt(0., 0.), pt(4., 0.), pt(4., 4.), pt(0., 4.), pt(-2., 2.)]);
    let n = graph.len() as isize;
    assert_eq!(n, 5);
    let hull = graph.hull().to_vec();
    assert_ok_eq!(graph.at(-1), hull[4]);
    assert_ok_eq!(graph.at(n), hull[0]);
    assert_ok_eq!(graph.at(2 * n + 3), hull[3]);
    assert_ok_eq!(graph.at_range(n - 2..2), vec![hull[3], hull[4], hull[0], hull[1]]);
    assert_ok_eq!(graph.at_range(1..1), Vec::<VertexId>::new());
    assert_ok_eq!(graph.at_range(2..2 + n), graph.at_range(2..2 + 2 * n).unwrap());
    assert_eq!(graph.at_range(-3..0).unwrap().len(), 3);
    assert_ok_eq!(graph.index_of(hull[3]), 3);
  }

  #[test]
  fn two_vertices_are_connected() {
    let (graph, ids) = graph_from(&[pt(-5., 0.), pt(5., 0.)]);
    let (a, b) = (ids[0].unwrap(), ids[1].unwrap());
    assert_ok_eq!(graph.has_edge(a, b), true);
    assert_eq!(graph.edges().collect::<Vec<_>>(), vec![Edge::new(a, b)]);
    assert_eq!(graph.hull_edges().count(), 1);
    assert!(graph.is_hull_edge(b, a));
    assert_ok!(graph.validate());
  }

  #[test]
  fn tangents_of_a_segment() {
    let (graph, ids) = graph_from(&[pt(-5., 0.), pt(5., 0.)]);
    let (a, b) = (ids[0].unwrap(), ids[1].unwrap());
    assert_some_eq!(tangents(&graph, 0., -5.), (a, b));
    assert_some_eq!(tangents(&graph, 0., 5.), (b, a));
    assert_none!(tangents(&graph, 10., 0.));
  }

  #[test]
  fn tangents_of_a_triangle() {
    let (graph, a, b, c) = abc();
    assert_none!(tangents(&graph, 0., 2.));
    assert_some_eq!(tangents(&graph, 0., -5.), (a, b));
    assert_some_eq!(tangents(&graph, 5., 5.), (b, c));
    assert_some_eq!(tangents(&graph, -5., 5.), (c, a));
    assert_some_eq!(tangents(&graph, 0., 10.), (b, a));
    assert_some_eq!(tangents(&graph, -7., -1.), (c, b));
    assert_some_eq!(tangents(&graph, 7., -1.), (a, c));
  }

  #[test]
  fn tangents_of_a_quadrilateral() {
    let (mut graph, a, b, c) = abc();
    let d = assert_ok!(graph.add_vertex(pt(0., -1.))).unwrap();
    assert_none!(tangents(&graph, 0., 0.));
    assert_some_eq!(tangents(&graph, -5., -1.), (a, d));
    assert_some_eq!(tangents(&graph, 5., -1.), (d, b));
    assert_some_eq!(tangents(&graph, 5., 5.), (b, c));
    assert_some_eq!(tangents(&graph, -5., 5.), (c, a));
    assert_some_eq!(tangents(&graph, 0., -2.), (a, b));
    assert_some_eq!(tangents(&graph, 0., 6.), (b, a));
    assert_some_eq!(tangents(&graph, -6., 0.), (c, d));
    assert_some_eq!(tangents(&graph, 6., 0.), (d, c));
    assert_some_eq!(tangents(&graph, 11., -4.), (a, c));
    assert_some_eq!(tangents(&graph, -11., -4.), (c, b));
  }

  #[test]
  fn colinear_edges_join_the_visible_arc() {
    let (graph, a, b, c) = abc();
    // (10, 0) extends a -> b, so b would become a colinear hull vertex.
    assert_some_eq!(tangents(&graph, 10., 0.), (a, c));
    assert_some_eq!(tangents(&graph, -10., 0.), (c, b));
    // On the boundary counts as inside.
    assert_none!(tangents(&graph, 0., 0.));
    assert!(graph.hull_contains(&pt(0., 0.)));
  }

  #[test]
  fn colinear_vertex_is_pruned() {
    let (mut graph, a, b, c) = abc();
    let p = assert_ok!(graph.insert(10., 0.)).unwrap();
    assert!(graph.vertex(b).is_none());
    let ci = graph.index_of(c).unwrap() as isize;
    assert_ok_eq!(graph.at_range(ci..ci + 3), vec![c, a, p]);
    assert_ok!(graph.validate());
  }

  #[test]
  fn hull_containment() {
    let (graph, ..) = abc();
    assert!(graph.hull_contains(&pt(0., 2.)));
    assert!(graph.hull_contains(&pt(-5., 0.)));
    assert!(graph.hull_contains(&pt(2.5, 2.5)));
    assert!(!graph.hull_contains(&pt(0., -0.5)));
    assert!(!graph.hull_contains(&pt(0., 5.5)));
  }

  #[test]
  fn triangle_from_three_points() {
    let mut graph = PlanarGraph::new();
    assert_ok!(graph.insert(0., 0.));
    assert_ok!(graph.insert(4., 0.));
    assert_ok!(graph.insert(0., 4.));
    assert_eq!(graph.len(), 3);
    let pts: Vec<Point> = graph.positions().collect();
    assert!(pts[0].orientation(&pts[1], &pts[2]).is_ccw());
    assert_ok_eq!(graph.contains(1., 1.), true);
    assert_ok_eq!(graph.contains(5., 5.), false);
    assert_eq!(graph.edges().count(), 3);
    assert_ok!(graph.validate());
  }

  #[test]
  fn square_has_one_diagonal() {
    let (graph, ..) = graph_from(&[pt(0., 0.), pt(4., 0.), pt(0., 4.), pt(4., 4.)]);
    assert_eq!(graph.len(), 4);
    assert_eq!(graph.hull_edges().count(), 4);
    assert_eq!(graph.edges().count(), 5);
    assert_ok!(graph.validate());
  }

  #[test]
  fn interior_and_duplicate_points_are_ignored() {
    let (mut graph, ..) = abc();
    let before: Vec<Edge> = graph.edges().collect();
    assert_ok_eq!(graph.insert(0., 1.), None);
    assert_ok_eq!(graph.insert(5., 0.), None);
    assert_ok_eq!(graph.insert(2.5, 2.5), None);
    assert_eq!(graph.len(), 3);
    assert_eq!(graph.edges().collect::<Vec<_>>(), before);
  }

  #[test]
  fn colinear_third_point_is_degenerate() {
    let (mut graph, _) = graph_from(&[pt(0., 0.), pt(1., 1.)]);
    assert_err_eq!(graph.insert(2., 2.), Error::DegenerateInput);
    assert_err_eq!(graph.insert(0.5, 0.5), Error::DegenerateInput);
    assert_ok_eq!(graph.insert(1., 1.), None);
    assert_eq!(graph.len(), 2);
    assert_ok!(graph.validate());
  }

  #[test]
  fn invalid_coordinates() {
    let mut graph = PlanarGraph::new();
    assert_err_eq!(graph.insert(f64::NAN, 0.), Error::InvalidCoordinate);
    assert_err_eq!(graph.contains(0., f64::INFINITY), Error::InvalidCoordinate);
    assert!(graph.is_empty());
  }

  #[test]
  fn flip_and_flip_back() {
    let (mut graph, ids) = graph_from(&[pt(0., 0.), pt(4., 0.), pt(0., 4.), pt(4., 4.)]);
    let [sw, se, nw, ne] = [ids[0], ids[1], ids[2], ids[3]].map(|id| id.unwrap());
    assert_ok_eq!(graph.has_edge(se, nw), true);
    let before = graph.clone();

    assert_ok_eq!(graph.flip_edge(se, nw), Edge::new(sw, ne));
    assert_ok_eq!(graph.has_edge(se, nw), false);
    assert_ok!(graph.validate());

    assert_ok_eq!(graph.flip(sw, ne), Edge::new(se, nw));
    let mut edges: Vec<Edge> = graph.edges().collect();
    let mut expected: Vec<Edge> = before.edges().collect();
    edges.sort();
    expected.sort();
    assert_eq!(edges, expected);
  }

  #[test]
  fn hull_edges_do_not_flip() {
    let (mut graph, ids) = graph_from(&[pt(0., 0.), pt(4., 0.), pt(0., 4.), pt(4., 4.)]);
    let [sw, se, _, ne] = [ids[0], ids[1], ids[2], ids[3]].map(|id| id.unwrap());
    let before: Vec<Edge> = graph.edges().collect();
    assert_err_eq!(graph.flip_edge(sw, se), Error::NotFlippable(FlipBlocker::HullEdge));
    assert_err_eq!(graph.flip_edge(sw, ne), Error::EdgeNotFound);
    assert_eq!(graph.edges().collect::<Vec<_>>(), before);
  }

  #[test]
  fn triangle_edges_do_not_flip() {
    let (mut graph, a, b, _) = abc();
    assert_err_eq!(graph.flip_edge(a, b), Error::NotFlippable(FlipBlocker::HullEdge));
  }

  #[test]
  fn concave_quadrilateral_does_not_flip() {
    // Hand-built fan around an interior vertex d. The quadrilateral a, b, c, d
    // is concave at d, so the diagonal b-d has no legal replacement.
    let mut graph = PlanarGraph::new();
    let ids: Vec<VertexId> = [pt(0., 0.), pt(4., 0.), pt(4., 4.), pt(3., 1.), pt(0., 4.)]
      .iter()
      .map(|&p| graph.vertices.insert(Vertex::new(p)))
      .collect();
    let (a, b, c, d, e) = (ids[0], ids[1], ids[2], ids[3], ids[4]);
    graph.hull = vec![a, b, c, e];
    for (x, y) in [(a, b), (b, c), (c, e), (e, a), (a, d), (b, d), (c, d), (e, d)] {
      assert_ok!(graph.add_edge(x, y));
    }
    assert_err_eq!(graph.flip_edge(b, d), Error::NotFlippable(FlipBlocker::Concave));
    assert_ok_eq!(graph.has_edge(b, d), true);
  }

  #[test]
  fn missing_vertices() {
    let (mut graph, a, b, c) = abc();
    assert_ok!(graph.remove_vertex(c));
    assert_err_eq!(graph.flip_edge(a, c), Error::VertexNotFound);
    assert_err_eq!(graph.remove_vertex(c), Error::VertexNotFound);
    assert_err_eq!(graph.index_of(c), Error::VertexNotFound);
    assert_ok_eq!(graph.has_edge(a, b), true);
    assert_eq!(graph.len(), 2);
  }

  #[test]
  fn remove_vertex_detaches_neighbors() {
    let (mut graph, ids) = graph_from(&[pt(0., 0.), pt(4., 0.), pt(0., 4.), pt(4., 4.)]);
    let nw = ids[2].unwrap();
    let removed = assert_ok!(graph.remove_vertex(nw));
    assert_eq!(removed.point(), &pt(0., 4.));
    assert_eq!(graph.len(), 3);
    assert!(graph.vertices().all(|(_, v)| !v.has_neighbor(nw)));
    assert_ok!(graph.validate());
  }

  #[test]
  fn edges_are_unique() {
    let (graph, ..) = graph_from(&[
      pt(0., 0.),
      pt(6., -1.),
      pt(9., 3.),
      pt(5., 8.),
      pt(-2., 6.),
      pt(-4., 2.),
    ]);
    let edges: Vec<Edge> = graph.edges().collect();
    let unique: HashSet<Edge> = edges.iter().copied().collect();
    assert_eq!(edges.len(), unique.len());
    assert_eq!(edges.len(), 2 * graph.len() - 3);
  }

  #[test]
  fn validate_detects_broken_hull() {
    let (mut graph, ..) = graph_from(&[pt(0., 0.), pt(4., 0.), pt(0., 4.), pt(4., 4.)]);
    graph.hull.swap(0, 1);
    assert_err_eq!(graph.validate(), Error::ConvexViolation);
  }

  #[test]
  fn validate_detects_missing_diagonal() {
    let (mut graph, ids) = graph_from(&[pt(0., 0.), pt(4., 0.), pt(0., 4.), pt(4., 4.)]);
    let (se, nw) = (ids[1].unwrap(), ids[2].unwrap());
    assert_ok!(graph.remove_edge(se, nw));
    assert_err_eq!(graph.validate(), Error::IncompleteTriangulation);
  }

  #[test]
  fn validate_detects_crossing_edges() {
    let (mut graph, _) = graph_from(&[pt(0., 0.), pt(4., 0.), pt(5., 3.), pt(2., 5.), pt(-1., 3.)]);
    let diagonals: Vec<Edge> = graph
      .edges()
      .filter(|e| !graph.is_hull_edge(e.min, e.max))
      .collect();
    assert_eq!(diagonals.len(), 2);
    for e in diagonals {
      assert_ok!(graph.remove_edge(e.min, e.max));
    }
    let h = graph.hull().to_vec();
    assert_ok!(graph.add_edge(h[0], h[2]));
    assert_ok!(graph.add_edge(h[1], h[3]));
    assert_err_eq!(graph.validate(), Error::SelfIntersections);
  }

  #[test]
  fn validate_detects_missing_hull_edge() {
    let (mut graph, ids) = graph_from(&[pt(0., 0.), pt(4., 0.), pt(0., 4.), pt(4., 4.)]);
    let (sw, se) = (ids[0].unwrap(), ids[1].unwrap());
    assert_ok!(graph.remove_edge(sw, se));
    assert_err_eq!(graph.validate(), Error::EdgeNotFound);
  }

  #[proptest]
  fn insertion_keeps_graph_valid(#[strategy(any_points(0..40))] pts: Vec<Point>) {
    let mut graph = PlanarGraph::with_config(Config::default().with_validation(false));
    for p in pts {
      match graph.add_vertex(p) {
        Ok(_) => {}
        Err(err) => assert_eq!((err, graph.len()), (Error::DegenerateInput, 2)),
      }
      assert_ok!(graph.validate());
    }
  }

  #[proptest]
  fn inside_points_change_nothing(
    #[strategy(any_points(3..20))] pts: Vec<Point>,
    #[strategy(any_point())] probe: Point,
  ) {
    let (mut graph, _) = graph_from(&pts);
    if graph.hull_contains(&probe) {
      let before: Vec<Edge> = graph.edges().collect();
      assert_ok_eq!(graph.add_vertex(probe), None);
      assert_eq!(graph.edges().collect::<Vec<_>>(), before);
    }
  }
}
