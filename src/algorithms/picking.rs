// Hit testing for a pointer hovering over the drawing of a graph.
use crate::data::{Edge, PlanarGraph, Point, VertexId};

/// Default pick radius for vertices, in the units of the point coordinates.
pub const VERTEX_PICK_RADIUS: f64 = 15.0;
/// Default pick radius for edges.
pub const EDGE_PICK_RADIUS: f64 = 10.0;

/// Whatever lies under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
  Vertex(VertexId),
  Edge(Edge),
}

/// The vertex closest to `p`, if it is within `radius`.
pub fn nearest_vertex(graph: &PlanarGraph, p: &Point, radius: f64) -> Option<VertexId> {
  graph
    .vertices()
    .map(|(id, v)| (id, v.point().euclidean_distance(p)))
    .filter(|&(_, dist)| dist <= radius)
    .min_by(|a, b| a.1.total_cmp(&b.1))
    .map(|(id, _)| id)
}

/// The edge closest to `p`, if it is strictly within `radius`. Only edges whose
/// span covers the foot of the perpendicular from `p` are considered.
pub fn nearest_edge(graph: &PlanarGraph, p: &Point, radius: f64) -> Option<Edge> {
  let mut best: Option<(Edge, f64)> = None;
  for edge in graph.edges() {
    let (a, b) = match (graph.vertex(edge.min), graph.vertex(edge.max)) {
      (Some(a), Some(b)) => (a.point(), b.point()),
      _ => continue,
    };
    let Some(dist) = p.distance_to_segment(a, b) else {
      continue;
    };
    if dist < best.map_or(radius, |(_, d)| d) {
      best = Some((edge, dist));
    }
  }
  best.map(|(edge, _)| edge)
}

/// Vertices take precedence over edges.
pub fn pick(graph: &PlanarGraph, p: &Point) -> Option<Pick> {
  nearest_vertex(graph, p, VERTEX_PICK_RADIUS)
    .map(Pick::Vertex)
    .or_else(|| nearest_edge(graph, p, EDGE_PICK_RADIUS).map(Pick::Edge))
}
