// Strategies and helpers shared by the unit tests:
//  * points on an integer grid
//  * point clouds
//  * graphs built from a list of points
use crate::data::{PlanarGraph, Point, VertexId};
use crate::Config;

use proptest::collection::vec;
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::ops::Range;

///////////////////////////////////////////////////////////////////////////////
// Points

// Integer coordinates keep the tests free of rounding surprises and make
// colinear and duplicate points common enough to matter.
pub fn any_point() -> impl Strategy<Value = Point> {
  (-100i32..100, -100i32..100).prop_map(|(x, y)| Point::new_nn([f64::from(x), f64::from(y)]))
}

pub fn any_points(size: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  vec(any_point(), size)
}

///////////////////////////////////////////////////////////////////////////////
// Graphs

pub fn pt(x: f64, y: f64) -> Point {
  Point::new_nn([x, y])
}

// Insert the points in order, always validating after each mutation. Returns
// the handles of the points that ended up on the hull at the time they were
// inserted.
pub fn graph_from(points: &[Point]) -> (PlanarGraph, Vec<Option<VertexId>>) {
  let mut graph = PlanarGraph::with_config(Config::default().with_validation(true));
  let ids = points
    .iter()
    .map(|p| graph.add_vertex(*p).ok().flatten())
    .collect();
  (graph, ids)
}

pub fn shuffle<T>(items: &mut [T], seed: u64) {
  let mut rng = SmallRng::seed_from_u64(seed);
  items.shuffle(&mut rng);
}
