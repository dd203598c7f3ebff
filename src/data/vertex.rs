use slotmap::new_key_type;
use std::cmp::Ordering;

use super::Point;
use crate::utils::cyclic_pairs;
use crate::{Error, Predicate};

new_key_type! {
  /// Stable handle to a vertex of a [`PlanarGraph`](super::PlanarGraph). Handles of
  /// removed vertices are never reused.
  pub struct VertexId;
}

// Neighbor positions are cached next to their handles. Points never move, so the
// cache cannot go stale, and sorting a neighbor list needs no access to the
// other vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Neighbor {
  id: VertexId,
  point: Point,
}

/// A point together with its neighbors, kept in counterclockwise angular order.
///
/// The first neighbor (the *anchor*) is the basis the order is measured from. It
/// is whichever neighbor happened to be added first and carries no meaning of its
/// own: only the cyclic order of the list is significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
  point: Point,
  nbrs: Vec<Neighbor>,
}

impl Vertex {
  pub fn new(point: Point) -> Vertex {
    Vertex {
      point,
      nbrs: Vec::new(),
    }
  }

  pub fn point(&self) -> &Point {
    &self.point
  }

  pub fn degree(&self) -> usize {
    self.nbrs.len()
  }

  /// Neighbors in counterclockwise order, starting at the anchor.
  pub fn neighbors(&self) -> impl Iterator<Item = VertexId> + '_ {
    self.nbrs.iter().map(|n| n.id)
  }

  /// Neighbors in counterclockwise order, starting at `start`.
  ///
  /// # Errors
  ///
  /// Returns [`Error::EdgeNotFound`] if `start` is not a neighbor.
  pub fn neighbors_from(&self, start: VertexId) -> Result<impl Iterator<Item = VertexId> + '_, Error> {
    let idx = self.position(start)?;
    let (head, tail) = self.nbrs.split_at(idx);
    Ok(tail.iter().chain(head).map(|n| n.id))
  }

  /// Pairs of neighbors that are adjacent in the counterclockwise order.
  pub fn neighbor_pairs(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
    cyclic_pairs(&self.nbrs).map(|(a, b)| (a.id, b.id))
  }

  pub fn anchor(&self) -> Option<VertexId> {
    self.nbrs.first().map(|n| n.id)
  }

  pub fn has_neighbor(&self, v: VertexId) -> bool {
    self.nbrs.iter().any(|n| n.id == v)
  }

  fn position(&self, v: VertexId) -> Result<usize, Error> {
    self
      .nbrs
      .iter()
      .position(|n| n.id == v)
      .ok_or(Error::EdgeNotFound)
  }

  /// Insert `v`, located at `at`, into the counterclockwise neighbor order.
  ///
  /// Returns `false` without changing anything if `v` is already a neighbor.
  pub fn add_neighbor(&mut self, v: VertexId, at: Point, predicate: Predicate) -> bool {
    if self.has_neighbor(v) {
      return false;
    }
    let entry = Neighbor { id: v, point: at };
    // Zero or one neighbors are trivially in order.
    if self.nbrs.len() < 2 {
      self.nbrs.push(entry);
      return true;
    }
    let origin = self.point;
    let anchor = self.nbrs[0].point;
    let slot = self.nbrs[1..]
      .iter()
      .position(|n| predicate.ccw_cmp_around(&origin, &anchor, &at, &n.point) == Ordering::Less)
      .map_or(self.nbrs.len(), |idx| idx + 1);
    self.nbrs.insert(slot, entry);
    true
  }

  /// Remove `v` from the neighbor list. The other endpoint is left untouched.
  ///
  /// # Errors
  ///
  /// Returns [`Error::EdgeNotFound`] if `v` is not a neighbor.
  pub fn remove_neighbor(&mut self, v: VertexId) -> Result<(), Error> {
    let idx = self.position(v)?;
    self.nbrs.remove(idx);
    Ok(())
  }

  /// The neighbor following `v` in counterclockwise order.
  ///
  /// # Errors
  ///
  /// Returns [`Error::EdgeNotFound`] if `v` is not a neighbor.
  pub fn get_next_nbr(&self, v: VertexId) -> Result<VertexId, Error> {
    let idx = self.position(v)?;
    Ok(self.nbrs[(idx + 1) % self.nbrs.len()].id)
  }

  /// The neighbor preceding `v` in counterclockwise order.
  ///
  /// # Errors
  ///
  /// Returns [`Error::EdgeNotFound`] if `v` is not a neighbor.
  pub fn get_prev_nbr(&self, v: VertexId) -> Result<VertexId, Error> {
    let idx = self.position(v)?;
    let len = self.nbrs.len();
    Ok(self.nbrs[(idx + len - 1) % len].id)
  }

  /// $O(n^2)$ Check that the neighbors are distinct, point in distinct directions
  /// and are sorted counterclockwise from the anchor.
  pub fn validate(&self, predicate: Predicate) -> Result<(), Error> {
    for (idx, nbr) in self.nbrs.iter().enumerate() {
      if nbr.point == self.point || self.nbrs[idx + 1..].iter().any(|n| n.id == nbr.id) {
        return Err(Error::NeighborOrderViolation);
      }
    }
    let Some(anchor) = self.nbrs.first() else {
      return Ok(());
    };
    for pair in self.nbrs.windows(2) {
      let order = predicate.ccw_cmp_around(&self.point, &anchor.point, &pair[0].point, &pair[1].point);
      if order != Ordering::Less {
        return Err(Error::NeighborOrderViolation);
      }
    }
    Ok(())
  }
}
