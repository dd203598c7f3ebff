use ordered_float::NotNan;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::convert::TryFrom;

use crate::{Error, Orientation};

/// A finite position in the plane.
///
/// Coordinates are never NaN or infinite, which makes points totally ordered and
/// hashable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
  pub array: [NotNan<f64>; 2],
}

// Random sampling in the unit square.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point::new_nn([rng.gen(), rng.gen()])
  }
}

impl Point {
  /// # Errors
  ///
  /// Returns [`Error::InvalidCoordinate`] if either coordinate is NaN or infinite.
  pub fn new(x: f64, y: f64) -> Result<Point, Error> {
    if !x.is_finite() || !y.is_finite() {
      return Err(Error::InvalidCoordinate);
    }
    let x = NotNan::new(x).map_err(|_| Error::InvalidCoordinate)?;
    let y = NotNan::new(y).map_err(|_| Error::InvalidCoordinate)?;
    Ok(Point { array: [x, y] })
  }

  /// # Panics
  ///
  /// Panics if any of the inputs are NaN or infinite.
  pub fn new_nn(array: [f64; 2]) -> Point {
    match Point::new(array[0], array[1]) {
      Ok(pt) => pt,
      Err(_) => panic!("point coordinates must be finite: {:?}", array),
    }
  }

  pub fn x(&self) -> f64 {
    self.array[0].into_inner()
  }

  pub fn y(&self) -> f64 {
    self.array[1].into_inner()
  }

  pub fn to_array(&self) -> [f64; 2] {
    [self.x(), self.y()]
  }

  pub fn orientation(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(self, q, r)
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point) -> f64 {
    let dx = self.x() - rhs.x();
    let dy = self.y() - rhs.y();
    dx * dx + dy * dy
  }

  pub fn euclidean_distance(&self, rhs: &Point) -> f64 {
    (self.x() - rhs.x()).hypot(self.y() - rhs.y())
  }

  /// Distance from `self` to the segment `a..b`, or `None` if the foot of the
  /// perpendicular falls outside the segment.
  pub fn distance_to_segment(&self, a: &Point, b: &Point) -> Option<f64> {
    let (nx, ny) = (b.x() - a.x(), b.y() - a.y());
    let length = nx.hypot(ny);
    if length == 0.0 {
      return None;
    }
    let (nx, ny) = (nx / length, ny / length);
    let (vx, vy) = (self.x() - a.x(), self.y() - a.y());
    let parallel = vx * nx + vy * ny;
    if parallel < 0.0 || parallel > length {
      return None;
    }
    Some((vx - nx * parallel).hypot(vy - ny * parallel))
  }
}

impl TryFrom<(f64, f64)> for Point {
  type Error = Error;
  fn try_from(point: (f64, f64)) -> Result<Point, Error> {
    Point::new(point.0, point.1)
  }
}

impl TryFrom<[f64; 2]> for Point {
  type Error = Error;
  fn try_from(array: [f64; 2]) -> Result<Point, Error> {
    Point::new(array[0], array[1])
  }
}

impl From<Point> for [f64; 2] {
  fn from(point: Point) -> [f64; 2] {
    point.to_array()
  }
}
