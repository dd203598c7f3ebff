use std::cmp::Ordering;

use crate::data::Point;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

/// How the sign of the orientation determinant is evaluated.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default, Hash)]
pub enum Predicate {
  /// Adaptive exact arithmetic. Never misreports the sign, whatever the input.
  #[default]
  Robust,
  /// Plain `f64` determinant. Faster, but nearly colinear triples may get the
  /// wrong sign.
  Fast,
}

impl Predicate {
  /// Determine the direction you have to turn if you walk from `p` to `q` to `r`.
  pub fn orient(self, p: &Point, q: &Point, r: &Point) -> Orientation {
    let det = match self {
      Predicate::Robust => {
        geometry_predicates::predicates::orient2d(p.to_array(), q.to_array(), r.to_array())
      }
      Predicate::Fast => {
        (q.x() - p.x()) * (r.y() - p.y()) - (q.y() - p.y()) * (r.x() - p.x())
      }
    };
    if det > 0.0 {
      CounterClockWise
    } else if det < 0.0 {
      ClockWise
    } else {
      CoLinear
    }
  }

  /// Compare `p` and `q` by the counterclockwise angle they make around `origin`,
  /// measured from the ray `origin -> reference`. Angles lie in `[0, 2π)`.
  ///
  /// Points on the reference ray have angle zero and compare smallest. Points that
  /// share a direction compare equal regardless of their distance to `origin`.
  pub fn ccw_cmp_around(self, origin: &Point, reference: &Point, p: &Point, q: &Point) -> Ordering {
    let ap = self.orient(origin, reference, p);
    let aq = self.orient(origin, reference, q);
    // Colinear points are either in front of origin->reference (0 degrees) or
    // behind it (180 degrees).
    let on_zero = |d: &Point| {
      let (rx, ry) = (reference.x() - origin.x(), reference.y() - origin.y());
      let (dx, dy) = (d.x() - origin.x(), d.y() - origin.y());
      rx * dx + ry * dy > 0.0
    };
    let cmp = || match self.orient(origin, p, q) {
      CounterClockWise => Ordering::Less,
      ClockWise => Ordering::Greater,
      CoLinear => Ordering::Equal,
    };
    match (ap, aq) {
      // Easy cases: P and Q are on either side of the reference line.
      (CounterClockWise, ClockWise) => Ordering::Less,
      (ClockWise, CounterClockWise) => Ordering::Greater,
      // A colinear point has an angle of 0 or 180 degrees. A clockwise point has
      // an angle above 180 degrees.
      (CoLinear, ClockWise) => Ordering::Less,
      (ClockWise, CoLinear) => Ordering::Greater,

      // Same side: the turn from P to Q decides.
      (CounterClockWise, CounterClockWise) => cmp(),
      (ClockWise, ClockWise) => cmp(),

      (CounterClockWise, CoLinear) => {
        if on_zero(q) {
          Ordering::Greater
        } else {
          Ordering::Less
        }
      }
      (CoLinear, CounterClockWise) => {
        if on_zero(p) {
          Ordering::Less
        } else {
          Ordering::Greater
        }
      }
      (CoLinear, CoLinear) => match (on_zero(p), on_zero(q)) {
        (true, true) | (false, false) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
      },
    }
  }
}

impl Orientation {
  /// Orientation of the triple `(p, q, r)` using the robust predicate.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use incremental_hull::data::Point;
  /// # use incremental_hull::Orientation;
  /// let p1 = Point::new_nn([0.0, 0.0]);
  /// let p2 = Point::new_nn([0.0, 1.0]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new_nn([0.0, 2.0])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new_nn([-1.0, 2.0])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new_nn([1.0, 2.0])).is_cw());
  /// ```
  pub fn new(p: &Point, q: &Point, r: &Point) -> Orientation {
    Predicate::Robust.orient(p, q, r)
  }

  /// `+1` for counterclockwise, `-1` for clockwise, `0` for colinear.
  pub fn sign(self) -> i8 {
    match self {
      CounterClockWise => 1,
      ClockWise => -1,
      CoLinear => 0,
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, ClockWise)
  }

  #[must_use]
  pub fn then(self, other: Orientation) -> Orientation {
    match self {
      CoLinear => other,
      _ => self,
    }
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      CounterClockWise => ClockWise,
      ClockWise => CounterClockWise,
      CoLinear => CoLinear,
    }
  }
}

/// Sign of the homogeneous determinant of `p`, `q` and `r`: `+1` if `r` is left
/// of the directed line `p -> q`, `-1` if right, `0` if colinear.
///
/// ```rust
/// # use incremental_hull::data::Point;
/// # use incremental_hull::orient;
/// let o = Point::new_nn([0.0, 0.0]);
/// let x = Point::new_nn([1.0, 0.0]);
/// assert_eq!(orient(&o, &x, &Point::new_nn([0.0, 1.0])), 1);
/// assert_eq!(orient(&o, &x, &Point::new_nn([0.0, -1.0])), -1);
/// assert_eq!(orient(&o, &x, &Point::new_nn([2.0, 0.0])), 0);
/// ```
pub fn orient(p: &Point, q: &Point, r: &Point) -> i8 {
  Orientation::new(p, q, r).sign()
}
