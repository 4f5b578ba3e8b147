//! Euclidean and hyperbolic segments

use super::{Geodesic, Point, approx_eq, hyperbolic_distance};
use crate::HyperError;

/// Signed area test: positive when `q` lies to the left of the line a → b
#[inline]
pub fn orientation(q: Point, a: Point, b: Point) -> f64 {
    (b.x - a.x) * (q.y - a.y) - (b.y - a.y) * (q.x - a.x)
}

/// Strict counter-clockwise test for the triangle (a, b, c)
#[inline]
fn ccw(a: Point, b: Point, c: Point) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// Straight segment between two distinct points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Result<Self, HyperError> {
        if approx_eq(a, b) {
            return Err(HyperError::DegenerateSegment { x: a.x, y: a.y });
        }
        Ok(Self { a, b })
    }

    /// Proper crossing test. Touching or colinear segments do not intersect.
    pub fn intersects(&self, other: &Segment) -> bool {
        let (a, b, c, d) = (self.a, self.b, other.a, other.b);
        ccw(a, c, d) != ccw(b, c, d) && ccw(a, b, c) != ccw(a, b, d)
    }

    pub fn length(&self) -> f64 {
        (self.b - self.a).length()
    }
}

/// Arc of a geodesic between two distinct points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HyperbolicSegment {
    pub a: Point,
    pub b: Point,
    geodesic: Geodesic,
}

impl HyperbolicSegment {
    pub fn new(a: Point, b: Point) -> Result<Self, HyperError> {
        if approx_eq(a, b) {
            return Err(HyperError::DegenerateSegment { x: a.x, y: a.y });
        }
        Ok(Self {
            a,
            b,
            geodesic: Geodesic::from_two_points(a, b),
        })
    }

    pub fn geodesic(&self) -> &Geodesic {
        &self.geodesic
    }

    pub fn length(&self) -> f64 {
        hyperbolic_distance(self.a, self.b)
    }

    /// Whether `point` lies on the arc between the endpoints
    pub fn contains(&self, point: Point) -> bool {
        if !self.geodesic.contains(point) {
            return false;
        }
        let via = hyperbolic_distance(self.a, point) + hyperbolic_distance(point, self.b);
        (via - self.length()).abs() < 1e-6
    }
}
