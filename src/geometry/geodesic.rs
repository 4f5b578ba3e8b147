//! Geodesics of the Poincaré disk
//!
//! A geodesic is either a circle orthogonal to the unit circle,
//!
//! ```text
//! x² + y² + a·x + b·y + 1 = 0    (center (-a/2, -b/2), radius √(a² + b² - 4) / 2)
//! ```
//!
//! or a diameter `a·x + b·y = 0`, which has no Euclidean center.

use serde::{Deserialize, Serialize};

use super::{Point, polar_to_unit};
use crate::consts::EPSILON;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Geodesic {
    /// Circle orthogonal to the boundary
    Circle { a: f64, b: f64 },
    /// Straight line through the disk center
    Diameter { a: f64, b: f64 },
}

impl Geodesic {
    /// The unique geodesic through two distinct points.
    ///
    /// Points (nearly) colinear with the center give a diameter.
    pub fn from_two_points(u: Point, v: Point) -> Self {
        let det = u.x * v.y - u.y * v.x;

        if det.abs() < EPSILON {
            return Geodesic::Diameter {
                a: u.y - v.y,
                b: v.x - u.x,
            };
        }

        // Both points satisfy x² + y² + a·x + b·y + 1 = 0
        let lhs_u = -1.0 - u.length_squared();
        let lhs_v = -1.0 - v.length_squared();

        Geodesic::Circle {
            a: (lhs_u * v.y - lhs_v * u.y) / det,
            b: (lhs_v * u.x - lhs_u * v.x) / det,
        }
    }

    #[inline]
    pub fn is_diameter(&self) -> bool {
        matches!(self, Geodesic::Diameter { .. })
    }

    /// Whether `point` lies on the geodesic (within [`EPSILON`])
    pub fn contains(&self, point: Point) -> bool {
        match *self {
            Geodesic::Diameter { a, b } => (a * point.x + b * point.y).abs() < EPSILON,
            Geodesic::Circle { a, b } => {
                (point.length_squared() + a * point.x + b * point.y + 1.0).abs() < EPSILON
            }
        }
    }

    /// Euclidean center of the supporting circle (`None` for diameters)
    pub fn euclidean_center(&self) -> Option<Point> {
        match *self {
            Geodesic::Circle { a, b } => Some(Point::new(-a / 2.0, -b / 2.0)),
            Geodesic::Diameter { .. } => None,
        }
    }

    /// Euclidean radius of the supporting circle (`None` for diameters)
    pub fn euclidean_radius(&self) -> Option<f64> {
        match *self {
            Geodesic::Circle { a, b } => Some((a * a + b * b - 4.0).sqrt() / 2.0),
            Geodesic::Diameter { .. } => None,
        }
    }

    /// The two ideal points (on the unit circle) where the geodesic ends
    pub fn ideal_points(&self) -> [Point; 2] {
        match *self {
            Geodesic::Diameter { a, b } => {
                let dir = Point::new(b, -a).normalize_or_zero();
                [dir, -dir]
            }
            Geodesic::Circle { a, b } => {
                // An ideal point p satisfies p·c = 1, so it sits at ±acos(1/|c|) from c's angle
                let c = Point::new(-a / 2.0, -b / 2.0);
                let heading = c.y.atan2(c.x);
                let spread = (1.0 / c.length()).clamp(-1.0, 1.0).acos();
                [polar_to_unit(heading - spread), polar_to_unit(heading + spread)]
            }
        }
    }
}
