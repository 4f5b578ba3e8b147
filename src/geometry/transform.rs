//! Isometries of the Poincaré disk
//!
//! - `Translation`: Möbius map sending a chosen point to the center
//! - `Rotation`: rotation about the center
//! - `Reflexion`: inversion across a geodesic

use serde::{Deserialize, Serialize};

use super::{Complex, Geodesic, Point, approx_eq};
use crate::HyperError;

/// z ↦ (z - a) / (1 - ā·z), which sends `a` to the disk center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub origin: Point,
}

impl Translation {
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }

    /// Translation by `distance` along the direction `angle` from the center
    pub fn toward(angle: f64, distance: f64) -> Self {
        Self::new(Point::from_polar(distance, angle))
    }

    pub fn apply(&self, point: Point) -> Point {
        let a = self.origin;
        (point - a).cdiv(Point::X - a.conj().cmul(point))
    }

    /// The map sending the center back to `origin`
    pub fn inverse(&self) -> Self {
        Self::new(-self.origin)
    }
}

/// Multiplication by e^{iθ}
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub theta: f64,
}

impl Rotation {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }

    pub fn apply(&self, point: Point) -> Point {
        Point::from_polar(1.0, self.theta).cmul(point)
    }
}

/// Hyperbolic reflection across a geodesic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reflexion {
    geodesic: Geodesic,
}

impl Reflexion {
    pub fn new(geodesic: Geodesic) -> Self {
        Self { geodesic }
    }

    pub fn geodesic(&self) -> &Geodesic {
        &self.geodesic
    }

    /// Reflect `point` across the geodesic.
    ///
    /// Fails when `point` is the Euclidean center of a circular geodesic.
    pub fn apply(&self, point: Point) -> Result<Point, HyperError> {
        match self.geodesic {
            Geodesic::Diameter { a, b } => {
                let normal = Point::new(a, b);
                let dot = normal.dot(point);
                Ok(point - normal * (2.0 * dot / normal.length_squared()))
            }
            Geodesic::Circle { a, b } => {
                let c = Point::new(-a / 2.0, -b / 2.0);
                let r2 = (a * a + b * b - 4.0) / 4.0;
                let offset = point - c;
                let om2 = offset.length_squared();

                if om2 == 0.0 || approx_eq(point, c) {
                    return Err(HyperError::ReflectionOfCenter {
                        x: point.x,
                        y: point.y,
                    });
                }

                Ok(c + offset * (r2 / om2))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-9;

    /// Circles centered outside the disk, or diameters at any angle
    fn any_geodesic() -> impl Strategy<Value = Geodesic> {
        prop_oneof![
            (1.05f64..4.0, 0.0..2.0 * PI).prop_map(|(d, t)| {
                let c = Point::from_polar(d, t);
                Geodesic::Circle {
                    a: -2.0 * c.x,
                    b: -2.0 * c.y,
                }
            }),
            (0.0..2.0 * PI).prop_map(|t| Geodesic::Diameter {
                a: t.cos(),
                b: t.sin(),
            }),
        ]
    }

    #[test]
    fn test_translation_by_origin_is_identity() {
        let t = Translation::new(Point::ZERO);
        let p = Point::new(0.5, -0.5);
        assert!((t.apply(p) - p).length() < TOL);
    }

    #[test]
    fn test_translation_sends_origin_point_to_center() {
        let a = Point::new(0.3, 0.4);
        let t = Translation::new(a);
        assert!(t.apply(a).length() < TOL);
        // ...and the center to -a
        assert!((t.apply(Point::ZERO) + a).length() < 1e-6);
    }

    #[test]
    fn test_translation_stays_inside_disk() {
        let t = Translation::new(Point::new(0.2, 0.2));
        assert!(t.apply(Point::new(0.4, 0.1)).length_squared() < 1.0);
    }

    #[test]
    fn test_translation_inverse() {
        let t = Translation::new(Point::new(-0.1, 0.1));
        let a = Point::new(0.2, 0.3);
        let back = t.inverse().apply(t.apply(a));
        assert!(approx_eq(back, a));
    }

    #[test]
    fn test_translation_toward() {
        let t = Translation::toward(PI / 2.0, 0.25);
        assert!((t.origin - Point::new(0.0, 0.25)).length() < TOL);
    }

    #[test]
    fn test_rotation() {
        let p = Point::new(1.0, 0.0);
        let q = Rotation::new(PI / 2.0).apply(p);
        assert!(q.x.abs() < TOL);
        assert!((q.y - 1.0).abs() < TOL);

        let p = Point::new(0.5, 0.5);
        let q = Rotation::new(PI).apply(p);
        assert!((q + p).length() < TOL);

        let p = Point::new(-0.3, 0.4);
        assert!((Rotation::new(2.0 * PI).apply(p) - p).length() < TOL);
        assert!((Rotation::new(0.0).apply(p) - p).length() < TOL);
    }

    #[test]
    fn test_rotation_preserves_radius() {
        let p = Point::new(0.4, 0.3);
        let q = Rotation::new(PI / 3.0).apply(p);
        assert!((p.length_squared() - q.length_squared()).abs() < TOL);
    }

    #[test]
    fn test_diameter_reflexion_mirrors() {
        let g = Geodesic::from_two_points(Point::new(-0.5, 0.0), Point::new(0.5, 0.0));
        let r = Reflexion::new(g);
        let p = r.apply(Point::new(0.3, 0.4)).unwrap();
        assert!((p.x - 0.3).abs() < 1e-6);
        assert!((p.y + 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_circle_reflexion_is_involution() {
        let g = Geodesic::from_two_points(Point::new(0.2, 0.2), Point::new(-0.2, 0.3));
        let r = Reflexion::new(g);
        let p = Point::new(0.3, 0.1);
        let back = r.apply(r.apply(p).unwrap()).unwrap();
        assert!(approx_eq(back, p));
    }

    #[test]
    fn test_reflexion_fixes_points_on_geodesic() {
        let u = Point::new(0.1, 0.5);
        let v = Point::new(-0.5, 0.1);
        let r = Reflexion::new(Geodesic::from_two_points(u, v));
        assert!(approx_eq(r.apply(u).unwrap(), u));
        assert!(approx_eq(r.apply(v).unwrap(), v));
    }

    #[test]
    fn test_reflected_point_stays_in_disk() {
        let g = Geodesic::from_two_points(Point::new(0.1, 0.5), Point::new(-0.5, 0.1));
        let p = Reflexion::new(g).apply(Point::new(0.3, 0.2)).unwrap();
        assert!(p.length_squared() < 1.0);
    }

    #[test]
    fn test_reflecting_the_center_fails() {
        let g = Geodesic::from_two_points(Point::new(0.3, 0.3), Point::new(-0.3, 0.3));
        let center = g.euclidean_center().unwrap();
        let err = Reflexion::new(g).apply(center).unwrap_err();
        assert!(matches!(err, HyperError::ReflectionOfCenter { .. }));
        assert!(!err.is_internal());
    }

    #[test]
    fn test_diameter_reflexion_is_involution() {
        let r = Reflexion::new(Geodesic::Diameter { a: 0.6, b: -0.8 });
        let p = Point::new(-0.2, 0.45);
        let back = r.apply(r.apply(p).unwrap()).unwrap();
        assert!(approx_eq(back, p));
    }

    proptest! {
        #[test]
        fn prop_reflexion_is_involution(
            g in any_geodesic(),
            radius in 0.0f64..0.95,
            angle in 0.0..2.0 * PI,
        ) {
            let r = Reflexion::new(g);
            let p = Point::from_polar(radius, angle);
            let once = r.apply(p).unwrap();
            prop_assert!(once.length_squared() < 1.0 + 1e-9);
            let back = r.apply(once).unwrap();
            prop_assert!((back - p).length() < 1e-6);
        }
    }
}
