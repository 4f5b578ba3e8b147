//! Hyperbolic distances in the Poincaré disk
//!
//! With e the Euclidean distance of a point to the center, its hyperbolic
//! distance to the center is
//!
//! ```text
//! d = acosh(1 + 2e² / (1 - e²))
//! ```
//!
//! and between two points p, q
//!
//! ```text
//! d(p, q) = acosh(1 + 2|p - q|² / ((1 - |p|²)(1 - |q|²)))
//! ```

use super::Point;
use crate::HyperError;

/// Inverse hyperbolic cosine, defined for x >= 1
pub fn acosh(x: f64) -> Result<f64, HyperError> {
    if x < 1.0 {
        return Err(HyperError::Domain {
            function: "acosh",
            value: x,
        });
    }
    Ok((x + (x * x - 1.0).sqrt()).ln())
}

/// Inverse hyperbolic sine
pub fn asinh(x: f64) -> f64 {
    (x + (x * x + 1.0).sqrt()).ln()
}

/// Inverse hyperbolic tangent, defined for |x| < 1
pub fn atanh(x: f64) -> Result<f64, HyperError> {
    if x.abs() >= 1.0 {
        return Err(HyperError::Domain {
            function: "atanh",
            value: x,
        });
    }
    Ok(0.5 * ((1.0 + x) / (1.0 - x)).ln())
}

/// Hyperbolic distance from `point` to the disk center.
///
/// Returns +∞ for points on or outside the boundary circle.
pub fn hyperbolic_distance_to_center(point: Point) -> f64 {
    let e2 = point.length_squared();
    if e2 >= 1.0 {
        return f64::INFINITY;
    }
    let x = 1.0 + 2.0 * (e2 / (1.0 - e2));
    // x >= 1 whenever e2 is in [0, 1)
    (x + (x * x - 1.0).sqrt()).ln()
}

/// Hyperbolic distance between two points of the disk
pub fn hyperbolic_distance(p: Point, q: Point) -> f64 {
    let numerator = (p - q).length_squared();
    let denominator = (1.0 - p.length_squared()) * (1.0 - q.length_squared());
    if denominator <= 0.0 {
        return f64::INFINITY;
    }
    let x = (1.0 + 2.0 * (numerator / denominator)).max(1.0);
    (x + (x * x - 1.0).sqrt()).ln()
}

/// Euclidean radius at which a point sits at hyperbolic distance `d` from the center
pub fn euclidean_radius_for(d: f64) -> f64 {
    let c = d.cosh();
    ((c - 1.0) / (c + 1.0)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_center_at_origin() {
        assert!(hyperbolic_distance_to_center(Point::ZERO).abs() < 1e-9);
    }

    #[test]
    fn test_distance_to_center_inside_disk() {
        let p = Point::new(0.3, 0.4);
        let expected = acosh(1.0 + 2.0 * (0.25 / 0.75)).unwrap();
        assert!((hyperbolic_distance_to_center(p) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_distance_grows_near_boundary() {
        assert!(hyperbolic_distance_to_center(Point::new(0.99, 0.0)) > 4.5);
        let far = hyperbolic_distance_to_center(Point::new(0.9999999, 0.0));
        assert!(far.is_finite());
        assert!(far > 8.0);
    }

    #[test]
    fn test_distance_outside_disk_is_infinite() {
        assert_eq!(hyperbolic_distance_to_center(Point::new(2.0, 0.0)), f64::INFINITY);
        assert_eq!(hyperbolic_distance_to_center(Point::new(1.0, 0.0)), f64::INFINITY);
    }

    #[test]
    fn test_distance_between_same_points() {
        let p = Point::new(0.1, 0.1);
        assert!(hyperbolic_distance(p, p).abs() < 1e-9);
    }

    #[test]
    fn test_distance_to_center_matches_two_point_form() {
        let p = Point::new(-0.2, 0.55);
        let a = hyperbolic_distance_to_center(p);
        let b = hyperbolic_distance(p, Point::ZERO);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric_points() {
        let p1 = Point::new(0.3, 0.0);
        let p2 = Point::new(-0.3, 0.0);
        let expected = acosh(1.0 + 2.0 * (0.36 / (0.91 * 0.91))).unwrap();
        assert!((hyperbolic_distance(p1, p2) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_euclidean_radius_inverts_distance() {
        for r in [0.0, 0.1, 0.5, 0.9] {
            let d = hyperbolic_distance_to_center(Point::new(r, 0.0));
            assert!((euclidean_radius_for(d) - r).abs() < 1e-9);
        }
    }

    #[test]
    fn test_inverse_functions() {
        assert!(acosh(1.0).unwrap().abs() < 1e-9);
        assert!((acosh(3.0).unwrap() - (3.0 + 8f64.sqrt()).ln()).abs() < 1e-9);
        assert!(asinh(0.0).abs() < 1e-9);
        assert!((asinh(2.0) - (2.0 + 5f64.sqrt()).ln()).abs() < 1e-9);
        assert!((atanh(0.5).unwrap() - 0.5 * 3f64.ln()).abs() < 1e-9);
    }

    #[test]
    fn test_domain_errors() {
        assert!(matches!(
            acosh(0.9),
            Err(HyperError::Domain { function: "acosh", .. })
        ));
        assert!(matches!(
            atanh(1.0),
            Err(HyperError::Domain { function: "atanh", .. })
        ));
    }
}
