//! Screen-space projection of a column hit

use serde::Serialize;

use crate::consts::{EPSILON, PROJECTION_REFERENCE_HEIGHT, PROJECTION_SCALE_FACTOR};
use crate::geometry::{Point, hyperbolic_distance_to_center};

/// Apparent wall slice for one screen column
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnSpan {
    /// Hyperbolic distance to the wall
    pub depth: f64,
    /// Half the wall's on-screen height, in pixels
    pub half_height: f64,
    /// Fog attenuation in [0, 1]
    pub brightness: f64,
}

impl ColumnSpan {
    pub fn empty() -> Self {
        Self {
            depth: 0.0,
            half_height: 0.0,
            brightness: 0.0,
        }
    }

    /// Project the wall hit at `point` into a column of a `render_height` tall viewport
    pub fn from_intersection(point: Point, render_height: f64, fog_density: f64) -> Self {
        let depth = hyperbolic_distance_to_center(point);
        if depth < EPSILON || !depth.is_finite() {
            return Self::empty();
        }

        let scale = PROJECTION_SCALE_FACTOR * (render_height / PROJECTION_REFERENCE_HEIGHT);
        Self {
            depth,
            half_height: scale / depth.cosh(),
            brightness: (-depth * fog_density).exp().clamp(0.0, 1.0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.half_height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_hit_is_empty() {
        assert!(ColumnSpan::from_intersection(Point::ZERO, 500.0, 0.9).is_empty());
    }

    #[test]
    fn test_boundary_hit_is_empty() {
        assert!(ColumnSpan::from_intersection(Point::new(1.0, 0.0), 500.0, 0.9).is_empty());
    }

    #[test]
    fn test_projection() {
        let p = Point::new(0.5, 0.0);
        let span = ColumnSpan::from_intersection(p, 500.0, 0.9);
        let depth = hyperbolic_distance_to_center(p);
        assert!((span.depth - depth).abs() < 1e-12);
        assert!((span.half_height - 300.0 / depth.cosh()).abs() < 1e-9);
        assert!((span.brightness - (-depth * 0.9).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_nearer_walls_are_taller_and_brighter() {
        let near = ColumnSpan::from_intersection(Point::new(0.2, 0.0), 250.0, 0.9);
        let far = ColumnSpan::from_intersection(Point::new(0.0, 0.8), 250.0, 0.9);
        assert!(near.half_height > far.half_height);
        assert!(near.brightness > far.brightness);
        assert!(near.half_height <= 150.0);
    }
}
