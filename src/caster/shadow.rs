//! Shadow rays toward the light
//!
//! From a ground sample, a ray is cast toward the light's horizontal angle.
//! If it meets a wall close enough that the wall top blocks the light at the
//! light's elevation, the sample is in shadow. A thin band around the wall
//! top gives a soft edge.

use super::ray::{Ray, RayOutcome};
use crate::HyperError;
use crate::consts::{SHADOW_DISTANCE_SLACK, SMOOTH_SHADOW_RANGE};
use crate::geometry::hyperbolic_distance_to_center;
use crate::settings::Light;
use crate::tiling::{Chunk, WallOracle};

#[derive(Debug, Clone, Copy)]
pub struct ShadowRay {
    ray: Ray,
    light: Light,
    wall_height: f64,
}

impl ShadowRay {
    pub fn new(light: Light, wall_height: f64) -> Self {
        Self {
            ray: Ray::new(light.horizontal),
            light,
            wall_height,
        }
    }

    /// Farthest wall that can still cast a shadow on the sample
    pub fn max_distance(&self) -> f64 {
        (self.wall_height + SMOOTH_SHADOW_RANGE) / self.light.vertical.tan() + SHADOW_DISTANCE_SLACK
    }

    /// Shadow intensity in [0, 1] for a sample at the center of `tile`'s frame
    pub fn intensity(
        &self,
        tile: &Chunk,
        oracle: &WallOracle,
        step_budget: u32,
    ) -> Result<f64, HyperError> {
        let outcome = self
            .ray
            .propagate(tile, oracle, step_budget, self.max_distance())?;
        Ok(self.classify(outcome))
    }

    /// Map a ray outcome to a shadow intensity (0 = lit, 1 = full shadow)
    pub fn classify(&self, outcome: RayOutcome) -> f64 {
        let distance = match outcome {
            RayOutcome::Beyond | RayOutcome::Exhausted => return 0.0,
            RayOutcome::Wall(p) => hyperbolic_distance_to_center(p),
            // Treated as a wall at the sample itself
            RayOutcome::Stray => 0.0,
        };

        let height = self.light.vertical.tan() * distance;
        let low = self.wall_height - SMOOTH_SHADOW_RANGE;
        let high = self.wall_height + SMOOTH_SHADOW_RANGE;

        if height > high {
            0.0
        } else if height < low {
            1.0
        } else {
            1.0 - (height - low) / (2.0 * SMOOTH_SHADOW_RANGE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Translation, euclidean_radius_for};
    use std::f64::consts::PI;

    fn shadow() -> ShadowRay {
        ShadowRay::new(
            Light {
                horizontal: 0.0,
                vertical: PI / 4.0,
            },
            0.3,
        )
    }

    fn wall_at(distance: f64) -> RayOutcome {
        RayOutcome::Wall(Point::new(euclidean_radius_for(distance), 0.0))
    }

    #[test]
    fn test_max_distance() {
        // tan(π/4) = 1
        assert!((shadow().max_distance() - 0.32).abs() < 1e-9);
    }

    #[test]
    fn test_no_hit_is_lit() {
        let s = shadow();
        assert_eq!(s.classify(RayOutcome::Beyond), 0.0);
        assert_eq!(s.classify(RayOutcome::Exhausted), 0.0);
    }

    #[test]
    fn test_stray_is_full_shadow() {
        assert_eq!(shadow().classify(RayOutcome::Stray), 1.0);
    }

    #[test]
    fn test_classification_bands() {
        let s = shadow();
        assert_eq!(s.classify(wall_at(0.1)), 1.0);
        assert_eq!(s.classify(wall_at(0.5)), 0.0);
        // Exactly at the wall top: half shadow
        assert!((s.classify(wall_at(0.3)) - 0.5).abs() < 1e-6);
        let soft = s.classify(wall_at(0.305));
        assert!(soft > 0.0 && soft < 0.5);
    }

    #[test]
    fn test_intensity_near_and_far_from_wall() {
        // Light from the left; the origin tile's left edge is a wall for this seed
        let s = ShadowRay::new(
            Light {
                horizontal: PI,
                vertical: PI / 4.0,
            },
            0.3,
        );
        let oracle = WallOracle::new(678567);

        // From the tile center the wall is ~0.53 away, too far to shade
        let far = s.intensity(&Chunk::origin(), &oracle, 3).unwrap();
        assert_eq!(far, 0.0);

        // A sample right next to the wall
        let near_tile = Chunk::origin().translated(&Translation::new(Point::new(-0.2, 0.0)));
        let near = s.intensity(&near_tile, &oracle, 3).unwrap();
        assert_eq!(near, 1.0);
    }
}
