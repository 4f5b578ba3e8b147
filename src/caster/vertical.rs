//! One screen column: the primary ray plus its ground shadow samples
//!
//! Ground rows below the horizon are sampled in screen order, from the
//! bottom of the viewport (closest ground) toward the horizon. Row i looks
//! down at elevation `lerp(min_angle, π/2, i / rows)` and therefore hits the
//! ground at distance `camera_height · tan(angle)`. Samples are taken while
//! the primary ray walks through tiles, each in the tile that contains it.

use super::ray::{Ray, RayOutcome};
use super::shadow::ShadowRay;
use crate::HyperError;
use crate::geometry::{Point, Translation, euclidean_radius_for};
use crate::lerp;
use crate::settings::RenderSettings;
use crate::tiling::{Chunk, WallOracle};

/// Result of casting one column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnHit {
    /// Wall intersection, `None` past the distance cap
    pub intersection: Option<Point>,
    /// Shadow intensity per sampled ground row, nearest first
    pub shadows: Vec<f64>,
}

pub struct ColumnRay<'a> {
    ray: Ray,
    settings: &'a RenderSettings,
    shadow: ShadowRay,
    min_angle: f64,
    rows: u32,
}

impl<'a> ColumnRay<'a> {
    pub fn new(angle: f64, settings: &'a RenderSettings) -> Self {
        Self {
            ray: Ray::new(angle),
            settings,
            shadow: ShadowRay::new(settings.light, settings.wall_height),
            min_angle: settings.min_vertical_angle(),
            rows: settings.shadow_rows(),
        }
    }

    /// Ground distance seen by row `i`
    fn row_distance(&self, i: u32) -> f64 {
        let angle = lerp(
            self.min_angle,
            std::f64::consts::FRAC_PI_2,
            i as f64 / self.rows as f64,
        );
        self.settings.camera_height * angle.tan()
    }

    pub fn cast(&self, tile: &Chunk, oracle: &WallOracle) -> Result<ColumnHit, HyperError> {
        let mut shadows = Vec::with_capacity(self.rows as usize);
        let mut next_row = 0;
        let shadow_steps = self.settings.quality.shadow_steps();

        let outcome = self.ray.propagate_with(
            tile,
            oracle,
            self.settings.quality.primary_steps(),
            self.settings.max_distance,
            |current, exit_distance| {
                while next_row < self.rows {
                    let distance = self.row_distance(next_row);
                    if distance > exit_distance {
                        break;
                    }
                    next_row += 1;

                    let sample = self.ray.end * euclidean_radius_for(distance);
                    let local = current.translated(&Translation::new(sample));
                    shadows.push(self.shadow.intensity(&local, oracle, shadow_steps)?);
                }
                Ok(())
            },
        )?;

        let intersection = match outcome {
            RayOutcome::Wall(p) => Some(p),
            RayOutcome::Exhausted => Some(self.ray.end),
            RayOutcome::Stray => Some(Point::ZERO),
            RayOutcome::Beyond => None,
        };

        Ok(ColumnHit {
            intersection,
            shadows,
        })
    }
}
