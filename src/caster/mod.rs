//! Per-column ray casting with shadow sampling
//!
//! - `ray`: ray propagation through the tile graph
//! - `shadow`: shadow rays toward the light
//! - `vertical`: one screen column (primary ray + ground samples)
//! - `column`: projection of a column hit to screen space

pub mod column;
pub mod ray;
pub mod shadow;
pub mod vertical;

pub use column::ColumnSpan;
pub use ray::{Ray, RayOutcome};
pub use shadow::ShadowRay;
pub use vertical::{ColumnHit, ColumnRay};

use crate::HyperError;
use crate::geometry::Point;
use crate::settings::RenderSettings;
use crate::tiling::{Paving, WallOracle};

/// One render pass worth of column hits, left to right
#[derive(Debug, Clone, Default)]
pub struct CasterResult {
    pub columns: Vec<ColumnHit>,
}

impl CasterResult {
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn intersection_points(&self) -> impl Iterator<Item = Option<Point>> + '_ {
        self.columns.iter().map(|c| c.intersection)
    }

    /// Projected wall spans; columns without a hit are empty
    pub fn spans(&self, render_height: f64, fog_density: f64) -> Vec<ColumnSpan> {
        self.columns
            .iter()
            .map(|c| match c.intersection {
                Some(p) => ColumnSpan::from_intersection(p, render_height, fog_density),
                None => ColumnSpan::empty(),
            })
            .collect()
    }
}

/// Casts every screen column from the viewer's tile
pub struct Caster {
    settings: RenderSettings,
    oracle: WallOracle,
}

impl Caster {
    pub fn new(settings: RenderSettings, oracle: WallOracle) -> Self {
        Self { settings, oracle }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn oracle(&self) -> &WallOracle {
        &self.oracle
    }

    /// Run every column against the paving's current tile
    pub fn cast(&self, paving: &Paving) -> Result<CasterResult, HyperError> {
        let tile = paving.current();
        let columns = (0..self.settings.width)
            .map(|i| {
                ColumnRay::new(self.settings.column_angle(i), &self.settings)
                    .cast(tile, &self.oracle)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let hits = columns.iter().filter(|c| c.intersection.is_some()).count();
        log::debug!(
            "Cast {} columns from {}: {} hits",
            columns.len(),
            tile,
            hits
        );

        Ok(CasterResult { columns })
    }

    /// Cast and project in one go
    pub fn render(&self, paving: &Paving) -> Result<Vec<ColumnSpan>, HyperError> {
        Ok(self
            .cast(paving)?
            .spans(self.settings.height as f64, self.settings.fog_density))
    }
}
