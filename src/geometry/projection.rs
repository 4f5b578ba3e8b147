//! Alternative models of the hyperbolic plane
//!
//! The engine works in the Poincaré disk. These maps re-express a disk point
//! in another model, mostly for minimap display.

use serde::{Deserialize, Serialize};

use super::{Point, hyperbolic_distance_to_center};

/// Target model for displaying disk points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Projection {
    #[default]
    Poincare,
    /// Beltrami-Klein disk (geodesics are straight chords)
    Klein,
    /// Radial distance equals hyperbolic distance (unbounded)
    Gnomonic,
}

impl Projection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Projection::Poincare => "Poincare",
            Projection::Klein => "Klein",
            Projection::Gnomonic => "Gnomonic",
        }
    }

    /// Parse a model name, case-insensitive. Unknown names fall back to Poincaré.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "poincare" | "poincaré" => Projection::Poincare,
            "klein" => Projection::Klein,
            "gnomonic" => Projection::Gnomonic,
            other => {
                log::warn!("Unknown projection '{}', using Poincare", other);
                Projection::Poincare
            }
        }
    }

    pub fn apply(&self, point: Point) -> Point {
        match self {
            Projection::Poincare => point,
            Projection::Klein => point * (2.0 / (1.0 + point.length_squared())),
            Projection::Gnomonic => {
                let length = point.length();
                if length == 0.0 {
                    return point;
                }
                point * (hyperbolic_distance_to_center(point) / length)
            }
        }
    }
}
