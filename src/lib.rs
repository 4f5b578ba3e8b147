//! Hyper Caster - first-person walks through a hyperbolic tiling
//!
//! Core modules:
//! - `geometry`: Poincaré disk kernel (distances, geodesics, Möbius maps)
//! - `tiling`: {4,5} tiling engine (directions, canonical paths, chunks, paving, walls)
//! - `caster`: Per-column ray casting with shadow sampling
//! - `settings`: Render configuration and quality presets
//! - `sim`: World state and the per-frame update

pub mod caster;
pub mod error;
pub mod geometry;
pub mod settings;
pub mod sim;
pub mod tiling;

pub use error::HyperError;
pub use settings::{Light, QualityPreset, RenderSettings};

use glam::DVec2;

/// Engine configuration constants
pub mod consts {
    /// Coincidence tolerance for point and geodesic equality checks
    pub const EPSILON: f64 = 1e-6;

    /// Default horizontal field of view (radians)
    pub const DEFAULT_FOV: f64 = 1.5;

    /// Hops a primary column ray may take before falling back to its ideal endpoint
    pub const PRIMARY_RAY_STEPS: u32 = 6;
    /// Hyperbolic distance cap for primary rays
    pub const PRIMARY_RAY_MAX_DISTANCE: f64 = 200.0;

    /// Hops a shadow ray may take
    pub const SHADOW_RAY_STEPS: u32 = 3;
    /// Half width of the penumbra band around the wall top
    pub const SMOOTH_SHADOW_RANGE: f64 = 0.01;
    /// Slack added to the shadow ray distance cap
    pub const SHADOW_DISTANCE_SLACK: f64 = 0.01;

    /// Column projection scale at a 500 px tall render area
    pub const PROJECTION_SCALE_FACTOR: f64 = 300.0;
    /// Render height the projection scale is calibrated for
    pub const PROJECTION_REFERENCE_HEIGHT: f64 = 500.0;

    /// Default step length of a single movement command
    pub const MOVE_STEP: f64 = 0.01;
    /// Tile transitions allowed in one movement update before giving up
    pub const MAX_TRANSITIONS_PER_MOVE: u32 = 16;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f64) -> f64 {
    use std::f64::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
