//! Poincaré disk geometry kernel
//!
//! Points are `glam::DVec2` values inside the open unit disk. Everything in
//! this module is pure: transforms map points to new points and never touch
//! shared state.

pub mod complex;
pub mod distance;
pub mod geodesic;
pub mod projection;
pub mod segment;
pub mod transform;

use glam::DVec2;

use crate::consts::EPSILON;

pub use complex::Complex;
pub use distance::{
    acosh, asinh, atanh, euclidean_radius_for, hyperbolic_distance, hyperbolic_distance_to_center,
};
pub use geodesic::Geodesic;
pub use projection::Projection;
pub use segment::{HyperbolicSegment, Segment, orientation};
pub use transform::{Reflexion, Rotation, Translation};

/// A point of the disk (isomorphic to a complex number)
pub type Point = DVec2;

/// The disk center, where the viewer always stands
pub const ORIGIN: Point = DVec2::ZERO;

/// Ideal point (on the boundary circle) at angle `theta`
#[inline]
pub fn polar_to_unit(theta: f64) -> Point {
    crate::polar_to_cartesian(1.0, theta)
}

/// Coordinate-wise equality within [`EPSILON`]
#[inline]
pub fn approx_eq(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}
