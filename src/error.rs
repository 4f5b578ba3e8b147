//! Error types for the geometry kernel, tiling engine, and caster.

use crate::tiling::Direction;

#[derive(Debug, thiserror::Error)]
pub enum HyperError {
    // --- invalid arguments: the caller passed degenerate input ---
    #[error("segment endpoints must be distinct: ({x}, {y})")]
    DegenerateSegment { x: f64, y: f64 },

    #[error("cannot reflect the euclidean center ({x}, {y}) of a geodesic")]
    ReflectionOfCenter { x: f64, y: f64 },

    #[error("{function} is not defined for {value}")]
    Domain { function: &'static str, value: f64 },

    #[error("unknown direction symbol '{0}'")]
    UnknownDirection(char),

    #[error("invalid settings: {0}")]
    Settings(String),

    // --- internal consistency: canonicalization or tolerance defects ---
    #[error("ray does not meet the geodesic of edge {direction:?} it crosses")]
    NoRealRoot { direction: Direction },

    #[error("path canonicalization did not converge after {passes} passes")]
    CanonicalizationDiverged { passes: usize },

    #[error("viewer still outside tile {path} after {transitions} transitions")]
    ViewerNotContained { path: String, transitions: u32 },
}

impl HyperError {
    /// True for errors that indicate a defect in the engine rather than bad input
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            HyperError::NoRealRoot { .. }
                | HyperError::CanonicalizationDiverged { .. }
                | HyperError::ViewerNotContained { .. }
        )
    }
}

impl From<serde_json::Error> for HyperError {
    fn from(e: serde_json::Error) -> Self {
        HyperError::Settings(e.to_string())
    }
}
