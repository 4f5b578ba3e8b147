//! Deterministic world simulation
//!
//! - Seeded wall layout only
//! - One movement/rotation update per frame, then a read-only render
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{WorldEvent, WorldState};
pub use tick::{TickInput, tick};
