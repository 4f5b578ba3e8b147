//! World state
//!
//! Everything a frame needs: the viewer's tile, the wall layout and the
//! render settings. Deterministic for a given seed.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::HyperError;
use crate::caster::{Caster, CasterResult, ColumnSpan};
use crate::settings::RenderSettings;
use crate::tiling::{Paving, VisibleTile, WallOracle};

/// Something that happened during the last tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorldEvent {
    /// The viewer crossed into another tile
    TileEntered { path: String },
}

/// Complete world state
#[derive(Debug, Clone)]
pub struct WorldState {
    /// World seed for reproducibility
    pub seed: u64,
    /// Seed of the wall layout
    pub wall_seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Accumulated turning, in [-π, π)
    pub heading: f64,
    pub paving: Paving,
    pub settings: RenderSettings,
    /// Events from the most recent tick
    pub events: Vec<WorldEvent>,
    oracle: WallOracle,
}

impl WorldState {
    /// Create a world whose wall seed is derived from `seed`
    pub fn new(seed: u64) -> Self {
        let wall_seed = Pcg32::seed_from_u64(seed).next_u64();
        Self::with_wall_seed(seed, wall_seed)
    }

    /// Create a world with an explicit wall seed
    pub fn with_wall_seed(seed: u64, wall_seed: u64) -> Self {
        log::info!("New world: seed {}, wall seed {}", seed, wall_seed);
        Self {
            seed,
            wall_seed,
            time_ticks: 0,
            heading: 0.0,
            paving: Paving::new(),
            settings: RenderSettings::default(),
            events: Vec::new(),
            oracle: WallOracle::new(wall_seed),
        }
    }

    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn oracle(&self) -> &WallOracle {
        &self.oracle
    }

    pub fn caster(&self) -> Caster {
        Caster::new(self.settings.clone(), self.oracle)
    }

    /// One render pass from the current viewer position
    pub fn cast(&self) -> Result<CasterResult, HyperError> {
        self.caster().cast(&self.paving)
    }

    pub fn render(&self) -> Result<Vec<ColumnSpan>, HyperError> {
        self.caster().render(&self.paving)
    }

    /// Surroundings for the minimap, at the preset's depth
    pub fn visible_tiles(&self) -> Result<Vec<VisibleTile>, HyperError> {
        self.paving
            .visible_tiles(self.settings.quality.visible_depth(), &self.oracle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_seed_is_derived_deterministically() {
        let a = WorldState::new(12345);
        let b = WorldState::new(12345);
        let c = WorldState::new(54321);
        assert_eq!(a.wall_seed, b.wall_seed);
        assert_ne!(a.wall_seed, c.wall_seed);
        assert_eq!(a.oracle().seed(), a.wall_seed);
    }

    #[test]
    fn test_wall_seed_is_first_pcg_draw() {
        let world = WorldState::new(12345);
        assert_eq!(world.wall_seed, Pcg32::seed_from_u64(12345).next_u64());
        assert_eq!(world.seed, 12345);
    }

    #[test]
    fn test_explicit_wall_seed() {
        let world = WorldState::with_wall_seed(1, 678567);
        assert_eq!(world.oracle().seed(), 678567);
        let tiles = world.visible_tiles().unwrap();
        assert_eq!(tiles.len(), 45);
        assert_eq!(tiles[0].walls, [true, false, false, false]);
    }

    #[test]
    fn test_render_uses_settings() {
        let settings = RenderSettings {
            width: 12,
            height: 6,
            ..RenderSettings::default()
        };
        let world = WorldState::new(3).with_settings(settings);
        assert_eq!(world.render().unwrap().len(), 12);
        assert_eq!(world.cast().unwrap().width(), 12);
    }
}
