//! The viewer's tile and its surroundings
//!
//! The viewer never moves: it sits at the disk center and the world moves
//! around it. `Paving` holds the one tile that currently contains the center
//! and swaps it for a neighbor whenever movement pushes the center across an
//! edge.

use std::collections::{HashSet, VecDeque};

use serde::Serialize;

use super::{Chunk, Direction, WallOracle};
use crate::HyperError;
use crate::consts::MAX_TRANSITIONS_PER_MOVE;
use crate::geometry::{ORIGIN, Rotation, Translation, orientation};

#[derive(Debug, Clone)]
pub struct Paving {
    current: Chunk,
}

/// A tile handed to scene and minimap builders
#[derive(Debug, Clone, Serialize)]
pub struct VisibleTile {
    #[serde(skip)]
    pub chunk: Chunk,
    /// Hops from the viewer's tile
    pub depth: usize,
    /// Wall flags in [`Direction::ALL`] order
    pub walls: [bool; 4],
}

impl VisibleTile {
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[wall_slot(direction)]
    }
}

fn wall_slot(direction: Direction) -> usize {
    match direction {
        Direction::Left => 0,
        Direction::Right => 1,
        Direction::Forward => 2,
        Direction::Backward => 3,
    }
}

impl Default for Paving {
    fn default() -> Self {
        Self::new()
    }
}

impl Paving {
    /// Start in the origin tile
    pub fn new() -> Self {
        Self {
            current: Chunk::origin(),
        }
    }

    pub fn current(&self) -> &Chunk {
        &self.current
    }

    /// Move the viewer `distance` along `angle`, crossing into neighbors as needed.
    ///
    /// On error the current tile is left unchanged.
    pub fn apply_movement(&mut self, angle: f64, distance: f64) -> Result<(), HyperError> {
        let mut chunk = self
            .current
            .translated(&Translation::toward(angle, distance));

        let mut transitions = 0;
        while let Some(direction) = find_exit_edge(&chunk) {
            if transitions >= MAX_TRANSITIONS_PER_MOVE {
                return Err(HyperError::ViewerNotContained {
                    path: chunk.path().to_string(),
                    transitions,
                });
            }
            chunk = chunk.neighbor(direction)?;
            transitions += 1;
            log::debug!("Crossed {} into {}", direction, chunk);
        }

        self.current = chunk;
        Ok(())
    }

    /// Rotate the current tile by `angle` about the disk center
    pub fn apply_rotation(&mut self, angle: f64) {
        self.current = self.current.rotated(&Rotation::new(angle));
    }

    /// Whether the disk center lies inside the current tile
    pub fn contains_viewer(&self) -> bool {
        find_exit_edge(&self.current).is_none()
    }

    /// Tiles within `depth` hops of the current one, current tile first
    pub fn neighborhood(&self, depth: usize) -> Result<Vec<Chunk>, HyperError> {
        Ok(self
            .traverse(depth)?
            .into_iter()
            .map(|(chunk, _)| chunk)
            .collect())
    }

    /// [`Paving::neighborhood`] with wall flags attached
    pub fn visible_tiles(
        &self,
        depth: usize,
        oracle: &WallOracle,
    ) -> Result<Vec<VisibleTile>, HyperError> {
        self.traverse(depth)?
            .into_iter()
            .map(|(chunk, level)| {
                let walls = oracle.walls(&chunk)?;
                Ok(VisibleTile {
                    chunk,
                    depth: level,
                    walls,
                })
            })
            .collect()
    }

    fn traverse(&self, depth: usize) -> Result<Vec<(Chunk, usize)>, HyperError> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        let mut queue = VecDeque::new();

        seen.insert(self.current.clone());
        queue.push_back((self.current.clone(), 0));

        while let Some((chunk, level)) = queue.pop_front() {
            if level < depth {
                for d in Direction::ALL {
                    let next = chunk.neighbor(d)?;
                    if !seen.contains(&next) {
                        seen.insert(next.clone());
                        queue.push_back((next, level + 1));
                    }
                }
            }
            out.push((chunk, level));
        }

        Ok(out)
    }
}

/// First edge that separates the tile centroid from the disk center
pub fn find_exit_edge(chunk: &Chunk) -> Option<Direction> {
    let center = chunk.center();
    Direction::ALL.into_iter().find(|&d| {
        let (a, b) = chunk.edge(d);
        orientation(center, a, b) * orientation(ORIGIN, a, b) < 0.0
    })
}
