//! Per-frame update
//!
//! One tick applies the frame's rotation, then its movement, before the
//! frame is rendered.

use std::f64::consts::FRAC_PI_2;

use super::state::{WorldEvent, WorldState};
use crate::HyperError;
use crate::consts::MOVE_STEP;
use crate::normalize_angle;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Movement heading relative to the view (π/2 is straight ahead)
    pub move_angle: Option<f64>,
    /// Distance to move when `move_angle` is set
    pub move_distance: f64,
    /// Turn angle (radians, counter-clockwise)
    pub rotation: f64,
}

impl TickInput {
    pub fn forward() -> Self {
        Self::walk(FRAC_PI_2)
    }

    pub fn backward() -> Self {
        Self::walk(-FRAC_PI_2)
    }

    /// One default-length step toward `angle`
    pub fn walk(angle: f64) -> Self {
        Self {
            move_angle: Some(angle),
            move_distance: MOVE_STEP,
            rotation: 0.0,
        }
    }

    pub fn turn(angle: f64) -> Self {
        Self {
            rotation: angle,
            ..Self::default()
        }
    }
}

/// Advance the world by one frame
pub fn tick(state: &mut WorldState, input: &TickInput) -> Result<(), HyperError> {
    state.events.clear();
    state.time_ticks += 1;

    if input.rotation != 0.0 {
        state.paving.apply_rotation(input.rotation);
        state.heading = normalize_angle(state.heading + input.rotation);
    }

    if let Some(angle) = input.move_angle {
        let before = state.paving.current().clone();
        state.paving.apply_movement(angle, input.move_distance)?;

        let after = state.paving.current();
        if *after != before {
            log::debug!("Entered {} at tick {}", after, state.time_ticks);
            state.events.push(WorldEvent::TileEntered {
                path: after.path().to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiling::Chunk;
    use std::f64::consts::PI;

    #[test]
    fn test_idle_tick() {
        let mut world = WorldState::new(1);
        tick(&mut world, &TickInput::default()).unwrap();
        assert_eq!(world.time_ticks, 1);
        assert_eq!(world.paving.current(), &Chunk::origin());
        assert!(world.events.is_empty());
    }

    #[test]
    fn test_walk_forward_enters_tile() {
        let mut world = WorldState::new(1);
        let input = TickInput {
            move_distance: 0.02,
            ..TickInput::forward()
        };
        let mut entered = Vec::new();
        for _ in 0..25 {
            tick(&mut world, &input).unwrap();
            entered.extend(world.events.iter().cloned());
        }
        assert_eq!(
            entered,
            vec![WorldEvent::TileEntered {
                path: "[F]".to_string()
            }]
        );
    }

    #[test]
    fn test_heading_wraps() {
        let mut world = WorldState::new(1);
        for _ in 0..3 {
            tick(&mut world, &TickInput::turn(PI / 2.0)).unwrap();
        }
        assert!((world.heading + PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_turn_then_walk() {
        // A quarter turn of the world brings the RIGHT edge in front of the viewer
        let mut world = WorldState::new(1);
        tick(&mut world, &TickInput::turn(PI / 2.0)).unwrap();
        let input = TickInput {
            move_distance: 0.02,
            ..TickInput::forward()
        };
        for _ in 0..25 {
            tick(&mut world, &input).unwrap();
        }
        assert_eq!(world.paving.current().path().to_string(), "[R]");
        assert!((world.heading - PI / 2.0).abs() < 1e-12);
        assert!(world.paving.contains_viewer());
    }
}
