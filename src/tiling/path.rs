//! Canonical access paths
//!
//! A tile is reached from the origin tile by a sequence of edge crossings.
//! Many sequences reach the same tile; the rewrite rules below reduce any of
//! them to a unique normal form so that the path can serve as the tile's
//! identity.
//!
//! Rules (each fires at most once per pass, first match wins):
//! 1. Backward-cancellation: `X B Y` → `X'(Y)` where the step after the pair
//!    is turned according to X; a trailing `X B` twists the holonomy.
//! 2. Repeat-merge: `X R R Y` → `cw(X) L cw(Y)`, mirrored for `L L`.
//! 3. LF-absorption: `Y R F^n R X` → `cw(Y) (L F)^n L cw(X)`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Direction;
use crate::HyperError;

/// A path in canonical form plus the residual rotation it leaves behind
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectionPath {
    steps: Vec<Direction>,
    holonomy: Direction,
}

/// Result of one rule firing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub path: Vec<Direction>,
    /// Relative turn applied to the holonomy (FORWARD = none)
    pub twist: Direction,
}

impl Rewrite {
    fn straight(path: Vec<Direction>) -> Self {
        Self {
            path,
            twist: Direction::Forward,
        }
    }
}

impl DirectionPath {
    /// The empty path of the origin tile
    pub fn origin() -> Self {
        Self {
            steps: Vec::new(),
            holonomy: Direction::Forward,
        }
    }

    /// Rewrite `raw` to its normal form. Holonomy starts at FORWARD.
    pub fn canonicalize(raw: Vec<Direction>) -> Result<Self, HyperError> {
        let max_passes = 16 + 4 * raw.len();
        let mut steps = raw;
        let mut holonomy = Direction::Forward;

        for pass in 0..max_passes {
            let mut changed = false;
            for rule in RULES {
                if let Some(rw) = rule(&steps) {
                    steps = rw.path;
                    holonomy = holonomy.add(rw.twist);
                    changed = true;
                }
            }
            if !changed {
                log::trace!(
                    "canonical path {} after {} passes",
                    display_steps(&steps),
                    pass
                );
                return Ok(Self { steps, holonomy });
            }
        }

        Err(HyperError::CanonicalizationDiverged { passes: max_passes })
    }

    pub fn steps(&self) -> &[Direction] {
        &self.steps
    }

    pub fn holonomy(&self) -> Direction {
        self.holonomy
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Raw path for the tile across `direction`, before canonicalization
    pub fn extended(&self, direction: Direction) -> Vec<Direction> {
        let mut raw = Vec::with_capacity(self.steps.len() + 1);
        raw.extend_from_slice(&self.steps);
        raw.push(self.holonomy.add(direction));
        raw
    }

    /// Σ ordinal(dᵢ)·4ⁱ for paths of up to 32 steps.
    ///
    /// Past that the base-4 sum no longer fits in 64 bits, so every further
    /// 32-step word is folded into the code through an avalanche mix that
    /// also takes the word's length.
    pub fn encode(&self) -> u64 {
        let mut words = self.steps.chunks(STEPS_PER_WORD);
        let first = words.next().map_or(0, encode_word);
        words.fold(first, |code, word| {
            fold_word(code, encode_word(word), word.len() as u64)
        })
    }
}

const STEPS_PER_WORD: usize = 32;

fn encode_word(steps: &[Direction]) -> u64 {
    steps
        .iter()
        .rev()
        .fold(0, |code, step| (code << 2) | step.ordinal())
}

fn fold_word(code: u64, word: u64, len: u64) -> u64 {
    let mut h = code.rotate_left(17) ^ word ^ len.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    h = (h ^ (h >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    h = (h ^ (h >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    h ^ (h >> 31)
}

impl fmt::Display for DirectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", display_steps(&self.steps))
    }
}

fn display_steps(steps: &[Direction]) -> String {
    steps.iter().map(|d| d.as_char()).collect()
}

type Rule = fn(&[Direction]) -> Option<Rewrite>;

const RULES: [Rule; 3] = [backward_cancellation, repeat_merge, lf_absorption];

/// How the step following a cancelled `X B` pair is turned
fn untwist(cancelled: Direction, next: Direction) -> Direction {
    match cancelled {
        Direction::Left => next.clockwise(),
        Direction::Right => next.anticlockwise(),
        Direction::Forward => next.opposite(),
        Direction::Backward => next,
    }
}

pub fn backward_cancellation(steps: &[Direction]) -> Option<Rewrite> {
    let i = steps
        .iter()
        .skip(1)
        .position(|&d| d == Direction::Backward)?
        + 1;
    let cancelled = steps[i - 1];
    let mut path = steps[..i - 1].to_vec();

    match steps.get(i + 1) {
        Some(&next) => {
            path.push(untwist(cancelled, next));
            path.extend_from_slice(&steps[i + 2..]);
            Some(Rewrite::straight(path))
        }
        None => Some(Rewrite {
            path,
            twist: cancelled.opposite(),
        }),
    }
}

pub fn repeat_merge(steps: &[Direction]) -> Option<Rewrite> {
    let i = (2..steps.len()).find(|&i| {
        let (snd, cur) = (steps[i - 1], steps[i]);
        snd == cur && matches!(cur, Direction::Right | Direction::Left)
    })?;

    let turn: fn(Direction) -> Direction = match steps[i] {
        Direction::Right => Direction::clockwise,
        _ => Direction::anticlockwise,
    };
    let middle = steps[i].opposite();

    let mut path = steps[..i - 2].to_vec();
    path.push(turn(steps[i - 2]));
    path.push(middle);

    match steps.get(i + 1) {
        Some(&next) => {
            path.push(turn(next));
            path.extend_from_slice(&steps[i + 2..]);
            Some(Rewrite::straight(path))
        }
        None => Some(Rewrite {
            path,
            twist: steps[i],
        }),
    }
}

pub fn lf_absorption(steps: &[Direction]) -> Option<Rewrite> {
    if steps.len() < 4 {
        return None;
    }

    for i in 0..steps.len() - 1 {
        if steps[i + 1] != Direction::Right {
            continue;
        }
        let forwards = steps[i + 2..]
            .iter()
            .take_while(|&&d| d == Direction::Forward)
            .count();
        let closing = i + 2 + forwards;
        if forwards == 0 || steps.get(closing) != Some(&Direction::Right) {
            continue;
        }

        let mut path = steps[..i].to_vec();
        path.push(steps[i].clockwise());
        for _ in 0..forwards {
            path.push(Direction::Left);
            path.push(Direction::Forward);
        }
        path.push(Direction::Left);

        return match steps.get(closing + 1) {
            Some(&x) => {
                path.push(x.clockwise());
                path.extend_from_slice(&steps[closing + 2..]);
                Some(Rewrite::straight(path))
            }
            None => Some(Rewrite {
                path,
                twist: Direction::Right,
            }),
        };
    }

    None
}
