//! The four edge directions of a square tile
//!
//! Directions form the cyclic group of order 4: `clockwise` is the generator,
//! `opposite` is two steps, and `add` composes a direction with a relative
//! turn (FORWARD keeps, BACKWARD reverses, LEFT and RIGHT turn).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::HyperError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Forward,
    Backward,
}

impl Direction {
    /// Iteration order used by ray propagation and neighborhood traversal
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Backward,
    ];

    /// Digit used by path encoding (L=0, R=1, F=2, B=3)
    #[inline]
    pub fn ordinal(self) -> u64 {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Forward => 2,
            Direction::Backward => 3,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// F → R → B → L → F
    pub fn clockwise(self) -> Self {
        match self {
            Direction::Forward => Direction::Right,
            Direction::Right => Direction::Backward,
            Direction::Backward => Direction::Left,
            Direction::Left => Direction::Forward,
        }
    }

    pub fn anticlockwise(self) -> Self {
        match self {
            Direction::Forward => Direction::Left,
            Direction::Left => Direction::Backward,
            Direction::Backward => Direction::Right,
            Direction::Right => Direction::Forward,
        }
    }

    /// Turn `self` by the relative direction `turn`
    pub fn add(self, turn: Direction) -> Self {
        match turn {
            Direction::Forward => self,
            Direction::Backward => self.opposite(),
            Direction::Left => self.anticlockwise(),
            Direction::Right => self.clockwise(),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Forward => 'F',
            Direction::Backward => 'B',
        }
    }

    pub fn from_char(c: char) -> Result<Self, HyperError> {
        match c.to_ascii_uppercase() {
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            'F' => Ok(Direction::Forward),
            'B' => Ok(Direction::Backward),
            _ => Err(HyperError::UnknownDirection(c)),
        }
    }

    /// Parse a string of direction letters such as `"FFLR"`
    pub fn parse_steps(s: &str) -> Result<Vec<Self>, HyperError> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(Direction::from_char)
            .collect()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Direction {
    type Err = HyperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Direction::from_char(c),
            (Some(_), Some(c)) | (None, Some(c)) => Err(HyperError::UnknownDirection(c)),
            (None, None) => Err(HyperError::UnknownDirection(' ')),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    #[test]
    fn test_opposite_pairs() {
        assert_eq!(Direction::Forward.opposite(), Direction::Backward);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
    }

    #[test]
    fn test_clockwise_cycle() {
        let mut d = Direction::Forward;
        let mut seen = vec![d];
        for _ in 0..3 {
            d = d.clockwise();
            seen.push(d);
        }
        assert_eq!(
            seen,
            vec![
                Direction::Forward,
                Direction::Right,
                Direction::Backward,
                Direction::Left
            ]
        );
        assert_eq!(d.clockwise(), Direction::Forward);
    }

    #[test]
    fn test_add_table() {
        assert_eq!(Direction::Forward.add(Direction::Left), Direction::Left);
        assert_eq!(Direction::Forward.add(Direction::Right), Direction::Right);
        assert_eq!(Direction::Right.add(Direction::Right), Direction::Backward);
        assert_eq!(Direction::Left.add(Direction::Backward), Direction::Right);
        assert_eq!(Direction::Backward.add(Direction::Forward), Direction::Backward);
    }

    #[test]
    fn test_ordinals() {
        let ords: Vec<u64> = Direction::ALL.iter().map(|d| d.ordinal()).collect();
        assert_eq!(ords, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_display_and_parse() {
        let steps = Direction::parse_steps("lrFB").unwrap();
        assert_eq!(steps, Direction::ALL.to_vec());
        let text: String = steps.iter().map(|d| d.to_string()).collect();
        assert_eq!(text, "LRFB");
        assert_eq!("R".parse::<Direction>().unwrap(), Direction::Right);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Direction::parse_steps("FXL"),
            Err(HyperError::UnknownDirection('X'))
        ));
        assert!("FL".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
    }

    proptest! {
        #[test]
        fn prop_clockwise_inverts_anticlockwise(d in any_direction()) {
            prop_assert_eq!(d.clockwise().anticlockwise(), d);
            prop_assert_eq!(d.anticlockwise().clockwise(), d);
        }

        #[test]
        fn prop_opposite_is_two_turns(d in any_direction()) {
            prop_assert_eq!(d.opposite(), d.clockwise().clockwise());
            prop_assert_eq!(d.opposite().opposite(), d);
        }

        #[test]
        fn prop_add_is_associative(a in any_direction(), b in any_direction(), c in any_direction()) {
            // Composition of rotations
            prop_assert_eq!(a.add(b).add(c), a.add(b.add(c)));
        }
    }
}
