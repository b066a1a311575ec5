//! The four directions a word can run in the grid.
//!
//! Each direction maps to a fixed unit step `(row delta, col delta)`. Words
//! always read left-to-right or top-to-bottom along their direction, so the
//! column delta is never negative; `DiagonalUp` is the only direction with a
//! negative row delta.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PuzzleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDown,
    DiagonalUp,
}

impl Direction {
    /// All four directions, in declaration order. Placement shuffles a copy of
    /// this array rather than sampling with replacement, so every direction is
    /// tried at most once per word.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// Unit step vector as `(row delta, col delta)`.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
            Direction::DiagonalDown => "diagonal-down",
            Direction::DiagonalUp => "diagonal-up",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Direction {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Direction::Horizontal),
            "vertical" => Ok(Direction::Vertical),
            "diagonal-down" => Ok(Direction::DiagonalDown),
            "diagonal-up" => Ok(Direction::DiagonalUp),
            _ => Err(PuzzleError::InvalidDirection { name: s.to_string() }),
        }
    }
}
