//! The puzzle data model: a filled letter grid plus a record of where every
//! word landed.
//!
//! A [`PuzzleData`] comes out of the generator in one shot and is read-only
//! from the algorithm's perspective afterwards. The one mutable bit is each
//! placement's `found` flag, which interactive consumers may flip while the
//! puzzle is being solved; the generator always leaves it `false` and the grid
//! contents never depend on it.
//!
//! Serialization uses the same field names as the JSON the reference frontend
//! consumes (`startRow`, `startCol`, kebab-case directions), so an exported
//! puzzle can be handed straight to a renderer.

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Where one word landed in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordPlacement {
    /// The normalized (uppercase A-Z) word as it reads in the grid.
    pub word: String,
    /// Row of the word's first letter, 0-indexed from the top.
    pub start_row: usize,
    /// Column of the word's first letter, 0-indexed from the left.
    pub start_col: usize,
    pub direction: Direction,
    /// Interactive-solving marker. The generator never sets this to true.
    #[serde(default)]
    pub found: bool,
}

impl WordPlacement {
    /// Every grid coordinate this word occupies, first letter first.
    ///
    /// Pure derivation from the placement's fields: walks the direction's
    /// step vector for `word.len()` steps. Calling it twice yields identical
    /// results. Renderers use this to know which cells to highlight as a
    /// solution.
    #[must_use]
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let (d_row, d_col) = self.direction.delta();

        (0..self.word.len())
            .map(|i| {
                let i = i as isize;
                let row = self.start_row as isize + i * d_row;
                let col = self.start_col as isize + i * d_col;
                // In-bounds by construction: the generator only records
                // placements whose full extent fits the grid.
                (row as usize, col as usize)
            })
            .collect()
    }
}

/// A complete generated puzzle.
///
/// Invariants upheld by the generator:
/// - `grid` is always `size` × `size` and every cell is one uppercase ASCII
///   letter (no cell is left empty);
/// - reading the grid along `placement.cells()` spells `placement.word` for
///   every placement;
/// - placements that share a cell agree on its letter;
/// - `placements` is in placement order, which is longest-word-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleData {
    pub grid: Vec<Vec<char>>,
    pub placements: Vec<WordPlacement>,
    pub size: usize,
}

impl PuzzleData {
    /// Read the letters a placement covers straight out of the grid.
    #[must_use]
    pub fn read_placement(&self, placement: &WordPlacement) -> String {
        placement
            .cells()
            .iter()
            .map(|&(row, col)| self.grid[row][col])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(direction: Direction) -> WordPlacement {
        WordPlacement {
            word: "GATO".to_string(),
            start_row: 3,
            start_col: 1,
            direction,
            found: false,
        }
    }

    #[test]
    fn test_cells_horizontal() {
        let cells = placement(Direction::Horizontal).cells();
        assert_eq!(cells, vec![(3, 1), (3, 2), (3, 3), (3, 4)]);
    }

    #[test]
    fn test_cells_vertical() {
        let cells = placement(Direction::Vertical).cells();
        assert_eq!(cells, vec![(3, 1), (4, 1), (5, 1), (6, 1)]);
    }

    #[test]
    fn test_cells_diagonal_down() {
        let cells = placement(Direction::DiagonalDown).cells();
        assert_eq!(cells, vec![(3, 1), (4, 2), (5, 3), (6, 4)]);
    }

    #[test]
    fn test_cells_diagonal_up_walks_toward_row_zero() {
        let cells = placement(Direction::DiagonalUp).cells();
        assert_eq!(cells, vec![(3, 1), (2, 2), (1, 3), (0, 4)]);
    }

    #[test]
    fn test_cells_idempotent() {
        let p = placement(Direction::DiagonalUp);
        assert_eq!(p.cells(), p.cells());
    }

    #[test]
    fn test_cells_length_matches_word() {
        for direction in Direction::ALL {
            assert_eq!(placement(direction).cells().len(), 4);
        }
    }

    #[test]
    fn test_serde_field_names_match_frontend() {
        let p = placement(Direction::DiagonalUp);
        let json = serde_json::to_string(&p).unwrap();

        assert!(json.contains("\"startRow\":3"));
        assert!(json.contains("\"startCol\":1"));
        assert!(json.contains("\"diagonal-up\""));
        assert!(json.contains("\"found\":false"));
    }

    #[test]
    fn test_found_defaults_false_when_absent() {
        let json = r#"{"word":"SOL","startRow":0,"startCol":0,"direction":"horizontal"}"#;
        let p: WordPlacement = serde_json::from_str(json).unwrap();
        assert!(!p.found);
    }
}
