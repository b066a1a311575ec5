//! Plain-text rendering of a generated puzzle.
//!
//! The grid prints one row per line with single-space separation. With
//! answers revealed, every cell covered by a placement keeps its uppercase
//! letter while filler cells are dimmed to lowercase, so the hidden words
//! stand out without any terminal-styling dependency:
//!
//! ```text
//! q C A T v
//! x w b z A
//! ...
//! ```
//!
//! The word list prints alphabetically, the order solvers expect to scan it
//! in, regardless of the order words were placed.

use std::collections::HashSet;

use crate::puzzle::PuzzleData;

/// Render the letter grid as text, one row per line.
///
/// With `show_answers`, solution cells stay uppercase and filler cells are
/// lowercased.
#[must_use]
pub fn render_grid(puzzle: &PuzzleData, show_answers: bool) -> String {
    let solution_cells: HashSet<(usize, usize)> = if show_answers {
        puzzle
            .placements
            .iter()
            .flat_map(|p| p.cells())
            .collect()
    } else {
        HashSet::new()
    };

    let mut out = String::with_capacity(puzzle.size * (puzzle.size * 2 + 1));
    for (row_idx, row) in puzzle.grid.iter().enumerate() {
        for (col_idx, &letter) in row.iter().enumerate() {
            if col_idx > 0 {
                out.push(' ');
            }
            if show_answers && !solution_cells.contains(&(row_idx, col_idx)) {
                out.push(letter.to_ascii_lowercase());
            } else {
                out.push(letter);
            }
        }
        out.push('\n');
    }
    out
}

/// Render the list of words to find, sorted alphabetically.
#[must_use]
pub fn render_word_list(puzzle: &PuzzleData) -> String {
    let mut words: Vec<&str> = puzzle.placements.iter().map(|p| p.word.as_str()).collect();
    words.sort_unstable();

    let mut out = String::from("Words to find:\n");
    out.push_str(&words.join(", "));
    out.push('\n');
    out
}
