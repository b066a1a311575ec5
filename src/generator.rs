//! The word-search generator: places words in a square grid and fills the
//! rest with random letters.
//!
//! # Placement policy
//!
//! Words are normalized (uppercase A-Z, accents stripped), words that come out
//! empty or longer than the grid are dropped, and the survivors are placed
//! longest-first — the standard word-search heuristic, since long words have
//! the fewest candidate positions. Each word tries the four directions in a
//! random order and, within a direction, every in-bounds start cell in a
//! random order, taking the first spot where every needed cell is still empty
//! or already holds the matching letter (so legitimate crossings are allowed,
//! letter conflicts are not).
//!
//! There is no backtracking: a word that fits nowhere is silently omitted and
//! earlier placements stay put. Callers compare `placements.len()` against
//! their request to report partial success. "Smarter" search would change
//! which words get omitted, so the first-fit policy is part of the contract.
//!
//! # Randomness
//!
//! Direction order, position order, and filler letters are the three sources
//! of non-determinism. [`generate_word_search`] draws them from the thread
//! RNG (a fresh puzzle every call); [`generate_word_search_seeded`] derives
//! them from a `u64` seed via ChaCha8, which has stable output across
//! platforms, so a seed reproduces a puzzle exactly.
//!
//! # Examples
//!
//! ```
//! use busca::generator;
//!
//! let puzzle = generator::generate_word_search(&["gato", "cachorro"], 10);
//!
//! assert_eq!(puzzle.size, 10);
//! assert_eq!(puzzle.placements.len(), 2);
//! for p in &puzzle.placements {
//!     assert_eq!(puzzle.read_placement(p), p.word);
//! }
//! ```

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cmp::Reverse;

use crate::direction::Direction;
use crate::letters::{normalize_word, random_letter};
use crate::puzzle::{PuzzleData, WordPlacement};

/// Generate a puzzle using the thread RNG. Repeated calls with identical
/// input produce different grids.
#[must_use]
pub fn generate_word_search<S: AsRef<str>>(words: &[S], grid_size: usize) -> PuzzleData {
    generate_word_search_with_rng(words, grid_size, &mut rand::rng())
}

/// Generate a puzzle deterministically from a seed.
///
/// The same `(words, grid_size, seed)` triple always produces the same
/// puzzle, which makes sharable and testable output possible.
#[must_use]
pub fn generate_word_search_seeded<S: AsRef<str>>(
    words: &[S],
    grid_size: usize,
    seed: u64,
) -> PuzzleData {
    generate_word_search_with_rng(words, grid_size, &mut ChaCha8Rng::seed_from_u64(seed))
}

/// Generate a puzzle drawing all randomness from the given source.
///
/// This never fails: words that cannot be placed are omitted from
/// `placements`, and the returned grid is always fully letter-filled.
pub fn generate_word_search_with_rng<S: AsRef<str>>(
    words: &[S],
    grid_size: usize,
    rng: &mut impl Rng,
) -> PuzzleData {
    // Normalize, drop words that can never fit, and sort longest-first.
    // `sort_by_key` is stable, so equal-length words keep their input order.
    let mut normalized: Vec<String> = words
        .iter()
        .map(|w| normalize_word(w.as_ref()))
        .filter(|w| !w.is_empty() && w.len() <= grid_size)
        .collect();
    normalized.sort_by_key(|w| Reverse(w.len()));

    // Build phase uses None for "no word claimed this cell yet".
    let mut grid: Vec<Vec<Option<char>>> = vec![vec![None; grid_size]; grid_size];
    let mut placements: Vec<WordPlacement> = Vec::with_capacity(normalized.len());

    for word in normalized {
        match try_place_word(&mut grid, &word, rng) {
            Some(placement) => {
                debug!(
                    "placed \"{}\" at ({}, {}) {}",
                    placement.word, placement.start_row, placement.start_col, placement.direction
                );
                placements.push(placement);
            }
            None => {
                warn!("could not place \"{word}\" anywhere in the {grid_size}x{grid_size} grid");
            }
        }
    }

    // Fill every still-empty cell with a random letter.
    let grid = grid
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| cell.unwrap_or_else(|| random_letter(rng)))
                .collect()
        })
        .collect();

    PuzzleData {
        grid,
        placements,
        size: grid_size,
    }
}

/// Try every direction (random order) and every in-bounds start cell within it
/// (random order), writing the word into the first feasible spot.
///
/// Returns the recorded placement, or `None` if the word fits nowhere.
fn try_place_word(
    grid: &mut [Vec<Option<char>>],
    word: &str,
    rng: &mut impl Rng,
) -> Option<WordPlacement> {
    let mut directions = Direction::ALL;
    directions.shuffle(rng);

    for direction in directions {
        let mut positions = candidate_positions(grid.len(), word.len(), direction);
        positions.shuffle(rng);

        for (row, col) in positions {
            if can_place_word(grid, word, row, col, direction) {
                place_word(grid, word, row, col, direction);
                return Some(WordPlacement {
                    word: word.to_string(),
                    start_row: row,
                    start_col: col,
                    direction,
                    found: false,
                });
            }
        }
    }

    None
}

/// Every start cell, in row-major order, from which a word of `word_len` fits
/// entirely inside a `size`×`size` grid along `direction`.
fn candidate_positions(size: usize, word_len: usize, direction: Direction) -> Vec<(usize, usize)> {
    let (d_row, d_col) = direction.delta();
    let span = (word_len - 1) as isize;
    let size = size as isize;

    let mut positions = Vec::new();
    for row in 0..size {
        for col in 0..size {
            let end_row = row + span * d_row;
            let end_col = col + span * d_col;

            if (0..size).contains(&end_row) && (0..size).contains(&end_col) {
                positions.push((row as usize, col as usize));
            }
        }
    }
    positions
}

/// Feasibility test: every cell the word would occupy must be inside the
/// grid, and either unclaimed or already holding the exact letter the word
/// needs there.
fn can_place_word(
    grid: &[Vec<Option<char>>],
    word: &str,
    start_row: usize,
    start_col: usize,
    direction: Direction,
) -> bool {
    let (d_row, d_col) = direction.delta();
    let size = grid.len() as isize;

    word.bytes().enumerate().all(|(i, letter)| {
        let i = i as isize;
        let row = start_row as isize + i * d_row;
        let col = start_col as isize + i * d_col;

        if !(0..size).contains(&row) || !(0..size).contains(&col) {
            return false;
        }

        match grid[row as usize][col as usize] {
            None => true,
            Some(existing) => existing == letter as char,
        }
    })
}

/// Write the word's letters into the grid. Callers must have checked
/// feasibility first; this happily overwrites.
fn place_word(
    grid: &mut [Vec<Option<char>>],
    word: &str,
    start_row: usize,
    start_col: usize,
    direction: Direction,
) {
    let (d_row, d_col) = direction.delta();

    for (i, letter) in word.bytes().enumerate() {
        let i = i as isize;
        let row = (start_row as isize + i * d_row) as usize;
        let col = (start_col as isize + i * d_col) as usize;
        grid[row][col] = Some(letter as char);
    }
}
