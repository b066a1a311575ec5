//! `words` — collecting a word list from free-form user text.
//!
//! Users paste words however they like: one per line, comma-separated,
//! semicolon-separated, or a mix. This module splits that text into a clean
//! list, applies the 20-word cap (truncation, not an error — matching the
//! "using only the first 20" behavior of the reference frontend), and offers
//! a pre-flight check for words too long to ever fit the chosen grid.
//!
//! The generator performs its own normalization and silently drops words that
//! cannot fit; the helpers here exist so a caller can *warn* about those
//! words before generating instead of leaving the user to notice the
//! omission.

use log::warn;
use rand::Rng;

use crate::errors::PuzzleError;
use crate::letters::normalize_word;

/// Soft cap on the number of words per puzzle, enforced here rather than in
/// the generator.
pub const MAX_WORDS: usize = 20;

/// Themed sample lists (nature, arithmetic, history, science), as shipped in
/// the reference frontend.
pub const SAMPLE_WORD_LISTS: [&str; 4] = [
    "NATUREZA, FLORESTA, ANIMAIS, PLANTAS, ARVORE",
    "MATEMATICA, NUMERO, SOMA, SUBTRACAO, DIVISAO",
    "HISTORIA, BRASIL, DESCOBRIMENTO, INDEPENDENCIA",
    "CIENCIAS, EXPERIMENTO, HIPOTESE, RESULTADO",
];

/// Split free-form text into a word list.
///
/// Splits on commas, semicolons, and newlines; trims whitespace; drops empty
/// pieces. Lists longer than [`MAX_WORDS`] are truncated with a logged
/// warning.
///
/// # Errors
/// [`PuzzleError::NoWords`] if nothing usable remains after splitting.
pub fn parse_word_list(text: &str) -> Result<Vec<String>, PuzzleError> {
    let mut words: Vec<String> = text
        .split(['\n', '\r', ',', ';'])
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();

    if words.is_empty() {
        return Err(PuzzleError::NoWords);
    }

    if words.len() > MAX_WORDS {
        warn!(
            "too many words ({}), using only the first {MAX_WORDS}",
            words.len()
        );
        words.truncate(MAX_WORDS);
    }

    Ok(words)
}

/// The words whose normalized form is longer than `grid_size` — the ones the
/// generator is guaranteed to drop. Returned in input order so callers can
/// warn the user up front.
#[must_use]
pub fn oversized_words<S: AsRef<str>>(words: &[S], grid_size: usize) -> Vec<String> {
    words
        .iter()
        .map(|w| w.as_ref().to_string())
        .filter(|w| normalize_word(w).len() > grid_size)
        .collect()
}

/// Pick one of the sample lists at random and parse it.
#[must_use]
pub fn sample_words(rng: &mut impl Rng) -> Vec<String> {
    let idx = rng.random_range(0..SAMPLE_WORD_LISTS.len());
    // Sample lists are non-empty constants, so parsing cannot fail.
    parse_word_list(SAMPLE_WORD_LISTS[idx]).unwrap_or_default()
}
