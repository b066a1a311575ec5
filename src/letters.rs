//! Alphabet constants and word normalization.
//!
//! A finished grid only ever holds the 26 uppercase ASCII letters, so every
//! word has to be reduced to that alphabet before placement. Normalization
//! uppercases, decomposes accented characters (NFD), and drops whatever is
//! left that isn't A-Z — so "ÁRVORE" and "arvore" both become "ARVORE", and
//! punctuation, digits, and whitespace disappear entirely.

use rand::Rng;
use unicode_normalization::UnicodeNormalization;

/// The grid alphabet. Filler letters are drawn uniformly from this set.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub(crate) const ALPHABET_SIZE: usize = 26;

/// Reduce an arbitrary string to uppercase A-Z.
///
/// Accents are stripped by decomposing to NFD and discarding the combining
/// marks along with every other non-A-Z character. The result may be empty
/// (e.g., for `"123"` or `""`); callers filter those out — an empty
/// normalization is never an error.
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.to_uppercase()
        .nfd()
        .filter(char::is_ascii_uppercase)
        .collect()
}

/// Uniform random letter from [`ALPHABET`], used to fill cells no word claimed.
pub(crate) fn random_letter(rng: &mut impl Rng) -> char {
    let idx = rng.random_range(0..ALPHABET_SIZE);
    ALPHABET.as_bytes()[idx] as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_normalize_strips_accents() {
        assert_eq!(normalize_word("ÁrVORE"), "ARVORE");
        assert_eq!(normalize_word("ação"), "ACAO");
        assert_eq!(normalize_word("pingüim"), "PINGUIM");
    }

    #[test]
    fn test_normalize_strips_non_letters() {
        assert_eq!(normalize_word("co-co2!"), "COCO");
        assert_eq!(normalize_word("  gato  "), "GATO");
        assert_eq!(normalize_word("word search"), "WORDSEARCH");
    }

    #[test]
    fn test_normalize_may_be_empty() {
        assert_eq!(normalize_word(""), "");
        assert_eq!(normalize_word("123"), "");
        assert_eq!(normalize_word("!?;"), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        for word in ["ARVORE", "CAT", "ÁrVORE"] {
            let once = normalize_word(word);
            assert_eq!(normalize_word(&once), once);
        }
    }

    #[test]
    fn test_alphabet_constants() {
        assert_eq!(ALPHABET.len(), ALPHABET_SIZE);
        assert!(ALPHABET.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_random_letter_in_alphabet() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let c = random_letter(&mut rng);
            assert!(c.is_ascii_uppercase(), "'{c}' is not in A-Z");
        }
    }
}
