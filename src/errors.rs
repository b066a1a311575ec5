//! Error types for the input boundary, with error codes and helpful messages.
//!
//! The generator itself never fails — words that cannot be placed are simply
//! omitted — so every error here comes from the surface around it: collecting
//! words from free-form text, validating the requested grid, exporting JSON.
//!
//! # Error Codes
//!
//! Each variant has a unique code (P001-P004) for documentation lookup:
//!
//! - P001: `NoWords` (Input text contained no usable words)
//! - P002: `GridTooSmall` (Requested grid size is zero)
//! - P003: `InvalidDirection` (Unrecognized direction name)
//! - P004: `Json` (Serialization failure during export)

use std::io;

/// Errors raised while preparing input for, or exporting output from, the
/// puzzle generator.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("No words provided")]
    NoWords,

    #[error("Grid size must be at least 1 (got {size})")]
    GridTooSmall { size: usize },

    #[error("Unknown direction '{name}'")]
    InvalidDirection { name: String },

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<PuzzleError> for io::Error {
    fn from(pe: PuzzleError) -> Self {
        // String version is the least fragile (no Send/Sync bounds issues)
        io::Error::new(io::ErrorKind::InvalidInput, pe.to_string())
    }
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::NoWords => "P001",
            PuzzleError::GridTooSmall { .. } => "P002",
            PuzzleError::InvalidDirection { .. } => "P003",
            PuzzleError::Json(_) => "P004",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::NoWords => {
                Some("Separate words with commas, semicolons, or newlines (e.g., 'gato, cachorro; peixe')")
            }
            PuzzleError::GridTooSmall { .. } => {
                Some("Common grid sizes are 10, 12, 15, 18, and 20")
            }
            PuzzleError::InvalidDirection { .. } => {
                Some("Valid directions: horizontal, vertical, diagonal-down, diagonal-up")
            }
            PuzzleError::Json(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        if let Some(help_text) = self.help() {
            format!("{self} ({})\n{help_text}", self.code())
        } else {
            format!("{self} ({})", self.code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_help() {
        let err = PuzzleError::NoWords;
        assert_eq!(err.code(), "P001");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("P001"));
        assert!(detailed.contains("commas"));
    }

    #[test]
    fn test_grid_too_small_message() {
        let err = PuzzleError::GridTooSmall { size: 0 };
        assert_eq!(err.code(), "P002");
        assert!(err.to_string().contains("got 0"));
    }

    /// Test that all `PuzzleError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let bad_json = serde_json::from_str::<usize>("not json").unwrap_err();
        let variants = vec![
            PuzzleError::NoWords,
            PuzzleError::GridTooSmall { size: 0 },
            PuzzleError::InvalidDirection { name: "up".to_string() },
            PuzzleError::Json(bad_json),
        ];

        let mut codes = std::collections::HashSet::new();
        for variant in &variants {
            assert!(
                codes.insert(variant.code()),
                "Duplicate error code: {}",
                variant.code()
            );
        }
    }

    #[test]
    fn test_io_error_conversion_preserves_message() {
        let io_err: io::Error = PuzzleError::NoWords.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
        assert!(io_err.to_string().contains("No words"));
    }
}
