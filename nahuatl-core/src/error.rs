//! Core error types (deterministic only)

use crate::orthography::Orthography;
use thiserror::Error;

/// Transduction errors
///
/// A failing word produces no partial output. Whether a batch aborts or skips
/// the word is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No grapheme rule matches the character
    #[error("no phoneme mapping for grapheme '{grapheme}' at position {position}")]
    UnrecognizedGrapheme {
        /// The offending character (lowercased)
        grapheme: char,
        /// Char index in the word
        position: usize,
    },

    /// The token is unknown or the orthography has no spelling for it
    #[error("could not convert phoneme /{token}/ at position {position} to {orthography} graphemes")]
    UnconvertiblePhoneme {
        /// Tag text of the token
        token: String,
        /// Token index in the word
        position: usize,
        /// Orthography that was requested
        orthography: Orthography,
    },

    /// Orthography name not recognised
    #[error("unknown orthography '{0}' (expected one of: classical, launey, sep)")]
    UnknownOrthography(String),

    /// Saltillo rendering name not recognised
    #[error("unknown saltillo rendering '{0}' (expected glottal-stop or glottal-fricative)")]
    UnknownSaltillo(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_grapheme_display() {
        let err = Error::UnrecognizedGrapheme {
            grapheme: 'ẅ',
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "no phoneme mapping for grapheme 'ẅ' at position 3"
        );
    }

    #[test]
    fn test_unconvertible_phoneme_display() {
        let err = Error::UnconvertiblePhoneme {
            token: "zzz".to_string(),
            position: 0,
            orthography: Orthography::Sep,
        };
        assert_eq!(
            err.to_string(),
            "could not convert phoneme /zzz/ at position 0 to sep graphemes"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = Error::UnknownOrthography("apa".to_string());
        let _: &dyn std::error::Error = &err;
        assert!(err.to_string().contains("classical, launey, sep"));
    }
}
