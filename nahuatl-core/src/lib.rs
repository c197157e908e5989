//! Rule-based grapheme ↔ phoneme transducers for Nahuatl
//!
//! Nahuatl has been written in several conventions since the colonial period.
//! This crate converts between those spellings and a shared phonemic
//! representation with two independent single-pass scanners:
//!
//! - **G2P** ([`grapheme_to_phoneme`]): reads a word in any of the supported
//!   spellings and emits phoneme tokens. Ambiguities between conventions are
//!   resolved with at most two characters of lookahead.
//! - **P2G** ([`phoneme_to_grapheme`]): spells phoneme tokens in one chosen
//!   [`Orthography`]: `classical`, `launey` or `sep`.
//!
//! Both directions run ordered rewrite-rule tables over a three-symbol
//! lookahead [`Window`]. The first rule whose context matches fires, emits its
//! output and moves the cursor forward by one to three symbols.
//!
//! # Example
//!
//! ```rust
//! use nahuatl_core::{grapheme_to_phoneme, phoneme_to_grapheme, Orthography, TransducerConfig};
//!
//! let config = TransducerConfig::default();
//!
//! let phonemes = grapheme_to_phoneme("cihuatl", &config).unwrap();
//! assert_eq!(phonemes.to_string(), "s i w a tK");
//!
//! let word = phoneme_to_grapheme(&["s", "i", "w", "a", "tK"], Orthography::Sep, &config).unwrap();
//! assert_eq!(word, "siuatl");
//! ```

pub mod config;
pub mod emitter;
pub mod error;
pub mod orthography;
pub mod phoneme;
pub mod rules;
pub mod scanner;
pub mod tables;
pub mod transducer;
pub mod window;

pub use config::{PunctuationPolicy, SaltilloGlyph, TransducerConfig};
pub use error::{Error, Result};
pub use orthography::Orthography;
pub use phoneme::{format_tags, Phoneme, Vowel};
pub use scanner::Transcription;
pub use transducer::{Transducer, TransducerBuilder};
pub use window::Window;

/// Convert a written word to phoneme tokens
///
/// Fails with [`Error::UnrecognizedGrapheme`] on a character no rule covers.
pub fn grapheme_to_phoneme(word: &str, config: &TransducerConfig) -> Result<Transcription> {
    scanner::scan(word, config.saltillo)
}

/// Spell phoneme tags in `orthography`
///
/// Fails with [`Error::UnconvertiblePhoneme`] on a tag that is unknown or has
/// no spelling in the chosen orthography.
pub fn phoneme_to_grapheme<S: AsRef<str>>(
    tokens: &[S],
    orthography: Orthography,
    config: &TransducerConfig,
) -> Result<String> {
    emitter::emit_tags(tokens, orthography, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions_match_transducer() {
        let config = TransducerConfig::default();
        let transducer = Transducer::with_config(config);

        for word in ["calli", "tlahtoa", "quetzalli", "yōllōtl"] {
            assert_eq!(
                grapheme_to_phoneme(word, &config).unwrap(),
                transducer.grapheme_to_phoneme(word).unwrap()
            );
        }

        let tokens = ["k_w", "a", "l", "i"];
        assert_eq!(
            phoneme_to_grapheme(&tokens, Orthography::Classical, &config).unwrap(),
            transducer
                .phoneme_to_grapheme(&tokens, Orthography::Classical)
                .unwrap()
        );
    }

    #[test]
    fn test_transducer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Transducer>();
        assert_send_sync::<Transcription>();
    }
}
