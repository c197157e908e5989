//! Transducer entry point and builder

use crate::config::{PunctuationPolicy, SaltilloGlyph, TransducerConfig};
use crate::emitter;
use crate::error::Result;
use crate::orthography::Orthography;
use crate::phoneme::Phoneme;
use crate::scanner::{self, Transcription};

/// Bidirectional converter between Nahuatl spellings and phonemes
///
/// Holds only an immutable [`TransducerConfig`], so a single instance can be
/// shared freely across threads.
///
/// ```rust
/// use nahuatl_core::{Orthography, Transducer};
///
/// let transducer = Transducer::new();
///
/// let phonemes = transducer.grapheme_to_phoneme("calli").unwrap();
/// assert_eq!(phonemes.to_string(), "k a l l i");
///
/// let word = transducer
///     .emit(phonemes.phonemes(), Orthography::Sep)
///     .unwrap();
/// assert_eq!(word, "kali");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transducer {
    config: TransducerConfig,
}

impl Transducer {
    /// Transducer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Transducer with an explicit configuration
    pub fn with_config(config: TransducerConfig) -> Self {
        Self { config }
    }

    /// Create a transducer builder
    pub fn builder() -> TransducerBuilder {
        TransducerBuilder::new()
    }

    /// Active configuration
    pub fn config(&self) -> &TransducerConfig {
        &self.config
    }

    /// Convert a written word to phonemes
    pub fn grapheme_to_phoneme(&self, word: &str) -> Result<Transcription> {
        scanner::scan(word, self.config.saltillo)
    }

    /// Convert phoneme tags to a written word in `orthography`
    pub fn phoneme_to_grapheme<S: AsRef<str>>(
        &self,
        tokens: &[S],
        orthography: Orthography,
    ) -> Result<String> {
        emitter::emit_tags(tokens, orthography, &self.config)
    }

    /// Convert typed phonemes to a written word in `orthography`
    pub fn emit(&self, phonemes: &[Phoneme], orthography: Orthography) -> Result<String> {
        emitter::emit(phonemes, orthography, &self.config)
    }

    /// Respell a word from its written form into `orthography`
    pub fn respell(&self, word: &str, orthography: Orthography) -> Result<String> {
        let transcription = self.grapheme_to_phoneme(word)?;
        self.emit(transcription.phonemes(), orthography)
    }
}

/// Fluent builder for [`Transducer`]
#[derive(Debug, Default)]
pub struct TransducerBuilder {
    saltillo: Option<SaltilloGlyph>,
    punctuation: Option<PunctuationPolicy>,
}

impl TransducerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the saltillo glyph used in phoneme tags
    pub fn saltillo(mut self, glyph: SaltilloGlyph) -> Self {
        self.saltillo = Some(glyph);
        self
    }

    /// Set the punctuation policy for emission
    pub fn punctuation(mut self, policy: PunctuationPolicy) -> Self {
        self.punctuation = Some(policy);
        self
    }

    /// Build the transducer
    pub fn build(self) -> Transducer {
        let mut config = TransducerConfig::default();

        if let Some(glyph) = self.saltillo {
            config.saltillo = glyph;
        }

        if let Some(policy) = self.punctuation {
            config.punctuation = policy;
        }

        Transducer::with_config(config)
    }
}
