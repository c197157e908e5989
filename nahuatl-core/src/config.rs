//! Transducer configuration

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// How the saltillo phoneme is written in phoneme tags
///
/// Classical Nahuatl had a glottal stop here; many modern varieties have a
/// glottal fricative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SaltilloGlyph {
    /// `?`
    #[default]
    GlottalStop,
    /// `h`
    GlottalFricative,
}

impl SaltilloGlyph {
    /// Tag text for the saltillo
    pub fn tag(self) -> &'static str {
        match self {
            SaltilloGlyph::GlottalStop => "?",
            SaltilloGlyph::GlottalFricative => "h",
        }
    }

    /// Configuration name
    pub fn as_str(self) -> &'static str {
        match self {
            SaltilloGlyph::GlottalStop => "glottal-stop",
            SaltilloGlyph::GlottalFricative => "glottal-fricative",
        }
    }
}

impl fmt::Display for SaltilloGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SaltilloGlyph {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "glottal-stop" | "stop" | "?" => Ok(SaltilloGlyph::GlottalStop),
            "glottal-fricative" | "fricative" | "h" => Ok(SaltilloGlyph::GlottalFricative),
            _ => Err(Error::UnknownSaltillo(s.to_string())),
        }
    }
}

/// What the emitter does with punctuation tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum PunctuationPolicy {
    /// Punctuation is not part of any orthography table and fails conversion
    #[default]
    Reject,
    /// Write the wrapped punctuation character back out unchanged
    PassThrough,
}

/// Settings fixed for the lifetime of a [`Transducer`](crate::Transducer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TransducerConfig {
    /// Saltillo spelling in phoneme tags
    pub saltillo: SaltilloGlyph,
    /// Punctuation handling when emitting graphemes
    pub punctuation: PunctuationPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TransducerConfig::default();
        assert_eq!(config.saltillo, SaltilloGlyph::GlottalStop);
        assert_eq!(config.punctuation, PunctuationPolicy::Reject);
    }

    #[test]
    fn test_saltillo_from_str() {
        assert_eq!(
            "glottal-fricative".parse::<SaltilloGlyph>().unwrap(),
            SaltilloGlyph::GlottalFricative
        );
        assert_eq!(
            " Glottal-Stop ".parse::<SaltilloGlyph>().unwrap(),
            SaltilloGlyph::GlottalStop
        );
        assert_eq!("h".parse::<SaltilloGlyph>().unwrap().tag(), "h");

        let err = "uvular".parse::<SaltilloGlyph>().unwrap_err();
        assert_eq!(err, Error::UnknownSaltillo("uvular".to_string()));
    }

    #[test]
    fn test_saltillo_display_round_trips() {
        for glyph in [SaltilloGlyph::GlottalStop, SaltilloGlyph::GlottalFricative] {
            assert_eq!(glyph.to_string().parse::<SaltilloGlyph>().unwrap(), glyph);
        }
    }
}
