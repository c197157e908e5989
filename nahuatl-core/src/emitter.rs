//! Grapheme emitter (P2G)
//!
//! Spells a phoneme sequence in the selected orthography. The cursor loop is
//! the same one the scanner uses; only the rule table changes per orthography.

use crate::config::{PunctuationPolicy, TransducerConfig};
use crate::error::{Error, Result};
use crate::orthography::{Orthography, SpellingRule, PUNCTUATION_PASS_THROUGH};
use crate::phoneme::Phoneme;
use crate::rules::drive;

/// Spell typed phonemes in `orthography`
pub fn emit(
    phonemes: &[Phoneme],
    orthography: Orthography,
    config: &TransducerConfig,
) -> Result<String> {
    let all_layers: [&[SpellingRule]; 2] = [PUNCTUATION_PASS_THROUGH, orthography.rules()];
    let layers = match config.punctuation {
        PunctuationPolicy::Reject => &all_layers[1..],
        PunctuationPolicy::PassThrough => &all_layers[..],
    };

    let mut text = String::with_capacity(phonemes.len() + 4);
    drive(phonemes, layers, &mut text).map_err(|unmatched| Error::UnconvertiblePhoneme {
        token: phonemes[unmatched.position].tag(config.saltillo).into_owned(),
        position: unmatched.position,
        orthography,
    })?;

    Ok(text)
}

/// Parse phoneme tags, then spell them in `orthography`
///
/// A tag that names no phoneme fails the same way as a phoneme the
/// orthography cannot spell.
pub fn emit_tags<S: AsRef<str>>(
    tokens: &[S],
    orthography: Orthography,
    config: &TransducerConfig,
) -> Result<String> {
    let phonemes = tokens
        .iter()
        .enumerate()
        .map(|(position, token)| {
            let token = token.as_ref();
            Phoneme::parse(token, config.saltillo).ok_or_else(|| Error::UnconvertiblePhoneme {
                token: token.to_string(),
                position,
                orthography,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    emit(&phonemes, orthography, config)
}
