//! Grapheme scanner (G2P)
//!
//! Reads a written word left to right with two characters of lookahead and
//! emits phonemes. The rule list below is tried top to bottom at every cursor
//! position; the first rule that matches fires. Many orthographies overlap
//! (`c`/`k`/`qu`, `hu`/`uh`/`u`, `s`/`ç`/`z`/`c`), so the order is significant.

use crate::config::SaltilloGlyph;
use crate::error::{Error, Result};
use crate::phoneme::{format_tags, Phoneme, Vowel};
use crate::rules::{drive, Rule};
use crate::tables::{
    self, DOUBLING_VOWELS, FRONT_VOWELS, GLIDE_VOWELS, IDENTITY_CONSONANTS, SIBILANTS,
    SPANISH_CONSONANTS, SPANISH_VOWELS,
};
use crate::window::Window;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

/// Inline buffer sized for typical words
pub type PhonemeBuf = SmallVec<[Phoneme; 16]>;

type GraphemeRule = Rule<char, PhonemeBuf>;

fn is_k_or_c(w: &Window<char>) -> bool {
    matches!(w.current(), 'k' | 'c')
}

fn push_bare_vowel(w: &Window<char>, out: &mut PhonemeBuf) {
    if let Some(v) = tables::bare_vowel(w.current()) {
        out.push(Phoneme::Short(v));
    }
}

static GRAPHEME_RULES: &[GraphemeRule] = &[
    // Vowels: macron or doubled letter for length
    Rule {
        label: "macron-vowel",
        when: |w| tables::long_vowel(w.current()).is_some(),
        emit: |w, out| {
            if let Some(v) = tables::long_vowel(w.current()) {
                out.push(Phoneme::Long(v));
            }
        },
        advance: 1,
    },
    Rule {
        label: "doubled-vowel",
        when: |w| DOUBLING_VOWELS.contains(&w.current()) && w.next_is(w.current()),
        emit: |w, out| {
            if let Some(v) = tables::bare_vowel(w.current()) {
                out.push(Phoneme::Long(v));
            }
        },
        advance: 2,
    },
    Rule {
        label: "vowel",
        when: |w| DOUBLING_VOWELS.contains(&w.current()),
        emit: push_bare_vowel,
        advance: 1,
    },
    // c / k family
    Rule {
        label: "cu-glide",
        when: |w| is_k_or_c(w) && w.next_is('u') && w.after_next_in(&GLIDE_VOWELS),
        emit: |_, out| out.push(Phoneme::Kw),
        advance: 2,
    },
    Rule {
        label: "chu",
        when: |w| is_k_or_c(w) && w.next_is('h') && w.after_next_is('u'),
        emit: |_, out| out.push(Phoneme::Kw),
        advance: 3,
    },
    Rule {
        label: "ch",
        when: |w| is_k_or_c(w) && w.next_is('h'),
        emit: |_, out| out.push(Phoneme::Ch),
        advance: 2,
    },
    Rule {
        label: "soft-c",
        when: |w| w.current() == 'c' && w.next_in(&FRONT_VOWELS),
        emit: |_, out| out.push(Phoneme::S),
        advance: 1,
    },
    Rule {
        label: "hard-c",
        when: is_k_or_c,
        emit: |_, out| out.push(Phoneme::K),
        advance: 1,
    },
    // q: older texts write /kʷa/ as "qua"; the /k/ is taken as part of the
    // labialization and only the glide surfaces.
    Rule {
        label: "qua",
        when: |w| w.current() == 'q' && w.next_is('u') && w.after_next_is('a'),
        emit: |_, out| out.push(Phoneme::W),
        advance: 2,
    },
    Rule {
        label: "qu",
        when: |w| w.current() == 'q' && w.next_is('u'),
        emit: |_, out| out.push(Phoneme::K),
        advance: 2,
    },
    Rule {
        label: "q",
        when: |w| w.current() == 'q',
        emit: |_, out| out.push(Phoneme::K),
        advance: 1,
    },
    Rule {
        label: "hu-glide",
        when: |w| w.current() == 'h' && w.next_is('u') && w.after_next_in(&GLIDE_VOWELS),
        emit: |_, out| out.push(Phoneme::W),
        advance: 2,
    },
    // u
    Rule {
        label: "uh-coda",
        when: |w| w.current() == 'u' && w.next_is('h') && w.after_next().is_none(),
        emit: |_, out| out.push(Phoneme::W),
        advance: 2,
    },
    Rule {
        label: "u-glide",
        when: |w| w.current() == 'u' && w.next_in(&GLIDE_VOWELS),
        emit: |_, out| out.push(Phoneme::W),
        advance: 1,
    },
    Rule {
        label: "u",
        when: |w| w.current() == 'u',
        emit: |_, out| out.push(Phoneme::Short(Vowel::U)),
        advance: 1,
    },
    // t
    Rule {
        label: "tl",
        when: |w| w.current() == 't' && w.next_is('l'),
        emit: |_, out| out.push(Phoneme::Tl),
        advance: 2,
    },
    Rule {
        label: "tz",
        when: |w| w.current() == 't' && w.next_in(&SIBILANTS),
        emit: |_, out| out.push(Phoneme::Tz),
        advance: 2,
    },
    Rule {
        label: "t",
        when: |w| w.current() == 't',
        emit: |_, out| out.push(Phoneme::T),
        advance: 1,
    },
    Rule {
        label: "sibilant",
        when: |w| SIBILANTS.contains(&w.current()),
        emit: |_, out| out.push(Phoneme::S),
        advance: 1,
    },
    Rule {
        label: "saltillo",
        when: |w| matches!(w.current(), 'h' | 'j'),
        emit: |_, out| out.push(Phoneme::Saltillo),
        advance: 1,
    },
    // y is a glide before any vowel and /i/ elsewhere
    Rule {
        label: "y-glide",
        when: |w| w.current() == 'y' && w.next().is_some_and(tables::is_any_vowel),
        emit: |_, out| out.push(Phoneme::J),
        advance: 1,
    },
    Rule {
        label: "y-vowel",
        when: |w| w.current() == 'y',
        emit: |_, out| out.push(Phoneme::Short(Vowel::I)),
        advance: 1,
    },
    Rule {
        label: "x",
        when: |w| w.current() == 'x',
        emit: |_, out| out.push(Phoneme::Sh),
        advance: 1,
    },
    Rule {
        label: "saltillo-vowel",
        when: |w| tables::saltillo_vowel(w.current()).is_some(),
        emit: |w, out| {
            if let Some(v) = tables::saltillo_vowel(w.current()) {
                out.push(Phoneme::Short(v));
                out.push(Phoneme::Saltillo);
            }
        },
        advance: 1,
    },
    Rule {
        label: "identity-consonant",
        when: |w| IDENTITY_CONSONANTS.contains(&w.current()),
        emit: |w, out| {
            out.push(match w.current() {
                'p' => Phoneme::P,
                'm' => Phoneme::M,
                'n' => Phoneme::N,
                'l' => Phoneme::L,
                'w' => Phoneme::W,
                _ => Phoneme::K,
            })
        },
        advance: 1,
    },
    Rule {
        label: "punctuation",
        when: |w| tables::is_punctuation(w.current()),
        emit: |w, out| out.push(Phoneme::Punct(w.current())),
        advance: 1,
    },
    Rule {
        label: "spanish",
        when: |w| {
            SPANISH_CONSONANTS.contains(&w.current()) || SPANISH_VOWELS.contains(&w.current())
        },
        emit: |w, out| out.push(Phoneme::Spanish(w.current())),
        advance: 1,
    },
];

/// Phonemes for one word plus the positions that were written uppercase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcription {
    phonemes: PhonemeBuf,
    uppercase_positions: Vec<usize>,
    saltillo: SaltilloGlyph,
}

impl Transcription {
    /// Phoneme sequence
    pub fn phonemes(&self) -> &[Phoneme] {
        &self.phonemes
    }

    /// Take ownership of the phoneme sequence
    pub fn into_phonemes(self) -> Vec<Phoneme> {
        self.phonemes.into_vec()
    }

    /// Char indices of the input word that were uppercase
    pub fn uppercase_positions(&self) -> &[usize] {
        &self.uppercase_positions
    }

    /// Tag text of each phoneme, saltillo in the configured glyph
    pub fn tags(&self) -> impl Iterator<Item = Cow<'static, str>> + '_ {
        self.phonemes.iter().map(|p| p.tag(self.saltillo))
    }

    /// Number of phonemes
    pub fn len(&self) -> usize {
        self.phonemes.len()
    }

    /// True for an empty word
    pub fn is_empty(&self) -> bool {
        self.phonemes.is_empty()
    }
}

impl fmt::Display for Transcription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_tags(&self.phonemes, self.saltillo))
    }
}

fn lowercase(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        // Multi-char lowercase forms (e.g. 'İ') are matched as written
        _ => ch,
    }
}

/// Convert a written word to phonemes
pub fn scan(word: &str, saltillo: SaltilloGlyph) -> Result<Transcription> {
    let mut lowered = Vec::with_capacity(word.len());
    let mut uppercase_positions = Vec::new();

    for (i, ch) in word.chars().enumerate() {
        if ch.is_uppercase() {
            uppercase_positions.push(i);
        }
        lowered.push(lowercase(ch));
    }

    let mut phonemes = PhonemeBuf::new();
    drive(&lowered, &[GRAPHEME_RULES], &mut phonemes).map_err(|unmatched| {
        Error::UnrecognizedGrapheme {
            grapheme: lowered[unmatched.position],
            position: unmatched.position,
        }
    })?;

    Ok(Transcription {
        phonemes,
        uppercase_positions,
        saltillo,
    })
}
