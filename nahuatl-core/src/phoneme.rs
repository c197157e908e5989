//! Phoneme inventory shared by both transducers
//!
//! Phonemes are a closed enum. Their text form ("tag") follows the X-SAMPA-like
//! convention used in the word lists: `tK` for the lateral affricate, `k_w` for
//! the labialized stop, `a:` for a long vowel and so on. Only the saltillo tag
//! depends on configuration, see [`SaltilloGlyph`].

use crate::config::SaltilloGlyph;
use crate::tables;
use std::borrow::Cow;

const PUNCT_OPEN: &str = "<punct>";
const PUNCT_CLOSE: &str = "</punct>";
const LOAN_S_TAG: &str = "<es>s</es>";

/// Vowel quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Vowel {
    A,
    E,
    I,
    O,
    U,
}

impl Vowel {
    /// All vowel qualities
    pub const ALL: [Vowel; 5] = [Vowel::A, Vowel::E, Vowel::I, Vowel::O, Vowel::U];

    /// Bare letter for this vowel
    pub fn as_str(self) -> &'static str {
        match self {
            Vowel::A => "a",
            Vowel::E => "e",
            Vowel::I => "i",
            Vowel::O => "o",
            Vowel::U => "u",
        }
    }

    fn long_tag(self) -> &'static str {
        match self {
            Vowel::A => "a:",
            Vowel::E => "e:",
            Vowel::I => "i:",
            Vowel::O => "o:",
            Vowel::U => "u:",
        }
    }
}

/// A single phoneme token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phoneme {
    /// Short vowel, `a`
    Short(Vowel),
    /// Long vowel, `a:`
    Long(Vowel),
    /// `p`
    P,
    /// `t`
    T,
    /// `k`
    K,
    /// `m`
    M,
    /// `n`
    N,
    /// `l`
    L,
    /// `s`
    S,
    /// Labial glide, `w`
    W,
    /// Palatal glide, `j`
    J,
    /// Postalveolar fricative, `S`
    Sh,
    /// Lateral affricate, `tK`
    Tl,
    /// Postalveolar affricate, `tS`
    Ch,
    /// Alveolar affricate, `ts`
    Tz,
    /// Labialized velar stop, `k_w`
    Kw,
    /// Glottal stop or fricative
    Saltillo,
    /// Spanish-only segment kept as written (`d`, `ñ`, `r`, `á`, ...)
    Spanish(char),
    /// Spanish /s/ in a loan, `<es>s</es>`
    LoanS,
    /// Punctuation carried through transcription, `<punct>,</punct>`
    Punct(char),
}

impl Phoneme {
    /// Text form of the token
    pub fn tag(&self, saltillo: SaltilloGlyph) -> Cow<'static, str> {
        let tag = match self {
            Phoneme::Short(v) => v.as_str(),
            Phoneme::Long(v) => v.long_tag(),
            Phoneme::P => "p",
            Phoneme::T => "t",
            Phoneme::K => "k",
            Phoneme::M => "m",
            Phoneme::N => "n",
            Phoneme::L => "l",
            Phoneme::S => "s",
            Phoneme::W => "w",
            Phoneme::J => "j",
            Phoneme::Sh => "S",
            Phoneme::Tl => "tK",
            Phoneme::Ch => "tS",
            Phoneme::Tz => "ts",
            Phoneme::Kw => "k_w",
            Phoneme::Saltillo => saltillo.tag(),
            Phoneme::LoanS => LOAN_S_TAG,
            Phoneme::Spanish(c) => return Cow::Owned(c.to_string()),
            Phoneme::Punct(c) => return Cow::Owned(format!("{PUNCT_OPEN}{c}{PUNCT_CLOSE}")),
        };
        Cow::Borrowed(tag)
    }

    /// Parse a token from its text form
    ///
    /// The saltillo is only recognised in the configured spelling, so with
    /// [`SaltilloGlyph::GlottalStop`] the tag `h` is not a phoneme.
    pub fn parse(tag: &str, saltillo: SaltilloGlyph) -> Option<Phoneme> {
        if tag == saltillo.tag() {
            return Some(Phoneme::Saltillo);
        }

        let phoneme = match tag {
            "a" => Phoneme::Short(Vowel::A),
            "e" => Phoneme::Short(Vowel::E),
            "i" => Phoneme::Short(Vowel::I),
            "o" => Phoneme::Short(Vowel::O),
            "u" => Phoneme::Short(Vowel::U),
            "a:" => Phoneme::Long(Vowel::A),
            "e:" => Phoneme::Long(Vowel::E),
            "i:" => Phoneme::Long(Vowel::I),
            "o:" => Phoneme::Long(Vowel::O),
            "u:" => Phoneme::Long(Vowel::U),
            "p" => Phoneme::P,
            "t" => Phoneme::T,
            "k" => Phoneme::K,
            "m" => Phoneme::M,
            "n" => Phoneme::N,
            "l" => Phoneme::L,
            "s" => Phoneme::S,
            "w" => Phoneme::W,
            "j" => Phoneme::J,
            "S" => Phoneme::Sh,
            "tK" => Phoneme::Tl,
            "tS" => Phoneme::Ch,
            "ts" => Phoneme::Tz,
            "k_w" => Phoneme::Kw,
            LOAN_S_TAG => Phoneme::LoanS,
            _ => return Self::parse_wrapped(tag),
        };
        Some(phoneme)
    }

    fn parse_wrapped(tag: &str) -> Option<Phoneme> {
        if let Some(inner) = tag
            .strip_prefix(PUNCT_OPEN)
            .and_then(|rest| rest.strip_suffix(PUNCT_CLOSE))
        {
            return single_char(inner)
                .filter(|c| tables::is_punctuation(*c))
                .map(Phoneme::Punct);
        }

        single_char(tag)
            .filter(|c| {
                tables::SPANISH_CONSONANTS.contains(c) || tables::SPANISH_VOWELS.contains(c)
            })
            .map(Phoneme::Spanish)
    }

    /// Vowel quality of a short or long vowel
    pub fn vowel(&self) -> Option<Vowel> {
        match self {
            Phoneme::Short(v) | Phoneme::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// True for short vowels
    pub fn is_short_vowel(&self) -> bool {
        matches!(self, Phoneme::Short(_))
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Join phoneme tags with single spaces
pub fn format_tags(phonemes: &[Phoneme], saltillo: SaltilloGlyph) -> String {
    let mut out = String::with_capacity(phonemes.len() * 2);
    for (i, phoneme) in phonemes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&phoneme.tag(saltillo));
    }
    out
}
