//! Static grapheme/phoneme tables shared by both transducers
//!
//! All lookups are plain `match` expressions over small closed sets.

use crate::phoneme::Vowel;

/// Vowels that may repeat to mark length (`aa` = /a:/)
pub const DOUBLING_VOWELS: [char; 4] = ['a', 'e', 'i', 'o'];

/// Vowels that turn a preceding `u`/`hu`/`cu` into a glide
pub const GLIDE_VOWELS: [char; 3] = ['a', 'i', 'e'];

/// Front vowels that soften `c` to /s/
pub const FRONT_VOWELS: [char; 2] = ['i', 'e'];

/// Graphemes spelling /s/ across orthographies
pub const SIBILANTS: [char; 3] = ['s', 'ç', 'z'];

/// Consonants written the same way they are pronounced
pub const IDENTITY_CONSONANTS: [char; 6] = ['p', 'm', 'n', 'l', 'w', 'k'];

/// Consonants only found in Spanish loans
pub const SPANISH_CONSONANTS: [char; 3] = ['d', 'ñ', 'r'];

/// Acute-accented vowels only found in Spanish loans
pub const SPANISH_VOWELS: [char; 5] = ['á', 'é', 'í', 'ó', 'ú'];

/// Punctuation outside ASCII that is still passed through
const EXTRA_PUNCTUATION: [char; 1] = ['—'];

/// Macron vowel → vowel quality of the long vowel it spells
pub fn long_vowel(grapheme: char) -> Option<Vowel> {
    match grapheme {
        'ā' => Some(Vowel::A),
        'ē' => Some(Vowel::E),
        'ī' => Some(Vowel::I),
        'ō' => Some(Vowel::O),
        _ => None,
    }
}

/// Grave/circumflex vowel → vowel it carries a saltillo on
pub fn saltillo_vowel(grapheme: char) -> Option<Vowel> {
    match grapheme {
        'à' | 'â' => Some(Vowel::A),
        'è' | 'ê' => Some(Vowel::E),
        'ì' | 'î' => Some(Vowel::I),
        'ó' | 'ô' => Some(Vowel::O),
        _ => None,
    }
}

/// Plain vowel letter
pub fn bare_vowel(grapheme: char) -> Option<Vowel> {
    match grapheme {
        'a' => Some(Vowel::A),
        'e' => Some(Vowel::E),
        'i' => Some(Vowel::I),
        'o' => Some(Vowel::O),
        'u' => Some(Vowel::U),
        _ => None,
    }
}

/// Any vowel letter: bare, Spanish-accented, long or saltillo-marked
pub fn is_any_vowel(grapheme: char) -> bool {
    bare_vowel(grapheme).is_some()
        || SPANISH_VOWELS.contains(&grapheme)
        || long_vowel(grapheme).is_some()
        || saltillo_vowel(grapheme).is_some()
}

/// Punctuation passed through as a wrapped token
pub fn is_punctuation(grapheme: char) -> bool {
    grapheme.is_ascii_punctuation() || EXTRA_PUNCTUATION.contains(&grapheme)
}

/// Macron spelling of a long vowel
pub fn macron(vowel: Vowel) -> Option<&'static str> {
    match vowel {
        Vowel::A => Some("ā"),
        Vowel::E => Some("ē"),
        Vowel::I => Some("ī"),
        Vowel::O => Some("ō"),
        Vowel::U => None,
    }
}

/// Vowel + saltillo at the end of a word (circumflex)
pub fn word_final_aspirated(vowel: Vowel) -> Option<&'static str> {
    match vowel {
        Vowel::A => Some("â"),
        Vowel::E => Some("ê"),
        Vowel::I => Some("î"),
        Vowel::O => Some("ô"),
        Vowel::U => None,
    }
}

/// Vowel + saltillo inside a word (grave, acute on `o`)
pub fn word_medial_aspirated(vowel: Vowel) -> Option<&'static str> {
    match vowel {
        Vowel::A => Some("à"),
        Vowel::E => Some("è"),
        Vowel::I => Some("ì"),
        Vowel::O => Some("ó"),
        Vowel::U => None,
    }
}
