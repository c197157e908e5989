//! Launey's spelling
//!
//! Classical conventions, except that a saltillo after `a e i o` is written as
//! an accent on the vowel: circumflex at the end of a word, grave (acute on
//! `o`) inside it. A saltillo anywhere else has no spelling here.

use super::{
    has_macron, is_short_vowel, next_quality_in, push_macron, push_short_vowel, SpellingRule,
};
use crate::phoneme::{Phoneme, Vowel};
use crate::rules::Rule;
use crate::tables;
use crate::window::Window;

/// Short vowel that can carry a saltillo accent, followed by the saltillo
fn aspirated(w: &Window<Phoneme>) -> bool {
    matches!(w.current(), Phoneme::Short(v) if v != Vowel::U) && w.next_is(Phoneme::Saltillo)
}

fn push_accented(w: &Window<Phoneme>, out: &mut String, accent: fn(Vowel) -> Option<&'static str>) {
    if let Some(spelling) = w.current().vowel().and_then(accent) {
        out.push_str(spelling);
    }
}

pub(super) static RULES: &[SpellingRule] = &[
    Rule {
        label: "aspirated-final",
        when: |w| aspirated(w) && w.after_next().is_none(),
        emit: |w, out| push_accented(w, out, tables::word_final_aspirated),
        advance: 2,
    },
    Rule {
        label: "aspirated-medial",
        when: aspirated,
        emit: |w, out| push_accented(w, out, tables::word_medial_aspirated),
        advance: 2,
    },
    Rule {
        label: "short-vowel",
        when: is_short_vowel,
        emit: push_short_vowel,
        advance: 1,
    },
    Rule {
        label: "plain-consonant",
        when: |w| {
            matches!(
                w.current(),
                Phoneme::P | Phoneme::N | Phoneme::L | Phoneme::M | Phoneme::T
            )
        },
        emit: |w, out| {
            out.push_str(match w.current() {
                Phoneme::P => "p",
                Phoneme::N => "n",
                Phoneme::L => "l",
                Phoneme::M => "m",
                _ => "t",
            })
        },
        advance: 1,
    },
    Rule {
        label: "w-onset",
        when: |w| w.current() == Phoneme::W && next_quality_in(w, &[Vowel::A, Vowel::I, Vowel::E]),
        emit: |_, out| out.push_str("hu"),
        advance: 1,
    },
    Rule {
        label: "w-coda",
        when: |w| w.current() == Phoneme::W,
        emit: |_, out| out.push_str("uh"),
        advance: 1,
    },
    Rule {
        label: "glide-y",
        when: |w| w.current() == Phoneme::J,
        emit: |_, out| out.push('y'),
        advance: 1,
    },
    Rule {
        label: "tl",
        when: |w| w.current() == Phoneme::Tl,
        emit: |_, out| out.push_str("tl"),
        advance: 1,
    },
    Rule {
        label: "k-front",
        when: |w| w.current() == Phoneme::K && next_quality_in(w, &[Vowel::I, Vowel::E]),
        emit: |_, out| out.push_str("qu"),
        advance: 1,
    },
    Rule {
        label: "k",
        when: |w| w.current() == Phoneme::K,
        emit: |_, out| out.push('c'),
        advance: 1,
    },
    Rule {
        label: "ch",
        when: |w| w.current() == Phoneme::Ch,
        emit: |_, out| out.push_str("ch"),
        advance: 1,
    },
    Rule {
        label: "kw-final",
        when: |w| w.current() == Phoneme::Kw && w.is_last(),
        emit: |_, out| out.push_str("uc"),
        advance: 1,
    },
    Rule {
        label: "kw",
        when: |w| w.current() == Phoneme::Kw,
        emit: |_, out| out.push_str("cu"),
        advance: 1,
    },
    Rule {
        label: "tz",
        when: |w| w.current() == Phoneme::Tz,
        emit: |_, out| out.push_str("tz"),
        advance: 1,
    },
    Rule {
        label: "x",
        when: |w| w.current() == Phoneme::Sh,
        emit: |_, out| out.push('x'),
        advance: 1,
    },
    // Only a short front vowel softens c here; long ones take z.
    Rule {
        label: "s-front",
        when: |w| {
            w.current() == Phoneme::S
                && w.next_in(&[Phoneme::Short(Vowel::E), Phoneme::Short(Vowel::I)])
        },
        emit: |_, out| out.push('c'),
        advance: 1,
    },
    Rule {
        label: "s",
        when: |w| w.current() == Phoneme::S,
        emit: |_, out| out.push('z'),
        advance: 1,
    },
    Rule {
        label: "long-vowel",
        when: has_macron,
        emit: push_macron,
        advance: 1,
    },
];

#[cfg(test)]
mod tests {
    use crate::phoneme::{Phoneme, Vowel};
    use crate::rules::{drive, Unmatched};

    fn spell(tokens: &[Phoneme]) -> Result<String, Unmatched> {
        let mut out = String::new();
        drive(tokens, &[super::RULES], &mut out)?;
        Ok(out)
    }

    const A: Phoneme = Phoneme::Short(Vowel::A);
    const E: Phoneme = Phoneme::Short(Vowel::E);
    const I: Phoneme = Phoneme::Short(Vowel::I);
    const O: Phoneme = Phoneme::Short(Vowel::O);
    const U: Phoneme = Phoneme::Short(Vowel::U);

    #[test]
    fn test_final_and_medial_saltillo_vowels() {
        assert_eq!(spell(&[A, Phoneme::Saltillo]).unwrap(), "â");
        assert_eq!(spell(&[A, Phoneme::Saltillo, Phoneme::T]).unwrap(), "àt");
        assert_eq!(spell(&[O, Phoneme::Saltillo]).unwrap(), "ô");
        assert_eq!(spell(&[O, Phoneme::Saltillo, Phoneme::K]).unwrap(), "óc");
        assert_eq!(
            spell(&[Phoneme::T, E, Phoneme::Saltillo, Phoneme::W, A, Phoneme::N]).unwrap(),
            "tèhuan"
        );
    }

    #[test]
    fn test_unpaired_saltillo_has_no_spelling() {
        assert_eq!(spell(&[Phoneme::Saltillo]), Err(Unmatched { position: 0 }));
        assert_eq!(spell(&[U, Phoneme::Saltillo]), Err(Unmatched { position: 1 }));
        assert_eq!(
            spell(&[Phoneme::Long(Vowel::A), Phoneme::Saltillo]),
            Err(Unmatched { position: 1 })
        );
        assert_eq!(
            spell(&[A, Phoneme::Saltillo, Phoneme::Saltillo]),
            Err(Unmatched { position: 2 })
        );
    }

    #[test]
    fn test_s_softens_only_before_short_front_vowels() {
        assert_eq!(spell(&[Phoneme::S, I]).unwrap(), "ci");
        assert_eq!(spell(&[Phoneme::S, Phoneme::Long(Vowel::I)]).unwrap(), "zī");
        assert_eq!(spell(&[I, Phoneme::S]).unwrap(), "iz");
    }

    #[test]
    fn test_shares_classical_consonants() {
        assert_eq!(
            spell(&[Phoneme::K, U, A, Phoneme::L, I]).unwrap(),
            "cuali"
        );
        assert_eq!(spell(&[Phoneme::K, E, Phoneme::Tz, A]).unwrap(), "quetza");
        assert_eq!(spell(&[I, Phoneme::Kw]).unwrap(), "iuc");
    }

    #[test]
    fn test_loan_s_is_classical_only() {
        assert!(spell(&[Phoneme::LoanS]).is_err());
    }
}
