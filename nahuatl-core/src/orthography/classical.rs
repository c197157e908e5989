//! Classical (colonial) spelling

use super::{
    has_macron, is_short_vowel, next_quality_in, push_macron, push_short_vowel, SpellingRule,
};
use crate::phoneme::{Phoneme, Vowel};
use crate::rules::Rule;

pub(super) static RULES: &[SpellingRule] = &[
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
    Rule {
        label: "s-front",
        when: |w| w.current() == Phoneme::S && next_quality_in(w, &[Vowel::E, Vowel::I]),
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
        label: "loan-s",
        when: |w| w.current() == Phoneme::LoanS,
        emit: |_, out| out.push('s'),
        advance: 1,
    },
    Rule {
        label: "saltillo",
        when: |w| w.current() == Phoneme::Saltillo,
        emit: |_, out| out.push('h'),
        advance: 1,
    },
    Rule {
        label: "long-vowel",
        when: has_macron,
        emit: push_macron,
        advance: 1,
    },
];
