//! SEP (Secretaría de Educación Pública) spelling

use super::{has_macron, is_short_vowel, push_macron, push_short_vowel, SpellingRule};
use crate::phoneme::Phoneme;
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
                Phoneme::P | Phoneme::N | Phoneme::S | Phoneme::K | Phoneme::M | Phoneme::T
            )
        },
        emit: |w, out| {
            out.push_str(match w.current() {
                Phoneme::P => "p",
                Phoneme::N => "n",
                Phoneme::S => "s",
                Phoneme::K => "k",
                Phoneme::M => "m",
                _ => "t",
            })
        },
        advance: 1,
    },
    Rule {
        label: "kw",
        when: |w| w.current() == Phoneme::Kw,
        emit: |_, out| out.push_str("ku"),
        advance: 1,
    },
    // SEP writes geminate l as a single letter.
    Rule {
        label: "double-l",
        when: |w| w.current() == Phoneme::L && w.next_is(Phoneme::L),
        emit: |_, out| out.push('l'),
        advance: 2,
    },
    Rule {
        label: "l",
        when: |w| w.current() == Phoneme::L,
        emit: |_, out| out.push('l'),
        advance: 1,
    },
    Rule {
        label: "w",
        when: |w| w.current() == Phoneme::W,
        emit: |_, out| out.push('u'),
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
        label: "ch",
        when: |w| w.current() == Phoneme::Ch,
        emit: |_, out| out.push_str("ch"),
        advance: 1,
    },
    Rule {
        label: "ts",
        when: |w| w.current() == Phoneme::Tz,
        emit: |_, out| out.push_str("ts"),
        advance: 1,
    },
    Rule {
        label: "x",
        when: |w| w.current() == Phoneme::Sh,
        emit: |_, out| out.push('x'),
        advance: 1,
    },
    Rule {
        label: "saltillo",
        when: |w| w.current() == Phoneme::Saltillo,
        emit: |_, out| out.push('j'),
        advance: 1,
    },
    Rule {
        label: "long-vowel",
        when: has_macron,
        emit: push_macron,
        advance: 1,
    },
];
