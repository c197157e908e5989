//! Ordered rewrite rules and the single-pass driver that runs them
//!
//! A rule is a predicate over the lookahead [`Window`], an emission into an
//! output sink, and a fixed cursor advance. Rules are tried in order and the
//! first one whose predicate holds fires; later rules are not consulted.

use crate::window::Window;

/// One context-sensitive rewrite rule
pub struct Rule<T, S: ?Sized> {
    /// Short name, reported in trace logs
    pub label: &'static str,
    /// Whether the rule applies at this window
    pub when: fn(&Window<T>) -> bool,
    /// Appends the rule's output to the sink
    pub emit: fn(&Window<T>, &mut S),
    /// Symbols consumed when the rule fires (at least 1)
    pub advance: usize,
}

impl<T, S: ?Sized> std::fmt::Debug for Rule<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("label", &self.label)
            .field("advance", &self.advance)
            .finish()
    }
}

/// No rule in any layer matched the symbol at `position`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unmatched {
    /// Cursor position of the offending symbol
    pub position: usize,
}

/// Find the first rule in `layers` that applies to `window`
///
/// Layers are searched in order, each front to back.
pub fn first_match<'r, T: Copy, S: ?Sized>(
    layers: &[&'r [Rule<T, S>]],
    window: &Window<T>,
) -> Option<&'r Rule<T, S>> {
    layers
        .iter()
        .flat_map(|layer| layer.iter())
        .find(|rule| (rule.when)(window))
}

/// Run the rule layers over `symbols` from position 0 to the end
///
/// Each step fires exactly one rule and moves the cursor forward by that
/// rule's advance. Stops at the first symbol no rule accepts; whatever was
/// emitted into `sink` up to that point should be discarded by the caller.
pub fn drive<T: Copy, S: ?Sized>(
    symbols: &[T],
    layers: &[&[Rule<T, S>]],
    sink: &mut S,
) -> Result<(), Unmatched> {
    let mut position = 0;

    while let Some(window) = Window::at(symbols, position) {
        let rule = first_match(layers, &window).ok_or(Unmatched { position })?;
        debug_assert!(rule.advance >= 1, "rule '{}' does not advance", rule.label);

        log::trace!("rule '{}' fired at {}", rule.label, position);
        (rule.emit)(&window, sink);
        position += rule.advance.max(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    static DIGITS: &[Rule<char, String>] = &[
        Rule {
            label: "pair",
            when: |w| w.current() == '1' && w.next_is('2'),
            emit: |_, out| out.push_str("twelve "),
            advance: 2,
        },
        Rule {
            label: "one",
            when: |w| w.current() == '1',
            emit: |_, out| out.push_str("one "),
            advance: 1,
        },
        Rule {
            label: "two",
            when: |w| w.current() == '2',
            emit: |_, out| out.push_str("two "),
            advance: 1,
        },
    ];

    static SPACE: &[Rule<char, String>] = &[Rule {
        label: "space",
        when: |w| w.current() == ' ',
        emit: |_, out| out.push('_'),
        advance: 1,
    }];

    fn run(input: &str, layers: &[&[Rule<char, String>]]) -> Result<String, Unmatched> {
        let chars: Vec<char> = input.chars().collect();
        let mut out = String::new();
        drive(&chars, layers, &mut out)?;
        Ok(out)
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(run("12", &[DIGITS]).unwrap(), "twelve ");
        assert_eq!(run("21", &[DIGITS]).unwrap(), "two one ");
    }

    #[test]
    fn test_unmatched_reports_position() {
        assert_eq!(run("11x", &[DIGITS]), Err(Unmatched { position: 2 }));
    }

    #[test]
    fn test_layers_are_searched_in_order() {
        assert!(run("1 2", &[DIGITS]).is_err());
        assert_eq!(run("1 2", &[SPACE, DIGITS]).unwrap(), "one _two ");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(run("", &[DIGITS]).unwrap(), "");
    }

    #[test]
    fn test_rule_debug_omits_functions() {
        let debug = format!("{:?}", DIGITS[0]);
        assert!(debug.contains("pair"));
        assert!(debug.contains("advance: 2"));
    }
}
