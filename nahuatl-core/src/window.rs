//! Lookahead window for the rewrite scanners
//!
//! Every rule in both directions decides on the same three-symbol view:
//! the symbol under the cursor, the next one and the one after that
//! ("huiptla", the day after tomorrow). Nothing behind the cursor is visible.

/// Three-symbol view at a cursor position
///
/// Missing lookahead at the end of the input is `None`, so "no following
/// symbol" is never confused with a following empty symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window<T> {
    current: T,
    next: Option<T>,
    after_next: Option<T>,
    position: usize,
}

impl<T: Copy> Window<T> {
    /// Build the window at `position`, or `None` once the cursor is past the end
    pub fn at(symbols: &[T], position: usize) -> Option<Self> {
        let current = *symbols.get(position)?;
        Some(Self {
            current,
            next: symbols.get(position + 1).copied(),
            after_next: symbols.get(position + 2).copied(),
            position,
        })
    }

    /// Symbol under the cursor
    #[inline]
    pub fn current(&self) -> T {
        self.current
    }

    /// Symbol at position + 1
    #[inline]
    pub fn next(&self) -> Option<T> {
        self.next
    }

    /// Symbol at position + 2
    #[inline]
    pub fn after_next(&self) -> Option<T> {
        self.after_next
    }

    /// Cursor position in the input
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// True when the cursor sits on the final symbol
    #[inline]
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }

    /// Look ahead n positions (0 = current). Only two positions are visible.
    pub fn peek(&self, n: usize) -> Option<T> {
        match n {
            0 => Some(self.current),
            1 => self.next,
            2 => self.after_next,
            _ => None,
        }
    }
}

impl<T: Copy + PartialEq> Window<T> {
    /// Check if the next symbol is `target`
    #[inline]
    pub fn next_is(&self, target: T) -> bool {
        self.next == Some(target)
    }

    /// Check if the symbol after next is `target`
    #[inline]
    pub fn after_next_is(&self, target: T) -> bool {
        self.after_next == Some(target)
    }

    /// Check if the next symbol is one of `set`
    #[inline]
    pub fn next_in(&self, set: &[T]) -> bool {
        self.next.is_some_and(|s| set.contains(&s))
    }

    /// Check if the symbol after next is one of `set`
    #[inline]
    pub fn after_next_in(&self, set: &[T]) -> bool {
        self.after_next.is_some_and(|s| set.contains(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_in_the_middle() {
        let chars: Vec<char> = "calli".chars().collect();
        let window = Window::at(&chars, 1).unwrap();

        assert_eq!(window.current(), 'a');
        assert_eq!(window.next(), Some('l'));
        assert_eq!(window.after_next(), Some('l'));
        assert_eq!(window.position(), 1);
        assert!(!window.is_last());
    }

    #[test]
    fn test_window_at_the_end() {
        let chars: Vec<char> = "tl".chars().collect();

        let window = Window::at(&chars, 0).unwrap();
        assert_eq!(window.after_next(), None);
        assert!(window.next_is('l'));

        let last = Window::at(&chars, 1).unwrap();
        assert!(last.is_last());
        assert_eq!(last.peek(1), None);

        assert!(Window::at(&chars, 2).is_none());
    }

    #[test]
    fn test_peek_is_bounded_to_two() {
        let chars: Vec<char> = "xochitl".chars().collect();
        let window = Window::at(&chars, 0).unwrap();

        assert_eq!(window.peek(0), Some('x'));
        assert_eq!(window.peek(2), Some('c'));
        assert_eq!(window.peek(3), None);
    }

    #[test]
    fn test_set_membership() {
        let chars: Vec<char> = "qua".chars().collect();
        let window = Window::at(&chars, 0).unwrap();

        assert!(window.next_in(&['u', 'o']));
        assert!(window.after_next_in(&['a', 'i', 'e']));
        assert!(!window.after_next_is('i'));
    }

    #[test]
    fn test_empty_input_has_no_window() {
        let empty: [char; 0] = [];
        assert!(Window::at(&empty, 0).is_none());
    }
}
