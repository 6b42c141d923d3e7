//! Digit entry for the goto overlay.

use heapless::String;

/// Longest page number the keypad accepts.
pub const GOTO_MAX_DIGITS: usize = 5;

/// Fixed-capacity buffer of ASCII digits forming a 1-based page number.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GotoBuffer {
    digits: String<GOTO_MAX_DIGITS>,
}

impl GotoBuffer {
    pub const fn new() -> Self {
        Self {
            digits: String::new(),
        }
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Appends `digit` (`0..=9`). Returns `false` and leaves the buffer
    /// untouched when it is full or `digit` is not a decimal digit.
    pub fn append_digit(&mut self, digit: u8) -> bool {
        if digit > 9 || self.digits.len() >= GOTO_MAX_DIGITS {
            return false;
        }

        self.digits.push(char::from(b'0' + digit)).is_ok()
    }

    /// Parses the entry and empties the buffer. An empty entry yields `0`.
    pub fn commit(&mut self) -> u32 {
        let value = self
            .digits
            .bytes()
            .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
        self.digits.clear();
        value
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_accumulate_and_commit_clears() {
        let mut buffer = GotoBuffer::new();
        assert!(buffer.append_digit(1));
        assert!(buffer.append_digit(5));
        assert_eq!(buffer.as_str(), "15");
        assert_eq!(buffer.commit(), 15);
        assert!(buffer.is_empty());
    }

    #[test]
    fn sixth_digit_is_ignored() {
        let mut buffer = GotoBuffer::new();
        for digit in [9, 8, 7, 6, 5] {
            assert!(buffer.append_digit(digit));
        }
        assert!(!buffer.append_digit(4));
        assert_eq!(buffer.as_str(), "98765");
        assert_eq!(buffer.commit(), 98_765);
    }

    #[test]
    fn empty_entry_commits_zero() {
        let mut buffer = GotoBuffer::new();
        assert_eq!(buffer.commit(), 0);
    }

    #[test]
    fn non_digits_are_rejected() {
        let mut buffer = GotoBuffer::new();
        assert!(!buffer.append_digit(10));
        assert!(buffer.is_empty());
    }

    #[test]
    fn clear_discards_entry() {
        let mut buffer = GotoBuffer::new();
        buffer.append_digit(4);
        buffer.append_digit(2);
        buffer.clear();
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.commit(), 0);
    }
}
