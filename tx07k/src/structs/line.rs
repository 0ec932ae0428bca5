//! Capture-line tokenization.
//!
//! A capture line is a sequence of whitespace-separated tokens; the first
//! character of each token is its field key, the remainder its value. The
//! decode pipeline consumes only the pulse-train field, other fields ride
//! along untouched.

use std::collections::HashMap;

/// Field key carrying the digitized pulse train.
pub const PULSE_DATA_KEY: char = 'd';

/// One capture line split into key/value fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignalLine<'a> {
    fields: HashMap<char, &'a str>,
}

impl<'a> SignalLine<'a> {
    /// Splits a line into its fields. A later duplicate of a key wins.
    pub fn parse(line: &'a str) -> Self {
        let mut fields = HashMap::new();

        for token in line.split_whitespace() {
            let mut chars = token.chars();
            if let Some(key) = chars.next() {
                fields.insert(key, chars.as_str());
            }
        }

        Self { fields }
    }

    /// Returns the value of `key`, if the line carries that field.
    pub fn field(&self, key: char) -> Option<&'a str> {
        self.fields.get(&key).copied()
    }

    /// Returns the digitized pulse train.
    pub fn pulse_data(&self) -> Option<&'a str> {
        self.field(PULSE_DATA_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_keyed_tokens() {
        let line = SignalLine::parse("d10001 t1692312 r-62");

        assert_eq!(line.pulse_data(), Some("10001"));
        assert_eq!(line.field('t'), Some("1692312"));
        assert_eq!(line.field('r'), Some("-62"));
        assert_eq!(line.field('q'), None);
    }

    #[test]
    fn bare_key_has_empty_value() {
        let line = SignalLine::parse("d");

        assert_eq!(line.pulse_data(), Some(""));
    }

    #[test]
    fn last_duplicate_wins() {
        let line = SignalLine::parse("d111 d000");

        assert_eq!(line.pulse_data(), Some("000"));
    }

    #[test]
    fn blank_line_has_no_fields() {
        assert_eq!(SignalLine::parse("").pulse_data(), None);
        assert_eq!(SignalLine::parse("   \t ").pulse_data(), None);
    }
}
