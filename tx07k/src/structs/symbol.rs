//! Ternary gap symbols recovered from a pulse train.

use std::fmt;
use std::fmt::{Display, Formatter};

use crate::structs::frame::FRAME_BITS;

/// One classified pulse period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Short period, data bit 0.
    Zero,
    /// Long period, data bit 1.
    One,
    /// Period outside both tolerance windows.
    Invalid,
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match self {
            Symbol::Zero => '0',
            Symbol::One => '1',
            Symbol::Invalid => 'x',
        };

        write!(f, "{c}")
    }
}

/// Symbol sequence recovered from one transmission.
///
/// Renders as the compact form used in diagnostics, e.g. `0101x…`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolString(Vec<Symbol>);

impl SymbolString {
    pub fn push(&mut self, symbol: Symbol) {
        self.0.push(symbol);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Packs the symbols into the 40-bit frame value, most significant
    /// bit first.
    ///
    /// Returns `None` unless the string is exactly [`FRAME_BITS`] clean
    /// symbols. That condition is the whole frame acceptance rule:
    /// anything shorter, longer or containing an invalid symbol is noise.
    pub fn frame_value(&self) -> Option<u64> {
        if self.0.len() != FRAME_BITS {
            return None;
        }

        self.0.iter().try_fold(0u64, |value, symbol| match symbol {
            Symbol::Zero => Some(value << 1),
            Symbol::One => Some(value << 1 | 1),
            Symbol::Invalid => None,
        })
    }
}

impl Display for SymbolString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }

        Ok(())
    }
}

impl FromIterator<Symbol> for SymbolString {
    fn from_iter<T: IntoIterator<Item = Symbol>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(s: &str) -> SymbolString {
        s.chars()
            .map(|c| match c {
                '0' => Symbol::Zero,
                '1' => Symbol::One,
                _ => Symbol::Invalid,
            })
            .collect()
    }

    #[test]
    fn display_compact_form() {
        assert_eq!(symbols("01x10").to_string(), "01x10");
        assert_eq!(SymbolString::default().to_string(), "");
    }

    #[test]
    fn frame_value_packs_forty_clean_symbols() {
        let all_zero = symbols(&"0".repeat(40));
        assert_eq!(all_zero.frame_value(), Some(0));

        let all_one = symbols(&"1".repeat(40));
        assert_eq!(all_one.frame_value(), Some(0xFF_FFFF_FFFF));

        let real = symbols("0101000011110100011001000111010010000001");
        assert_eq!(real.frame_value(), Some(0x50F4647481));
    }

    #[test]
    fn frame_value_rejects_wrong_length() {
        assert_eq!(symbols(&"0".repeat(39)).frame_value(), None);
        assert_eq!(symbols(&"0".repeat(41)).frame_value(), None);
        assert_eq!(SymbolString::default().frame_value(), None);
    }

    #[test]
    fn frame_value_rejects_invalid_symbols() {
        let mut dirty = String::from("x");
        dirty.push_str(&"0".repeat(39));

        assert_eq!(symbols(&dirty).frame_value(), None);
    }
}
