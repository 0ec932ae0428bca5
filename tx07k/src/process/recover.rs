//! Gap symbol recovery from digitized pulse trains.
//!
//! The sensor keys data on the distance between pulses: a short period
//! carries a 0, a long period a 1. Periods are measured in ticks of the
//! digitized capture and classified against the nominal lengths with a
//! symmetric tolerance; a period outside both windows becomes an invalid
//! symbol and later condemns the whole frame.

use log::trace;

use crate::structs::symbol::{Symbol, SymbolString};

/// Nominal short (data 0) pulse period in ticks.
pub const SHORT_PERIOD: usize = 4;

/// Nominal long (data 1) pulse period in ticks.
pub const LONG_PERIOD: usize = 8;

/// Symmetric classification tolerance in ticks.
pub const PERIOD_FUDGE: usize = 1;

/// Pulse-period classification windows.
///
/// The defaults are the TX07K-THC protocol timing; other values are only
/// for experimenting with related sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseTiming {
    pub short: usize,
    pub long: usize,
    pub fudge: usize,
}

impl Default for PulseTiming {
    fn default() -> Self {
        Self {
            short: SHORT_PERIOD,
            long: LONG_PERIOD,
            fudge: PERIOD_FUDGE,
        }
    }
}

impl PulseTiming {
    /// Classifies one pulse period.
    ///
    /// The long window is checked first; the order matters when narrowed
    /// windows touch.
    pub fn classify(&self, gap: usize) -> Symbol {
        if gap > self.long + self.fudge {
            Symbol::Invalid
        } else if gap >= self.long.saturating_sub(self.fudge) {
            Symbol::One
        } else if gap > self.short + self.fudge {
            Symbol::Invalid
        } else if gap >= self.short.saturating_sub(self.fudge) {
            Symbol::Zero
        } else {
            Symbol::Invalid
        }
    }

    /// Recovers the symbol string from a digitized pulse train.
    ///
    /// Trailing zeros cannot belong to the transmission and are stripped
    /// first; the final pulse is the stop symbol and carries no data bit.
    /// Recovery walks pulse to pulse, classifying each period. A train
    /// whose last pulse goes missing simply stops early and leaves a short
    /// string for the frame gate to reject.
    pub fn recover(&self, pulses: &str) -> SymbolString {
        let mut rest = pulses.trim_end_matches('0').as_bytes();
        let mut symbols = SymbolString::default();

        while rest != b"1" {
            let Some(gap) = next_pulse(rest) else {
                break;
            };

            symbols.push(self.classify(gap));
            rest = &rest[gap..];
        }

        trace!("recovered {} symbols: {symbols}", symbols.len());

        symbols
    }
}

/// Index of the next pulse at offset 1 or later.
fn next_pulse(pulses: &[u8]) -> Option<usize> {
    let tail = pulses.get(1..)?;

    tail.iter().position(|&b| b == b'1').map(|i| i + 1)
}

#[cfg(test)]
fn recovered(pulses: &str) -> String {
    PulseTiming::default().recover(pulses).to_string()
}

#[test]
fn gap_classification_windows() {
    let timing = PulseTiming::default();

    for (gap, expected) in [
        (1, Symbol::Invalid),
        (2, Symbol::Invalid),
        (3, Symbol::Zero),
        (4, Symbol::Zero),
        (5, Symbol::Zero),
        (6, Symbol::Invalid),
        (7, Symbol::One),
        (8, Symbol::One),
        (9, Symbol::One),
        (10, Symbol::Invalid),
        (11, Symbol::Invalid),
    ] {
        assert_eq!(timing.classify(gap), expected, "gap {gap}");
    }
}

#[test]
fn nominal_periods_recover_cleanly() {
    assert_eq!(recovered("10001"), "0");
    assert_eq!(recovered("100000001"), "1");
    assert_eq!(recovered("100010001"), "00");
    assert_eq!(recovered("1000100000001"), "01");
}

#[test]
fn off_nominal_periods_within_fudge() {
    assert_eq!(recovered("1001"), "0");
    assert_eq!(recovered("1000010000001"), "01");
}

#[test]
fn out_of_window_periods_are_invalid() {
    assert_eq!(recovered("101"), "x");
    assert_eq!(recovered("1000001"), "x");
    assert_eq!(recovered("10000000001"), "x");
}

#[test]
fn trailing_zeros_and_stop_pulse_carry_no_symbols() {
    assert_eq!(recovered("100000"), "");
    assert_eq!(recovered("1"), "");
    assert_eq!(recovered("1000100000"), "0");
}

#[test]
fn pulseless_train_stops_without_panicking() {
    assert_eq!(recovered(""), "");
    assert_eq!(recovered("0000"), "");
}

#[test]
fn leading_zeros_count_into_the_first_period() {
    assert_eq!(recovered("0001"), "0");
}

#[test]
fn narrowed_windows() {
    let timing = PulseTiming {
        short: 4,
        long: 8,
        fudge: 0,
    };

    assert_eq!(timing.classify(4), Symbol::Zero);
    assert_eq!(timing.classify(5), Symbol::Invalid);
    assert_eq!(timing.classify(8), Symbol::One);
    assert_eq!(timing.classify(7), Symbol::Invalid);
}
