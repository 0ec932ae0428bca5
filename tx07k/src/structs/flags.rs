//! Status flag nibble of a sensor frame.

use std::fmt;
use std::fmt::{Display, Formatter};

/// Status bits transmitted with every reading.
///
/// Renders as the four-character mnemonic used in report lines: `T` for a
/// button-triggered transmission, `b` for battery low, `f`/`r` for a
/// falling/rising temperature trend, `-` for each unset bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusFlags(u8);

impl StatusFlags {
    /// The transmission was forced with the TX button.
    pub fn button(self) -> bool {
        self.0 & 0x8 != 0
    }

    /// Battery voltage is low.
    pub fn battery_low(self) -> bool {
        self.0 & 0x4 != 0
    }

    /// Temperature trend is falling.
    pub fn temperature_falling(self) -> bool {
        self.0 & 0x2 != 0
    }

    /// Temperature trend is rising.
    pub fn temperature_rising(self) -> bool {
        self.0 & 0x1 != 0
    }

    /// The raw flag nibble.
    pub fn raw(self) -> u8 {
        self.0
    }
}

impl From<u8> for StatusFlags {
    fn from(nibble: u8) -> Self {
        Self(nibble & 0xF)
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            if self.button() { 'T' } else { '-' },
            if self.battery_low() { 'b' } else { '-' },
            if self.temperature_falling() { 'f' } else { '-' },
            if self.temperature_rising() { 'r' } else { '-' },
        )
    }
}

#[test]
fn mnemonic_rendering() {
    assert_eq!(StatusFlags::from(0x0).to_string(), "----");
    assert_eq!(StatusFlags::from(0xF).to_string(), "Tbfr");
    assert_eq!(StatusFlags::from(0x8).to_string(), "T---");
    assert_eq!(StatusFlags::from(0x4).to_string(), "-b--");
    assert_eq!(StatusFlags::from(0x5).to_string(), "-b-r");
}

#[test]
fn from_masks_to_nibble() {
    let flags = StatusFlags::from(0xF4);

    assert_eq!(flags.raw(), 0x4);
    assert!(flags.battery_low());
    assert!(!flags.button());
}
