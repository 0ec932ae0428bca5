//! Reject taxonomy for capture-line decoding.
//!
//! Every reject is scoped to the line that produced it; the caller logs it
//! at whatever level its class deserves and moves on to the next line.
//! Nothing here is ever fatal.

use thiserror::Error;

use crate::structs::symbol::SymbolString;

/// Why a capture line was dropped.
#[derive(Debug, Error)]
pub enum RejectReason {
    /// The line carried no pulse-train field.
    #[error("no pulse data field in line")]
    NoPulseData,

    /// Symbol recovery did not yield a clean 40-symbol frame.
    ///
    /// This is the expected fate of RF noise, so it belongs to the silent
    /// reject class.
    #[error("malformed frame: \"{symbols}\" ({n} symbols)", n = .symbols.len())]
    MalformedFrame { symbols: SymbolString },

    /// The embedded checksum nibble disagrees with the computed one.
    #[error("checksum mismatch: calculated {calculated:#X}, read {read:#X} (frame {raw:#012X})")]
    ChecksumMismatch { calculated: u8, read: u8, raw: u64 },

    /// The humidity byte is not packed BCD.
    #[error("humidity byte {value:#04X} in \"{symbols}\" is not packed BCD")]
    InvalidBcd { symbols: SymbolString, value: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::symbol::Symbol;

    #[test]
    fn display_carries_diagnostic_payload() {
        let symbols: SymbolString =
            [Symbol::Zero, Symbol::One, Symbol::Invalid].into_iter().collect();

        assert_eq!(
            RejectReason::MalformedFrame { symbols: symbols.clone() }.to_string(),
            "malformed frame: \"01x\" (3 symbols)"
        );
        assert_eq!(
            RejectReason::ChecksumMismatch {
                calculated: 0x5,
                read: 0xF,
                raw: 0x50F4647480,
            }
            .to_string(),
            "checksum mismatch: calculated 0x5, read 0xF (frame 0x50F4647480)"
        );
        assert_eq!(
            RejectReason::InvalidBcd { symbols, value: 0x4A }.to_string(),
            "humidity byte 0x4A in \"01x\" is not packed BCD"
        );
    }
}
