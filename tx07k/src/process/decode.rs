//! The per-line decoding pipeline.
//!
//! One capture line in, one tagged outcome out: either a fully validated
//! [`Report`] or the reason the line was dropped. Rejects never carry
//! across lines and none of them is fatal.

use anyhow::Result;
use log::trace;

use crate::process::recover::PulseTiming;
use crate::structs::frame::{Frame, decode_bcd};
use crate::structs::line::SignalLine;
use crate::structs::report::Report;
use crate::utils::crc::{CRC_FRAME_ALG, Crc4};
use crate::utils::errors::RejectReason;

/// Outcome of decoding one capture line.
#[derive(Debug)]
pub enum Outcome {
    /// The frame passed every gate.
    Decoded(Report),
    /// The line was dropped; decoding continues with the next line.
    Rejected(RejectReason),
}

/// Line decoder holding the timing windows and the prepared checksum.
#[derive(Debug)]
pub struct Decoder {
    timing: PulseTiming,
    crc: Crc4,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(PulseTiming::default())
    }
}

impl Decoder {
    pub fn new(timing: PulseTiming) -> Self {
        Self {
            timing,
            crc: Crc4::new(&CRC_FRAME_ALG),
        }
    }

    /// Runs one capture line through the pipeline.
    ///
    /// The outer `Result` carries only unexpected bit-reader failures;
    /// every per-line condition comes back as an [`Outcome`].
    pub fn decode_line(&self, line: &str) -> Result<Outcome> {
        let signal = SignalLine::parse(line);

        let Some(pulses) = signal.pulse_data() else {
            return Ok(Outcome::Rejected(RejectReason::NoPulseData));
        };

        let symbols = self.timing.recover(pulses);

        let Some(raw) = symbols.frame_value() else {
            return Ok(Outcome::Rejected(RejectReason::MalformedFrame { symbols }));
        };

        let frame = Frame::from_raw(raw)?;
        trace!("frame {raw:#012X}: {frame:?}");

        let calculated = self.crc.checksum(&frame.checksum_message());
        if calculated != frame.checksum {
            return Ok(Outcome::Rejected(RejectReason::ChecksumMismatch {
                calculated,
                read: frame.checksum,
                raw,
            }));
        }

        let Some(humidity) = decode_bcd(frame.humidity_raw) else {
            return Ok(Outcome::Rejected(RejectReason::InvalidBcd {
                symbols,
                value: frame.humidity_raw,
            }));
        };

        Ok(Outcome::Decoded(Report {
            channel: frame.channel,
            generation: frame.generation,
            flags: frame.flags,
            temperature_f: frame.temperature_f(),
            humidity,
        }))
    }
}

#[cfg(test)]
use crate::structs::frame::FRAME_BITS;

/// Builds a clean capture line for a 40-bit frame value.
#[cfg(test)]
fn pulse_line(raw: u64) -> String {
    let mut line = String::from("d1");

    for i in (0..FRAME_BITS).rev() {
        let gap = if raw >> i & 1 == 1 { 8 } else { 4 };
        line.push_str(&"0".repeat(gap - 1));
        line.push('1');
    }

    line
}

#[cfg(test)]
fn decoded(outcome: Outcome) -> Report {
    match outcome {
        Outcome::Decoded(report) => report,
        Outcome::Rejected(reason) => panic!("rejected: {reason}"),
    }
}

#[test]
fn decodes_recorded_capture() {
    let decoder = Decoder::default();
    let outcome = decoder.decode_line(crate::process::EXAMPLE_LINE).unwrap();

    assert_eq!(
        decoded(outcome).to_string(),
        "temp chan=1/50 flag=4/-b-- temp=70.7*F rh=48%"
    );
}

#[test]
fn example_line_matches_its_frame() {
    let mut line = pulse_line(0x50F4647481);
    line.push_str("00000");

    assert_eq!(line, crate::process::EXAMPLE_LINE);
}

#[test]
fn decodes_synthetic_frame() {
    // 0x1234567890 with its checksum nibble corrected to the computed 0x2.
    let decoder = Decoder::default();
    let outcome = decoder.decode_line(&pulse_line(0x1224567890)).unwrap();

    assert_eq!(
        decoded(outcome).to_string(),
        "temp chan=0/12 flag=4/-b-- temp=48.3*F rh=89%"
    );
}

#[test]
fn surrounding_fields_are_ignored() {
    let decoder = Decoder::default();
    let line = format!("t1692312 {} r-62", pulse_line(0x1224567890));

    decoded(decoder.decode_line(&line).unwrap());
}

#[test]
fn rejects_line_without_pulse_data() {
    let decoder = Decoder::default();

    let outcome = decoder.decode_line("t1692312 r-62").unwrap();
    assert!(matches!(
        outcome,
        Outcome::Rejected(RejectReason::NoPulseData)
    ));
}

#[test]
fn rejects_noise_silently_class() {
    let decoder = Decoder::default();

    for line in ["d101", "d10001", "d100000", "d"] {
        let outcome = decoder.decode_line(line).unwrap();
        assert!(
            matches!(outcome, Outcome::Rejected(RejectReason::MalformedFrame { .. })),
            "line {line:?}"
        );
    }
}

#[test]
fn rejects_checksum_mismatch_with_both_values() {
    // Channel nibble flipped from 1 to 0; the embedded checksum no longer
    // matches.
    let decoder = Decoder::default();
    let outcome = decoder.decode_line(&pulse_line(0x50F4647480)).unwrap();

    match outcome {
        Outcome::Rejected(RejectReason::ChecksumMismatch {
            calculated,
            read,
            raw,
        }) => {
            assert_eq!(calculated, 0x5);
            assert_eq!(read, 0xF);
            assert_eq!(raw, 0x50F4647480);
        }
        other => panic!("expected checksum mismatch, got {other:?}"),
    }
}

#[test]
fn rejects_non_bcd_humidity() {
    // Humidity byte 0x4A with the checksum corrected, so only the BCD gate
    // can fire.
    let decoder = Decoder::default();
    let outcome = decoder.decode_line(&pulse_line(0x50D46474A1)).unwrap();

    match outcome {
        Outcome::Rejected(RejectReason::InvalidBcd { symbols, value }) => {
            assert_eq!(value, 0x4A);
            assert_eq!(symbols.len(), FRAME_BITS);
        }
        other => panic!("expected BCD reject, got {other:?}"),
    }
}

#[test]
fn recorded_captures_all_decode() {
    let decoder = Decoder::default();

    for &raw in crate::process::search::RECORDED_FRAMES {
        decoded(decoder.decode_line(&pulse_line(raw)).unwrap());
    }
}
