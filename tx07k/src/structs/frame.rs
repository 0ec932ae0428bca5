//! The 40-bit sensor frame and its fixed field layout.
//!
//! A transmission is five bytes, most significant bit first:
//!
//! | bits  | field           |
//! |-------|-----------------|
//! | 39-32 | generation      |
//! | 31-28 | checksum        |
//! | 27-24 | status flags    |
//! | 23-12 | raw temperature |
//! | 11-4  | raw humidity    |
//! | 3-0   | channel         |

use anyhow::{Result, bail};

use crate::structs::flags::StatusFlags;
use crate::utils::bitstream_io::BsIoSliceReader;

/// Bits in one frame.
pub const FRAME_BITS: usize = 40;

/// Bytes in one frame image.
pub const FRAME_BYTES: usize = FRAME_BITS / 8;

/// Hex digits in one frame.
pub const FRAME_NIBBLES: usize = FRAME_BITS / 4;

const FRAME_MASK: u64 = (1 << FRAME_BITS) - 1;

/// Field layout of one 40-bit transmission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frame {
    /// Random station id, regenerated on every sensor power-up.
    pub generation: u8,
    /// Embedded CRC-4 nibble.
    pub checksum: u8,
    /// Status flag nibble.
    pub flags: StatusFlags,
    /// Temperature in 0.1 degF steps, offset -90 degF.
    pub temperature_raw: u16,
    /// Relative humidity as packed BCD.
    pub humidity_raw: u8,
    /// Sensor channel selector.
    pub channel: u8,
}

impl Frame {
    /// Reads the field layout from a bit reader.
    pub fn read(reader: &mut BsIoSliceReader) -> Result<Self> {
        Ok(Self {
            generation: reader.get_n(8)?,
            checksum: reader.get_n(4)?,
            flags: StatusFlags::from(reader.get_n::<u8>(4)?),
            temperature_raw: reader.get_n(12)?,
            humidity_raw: reader.get_n(8)?,
            channel: reader.get_n(4)?,
        })
    }

    /// Reads the field layout from the first [`FRAME_BYTES`] of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = BsIoSliceReader::from_slice(bytes);

        let available = reader.available()?;
        if available < FRAME_BITS as u64 {
            bail!("frame image holds {available} bits, need {FRAME_BITS}");
        }

        Self::read(&mut reader)
    }

    /// Slices the field layout out of a packed 40-bit value.
    pub fn from_raw(raw: u64) -> Result<Self> {
        let image = (raw & FRAME_MASK).to_be_bytes();

        Self::from_bytes(&image[image.len() - FRAME_BYTES..])
    }

    /// The frame repacked into its 40-bit value.
    pub fn raw(&self) -> u64 {
        (self.generation as u64) << 32
            | (self.checksum as u64) << 28
            | (self.flags.raw() as u64) << 24
            | (self.temperature_raw as u64) << 12
            | (self.humidity_raw as u64) << 4
            | self.channel as u64
    }

    /// The frame as 10 hex digits, most significant first.
    pub fn nibbles(&self) -> [u8; FRAME_NIBBLES] {
        let raw = self.raw();
        let mut nibbles = [0u8; FRAME_NIBBLES];

        for (i, nibble) in nibbles.iter_mut().enumerate() {
            *nibble = (raw >> (4 * (FRAME_NIBBLES - 1 - i))) as u8 & 0xF;
        }

        nibbles
    }

    /// The nibble sequence the checksum covers.
    ///
    /// The checksum nibble itself is left out and the trailing channel
    /// nibble takes its position; the remaining nibbles keep their order.
    pub fn checksum_message(&self) -> [u8; FRAME_NIBBLES - 1] {
        let nibbles = self.nibbles();
        let mut message = [0u8; FRAME_NIBBLES - 1];

        message[0] = nibbles[0];
        message[1] = nibbles[1];
        message[2] = nibbles[FRAME_NIBBLES - 1];
        message[3..].copy_from_slice(&nibbles[3..FRAME_NIBBLES - 1]);

        message
    }

    /// Temperature in degrees Fahrenheit.
    pub fn temperature_f(&self) -> f64 {
        0.1 * self.temperature_raw as f64 - 90.0
    }

    /// Relative humidity percent, decoded from packed BCD.
    pub fn humidity(&self) -> Option<u8> {
        decode_bcd(self.humidity_raw)
    }
}

/// Reinterprets a packed-BCD byte as its decimal value.
///
/// `0x42` reads as 42. Returns `None` when either hex digit is above 9.
pub fn decode_bcd(value: u8) -> Option<u8> {
    let high = value >> 4;
    let low = value & 0xF;

    (high <= 9 && low <= 9).then_some(10 * high + low)
}

#[test]
fn slices_recorded_frame() {
    let frame = Frame::from_raw(0x50F4647481).unwrap();

    assert_eq!(frame.generation, 0x50);
    assert_eq!(frame.checksum, 0xF);
    assert_eq!(frame.flags.raw(), 0x4);
    assert_eq!(frame.temperature_raw, 0x647);
    assert_eq!(frame.humidity_raw, 0x48);
    assert_eq!(frame.channel, 0x1);
    assert!((frame.temperature_f() - 70.7).abs() < 1e-9);
    assert_eq!(frame.humidity(), Some(48));
}

#[test]
fn raw_round_trips() {
    for raw in [0u64, 0x50F4647481, 0x1224567890, 0xFF_FFFF_FFFF] {
        assert_eq!(Frame::from_raw(raw).unwrap().raw(), raw);
    }
}

#[test]
fn nibble_sequence_and_checksum_message() {
    let frame = Frame::from_raw(0x1234567890).unwrap();

    assert_eq!(frame.nibbles(), [1, 2, 3, 4, 5, 6, 7, 8, 9, 0]);
    assert_eq!(frame.checksum_message(), [1, 2, 0, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn short_image_fails() {
    assert!(Frame::from_bytes(&[0x50, 0xF4, 0x64]).is_err());
}

#[test]
fn bcd_decoding() {
    assert_eq!(decode_bcd(0x42), Some(42));
    assert_eq!(decode_bcd(0x00), Some(0));
    assert_eq!(decode_bcd(0x99), Some(99));
    assert_eq!(decode_bcd(0x09), Some(9));
    assert_eq!(decode_bcd(0x90), Some(90));
    assert_eq!(decode_bcd(0x4A), None);
    assert_eq!(decode_bcd(0xA4), None);
    assert_eq!(decode_bcd(0xFF), None);
}
