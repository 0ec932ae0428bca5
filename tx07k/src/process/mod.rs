//! Processing functionality for capture lines.

/// Gap symbol recovery from digitized pulse trains.
///
/// Provides [`PulseTiming`](recover::PulseTiming) for classifying pulse
/// periods into [`Symbol`](crate::structs::symbol::Symbol) values.
pub mod recover;

/// The per-line decoding pipeline.
///
/// Provides the [`Decoder`](decode::Decoder) turning single capture lines
/// into [`Report`](crate::structs::report::Report) objects or tagged
/// rejects.
pub mod decode;

/// Checksum parameter recovery.
///
/// Provides [`checksum_search`](search::checksum_search) for finding CRC-4
/// parameters that reproduce the embedded checksums of captured frames.
pub mod search;

/// One real TX07K-THC capture line: frame `0x50F4647481`, channel 1,
/// generation `0x50`, battery low, 70.7 degF, 48 % relative humidity.
pub const EXAMPLE_LINE: &str = "d10001000000010001000000010001000100010001000000010000000100000001000000010001000000010001000100010000000100000001000100010000000100010001000100000001000000010000000100010000000100010001000000010001000100010001000100010000000100000";
