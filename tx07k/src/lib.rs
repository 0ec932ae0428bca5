#![doc = include_str!("../README.md")]
//!
//! ## Technical Overview
//!
//! Decoder for the TX07K-THC sensor's pulse-distance (PDM) coding and frame
//! format.
//!
//! ### Transmission Structure
//!
//! **On air**: pulses separated by short (data 0) or long (data 1) periods,
//! measured in ticks of the digitized capture; a final stop pulse ends the
//! transmission.
//!
//! **Payload**: one 40-bit frame — station generation, CRC-4 checksum,
//! status flags, temperature, packed-BCD humidity, channel.
//!
//! ### Frame Checksum
//!
//! The frame's CRC-4 is not a standard one: each message nibble is folded
//! into the remainder after its round's shift steps, and the covered nibble
//! sequence is permuted (the checksum nibble is dropped, the channel nibble
//! takes its place). Parameters were recovered from captures by exhaustive
//! search ([`process::search`]).
//!
//! ## Quick Start
//!
//! Steps for processing capture lines:
//!
//! 1. Recover gap symbols from the pulse train using
//!    [`process::recover::PulseTiming`]
//! 2. Validate and slice the 40-bit frame using [`structs::frame::Frame`]
//! 3. Or run the whole per-line pipeline with a
//!    [`process::decode::Decoder`]
//!
//! ```rust
//! use tx07k::process::EXAMPLE_LINE;
//! use tx07k::process::decode::{Decoder, Outcome};
//!
//! let decoder = Decoder::default();
//!
//! match decoder.decode_line(EXAMPLE_LINE)? {
//!     Outcome::Decoded(report) => {
//!         assert_eq!(
//!             report.to_string(),
//!             "temp chan=1/50 flag=4/-b-- temp=70.7*F rh=48%",
//!         );
//!     }
//!     Outcome::Rejected(reason) => {
//!         // Rejects are line-scoped - log and read the next line.
//!         eprintln!("dropped: {reason}");
//!     }
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Processing functionality for capture lines.
///
/// 1. **Symbol Recovery** ([`process::recover`]): Classifies pulse periods
///    into data symbols.
///
/// 2. **Decoding** ([`process::decode`]): Runs single capture lines through
///    the full validation pipeline.
///
/// 3. **Parameter Search** ([`process::search`]): Recovers checksum
///    parameters from captured frames.
pub mod process;

/// Data structures representing protocol components.
///
/// - **Capture Lines** ([`structs::line`]): Key/value field tokenization
/// - **Symbols** ([`structs::symbol`]): Ternary gap symbols and symbol strings
/// - **Frames** ([`structs::frame`]): The 40-bit field layout
/// - **Flags** ([`structs::flags`]): Status bits and their mnemonic
/// - **Reports** ([`structs::report`]): Formatted sensor readings
pub mod structs;

/// Utility functions and supporting infrastructure.
///
/// - **Bitstream I/O** ([`utils::bitstream_io`]): Bit-level reading
/// - **CRC Validation** ([`utils::crc`]): The protocol's CRC-4 variant
/// - **Error Handling** ([`utils::errors`]): Reject taxonomy
pub mod utils;
