//! Utility functions and supporting infrastructure.
//!
//! Provides bitstream I/O, the protocol's CRC-4 validation and the reject
//! taxonomy used throughout the decoding pipeline.

pub mod bitstream_io;
pub mod crc;
pub mod errors;
