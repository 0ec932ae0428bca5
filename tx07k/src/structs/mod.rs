//! Data structures representing protocol components.
//!
//! Contains structured representations of capture lines, recovered gap
//! symbols, the 40-bit frame layout, status flags and formatted readings
//! used throughout the decoding pipeline.

pub mod flags;
pub mod frame;
pub mod line;
pub mod report;
pub mod symbol;
