//! Formatted sensor readings.

use std::fmt;
use std::fmt::{Display, Formatter};

use crate::structs::flags::StatusFlags;

/// One fully validated sensor reading.
///
/// `Display` renders the report line written to stdout, e.g.
/// `temp chan=1/50 flag=4/-b-- temp=70.7*F rh=48%` - channel and
/// generation, flag nibble and mnemonic, temperature and humidity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub channel: u8,
    pub generation: u8,
    pub flags: StatusFlags,
    pub temperature_f: f64,
    pub humidity: u8,
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "temp chan={}/{:x} flag={:x}/{} temp={:.1}*F rh={}%",
            self.channel,
            self.generation,
            self.flags.raw(),
            self.flags,
            self.temperature_f,
            self.humidity,
        )
    }
}

#[test]
fn report_line_format() {
    let report = Report {
        channel: 1,
        generation: 0x50,
        flags: StatusFlags::from(0x4),
        temperature_f: 70.7,
        humidity: 48,
    };

    assert_eq!(
        report.to_string(),
        "temp chan=1/50 flag=4/-b-- temp=70.7*F rh=48%"
    );
}

#[test]
fn one_decimal_temperature() {
    let report = Report {
        channel: 2,
        generation: 0xAB,
        flags: StatusFlags::from(0x0),
        temperature_f: 0.1 * 1570.0 - 90.0,
        humidity: 52,
    };

    assert_eq!(
        report.to_string(),
        "temp chan=2/ab flag=0/---- temp=67.0*F rh=52%"
    );
}
