use std::io::{self, BufReader, Read};
use std::time::Duration;

use anyhow::{Context, Result};

/// Line rate of the capture firmware's serial console.
const SERIAL_BAUD: u32 = 115_200;

/// The sensor transmits roughly once a minute, so a quiet port is normal.
const SERIAL_TIMEOUT: Duration = Duration::from_secs(60);

/// Unified line reader that handles both stdin and serial port input
pub struct LineReader {
    reader: Box<dyn Read>,
}

impl LineReader {
    fn from_reader(reader: Box<dyn Read>) -> Self {
        Self { reader }
    }

    /// Create a LineReader over standard input
    pub fn from_stdin() -> Self {
        Self::from_reader(Box::new(io::stdin().lock()))
    }

    /// Create a LineReader over a serial device in the capture firmware's
    /// console settings
    pub fn from_serial(path: &str) -> Result<Self> {
        let port = serialport::new(path, SERIAL_BAUD)
            .timeout(SERIAL_TIMEOUT)
            .open()
            .with_context(|| format!("opening serial port {path}"))?;

        Ok(Self::from_reader(Box::new(BufReader::new(port))))
    }

    /// Read the next line without its terminator
    /// Returns None at end of input; serial timeouts are retried, so a
    /// quiet radio never ends the stream
    pub fn next_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        let mut byte = 0u8;

        loop {
            match self.reader.read(std::slice::from_mut(&mut byte)) {
                Ok(0) => {
                    if bytes.is_empty() {
                        return Ok(None);
                    }
                    break;
                }
                Ok(_) => {
                    if byte == b'\n' {
                        break;
                    }
                    bytes.push(byte);
                }
                Err(e)
                    if matches!(
                        e.kind(),
                        io::ErrorKind::TimedOut | io::ErrorKind::Interrupted
                    ) => {}
                Err(e) => return Err(e.into()),
            }
        }

        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn reader_over(bytes: &'static [u8]) -> LineReader {
        LineReader::from_reader(Box::new(Cursor::new(bytes)))
    }

    #[test]
    fn splits_terminated_lines() {
        let mut lines = reader_over(b"d10001 r-62\nd101\n");

        assert_eq!(lines.next_line().unwrap().as_deref(), Some("d10001 r-62"));
        assert_eq!(lines.next_line().unwrap().as_deref(), Some("d101"));
        assert_eq!(lines.next_line().unwrap(), None);
    }

    #[test]
    fn final_line_may_lack_a_terminator() {
        let mut lines = reader_over(b"d10001\nd101");

        assert_eq!(lines.next_line().unwrap().as_deref(), Some("d10001"));
        assert_eq!(lines.next_line().unwrap().as_deref(), Some("d101"));
        assert_eq!(lines.next_line().unwrap(), None);
    }

    #[test]
    fn blank_lines_are_kept_for_the_caller() {
        let mut lines = reader_over(b"\nd101\n");

        assert_eq!(lines.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(lines.next_line().unwrap().as_deref(), Some("d101"));
        assert_eq!(lines.next_line().unwrap(), None);
    }
}
