use anyhow::Result;
use log::{debug, info, warn};

use super::command::Cli;
use crate::input::LineReader;
use tx07k::process::decode::{Decoder, Outcome};
use tx07k::utils::errors::RejectReason;

pub fn cmd_decode(cli: &Cli) -> Result<()> {
    let mut lines = match &cli.port {
        Some(port) => {
            info!("Reading captures from {port}");
            LineReader::from_serial(port)?
        }
        None => LineReader::from_stdin(),
    };

    let decoder = Decoder::default();

    while let Some(line) = lines.next_line()? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match decoder.decode_line(line)? {
            Outcome::Decoded(report) => println!("{report}"),
            Outcome::Rejected(reason) => match reason {
                // Stray pulses dominate the airwaves; only frames that got
                // past symbol recovery are worth surfacing.
                RejectReason::NoPulseData | RejectReason::MalformedFrame { .. } => {
                    debug!("{reason}");
                }
                RejectReason::ChecksumMismatch { .. } | RejectReason::InvalidBcd { .. } => {
                    warn!("{reason}");
                }
            },
        }
    }

    Ok(())
}
