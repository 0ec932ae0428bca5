use anyhow::Result;
use clap::Parser as ClapParser;

use cli::command::{Cli, LogFormat};
use cli::decode::cmd_decode;

mod cli;
mod input;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let base_level = cli.loglevel.to_level_filter();

    let mut env_builder = env_logger::Builder::from_default_env();
    env_builder.filter_level(base_level);
    match cli.log_format {
        LogFormat::Plain => {
            env_builder.format_timestamp_secs();
        }
        LogFormat::Json => {
            env_builder.format(|buf, record| {
                use std::io::Write;
                writeln!(
                    buf,
                    "{{\"ts\":{},\"lvl\":\"{}\",\"msg\":\"{}\"}}",
                    buf.timestamp(),
                    record.level(),
                    record.args()
                )
            });
        }
    }
    env_builder.try_init()?;

    cmd_decode(&cli)
}
