use clap::{Parser as ClapParser, ValueEnum};

#[derive(Debug, ClapParser)]
#[command(
    name       = env!("CARGO_PKG_NAME"),
    version    = env!("CARGO_PKG_VERSION"),
    author     = env!("CARGO_PKG_AUTHORS"),
    about      = "Decode TX07K-THC temperature/humidity sensor transmissions",
    long_about = None,
)]
pub struct Cli {
    /// Serial device delivering capture lines (reads stdin when omitted).
    #[arg(value_name = "PORT")]
    pub port: Option<String>,

    /// Set the log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub loglevel: LogLevel,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    /// Disable logging output.
    Off,
    /// No output except errors.
    Error,
    /// Show warnings and errors.
    Warn,
    /// Show info, warnings and errors (default).
    Info,
    /// Show debug, info, warnings and errors.
    Debug,
    /// Show all log messages including trace.
    Trace,
}

impl LogLevel {
    /// Convert LogLevel to log::LevelFilter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormat {
    /// Colorized human-readable text.
    Plain,
    /// Structured JSON per log record.
    Json,
}
