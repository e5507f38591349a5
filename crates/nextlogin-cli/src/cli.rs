//! Command-line argument parsing for the nextlogin binary.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser, ValueEnum};
use nextlogin_core::{timefmt, NextLoginConfig};
use nextlogin_observability::LogFormat;

/// Log output format for CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliLogFormat {
    /// Human-readable text output.
    Text,
    /// Structured JSON output.
    Json,
}

impl From<CliLogFormat> for LogFormat {
    fn from(fmt: CliLogFormat) -> Self {
        match fmt {
            CliLogFormat::Text => LogFormat::Text,
            CliLogFormat::Json => LogFormat::Json,
        }
    }
}

impl CliLogFormat {
    fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

/// nextlogin - predict each user's next login from their history.
#[derive(Debug, Parser)]
#[command(
    name = "nextlogin",
    version,
    about = "Predict each user's next login from their login history"
)]
pub struct Cli {
    /// User payload (JSON array or {"data":{"rows":[...]}}); stdin when absent or "-"
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Reference instant for predictions (RFC 3339); defaults to the wall clock
    #[arg(long = "now", value_parser = parse_now, value_name = "TIMESTAMP")]
    pub now: Option<DateTime<Utc>>,

    /// Predict users one at a time instead of in parallel
    #[arg(long = "sequential")]
    pub sequential: bool,

    /// Increase verbosity (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Log output format (overrides the config file)
    #[arg(long = "log-format")]
    pub log_format: Option<CliLogFormat>,

    /// Print the report on a single line
    #[arg(long = "compact")]
    pub compact: bool,
}

impl Cli {
    /// Input path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|p| *p != Path::new("-"))
    }

    /// The `--now` override, else the current time.
    pub fn reference_time(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }

    /// Apply flag overrides on top of a loaded config.
    pub fn apply_overrides(&self, config: &mut NextLoginConfig) {
        if self.sequential {
            config.prediction.parallel = false;
        }
        match self.verbose {
            0 => {}
            1 => config.observability.log_level = "debug".to_string(),
            _ => config.observability.log_level = "trace".to_string(),
        }
        if let Some(format) = self.log_format {
            config.observability.log_format = format.as_str().to_string();
        }
    }
}

fn parse_now(s: &str) -> Result<DateTime<Utc>, String> {
    timefmt::parse(s).map_err(|e| e.to_string())
}
