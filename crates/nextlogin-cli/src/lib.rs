//! nextlogin-cli: command-line front end for the prediction engine.
//!
//! Provides:
//! - Argument parsing and config overrides ([`cli`])
//! - The payload-to-report pipeline ([`app`])

pub mod app;
pub mod cli;

pub use app::{error_document, load_config, read_input, render_report, run_batch};
pub use cli::{Cli, CliLogFormat};
