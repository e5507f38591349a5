//! nextlogin binary entry point.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use nextlogin_cli::{app, Cli};
use nextlogin_core::constants::VERSION;
use nextlogin_observability::init_from_config;
use tracing::info;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{}", app::error_document(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let config = app::load_config(cli)?;
    if let Err(e) = init_from_config(&config.observability) {
        eprintln!("Failed to initialize logging: {e}");
    }
    info!(version = VERSION, "nextlogin starting");

    let raw = app::read_input(cli.input_path())?;
    let report = app::run_batch(&raw, &config, cli.reference_time())?;
    app::render_report(&report, cli.compact)
}
