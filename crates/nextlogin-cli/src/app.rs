//! Payload-to-report pipeline driven by the binary.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use nextlogin_core::{NextLoginConfig, NextLoginError};
use nextlogin_ingest::{ingest_rows, parse_payload, predict_all, PredictionReport};
use nextlogin_observability::{ingest_span, BatchSummary};
use nextlogin_prediction::PredictionEngine;
use serde_json::json;
use tracing::info;

use crate::cli::Cli;

/// Load the config file (if any), apply flag overrides and re-validate.
pub fn load_config(cli: &Cli) -> Result<NextLoginConfig> {
    let mut config = NextLoginConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

/// Read the whole payload from `path`, or stdin when `None`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(NextLoginError::from)
            .with_context(|| format!("failed to read input {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .map_err(NextLoginError::from)
                .context("failed to read input from stdin")?;
            Ok(raw)
        }
    }
}

/// Parse, validate and predict a raw payload.
pub fn run_batch(
    raw: &str,
    config: &NextLoginConfig,
    now: DateTime<Utc>,
) -> Result<PredictionReport> {
    let rows = parse_payload(raw).context("invalid input payload")?;

    let outcome = {
        let _span = ingest_span!(rows.len()).entered();
        ingest_rows(&rows)
    };
    info!(
        accepted = outcome.users.len(),
        skipped = outcome.skipped.len(),
        "ingest complete"
    );

    let engine = PredictionEngine::new(&config.prediction);
    let report = predict_all(&outcome.users, &engine, now, config.prediction.parallel);
    BatchSummary::from_predictions(&report.users).log();
    Ok(report)
}

/// Render the report, pretty-printed unless `compact`.
pub fn render_report(report: &PredictionReport, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(report)
    } else {
        serde_json::to_string_pretty(report)
    };
    rendered
        .map_err(NextLoginError::from)
        .context("failed to serialize report")
}

/// `{"error": true, "message": ...}` for a failed run.
pub fn error_document(err: &anyhow::Error) -> String {
    json!({
        "error": true,
        "message": format!("{err:#}"),
    })
    .to_string()
}
