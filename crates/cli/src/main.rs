//! Patent sorter CLI entry point.
//!
//! This binary is the composition root for the entire system. Responsibilities:
//!
//! 1. **Parse configuration**: command-line flags, environment variables and
//!    the optional settings file, validated before any work starts.
//! 2. **Wire observability**: `tracing-subscriber` with a human or JSON layer
//!    and, when an endpoint is configured, an OpenTelemetry OTLP exporter.
//! 3. **Construct infrastructure**: create the `OpenAiProvider` and inject it
//!    into the `TitleClassifier` and `PipelineOrchestrator`.
//! 4. **Run**: read the CSV upload, process it, write the sorted CSV and
//!    report a per-category summary on stderr.

mod args;
mod config;
mod run;
mod telemetry;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use llm::OpenAiProvider;
use pipeline::{PipelineOrchestrator, RunSummary, TitleClassifier};
use tracing::error;

use crate::args::Cli;
use crate::config::ClassifierSettings;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _telemetry = match telemetry::init(cli.log_format, cli.verbose, cli.otlp_endpoint.as_deref())
    {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli).await {
        Ok(summary) => {
            if cli.summary_json {
                match serde_json::to_string_pretty(&summary) {
                    Ok(json) => eprintln!("{json}"),
                    Err(e) => error!(error = %e, "Failed to encode summary"),
                }
            } else {
                eprint!("{}", run::render_summary(&summary, &cli.output));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<RunSummary> {
    let settings = ClassifierSettings::load(cli.config.as_deref())?.resolve(&cli.overrides())?;
    let api_key = cli
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .context("No API key: set OPENAI_API_KEY or pass --api-key")?;

    let provider = OpenAiProvider::new(settings.openai_config(api_key))?;
    let orchestrator = PipelineOrchestrator::new(TitleClassifier::new(Arc::new(provider)))
        .with_concurrency(settings.concurrency());

    run::execute(&orchestrator, &cli.input, &cli.output).await
}
