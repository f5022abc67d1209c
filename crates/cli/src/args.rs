//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use table_io::DEFAULT_OUTPUT_NAME;

use crate::config::SettingsOverrides;

/// Classify patent titles and sort them by category and publication number
#[derive(Debug, Parser)]
#[command(name = "patent-sort", version, long_about = None)]
pub struct Cli {
    /// CSV file with `Title` and `Publication Number` columns (`-` for stdin)
    pub input: PathBuf,

    /// Where to write the sorted CSV (`-` for stdout)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_NAME)]
    pub output: PathBuf,

    /// TOML file with classifier settings
    #[arg(short, long, env = "PATENT_SORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// API key for the classification service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model used to classify titles
    #[arg(long, env = "OPENAI_MODEL")]
    pub model: Option<String>,

    /// Root URL of the Responses API
    #[arg(long, env = "OPENAI_BASE_URL")]
    pub base_url: Option<String>,

    /// Maximum classification calls in flight
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// OTLP collector endpoint; spans are exported when set
    #[arg(long, env = "OTEL_EXPORTER_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,

    /// Print the run summary as JSON instead of text
    #[arg(long)]
    pub summary_json: bool,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Cli {
    /// Settings given on the command line or through the environment.
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            concurrency: self.concurrency,
            timeout_secs: self.timeout_secs,
        }
    }
}
