//! One batch run: read the upload, process it, write the download.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use pipeline::{PipelineOrchestrator, PipelineRun, PipelineRunId, RunSummary};
use tracing::info;

const STDIO_PATH: &str = "-";

/// Reads `input`, classifies and sorts it, and writes the result to `output`.
///
/// The output is only written after the whole table has been processed, so a
/// validation failure leaves no partial file behind.
pub async fn execute(
    orchestrator: &PipelineOrchestrator,
    input: &Path,
    output: &Path,
) -> Result<RunSummary> {
    let table = read_input(input)?;
    let run_id = PipelineRunId::new_random();
    info!(%run_id, input = %input.display(), rows = table.len(), "Starting run");

    let PipelineRun { table, summary } = orchestrator.run(run_id, table).await?;

    let bytes = table_io::to_csv_bytes(&table).context("Failed to encode output CSV")?;
    write_output(output, &bytes)?;
    info!(%run_id, output = %output.display(), rows = summary.rows, "Run complete");
    Ok(summary)
}

fn read_input(input: &Path) -> Result<pipeline::Table> {
    if input.as_os_str() == STDIO_PATH {
        let mut buffer = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buffer)
            .context("Failed to read standard input")?;
        return table_io::read_table(buffer.as_slice()).context("Failed to parse standard input");
    }

    let file = std::fs::File::open(input)
        .with_context(|| format!("Failed to open {}", input.display()))?;
    table_io::read_table(std::io::BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", input.display()))
}

fn write_output(output: &Path, bytes: &[u8]) -> Result<()> {
    if output.as_os_str() == STDIO_PATH {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(bytes).context("Failed to write standard output")?;
        return stdout.flush().context("Failed to write standard output");
    }

    std::fs::write(output, bytes).with_context(|| format!("Failed to write {}", output.display()))
}

/// Renders the summary for people.
pub fn render_summary(summary: &RunSummary, output: &Path) -> String {
    let mut text = format!(
        "Classified {} rows (run {})\n",
        summary.rows, summary.run_id
    );
    for count in &summary.categories {
        text.push_str(&format!("  {:<14}{:>6}\n", count.category.as_str(), count.rows));
    }
    if output.as_os_str() != STDIO_PATH {
        text.push_str(&format!("Wrote {}\n", output.display()));
    }
    text
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
