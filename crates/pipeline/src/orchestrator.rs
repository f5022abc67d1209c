//! The classify → normalise → sort pipeline.
//!
//! [`PipelineOrchestrator::process`] owns one [`Table`] for the duration of a
//! run. It validates the required columns, computes a transient sort key per
//! record, appends the `Category` column and returns the stably re-sorted
//! table. Sort keys never appear in the output.

use std::num::NonZeroUsize;

use futures::stream::{self, StreamExt};
use tracing::{debug, info, instrument};

use crate::normalizer::numeric_key;
use crate::{
    Category, ColumnName, PipelineError, PipelineRunId, RunSummary, Table, TitleClassifier,
    Timestamp, PUBLICATION_NUMBER_COLUMN, TITLE_COLUMN,
};

/// Result of one [`PipelineOrchestrator::run`].
#[derive(Debug, Clone)]
pub struct PipelineRun {
    /// The sorted table with the `Category` column.
    pub table: Table,
    /// Counts and timing for the run.
    pub summary: RunSummary,
}

/// Drives one table through classification and sorting.
#[derive(Debug, Clone)]
pub struct PipelineOrchestrator {
    classifier: TitleClassifier,
    concurrency: NonZeroUsize,
}

impl PipelineOrchestrator {
    /// Creates an orchestrator that issues classification calls one at a time
    /// in row order.
    pub fn new(classifier: TitleClassifier) -> Self {
        Self {
            classifier,
            concurrency: NonZeroUsize::MIN,
        }
    }

    /// Allows up to `concurrency` classification calls in flight at once.
    ///
    /// Results stay aligned to input rows regardless of completion order.
    pub fn with_concurrency(mut self, concurrency: NonZeroUsize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Classifies and sorts `table`.
    ///
    /// Output rows are ordered by category rank, then by the numeric
    /// publication key; ties keep their input order. All input columns are
    /// returned unchanged with `Category` added after them (or overwritten in
    /// place if the input already had a `Category` column).
    ///
    /// # Errors
    ///
    /// - [`PipelineError::MissingColumns`] if `Title` or `Publication Number`
    ///   is absent. No classification call is made.
    /// - [`PipelineError::InvalidPublicationNumber`] for the first row whose
    ///   publication number has no usable digit run. Keys are checked before
    ///   any classification call is made.
    #[instrument(skip_all, fields(rows = table.len()))]
    pub async fn process(&self, table: Table) -> Result<Table, PipelineError> {
        let (title_index, pub_index) = required_columns(&table)?;

        let keys = table
            .rows()
            .iter()
            .enumerate()
            .map(|(i, record)| {
                numeric_key(record.get(pub_index).unwrap_or_default())
                    .map_err(|source| PipelineError::InvalidPublicationNumber { row: i + 1, source })
            })
            .collect::<Result<Vec<u64>, _>>()?;

        let categories = {
            let titles: Vec<&str> = table
                .rows()
                .iter()
                .map(|record| record.get(title_index).unwrap_or_default())
                .collect();
            self.classify_all(&titles).await
        };

        let mut order: Vec<usize> = (0..table.len()).collect();
        order.sort_by_key(|&i| (categories[i].rank(), keys[i]));

        let labels = categories.iter().map(|c| c.as_str().to_string()).collect();
        let mut table = table;
        table.set_column(ColumnName::category(), labels);
        table.reorder(&order);

        info!(rows = table.len(), "Table classified and sorted");
        Ok(table)
    }

    /// Runs [`Self::process`] under `run_id` and tallies the result.
    #[instrument(skip_all, fields(run_id = %run_id))]
    pub async fn run(
        &self,
        run_id: PipelineRunId,
        table: Table,
    ) -> Result<PipelineRun, PipelineError> {
        let started_at = Timestamp::now();
        let table = self.process(table).await?;
        let summary = RunSummary::from_table(&table, run_id, started_at, Timestamp::now());
        Ok(PipelineRun { table, summary })
    }

    async fn classify_all(&self, titles: &[&str]) -> Vec<Category> {
        stream::iter(titles.iter().enumerate())
            .map(|(i, title)| async move {
                let category = self.classifier.classify(title).await;
                debug!(row = i + 1, %category, "Row classified");
                category
            })
            .buffered(self.concurrency.get())
            .collect()
            .await
    }
}

fn required_columns(table: &Table) -> Result<(usize, usize), PipelineError> {
    let title = table.column_index(TITLE_COLUMN);
    let publication = table.column_index(PUBLICATION_NUMBER_COLUMN);

    match (title, publication) {
        (Some(t), Some(p)) => Ok((t, p)),
        _ => {
            let missing = [
                (ColumnName::title(), title),
                (ColumnName::publication_number(), publication),
            ]
            .into_iter()
            .filter(|(_, index)| index.is_none())
            .map(|(name, _)| name)
            .collect();
            Err(PipelineError::MissingColumns { missing })
        }
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
