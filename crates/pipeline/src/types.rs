//! Shared value types: the in-memory table, its records, and run reporting.
//!
//! A [`Table`] is an ordered sequence of [`Record`]s that share one column
//! set. Cells are kept as the exact strings read from the input; the pipeline
//! never rewrites a pass-through cell.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Category, ColumnName, PipelineRunId, TableError, CATEGORY_ORDER};

// ---------------------------------------------------------------------------
// Records and tables
// ---------------------------------------------------------------------------

/// One row of a patent table. Cell `i` belongs to column `i` of the owning
/// [`Table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record(Vec<String>);

impl Record {
    /// Creates a record from its cells in column order.
    pub fn new(cells: Vec<String>) -> Self {
        Self(cells)
    }

    /// Returns the cells in column order.
    pub fn cells(&self) -> &[String] {
        &self.0
    }

    /// Returns the cell at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the record has no cells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn set_or_push(&mut self, index: usize, value: String) {
        if index < self.0.len() {
            self.0[index] = value;
        } else {
            self.0.push(value);
        }
    }
}

// ---------------------------------------------------------------------------

/// An ordered sequence of records sharing one column set.
///
/// Row order is insertion order until the pipeline re-sorts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<ColumnName>,
    rows: Vec<Record>,
}

impl Table {
    /// Creates a table from its columns and rows.
    ///
    /// Rows shorter than the header are padded with empty cells. A row with
    /// more cells than there are columns is rejected with
    /// [`TableError::RaggedRow`].
    pub fn new(columns: Vec<ColumnName>, mut rows: Vec<Record>) -> Result<Self, TableError> {
        for (i, row) in rows.iter_mut().enumerate() {
            if row.len() > columns.len() {
                return Err(TableError::RaggedRow {
                    row: i + 1,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
            row.0.resize(columns.len(), String::new());
        }

        Ok(Self { columns, rows })
    }

    /// Creates a table from raw header strings and raw rows.
    pub fn from_strings<H, S>(headers: H, rows: Vec<Vec<String>>) -> Result<Self, TableError>
    where
        H: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = headers.into_iter().map(ColumnName::new).collect();
        Self::new(columns, rows.into_iter().map(Record::new).collect())
    }

    /// Returns the column headers in order.
    pub fn columns(&self) -> &[ColumnName] {
        &self.columns
    }

    /// Returns the rows in their current order.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the position of the column with the given header text.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.is(header))
    }

    /// Iterates the values of one column in row order.
    ///
    /// Returns `None` if the column does not exist.
    pub fn column_values<'a>(&'a self, header: &str) -> Option<impl Iterator<Item = &'a str> + 'a> {
        let index = self.column_index(header)?;
        Some(self.rows.iter().map(move |r| r.get(index).unwrap_or_default()))
    }

    /// Writes one value per row into the named column.
    ///
    /// An existing column keeps its position and is overwritten; otherwise the
    /// column is appended after all others. `values` must be row-aligned.
    pub(crate) fn set_column(&mut self, column: ColumnName, values: Vec<String>) {
        debug_assert_eq!(values.len(), self.rows.len());
        let index = match self.column_index(column.as_str()) {
            Some(i) => i,
            None => {
                self.columns.push(column);
                self.columns.len() - 1
            }
        };
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.set_or_push(index, value);
        }
    }

    /// Rearranges the rows so that new row `i` is old row `order[i]`.
    ///
    /// `order` must be a permutation of `0..self.len()`.
    pub(crate) fn reorder(&mut self, order: &[usize]) {
        debug_assert_eq!(order.len(), self.rows.len());
        let mut slots: Vec<Option<Record>> = std::mem::take(&mut self.rows)
            .into_iter()
            .map(Some)
            .collect();
        self.rows = order.iter().filter_map(|&i| slots[i].take()).collect();
    }

    /// Consumes the table, returning its columns and rows.
    pub fn into_parts(self) -> (Vec<ColumnName>, Vec<Record>) {
        (self.columns, self.rows)
    }
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// A UTC wall-clock timestamp.
///
/// Wraps [`chrono::DateTime<Utc>`] so callers never depend on `chrono` types
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the current UTC time as a [`Timestamp`].
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a [`Timestamp`] from a [`DateTime<Utc>`].
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the underlying [`DateTime<Utc>`].
    pub fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

// ---------------------------------------------------------------------------
// Run reporting
// ---------------------------------------------------------------------------

/// Number of output rows assigned to one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: Category,
    pub rows: usize,
}

/// What a finished run produced. Never written into the output table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: PipelineRunId,
    pub started_at: Timestamp,
    pub finished_at: Timestamp,
    /// Total number of output rows.
    pub rows: usize,
    /// One entry per category in rank order, `Unknown` last. Zero counts are
    /// included.
    pub categories: Vec<CategoryCount>,
}

impl RunSummary {
    /// Tallies the `Category` column of a processed table.
    ///
    /// Cells that are not a valid label count as [`Category::Unknown`].
    pub fn from_table(
        table: &Table,
        run_id: PipelineRunId,
        started_at: Timestamp,
        finished_at: Timestamp,
    ) -> Self {
        let mut categories: Vec<CategoryCount> = CATEGORY_ORDER
            .iter()
            .copied()
            .chain(std::iter::once(Category::Unknown))
            .map(|category| CategoryCount { category, rows: 0 })
            .collect();

        if let Some(values) = table.column_values(crate::CATEGORY_COLUMN) {
            for value in values {
                let category = Category::from_label(value).unwrap_or(Category::Unknown);
                categories[category.rank()].rows += 1;
            }
        }

        Self {
            run_id,
            started_at,
            finished_at,
            rows: table.len(),
            categories,
        }
    }

    /// Returns the number of rows assigned to `category`.
    pub fn count(&self, category: Category) -> usize {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map_or(0, |c| c.rows)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
