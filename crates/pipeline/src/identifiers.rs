//! Newtype domain identifiers.
//!
//! Column names and run identifiers are distinct newtypes so a header label is
//! never confused with a cell value or a correlation id, even though both are
//! strings under the hood.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A column header in a patent table.
///
/// Header text is kept verbatim (no trimming, case preserved). Headers may be
/// empty or repeated, as spreadsheet exports often produce; cells are
/// addressed by position and the required columns are matched exactly, first
/// occurrence wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnName(String);

impl std::fmt::Display for ColumnName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Header of the required title column.
pub const TITLE_COLUMN: &str = "Title";

/// Header of the required publication number column.
pub const PUBLICATION_NUMBER_COLUMN: &str = "Publication Number";

/// Header of the column the pipeline adds.
pub const CATEGORY_COLUMN: &str = "Category";

impl ColumnName {
    /// Creates a column name from raw header text.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the header text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The required `Title` column.
    pub fn title() -> Self {
        Self(TITLE_COLUMN.to_string())
    }

    /// The required `Publication Number` column.
    pub fn publication_number() -> Self {
        Self(PUBLICATION_NUMBER_COLUMN.to_string())
    }

    /// The `Category` column added by the pipeline.
    pub fn category() -> Self {
        Self(CATEGORY_COLUMN.to_string())
    }

    /// Returns `true` if this column has exactly the given header text.
    pub fn is(&self, header: &str) -> bool {
        self.0 == header
    }
}

// ---------------------------------------------------------------------------

/// Identifies a single pipeline run (one table processed start to finish).
///
/// Generated fresh for every invocation; recorded on the run span and in the
/// [`crate::RunSummary`] so all activity from one run can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PipelineRunId(Uuid);

impl PipelineRunId {
    /// Generates a new random run identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a [`PipelineRunId`] from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying [`Uuid`].
    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for PipelineRunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
