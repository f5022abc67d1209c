//! Error types for the patent sorting domain.
//!
//! [`PipelineError`] covers conditions that abort a whole run. Classification
//! failures are absent: the classifier downgrades every
//! [`ClassificationError`] to [`crate::Category::Unknown`] so one bad call
//! never aborts the batch.

use thiserror::Error;

use crate::ColumnName;

// ---------------------------------------------------------------------------
// Table construction
// ---------------------------------------------------------------------------

/// A table could not be built because its shape is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A row has more cells than there are columns.
    #[error("Row {row} has {found} fields but the header has {expected}")]
    RaggedRow {
        /// 1-based data row number (header excluded).
        row: usize,
        /// Number of columns in the header.
        expected: usize,
        /// Number of cells in the row.
        found: usize,
    },
}

// ---------------------------------------------------------------------------
// Publication number normalisation
// ---------------------------------------------------------------------------

/// A publication number could not be turned into a numeric sort key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublicationNumberError {
    /// The value contains no decimal digits at all.
    #[error("no digits found in '{value}'")]
    NoDigits {
        /// The offending publication number.
        value: String,
    },

    /// The first digit run does not fit in a 64-bit unsigned integer.
    #[error("number '{digits}' in '{value}' is too large")]
    OutOfRange {
        /// The offending publication number.
        value: String,
        /// The extracted digit run.
        digits: String,
    },
}

// ---------------------------------------------------------------------------
// Classification service
// ---------------------------------------------------------------------------

/// A classification service call failed.
///
/// Produced by [`crate::ClassificationService`] implementations. The
/// classifier logs it and falls back to [`crate::Category::Unknown`]; it is
/// never returned from the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    /// The request never produced a response (connection, DNS, timeout).
    #[error("Classification service unreachable: {message}")]
    Transport {
        /// Description of the transport failure.
        message: String,
    },

    /// The service answered with a non-success status.
    #[error("Classification service returned status {status}: {body}")]
    Service {
        /// HTTP (or equivalent) status code.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },

    /// The response could not be decoded into reply text.
    #[error("Malformed classification response: {message}")]
    MalformedResponse {
        /// Description of the decoding problem.
        message: String,
    },
}

// ---------------------------------------------------------------------------
// Pipeline-level errors
// ---------------------------------------------------------------------------

/// Errors that abort a pipeline run.
///
/// Both variants are input-validation failures and carry user-facing
/// messages. No partial output is produced when either occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// One or both required columns are absent.
    ///
    /// Reported before any classification work begins.
    #[error(
        "CSV must include 'Title' and 'Publication Number' columns (missing: {})",
        format_columns(.missing)
    )]
    MissingColumns {
        /// The required columns that were not found.
        missing: Vec<ColumnName>,
    },

    /// A record's publication number has no usable numeric part.
    #[error("Invalid publication number in row {row}: {source}")]
    InvalidPublicationNumber {
        /// 1-based data row number (header excluded) in input order.
        row: usize,
        /// What was wrong with the value.
        #[source]
        source: PublicationNumberError,
    },
}

fn format_columns(columns: &[ColumnName]) -> String {
    columns
        .iter()
        .map(|c| format!("'{c}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
