//! Core domain for the patent sorter.
//!
//! This crate holds every domain concept of the classify → normalise → sort
//! pipeline: the category taxonomy, the in-memory table, the title classifier,
//! the publication-number normaliser and the orchestrator that ties them
//! together. Infrastructure crates implement the port traits defined here;
//! they never add domain rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! The external classification engine is reached only through
//! [`ClassificationService`]; CSV parsing and HTTP live in `table-io` and
//! `llm`.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`taxonomy`] | `Category` and its fixed order |
//! | [`identifiers`] | `ColumnName`, `PipelineRunId`, well-known headers |
//! | [`types`] | `Table`, `Record`, `Timestamp`, `RunSummary` |
//! | [`normalizer`] | Publication number → numeric sort key |
//! | [`classifier`] | `TitleClassifier` |
//! | [`orchestrator`] | `PipelineOrchestrator` |
//! | [`ports`] | `ClassificationService` |
//! | [`errors`] | Error types |

pub mod classifier;
pub mod errors;
pub mod identifiers;
pub mod normalizer;
pub mod orchestrator;
pub mod ports;
pub mod taxonomy;
pub mod types;

#[cfg(test)]
mod test_support;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use classifier::{build_prompt, TitleClassifier};
pub use errors::{ClassificationError, PipelineError, PublicationNumberError, TableError};
pub use identifiers::{
    ColumnName, PipelineRunId, CATEGORY_COLUMN, PUBLICATION_NUMBER_COLUMN, TITLE_COLUMN,
};
pub use normalizer::numeric_key;
pub use orchestrator::{PipelineOrchestrator, PipelineRun};
pub use ports::ClassificationService;
pub use taxonomy::{is_valid_label, label_list, Category, CATEGORY_ORDER};
pub use types::{CategoryCount, Record, RunSummary, Table, Timestamp};
