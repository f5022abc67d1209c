//! The fixed, ordered category taxonomy.
//!
//! Five technology categories form a total order (index in [`CATEGORY_ORDER`]
//! is the rank). [`Category::Unknown`] is a valid classification result but
//! is not a member of the ordered set; it ranks after every real category.

use serde::{Deserialize, Serialize};

/// A technology category assigned to a patent record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Biotechnology,
    Chemical,
    Electrical,
    Mechanical,
    Software,
    /// Fallback for empty titles, failed calls, and replies outside the set.
    Unknown,
}

/// The ordered set of valid categories. Index = rank.
pub const CATEGORY_ORDER: [Category; 5] = [
    Category::Biotechnology,
    Category::Chemical,
    Category::Electrical,
    Category::Mechanical,
    Category::Software,
];

impl Category {
    /// Returns the label exactly as it appears in prompts and output data.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Biotechnology => "Biotechnology",
            Category::Chemical => "Chemical",
            Category::Electrical => "Electrical",
            Category::Mechanical => "Mechanical",
            Category::Software => "Software",
            Category::Unknown => "Unknown",
        }
    }

    /// Sort rank: position in [`CATEGORY_ORDER`], or one past the end for
    /// [`Category::Unknown`].
    pub fn rank(self) -> usize {
        CATEGORY_ORDER
            .iter()
            .position(|c| *c == self)
            .unwrap_or(CATEGORY_ORDER.len())
    }

    /// Parses one of the five valid labels.
    ///
    /// Matching is exact and case-sensitive with no trimming. `"Unknown"` is
    /// not a member of the set and yields `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        CATEGORY_ORDER.iter().copied().find(|c| c.as_str() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns `true` if `candidate` is exactly one of the five valid labels.
pub fn is_valid_label(candidate: &str) -> bool {
    Category::from_label(candidate).is_some()
}

/// The valid labels joined with `", "`, in rank order.
pub fn label_list() -> String {
    CATEGORY_ORDER
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "taxonomy_tests.rs"]
mod tests;
