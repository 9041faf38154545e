//! Shared deterministic types for catalog core logic.
//!
//! These types define stable contracts between core components. They should not
//! depend on external state or I/O and must remain deterministic across runs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category tag grouping patterns by conditional shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Single-test shapes (`if`, `if`/`else`).
    Basic,
    /// Shapes choosing among several branches (`else if` chains, `switch`).
    MultiBranch,
    /// Conditionals inside conditionals.
    Nested,
    /// Branches whose bodies do unrelated work or produce different shapes.
    Incongruent,
}

impl Category {
    /// Kebab-case tag as it appears in data files and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Basic => "basic",
            Category::MultiBranch => "multi-branch",
            Category::Nested => "nested",
            Category::Incongruent => "incongruent",
        }
    }
}

/// Errors surfaced by catalog construction and queries.
///
/// All variants are recoverable conditions for the caller; none abort the
/// process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A query or insertion referenced a pattern id absent from the catalog.
    #[error("pattern '{id}' not found")]
    NotFound { id: String },
    /// A construction-time operation was called after `freeze()`.
    #[error("catalog is frozen: '{op}' is a construction-time operation")]
    InvalidState { op: &'static str },
    /// An insertion would have overwritten an existing pattern id.
    #[error("duplicate pattern id '{id}'")]
    DuplicatePattern { id: String },
}
