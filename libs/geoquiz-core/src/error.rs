//! Error types for geoquiz-core.

use std::fmt;
use thiserror::Error;

/// Result type alias using CatalogError.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while loading a country catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog has no countries")]
    Empty,

    #[error("catalog failed validation with {} issue(s): {}", .issues.len(), IssueList(.issues))]
    Invalid { issues: Vec<CatalogIssue> },
}

/// A single data-quality defect found by the validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogIssue {
    #[error("record {index} has a blank name")]
    BlankName { index: usize },

    #[error("duplicate country name {name:?} (also {existing:?})")]
    DuplicateName { name: String, existing: String },

    #[error("alias {alias:?} of {country:?} collides with {other:?}")]
    AliasCollision {
        alias: String,
        country: String,
        other: String,
    },
}

struct IssueList<'a>(&'a [CatalogIssue]);

impl fmt::Display for IssueList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}
