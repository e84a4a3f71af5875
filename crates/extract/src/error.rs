// ABOUTME: Error types for portal page extraction.
// ABOUTME: Provides ExtractError with structural-precondition and field-parse variants.

use thiserror::Error;

/// Errors that can occur while extracting records from a portal page.
///
/// `MissingStructure` and `RowArity` are structural preconditions: the page
/// does not have the layout this extractor was written against, so the whole
/// document is rejected. `Field` means a cell was found but its text could
/// not be normalized to the expected type; these are also fatal, since a
/// silently wrong number is worse than a loud failure on a one-shot run.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A container element the page layout guarantees was not found.
    #[error("required structure missing: {0}")]
    MissingStructure(String),

    /// A data row had fewer cells than the fixed column layout requires.
    #[error("{table} row has {found} cells, expected at least {expected}")]
    RowArity {
        table: &'static str,
        expected: usize,
        found: usize,
    },

    /// A cell's text could not be normalized to its target type.
    #[error("failed to parse {field}: {value:?}")]
    Field { field: &'static str, value: String },
}

impl ExtractError {
    /// Creates a MissingStructure error.
    pub fn missing(what: impl Into<String>) -> Self {
        ExtractError::MissingStructure(what.into())
    }

    /// Creates a Field error, keeping the offending text for the message.
    pub fn field(field: &'static str, value: impl Into<String>) -> Self {
        ExtractError::Field {
            field,
            value: value.into(),
        }
    }

    /// Returns true if this is a structural-precondition failure rather
    /// than a field-level parse failure.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ExtractError::MissingStructure(_) | ExtractError::RowArity { .. }
        )
    }
}

/// Convenience alias used throughout the extraction modules.
pub type Result<T> = std::result::Result<T, ExtractError>;
