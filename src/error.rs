//! Store error model.
//!
//! Deterministic domain failures (missing input, missing records) are kept
//! distinct from storage failures so the front end can phrase each
//! notification. Nothing here is retried or corrected internally; every
//! failure surfaces to the caller as-is.

use thiserror::Error;

/// Result type used across the catalog store.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure classes surfaced to the presentation layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required input was missing or blank.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The referenced product does not exist in the catalog.
    #[error("product not found: {0}")]
    NotFound(String),

    /// An update was requested without naming a target record.
    #[error("no product selected")]
    SelectionRequired,

    /// The catalog file could not be read or written.
    #[error("catalog file error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file holds rows the tabular codec cannot handle.
    #[error("catalog format error: {0}")]
    Csv(#[from] csv::Error),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Notification text is part of the front-end contract; keep it stable.
    #[test]
    fn domain_variants_render_stable_messages() {
        assert_eq!(
            StoreError::validation("price must not be empty").to_string(),
            "validation failed: price must not be empty"
        );
        assert_eq!(
            StoreError::not_found("Widget").to_string(),
            "product not found: Widget"
        );
        assert_eq!(
            StoreError::SelectionRequired.to_string(),
            "no product selected"
        );
    }
}
