//! Unified error types for the domain layer
//!
//! Decoders report every rejected record through [`DomainError`], so the
//! engine can wrap a single error type without knowing which entity kind
//! produced it.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., empty name)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The record's id is missing, negative, not an integer, or too wide
    #[error("Invalid ID: {0}")]
    InvalidId(String),

    /// A record could not be mapped onto the entity type
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for field-level rule violations.
    ///
    /// Use this when a record is structurally fine but a value is not:
    /// - Required strings are empty
    /// - Values are outside allowed ranges
    ///
    /// # Example
    /// ```ignore
    /// if armor.name.trim().is_empty() {
    ///     return Err(DomainError::validation("Armor name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates an error for a record whose `id` field is unusable.
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Creates a parse error for record-to-entity mapping failures.
    ///
    /// Use this when a required field is absent or has the wrong JSON type.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
