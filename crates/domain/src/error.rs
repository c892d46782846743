//! Unified error types for the calendar domain
//!
//! The calendar arithmetic itself is total; errors only surface at the edges,
//! when a configuration is built or a stored value is read back.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid configuration values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects read back from storage)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for rejected configuration.
    ///
    /// Use this when a calendar invariant would not hold:
    /// - A month has no days
    /// - A fictional day spans zero real hours
    /// - The leap month index is outside the month table
    ///
    /// # Example
    /// ```ignore
    /// if hours_per_fictional_day == 0 {
    ///     return Err(DomainError::validation("hours per fictional day must be positive"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
