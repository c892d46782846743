//! Testability ports for injecting time.

use chrono::NaiveDateTime;

// =============================================================================
// Testability Ports
// =============================================================================

/// Source of "now" as host-local wall time.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}
