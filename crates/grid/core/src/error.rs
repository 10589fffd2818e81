//! Common error infrastructure for grid-core.
//!
//! Most operations in this crate degrade silently: an out-of-range lookup is
//! `None`, a malformed shape is an empty footprint. The error types that do
//! exist cover explicit caller mistakes. Domain-specific errors live next to
//! the code that raises them (`TileError` in [`crate::grid`], `SessionError`
//! in [`crate::targeting`]) and share the [`GridError`] trait defined here.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: Temporary conditions that may succeed on retry or with alternative input
/// - **Validation**: Invalid input that should be rejected without retry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative input.
    ///
    /// Examples: tile is full, a pick session is still running
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: coordinate outside the grid, duplicate characteristic
    Validation,
}

impl ErrorSeverity {
    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all grid-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GridError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
