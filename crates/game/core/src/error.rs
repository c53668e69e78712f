//! Common error infrastructure for maze-core and its dependents.
//!
//! Domain errors (e.g. [`crate::env::MazeError`]) live next to the code that
//! raises them; this module only provides the shared classification.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller may retry or pick an alternative
/// - **Validation**: invalid input, reject without retry
/// - **Internal**: unexpected inconsistency between collaborators
/// - **Fatal**: the tick or episode cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug or a broken collaborator.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Uniform classification for errors raised by maze-core and the runtime.
///
/// Implementors derive `thiserror::Error` for Display/Error and classify each
/// variant by recoverability, not impact.
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
