//! Error types for semantic analysis.
//!
//! ## Error Hierarchy
//!
//! ```text
//! AnalysisError  - user-facing diagnostics; never abort analysis
//! RegistryError  - internal invariant violations; abort the session
//! ```
//!
//! Analysis errors are reported through a [`DiagnosticSink`](crate::DiagnosticSink)
//! and the reporting function still returns a best-effort value. Registry
//! errors are returned as `Err` and must not be shown as diagnostics.

use std::fmt;

use thiserror::Error;

use crate::Span;

/// Discriminant of an [`AnalysisError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisErrorKind {
    DuplicateSymbol,
    ArityMismatch,
    MissingArgument,
    TypeConversion,
}

impl AnalysisErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisErrorKind::DuplicateSymbol => "duplicate symbol",
            AnalysisErrorKind::ArityMismatch => "arity mismatch",
            AnalysisErrorKind::MissingArgument => "missing argument",
            AnalysisErrorKind::TypeConversion => "type conversion",
        }
    }
}

impl fmt::Display for AnalysisErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A diagnostic produced while binding or checking a compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A name redefined in one scope where overloading does not apply.
    #[error("at {span}: '{name}' is already defined")]
    DuplicateSymbol { name: String, span: Span },

    /// More positional arguments than the last overload declares.
    #[error("at {span}: function has {expected} parameter(s), but {got} argument(s) were provided")]
    ArityMismatch {
        expected: usize,
        got: usize,
        span: Span,
    },

    /// A required parameter was not supplied and has no default.
    #[error("at {span}: missing argument for parameter '{param}'")]
    MissingArgument { param: String, span: Span },

    /// A value's type cannot be used where another type is expected.
    #[error("at {span}: '{src}' cannot be converted to '{dest}'")]
    TypeConversion {
        src: String,
        dest: String,
        span: Span,
    },
}

impl AnalysisError {
    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            AnalysisError::DuplicateSymbol { span, .. }
            | AnalysisError::ArityMismatch { span, .. }
            | AnalysisError::MissingArgument { span, .. }
            | AnalysisError::TypeConversion { span, .. } => *span,
        }
    }

    pub fn kind(&self) -> AnalysisErrorKind {
        match self {
            AnalysisError::DuplicateSymbol { .. } => AnalysisErrorKind::DuplicateSymbol,
            AnalysisError::ArityMismatch { .. } => AnalysisErrorKind::ArityMismatch,
            AnalysisError::MissingArgument { .. } => AnalysisErrorKind::MissingArgument,
            AnalysisError::TypeConversion { .. } => AnalysisErrorKind::TypeConversion,
        }
    }
}

/// Setup bugs in the builtin registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A token flagged as a numeric reserved word has no registered builtin.
    #[error("internal error: numeric builtin '{0}' is not registered")]
    MissingNumericAlias(String),
}
