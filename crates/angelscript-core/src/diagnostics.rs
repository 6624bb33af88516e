//! Diagnostic sink and the collecting implementation.

use std::fmt;

use crate::{AnalysisError, AnalysisErrorKind};

/// Receives diagnostics from the analyzer.
///
/// Reporting is fire-and-forget: the analyzer never reads diagnostics back,
/// and every reporting function also returns its own success signal.
pub trait DiagnosticSink {
    fn report(&mut self, error: AnalysisError);
}

/// A collection of diagnostics, in the order they were reported.
///
/// # Example
///
/// ```
/// use angelscript_core::{AnalysisError, DiagnosticSink, Diagnostics, Span};
///
/// let mut diagnostics = Diagnostics::new();
/// diagnostics.report(AnalysisError::MissingArgument {
///     param: "c".to_string(),
///     span: Span::new(3, 1, 9),
/// });
/// assert_eq!(diagnostics.len(), 1);
/// assert_eq!(diagnostics.to_string(), "at 3:1: missing argument for parameter 'c'\n");
/// ```
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<AnalysisError>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnalysisError> {
        self.errors.iter()
    }

    /// Diagnostics of one kind, in report order.
    pub fn errors_of_kind(&self, kind: AnalysisErrorKind) -> impl Iterator<Item = &AnalysisError> {
        self.errors.iter().filter(move |e| e.kind() == kind)
    }

    pub fn count_of_kind(&self, kind: AnalysisErrorKind) -> usize {
        self.errors_of_kind(kind).count()
    }

    /// Drop everything collected so far, e.g. before re-checking a file.
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn into_vec(self) -> Vec<AnalysisError> {
        self.errors
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, error: AnalysisError) {
        self.errors.push(error);
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a AnalysisError;
    type IntoIter = std::slice::Iter<'a, AnalysisError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{error}")?;
        }
        Ok(())
    }
}
