//! Source location tracking for diagnostics and reference lookup.
//!
//! Provides [`Span`] to track where tokens, calls and errors occur in source code.

use std::fmt;

/// A span of source code, represented by its starting position and length.
///
/// Builtin tokens carry `Span::default()`, which is line 0 and never matches a
/// real source position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed, byte-based).
    pub col: u32,
    /// Length in bytes.
    pub len: u32,
}

impl Span {
    /// Create a new span from a line, column, and length.
    #[inline]
    pub fn new(line: u32, col: u32, len: u32) -> Self {
        Self { line, col, len }
    }

    /// Whether this span is empty (zero length).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The length of this span in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Whether this span has no real source position (builtin tokens).
    #[inline]
    pub fn is_virtual(&self) -> bool {
        self.line == 0
    }

    /// Whether a `line:col` position falls inside this span.
    ///
    /// The end column is inclusive so a cursor placed right after an
    /// identifier still resolves to it.
    pub fn contains(&self, line: u32, col: u32) -> bool {
        let end = self.col.saturating_add(self.len);
        !self.is_virtual() && self.line == line && col >= self.col && col <= end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
