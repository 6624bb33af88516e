//! Identifier types for the scope tree.

use std::fmt;

/// Identifies one scope in a scope tree.
///
/// Scope ids are handed out by the tree that owns the scopes and are only
/// meaningful for that tree. They are plain indices: holding one never keeps
/// a scope alive, which is what lets deduced types and child scopes refer
/// back to an enclosing scope without owning it.
///
/// # Example
///
/// ```
/// use angelscript_core::ScopeId;
///
/// let scope = ScopeId::new(0);
/// assert_eq!(scope.index(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(u32);

impl ScopeId {
    /// Create a new scope ID with the given index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the underlying index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope_{}", self.0)
    }
}

impl From<u32> for ScopeId {
    fn from(index: u32) -> Self {
        Self::new(index)
    }
}
