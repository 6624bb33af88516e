//! AngelScript Registry crate.
//!
//! Storage the binder fills and the analyzer reads:
//!
//! - [`BuiltinRegistry`]: singleton symbols for primitive types, built once per session
//! - [`ScopeTree`]: the lexical scope graph with per-scope symbol maps and the
//!   append-only reference and completion logs

mod builtins;
mod scope_tree;

pub use builtins::BuiltinRegistry;
pub use scope_tree::{
    ComplementHint, FoundSymbol, ReferenceInformation, ScopeData, ScopeEdge, ScopeTree,
};
