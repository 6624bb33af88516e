//! AngelScript semantic core types.
//!
//! Shared vocabulary for the registry and the analyzer:
//!
//! - [`Span`], [`Token`], [`TokenId`] - source positions and token identity
//! - [`node`] - declaration and call node shapes read from the parser
//! - [`ScopeId`] - non-owning handle to a scope
//! - [`entries`] - symbols, deduced types and template translations
//! - [`AnalysisError`], [`RegistryError`] - error types
//! - [`DiagnosticSink`], [`Diagnostics`] - diagnostic reporting

mod diagnostics;
pub mod entries;
mod error;
mod ids;
pub mod node;
mod span;
mod token;

pub use diagnostics::{DiagnosticSink, Diagnostics};
pub use entries::*;
pub use error::{AnalysisError, AnalysisErrorKind, RegistryError};
pub use ids::ScopeId;
pub use span::Span;
pub use token::{NUMBER_TYPE_NAMES, Token, TokenFlags, TokenId, TokenKind};
