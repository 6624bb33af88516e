//! AngelScript semantic analyzer
//!
//! Type compatibility and overload resolution over a bound scope tree.
//!
//! ## Modules
//!
//! - [`context`]: Analysis context handed to every engine
//! - [`conversion`]: Type compatibility (`is_type_match`, `check_type_match`)
//! - [`overload`]: First-applicable overload resolution for calls
//! - [`template`]: Template parameter substitution

pub mod context;
pub mod conversion;
pub mod overload;
pub mod template;

#[cfg(test)]
mod fixtures;

pub use context::{AnalysisContext, AnalyzerConfig};
pub use conversion::{check_type_match, is_type_match};
pub use overload::{CallArgument, check_function_match};
pub use template::{
    build_template_translation, instantiate_template, resolve_template_type, resolve_template_types,
};
