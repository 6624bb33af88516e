//! Template translation.
//!
//! Generic instantiation here is substitution only: the checker deduces the
//! type arguments, this module maps a generic declaration's parameters onto
//! them.

mod substitution;

pub use substitution::{
    build_template_translation, instantiate_template, resolve_template_type, resolve_template_types,
};
