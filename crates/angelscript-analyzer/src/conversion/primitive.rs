//! Primitive source matrix.

use angelscript_core::{PrimitiveType, SymbolicType};

/// Compatibility of a primitive source with a destination.
///
/// `Some(result)` is final. `None` means the matrix has no match and the
/// caller may still try implicit construction of the destination.
pub fn primitive_match(
    src: PrimitiveType,
    src_type: &SymbolicType,
    dest_type: &SymbolicType,
) -> Option<bool> {
    let dest = dest_type.source_type.primitive();
    let matched = match src {
        PrimitiveType::Template => src_type.is_same(dest_type),
        PrimitiveType::String => is_string_name(dest_type.declared_place.text()),
        PrimitiveType::Void => return Some(false),
        PrimitiveType::Number => dest == Some(PrimitiveType::Number),
        PrimitiveType::Bool => dest == Some(PrimitiveType::Bool),
        PrimitiveType::Any | PrimitiveType::Auto => true,
    };
    matched.then_some(true)
}

/// Names a string value converts to.
fn is_string_name(name: &str) -> bool {
    matches!(name, "string" | "String")
}
