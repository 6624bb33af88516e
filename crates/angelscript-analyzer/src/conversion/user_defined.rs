//! Implicit construction through a converting constructor.
//!
//! A converting constructor is a one-parameter constructor declared in the
//! destination class's own scope whose parameter is exactly the source type.

use angelscript_core::node::ScopeOwner;
use angelscript_core::{DeducedType, SymbolEntry, SymbolicType};
use angelscript_registry::ScopeTree;

/// Whether `dest` can be built from a `src_type` value by one of its constructors.
///
/// The class scope is located by name from `dest`'s source scope; every
/// overload of the same-named constructor is considered.
pub fn can_construct_implicitly(
    src_type: &SymbolicType,
    dest: &DeducedType,
    dest_type: &SymbolicType,
    tree: &ScopeTree,
) -> bool {
    if !dest_type.source_type.is_class() {
        return false;
    }
    let Some(dest_scope) = dest.source_scope else {
        return false;
    };

    let name = dest_type.declared_place.text();
    let Some(class_scope) = tree.find_scope_shallowly(dest_scope, name) else {
        return false;
    };
    if !tree.owner(class_scope).is_some_and(ScopeOwner::is_class) {
        return false;
    }
    let Some(SymbolEntry::Functions(constructors)) = tree.find_symbol_shallowly(class_scope, name)
    else {
        return false;
    };

    constructors.iter().any(|ctor| match ctor.parameter_types.as_slice() {
        [Some(param)] => param.as_type().is_some_and(|p| p.is_same(src_type)),
        _ => false,
    })
}
