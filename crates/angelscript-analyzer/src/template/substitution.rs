//! Type substitution for generic instantiation.
//!
//! A generic declaration's parameter and return types are written in terms
//! of its template parameters. Each use site builds a [`TemplateTranslation`]
//! and substitutes through it before any compatibility check runs.

use angelscript_core::{DeducedType, TemplateTranslation, Token};

/// One substitution step.
///
/// If `arg`'s declaration is a key of `translation`, returns the bound value,
/// which is `None` for a slot left unresolved on purpose. Otherwise returns
/// `arg` unchanged. Not recursive: a bound value is returned as is.
pub fn resolve_template_type(
    translation: Option<&TemplateTranslation>,
    arg: Option<&DeducedType>,
) -> Option<DeducedType> {
    let arg = arg?;
    let Some(translation) = translation else {
        return Some(arg.clone());
    };
    match translation.get(arg.declared_place()) {
        Some(bound) => bound.cloned(),
        None => Some(arg.clone()),
    }
}

/// [`resolve_template_type`] applied to each element of a list.
pub fn resolve_template_types(
    translation: Option<&TemplateTranslation>,
    args: &[Option<DeducedType>],
) -> Vec<Option<DeducedType>> {
    args.iter()
        .map(|arg| resolve_template_type(translation, arg.as_ref()))
        .collect()
}

/// Bind template parameters to type arguments positionally.
///
/// Parameters without a matching argument are bound as unresolved; surplus
/// arguments are ignored.
pub fn build_template_translation(
    template_params: &[Token],
    type_args: &[Option<DeducedType>],
) -> TemplateTranslation {
    let mut translation = TemplateTranslation::new();
    for (i, param) in template_params.iter().enumerate() {
        translation.insert(param.clone(), type_args.get(i).cloned().flatten());
    }
    translation
}

/// Instantiate a generic type with `type_args`.
///
/// The translation is built from the type's own template parameters and
/// attached to the result. A type with no template parameters is returned
/// unchanged.
pub fn instantiate_template(
    generic: &DeducedType,
    type_args: &[Option<DeducedType>],
) -> DeducedType {
    let params = generic
        .as_type()
        .and_then(|sym| sym.template_types.as_deref());
    match params {
        Some(params) => generic
            .clone()
            .with_translation(build_template_translation(params, type_args)),
        None => generic.clone(),
    }
}
