//! Type compatibility.
//!
//! Decides whether a value of one deduced type can be used where another is
//! expected. Used directly for assignments and returns, and per argument by
//! the overload resolver.
//!
//! ## Rule Order
//!
//! 1. An absent type on either side matches (deduction already failed upstream)
//! 2. Each side substitutes itself through its own template translation
//! 3. Function handlers match only function handlers, by signature
//! 4. `?` and `auto` destinations accept anything
//! 5. Primitive sources follow the primitive matrix
//! 6. User types match themselves and their immediate bases
//! 7. Otherwise, implicit construction through a one-argument constructor

use angelscript_core::{
    AnalysisError, DeducedSymbol, DeducedType, DisplayDeduced, PrimitiveType, SourceType, Span,
    SymbolicType,
};
use tracing::warn;

use crate::context::AnalysisContext;
use crate::template::resolve_template_type;

mod handler;
mod primitive;
mod user_defined;

pub use primitive::primitive_match;
pub use user_defined::can_construct_implicitly;

/// Whether a value of type `src` can be used where `dest` is expected.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn is_type_match(
    src: Option<&DeducedType>,
    dest: Option<&DeducedType>,
    ctx: &AnalysisContext<'_>,
) -> bool {
    match_at_depth(src, dest, ctx, 0)
}

/// [`is_type_match`], reporting a `TypeConversion` diagnostic at `span` on failure.
pub fn check_type_match(
    src: Option<&DeducedType>,
    dest: Option<&DeducedType>,
    span: Span,
    ctx: &mut AnalysisContext<'_>,
) -> bool {
    if is_type_match(src, dest, ctx) {
        return true;
    }
    ctx.report(AnalysisError::TypeConversion {
        src: DisplayDeduced(src).to_string(),
        dest: DisplayDeduced(dest).to_string(),
        span,
    });
    false
}

pub(crate) fn match_at_depth(
    src: Option<&DeducedType>,
    dest: Option<&DeducedType>,
    ctx: &AnalysisContext<'_>,
    depth: usize,
) -> bool {
    let (Some(src), Some(dest)) = (src, dest) else {
        return true;
    };

    if depth > ctx.config().max_match_depth {
        warn!(src = %src, dest = %dest, depth, "type match depth limit reached");
        return true;
    }

    let Some(src) = resolve_self(src) else {
        return true;
    };
    let Some(dest) = resolve_self(dest) else {
        return true;
    };

    match (&src.symbol, &dest.symbol) {
        (DeducedSymbol::Function(src_func), DeducedSymbol::Function(dest_func)) => {
            handler::is_function_handler_match(src_func, dest_func, ctx, depth)
        }
        (DeducedSymbol::Function(_), DeducedSymbol::Type(_))
        | (DeducedSymbol::Type(_), DeducedSymbol::Function(_)) => false,
        (DeducedSymbol::Type(src_type), DeducedSymbol::Type(dest_type)) => {
            is_type_symbol_match(src_type, &dest, dest_type, ctx)
        }
    }
}

/// Substitute a type through the translation captured at its own instantiation.
fn resolve_self(ty: &DeducedType) -> Option<DeducedType> {
    resolve_template_type(ty.template_translate.as_deref(), Some(ty))
}

fn is_type_symbol_match(
    src_type: &SymbolicType,
    dest: &DeducedType,
    dest_type: &SymbolicType,
    ctx: &AnalysisContext<'_>,
) -> bool {
    if matches!(
        dest_type.source_type.primitive(),
        Some(PrimitiveType::Any | PrimitiveType::Auto)
    ) {
        return true;
    }

    match &src_type.source_type {
        SourceType::Primitive(primitive) => {
            if let Some(result) = primitive_match(*primitive, src_type, dest_type) {
                return result;
            }
        }
        SourceType::Enum(_) | SourceType::Class(_) => {
            if src_type.is_same(dest_type) || is_immediate_base(src_type, dest_type) {
                return true;
            }
        }
    }

    can_construct_implicitly(src_type, dest, dest_type, ctx.tree())
}

/// Whether `dest_type` appears in `src_type`'s own base list.
///
/// Bases of bases are not walked.
pub fn is_immediate_base(src_type: &SymbolicType, dest_type: &SymbolicType) -> bool {
    src_type
        .base_list
        .iter()
        .flatten()
        .filter_map(DeducedType::as_type)
        .any(|base| base.is_same(dest_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{Fixture, req};
    use angelscript_core::node::{ClassDecl, ScopeOwner};
    use angelscript_core::{AnalysisErrorKind, TemplateTranslation, Token};
    use std::rc::Rc;

    fn template_param(f: &mut Fixture, name: &str) -> DeducedType {
        let tok = f.ident(name);
        DeducedType::new(
            Rc::new(SymbolicType::primitive(tok, PrimitiveType::Template)),
            None,
        )
    }

    #[test]
    fn absent_is_compatible_both_ways() {
        let mut f = Fixture::new();
        let root = f.root();
        let (player, _) = f.class(root, "Player", &[]);
        let int = f.builtin("int");
        let ctx = f.ctx();

        assert!(is_type_match(None, Some(&player), &ctx));
        assert!(is_type_match(Some(&player), None, &ctx));
        assert!(is_type_match(None, Some(&int), &ctx));
        assert!(is_type_match(Some(&int), None, &ctx));
        assert!(is_type_match(None, None, &ctx));
    }

    #[test]
    fn same_name_different_declaration_is_incompatible() {
        let mut f = Fixture::new();
        let root = f.root();
        let ns_a = f.tree.create_scope(root, "a", None);
        let ns_b = f.tree.create_scope(root, "b", None);
        let (foo_a, _) = f.class(ns_a, "Foo", &[]);
        let (foo_b, _) = f.class(ns_b, "Foo", &[]);
        let ctx = f.ctx();

        assert!(is_type_match(Some(&foo_a), Some(&foo_a), &ctx));
        assert!(!is_type_match(Some(&foo_a), Some(&foo_b), &ctx));
        assert!(!is_type_match(Some(&foo_b), Some(&foo_a), &ctx));
    }

    #[test]
    fn any_and_auto_destinations_accept_everything() {
        let mut f = Fixture::new();
        let root = f.root();
        let (player, _) = f.class(root, "Player", &[]);
        let any = f.builtin("?");
        let auto = f.builtin("auto");
        let sources = [
            player,
            f.builtin("int"),
            f.builtin("bool"),
            f.builtin("string"),
            f.builtin("void"),
        ];
        let ctx = f.ctx();

        for src in &sources {
            assert!(is_type_match(Some(src), Some(&any), &ctx), "{src} -> ?");
            assert!(is_type_match(Some(src), Some(&auto), &ctx), "{src} -> auto");
        }
    }

    #[test]
    fn any_source_matches_everything() {
        let mut f = Fixture::new();
        let root = f.root();
        let (player, _) = f.class(root, "Player", &[]);
        let any = f.builtin("?");
        let dests = [player, f.builtin("int"), f.builtin("bool"), f.builtin("string")];
        let ctx = f.ctx();

        for dest in &dests {
            assert!(is_type_match(Some(&any), Some(dest), &ctx), "? -> {dest}");
        }
    }

    #[test]
    fn inheritance_is_single_level() {
        let mut f = Fixture::new();
        let root = f.root();
        let (a, _) = f.class(root, "A", &[]);
        let (b, _) = f.class(root, "B", &[&a]);
        let (c, _) = f.class(root, "C", &[&b]);
        let ctx = f.ctx();

        assert!(is_type_match(Some(&b), Some(&a), &ctx));
        assert!(is_type_match(Some(&c), Some(&b), &ctx));
        assert!(!is_type_match(Some(&c), Some(&a), &ctx));
        assert!(!is_type_match(Some(&a), Some(&b), &ctx));
    }

    #[test]
    fn self_translation_resolves_template_parameter() {
        let mut f = Fixture::new();
        let t = template_param(&mut f, "T");
        let int = f.builtin("int");
        let boolean = f.builtin("bool");

        let mut translation = TemplateTranslation::new();
        translation.insert(t.declared_place().clone(), Some(int.clone()));
        let t_as_int = t.clone().with_translation(translation);

        let ctx = f.ctx();
        assert!(is_type_match(Some(&t_as_int), Some(&int), &ctx));
        assert!(!is_type_match(Some(&t_as_int), Some(&boolean), &ctx));
    }

    #[test]
    fn self_translation_to_unresolved_is_compatible() {
        let mut f = Fixture::new();
        let t = template_param(&mut f, "T");
        let boolean = f.builtin("bool");

        let mut translation = TemplateTranslation::new();
        translation.insert(t.declared_place().clone(), None);
        let open = t.with_translation(translation);

        let ctx = f.ctx();
        assert!(is_type_match(Some(&open), Some(&boolean), &ctx));
        assert!(is_type_match(Some(&boolean), Some(&open), &ctx));
    }

    #[test]
    fn function_never_matches_type() {
        let mut f = Fixture::new();
        let root = f.root();
        let int = f.builtin("int");
        let func = f.function(root, "cb", vec![], Some(int.clone()));
        let handler = DeducedType::function(func, Some(root));
        let any = f.builtin("?");
        let ctx = f.ctx();

        assert!(!is_type_match(Some(&handler), Some(&int), &ctx));
        assert!(!is_type_match(Some(&int), Some(&handler), &ctx));
        // function source is checked before the `?` destination rule
        assert!(!is_type_match(Some(&handler), Some(&any), &ctx));
    }

    #[test]
    fn check_reports_conversion_error() {
        let mut f = Fixture::new();
        let boolean = f.builtin("bool");
        let int = f.builtin("int");
        let span = Span::new(7, 3, 4);

        let mut ctx = f.ctx();
        assert!(!check_type_match(Some(&boolean), Some(&int), span, &mut ctx));
        assert!(check_type_match(Some(&int), Some(&int), span, &mut ctx));
        drop(ctx);

        assert_eq!(f.diagnostics.len(), 1);
        let err = f.diagnostics.iter().next().unwrap();
        assert_eq!(err.kind(), AnalysisErrorKind::TypeConversion);
        assert_eq!(err.span(), span);
        assert_eq!(err.to_string(), "at 7:3: 'bool' cannot be converted to 'int'");
    }

    #[test]
    fn depth_limit_treats_as_compatible() {
        let mut f = Fixture::new();
        let root = f.root();
        let int = f.builtin("int");
        let boolean = f.builtin("bool");
        let takes_int = f.function(root, "a", vec![req(&int)], None);
        let takes_bool = f.function(root, "b", vec![req(&boolean)], None);
        let h_int = DeducedType::function(takes_int, None);
        let h_bool = DeducedType::function(takes_bool, None);

        let ctx = f.ctx();
        assert!(!is_type_match(Some(&h_int), Some(&h_bool), &ctx));
        drop(ctx);

        let config = crate::AnalyzerConfig { max_match_depth: 0 };
        let ctx =
            AnalysisContext::with_config(&mut f.tree, &f.builtins, &mut f.diagnostics, config);
        // parameter comparison happens one level down and is cut off
        assert!(is_type_match(Some(&h_int), Some(&h_bool), &ctx));
    }

    #[test]
    fn unresolved_base_is_skipped() {
        let mut f = Fixture::new();
        let root = f.root();
        let (a, _) = f.class(root, "A", &[]);
        let tok = Token::identifier("B", Span::new(40, 1, 1));
        let b = DeducedType::new(
            Rc::new(
                SymbolicType::new(tok, a.as_type().unwrap().source_type.clone())
                    .with_base_list(vec![None, Some(a.clone())]),
            ),
            Some(root),
        );
        let ctx = f.ctx();
        assert!(is_type_match(Some(&b), Some(&a), &ctx));
    }

    #[test]
    fn enum_matches_only_its_own_declaration() {
        let mut f = Fixture::new();
        let root = f.root();
        let ns_a = f.tree.create_scope(root, "a", None);
        let ns_b = f.tree.create_scope(root, "b", None);
        let color_a = f.enumeration(ns_a, "Color");
        let color_b = f.enumeration(ns_b, "Color");
        let ctx = f.ctx();

        assert!(is_type_match(Some(&color_a), Some(&color_a), &ctx));
        assert!(!is_type_match(Some(&color_a), Some(&color_b), &ctx));
        assert!(!is_type_match(Some(&color_b), Some(&color_a), &ctx));
    }

    #[test]
    fn enum_and_number_do_not_convert() {
        let mut f = Fixture::new();
        let root = f.root();
        let color = f.enumeration(root, "Color");
        let int = f.builtin("int");

        // a class-owned scope named like the enum, holding `Color(int)`
        let owner = f.ident("Color");
        let decl = Rc::new(ClassDecl {
            identifier: owner.clone(),
            base_names: Vec::new(),
            span: owner.span(),
        });
        let shadow = f
            .tree
            .create_scope(root, "Color", Some(ScopeOwner::Class(decl)));
        f.function(shadow, "Color", vec![req(&int)], None);

        let ctx = f.ctx();
        assert!(!is_type_match(Some(&color), Some(&int), &ctx));
        assert!(!is_type_match(Some(&int), Some(&color), &ctx));
    }
}
