//! Overload resolution for function and constructor calls.
//!
//! ## Algorithm
//!
//! Overloads are tried in declaration order and the first one that gets
//! through its parameter list without a retry is taken. Only the last
//! overload reports diagnostics:
//!
//! 1. Surplus arguments: arity error, recovered by still returning the
//!    overload's return type
//! 2. A required parameter with no argument: missing-argument error, and
//!    the remaining parameters are not checked
//! 3. A mismatching argument: conversion error for that argument, and
//!    checking continues with the next parameter
//!
//! An accepted call appends a reference from the call-site identifier to the
//! chosen declaration in the calling scope.

use std::rc::Rc;

use angelscript_core::node::CallerNode;
use angelscript_core::{
    AnalysisError, DeducedType, DisplayDeduced, ScopeId, Span, SymbolicFunction, SymbolicObject,
    TemplateTranslation,
};
use angelscript_registry::ReferenceInformation;
use tracing::debug;

use crate::context::AnalysisContext;
use crate::conversion::is_type_match;
use crate::template::resolve_template_type;

/// One positional argument at a call site.
#[derive(Debug, Clone)]
pub struct CallArgument {
    /// Deduced type of the argument expression, absent if deduction failed.
    pub ty: Option<DeducedType>,
    /// Location of the argument expression.
    pub span: Span,
}

impl CallArgument {
    pub fn new(ty: Option<DeducedType>, span: Span) -> Self {
        Self { ty, span }
    }
}

/// Outcome of checking one overload.
enum Attempt {
    /// Try the next overload.
    Retry,
    /// Bind to this overload (diagnostics, if any, are already reported).
    Bind,
}

/// Bind a call to the first applicable overload in `callee`.
///
/// Returns the bound overload's return type. With no applicable overload the
/// last one is bound on a best-effort basis after its diagnostics are
/// reported. Returns `None` only when `callee` is empty or the bound
/// overload's return type is unknown.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn check_function_match(
    ctx: &mut AnalysisContext<'_>,
    scope: ScopeId,
    caller: &CallerNode,
    args: &[CallArgument],
    callee: &[Rc<SymbolicFunction>],
    translator: Option<&TemplateTranslation>,
) -> Option<DeducedType> {
    for (index, func) in callee.iter().enumerate() {
        let is_last = index + 1 == callee.len();
        debug!(
            callee = func.declared_place.text(),
            overload = index,
            args = args.len(),
            "trying overload"
        );

        match try_overload(ctx, caller, args, func, translator, is_last) {
            Attempt::Retry => continue,
            Attempt::Bind => {
                debug!(callee = func.declared_place.text(), overload = index, "call bound");
                ctx.tree_mut().push_reference(
                    scope,
                    ReferenceInformation {
                        declared_symbol: SymbolicObject::Function(func.clone()),
                        referenced_token: caller.identifier().clone(),
                    },
                );
                return func.return_type.clone();
            }
        }
    }
    None
}

fn try_overload(
    ctx: &mut AnalysisContext<'_>,
    caller: &CallerNode,
    args: &[CallArgument],
    func: &SymbolicFunction,
    translator: Option<&TemplateTranslation>,
    is_last: bool,
) -> Attempt {
    let params = &func.source_node.params;

    if args.len() > params.len() {
        if !is_last {
            return Attempt::Retry;
        }
        ctx.report(AnalysisError::ArityMismatch {
            expected: params.len(),
            got: args.len(),
            span: caller.span(),
        });
        return Attempt::Bind;
    }

    for (i, param) in params.iter().enumerate() {
        let Some(arg) = args.get(i) else {
            if param.has_default() {
                continue;
            }
            if !is_last {
                return Attempt::Retry;
            }
            ctx.report(AnalysisError::MissingArgument {
                param: param.display_name().to_string(),
                span: caller.span(),
            });
            break;
        };

        let expected = func.parameter_types.get(i).and_then(Option::as_ref);
        let actual = resolve_template_type(translator, arg.ty.as_ref());
        let expected = resolve_template_type(translator, expected);
        let (Some(actual), Some(expected)) = (actual, expected) else {
            continue;
        };

        if is_type_match(Some(&actual), Some(&expected), ctx) {
            continue;
        }
        if !is_last {
            return Attempt::Retry;
        }
        ctx.report(AnalysisError::TypeConversion {
            src: DisplayDeduced(Some(&actual)).to_string(),
            dest: DisplayDeduced(Some(&expected)).to_string(),
            span: arg.span,
        });
    }

    Attempt::Bind
}
