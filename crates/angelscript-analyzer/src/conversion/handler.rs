//! Function handler compatibility.

use angelscript_core::SymbolicFunction;

use super::match_at_depth;
use crate::context::AnalysisContext;

/// Structural signature match between two function handlers.
///
/// Return types must match, parameter counts must be equal, and each
/// parameter pair must match. Default arguments are not considered.
pub(super) fn is_function_handler_match(
    src: &SymbolicFunction,
    dest: &SymbolicFunction,
    ctx: &AnalysisContext<'_>,
    depth: usize,
) -> bool {
    if !match_at_depth(
        src.return_type.as_ref(),
        dest.return_type.as_ref(),
        ctx,
        depth + 1,
    ) {
        return false;
    }
    if src.parameter_types.len() != dest.parameter_types.len() {
        return false;
    }
    src.parameter_types
        .iter()
        .zip(&dest.parameter_types)
        .all(|(s, d)| match_at_depth(s.as_ref(), d.as_ref(), ctx, depth + 1))
}
