//! AngelScript semantic core
//!
//! Scope tree, builtin types, type compatibility and overload resolution for
//! an AngelScript language server. A binder fills the scope tree through
//! [`AnalysisSession::declare`]; the checking pass then drives the engines
//! through [`AnalysisSession::context`].
//!
//! ## Crates
//!
//! - `angelscript-core`: tokens, declaration nodes, symbols, errors
//! - `angelscript-registry`: scope tree and builtin registry
//! - `angelscript-analyzer`: type compatibility, overloads, templates

use angelscript_core::{DeducedType, Diagnostics, RegistryError, ScopeId, SymbolicObject, Token};
use angelscript_registry::{BuiltinRegistry, ScopeTree};

pub use angelscript_analyzer::{
    AnalysisContext, AnalyzerConfig, CallArgument, build_template_translation, check_function_match,
    check_type_match, instantiate_template, is_type_match, resolve_template_type,
    resolve_template_types,
};
pub use angelscript_core::{
    AnalysisError, AnalysisErrorKind, DiagnosticSink, Span, TokenFlags, TokenId, TokenKind, node,
};
pub use angelscript_registry::{
    ComplementHint, FoundSymbol, ReferenceInformation, ScopeData, ScopeEdge,
};

/// Everything needed to analyze one compilation unit.
///
/// Owns one builtin registry, one scope tree and the diagnostics collected
/// so far.
#[derive(Debug)]
pub struct AnalysisSession {
    builtins: BuiltinRegistry,
    tree: ScopeTree,
    diagnostics: Diagnostics,
    config: AnalyzerConfig,
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self::with_builtins(BuiltinRegistry::new(), config)
    }

    /// Start a session over an existing builtin registry.
    pub fn with_builtins(builtins: BuiltinRegistry, config: AnalyzerConfig) -> Self {
        Self {
            builtins,
            tree: ScopeTree::new(),
            diagnostics: Diagnostics::new(),
            config,
        }
    }

    /// Borrow the session for the checking engines.
    pub fn context(&mut self) -> AnalysisContext<'_> {
        AnalysisContext::with_config(
            &mut self.tree,
            &self.builtins,
            &mut self.diagnostics,
            self.config,
        )
    }

    /// Declare a symbol in `scope`. Reports `DuplicateSymbol` and returns
    /// false on a clash that is not an overload.
    pub fn declare(&mut self, scope: ScopeId, symbol: impl Into<SymbolicObject>) -> bool {
        self.tree
            .insert_symbolic_object(scope, symbol.into(), &mut self.diagnostics)
    }

    /// Resolve a reserved-word token to its builtin type.
    ///
    /// An error means the registry was built without a numeric alias the
    /// lexer recognizes; callers should abort the session.
    pub fn try_builtin(&self, token: &Token) -> Result<Option<DeducedType>, RegistryError> {
        Ok(self
            .builtins
            .try_get_builtin_type(token)?
            .map(|sym| DeducedType::new(sym, None)))
    }

    pub fn root(&self) -> ScopeId {
        self.tree.root()
    }

    pub fn builtins(&self) -> &BuiltinRegistry {
        &self.builtins
    }

    pub fn tree(&self) -> &ScopeTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut ScopeTree {
        &mut self.tree
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Hand the collected diagnostics to the caller, leaving none behind.
    pub fn take_diagnostics(&mut self) -> Diagnostics {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}

pub mod prelude {
    pub use crate::AnalysisSession;
    pub use angelscript_analyzer::{
        AnalysisContext, AnalyzerConfig, CallArgument, check_function_match, check_type_match,
        is_type_match,
    };
    pub use angelscript_core::node::{
        BlockDecl, CallerNode, ClassDecl, EnumDecl, FunctionDecl, ParamDecl, ScopeOwner,
    };
    pub use angelscript_core::{
        AnalysisError, AnalysisErrorKind, DeducedType, Diagnostics, Overloads, PrimitiveType,
        ScopeId, SourceType, Span, SymbolEntry, SymbolicFunction, SymbolicObject, SymbolicType,
        SymbolicVariable, TemplateTranslation, Token,
    };
    pub use angelscript_registry::{BuiltinRegistry, ReferenceInformation, ScopeTree};
}
