//! AnalysisContext - what the checking pass hands to the engines.

use angelscript_core::{AnalysisError, DiagnosticSink};
use angelscript_registry::{BuiltinRegistry, ScopeTree};

/// Tunables for the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Nesting limit for function-handler comparisons. Deeper pairs are
    /// treated as compatible.
    pub max_match_depth: usize,
}

impl AnalyzerConfig {
    pub const DEFAULT_MAX_MATCH_DEPTH: usize = 64;
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_match_depth: Self::DEFAULT_MAX_MATCH_DEPTH,
        }
    }
}

/// Borrowed view of one compilation unit under analysis.
///
/// The tree is borrowed mutably only so the resolver can append to the
/// reference log; no engine adds or removes scopes or symbols.
pub struct AnalysisContext<'a> {
    tree: &'a mut ScopeTree,
    builtins: &'a BuiltinRegistry,
    sink: &'a mut dyn DiagnosticSink,
    config: AnalyzerConfig,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(
        tree: &'a mut ScopeTree,
        builtins: &'a BuiltinRegistry,
        sink: &'a mut dyn DiagnosticSink,
    ) -> Self {
        Self::with_config(tree, builtins, sink, AnalyzerConfig::default())
    }

    pub fn with_config(
        tree: &'a mut ScopeTree,
        builtins: &'a BuiltinRegistry,
        sink: &'a mut dyn DiagnosticSink,
        config: AnalyzerConfig,
    ) -> Self {
        Self {
            tree,
            builtins,
            sink,
            config,
        }
    }

    #[inline]
    pub fn tree(&self) -> &ScopeTree {
        self.tree
    }

    #[inline]
    pub fn tree_mut(&mut self) -> &mut ScopeTree {
        self.tree
    }

    #[inline]
    pub fn builtins(&self) -> &BuiltinRegistry {
        self.builtins
    }

    #[inline]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Forward a diagnostic to the sink.
    pub fn report(&mut self, error: AnalysisError) {
        self.sink.report(error);
    }
}
