//! Scope Tree - lexically nested symbol tables.
//!
//! Uses `petgraph::DiGraph` with:
//! - Nodes: `ScopeData` (symbols, reference log, completion hints)
//! - Edges: `Contains(name)` from a scope to each named child scope
//!
//! The parent of a scope is the source of its single incoming `Contains`
//! edge. It is only used for lookup; the graph owns every scope.

use std::rc::Rc;

use angelscript_core::{
    AnalysisError, DiagnosticSink, ScopeId, Span, SymbolEntry, SymbolicObject, SymbolicType, Token,
    node::ScopeOwner,
};
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use rustc_hash::FxHashMap;
use tracing::trace;

/// Edge types in the scope graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeEdge {
    /// Parent scope contains the named child scope.
    Contains(String),
}

/// A resolved reference: `referenced_token` names `declared_symbol`.
#[derive(Debug, Clone)]
pub struct ReferenceInformation {
    pub declared_symbol: SymbolicObject,
    pub referenced_token: Token,
}

/// Location-tagged hint recorded for editor completion.
#[derive(Debug, Clone)]
pub enum ComplementHint {
    /// Completion inside `span` offers the symbols of `target_scope`.
    Scope { span: Span, target_scope: ScopeId },
    /// Completion inside `span` offers the members of `target_type`.
    Type {
        span: Span,
        target_type: Rc<SymbolicType>,
    },
    /// Completion inside `span` offers the contents of a namespace path.
    Namespace { span: Span, namespace_list: Vec<Token> },
}

impl ComplementHint {
    pub fn span(&self) -> Span {
        match self {
            ComplementHint::Scope { span, .. }
            | ComplementHint::Type { span, .. }
            | ComplementHint::Namespace { span, .. } => *span,
        }
    }
}

/// Data stored in each scope node.
#[derive(Debug, Default)]
pub struct ScopeData {
    /// Declaring construct; `None` for the root and for scopes opened by name only.
    pub owner: Option<ScopeOwner>,
    /// Symbols declared directly in this scope.
    pub symbols: FxHashMap<String, SymbolEntry>,
    /// Append-only log of resolved references.
    pub referenced: Vec<ReferenceInformation>,
    /// Append-only log of completion hints.
    pub completion_hints: Vec<ComplementHint>,
}

/// A symbol found by lexical lookup, with the scope that declares it.
#[derive(Debug, Clone, Copy)]
pub struct FoundSymbol<'a> {
    pub symbol: &'a SymbolEntry,
    pub scope: ScopeId,
}

/// The scope graph for one compilation unit.
#[derive(Debug)]
pub struct ScopeTree {
    graph: DiGraph<ScopeData, ScopeEdge>,
    root: NodeIndex,
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn node(id: ScopeId) -> NodeIndex {
    NodeIndex::new(id.index() as usize)
}

#[inline]
fn scope_id(node: NodeIndex) -> ScopeId {
    ScopeId::new(node.index() as u32)
}

impl ScopeTree {
    /// Create a tree holding only the global scope.
    pub fn new() -> Self {
        let mut graph = DiGraph::new();
        let root = graph.add_node(ScopeData::default());
        Self { graph, root }
    }

    /// The global scope.
    pub fn root(&self) -> ScopeId {
        scope_id(self.root)
    }

    pub fn scope_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn get(&self, scope: ScopeId) -> Option<&ScopeData> {
        self.graph.node_weight(node(scope))
    }

    pub fn get_mut(&mut self, scope: ScopeId) -> Option<&mut ScopeData> {
        self.graph.node_weight_mut(node(scope))
    }

    pub fn owner(&self, scope: ScopeId) -> Option<&ScopeOwner> {
        self.get(scope)?.owner.as_ref()
    }

    // ========================================================================
    // Scope Structure
    // ========================================================================

    /// Get or create the child scope `name` of `parent`.
    ///
    /// An existing child keeps its owner unless it has none yet, so a scope
    /// opened by name before its declaration was bound picks the owner up later.
    pub fn create_scope(
        &mut self,
        parent: ScopeId,
        name: &str,
        owner: Option<ScopeOwner>,
    ) -> ScopeId {
        if let Some(existing) = self.find_scope_shallowly(parent, name) {
            if let Some(data) = self.get_mut(existing)
                && data.owner.is_none()
            {
                data.owner = owner;
            }
            return existing;
        }

        let child = self.graph.add_node(ScopeData {
            owner,
            ..ScopeData::default()
        });
        self.graph
            .add_edge(node(parent), child, ScopeEdge::Contains(name.to_string()));
        trace!(parent = %parent, name, child = child.index(), "scope created");
        scope_id(child)
    }

    /// Find a direct child scope by name.
    pub fn find_scope_shallowly(&self, scope: ScopeId, name: &str) -> Option<ScopeId> {
        self.graph.edges(node(scope)).find_map(|edge| match edge.weight() {
            ScopeEdge::Contains(child_name) if child_name == name => Some(scope_id(edge.target())),
            _ => None,
        })
    }

    /// Find a child scope by name in `scope` or any enclosing scope.
    pub fn find_scope_with_parent(&self, scope: ScopeId, name: &str) -> Option<ScopeId> {
        let mut current = Some(scope);
        while let Some(s) = current {
            if let Some(found) = self.find_scope_shallowly(s, name) {
                return Some(found);
            }
            current = self.parent(s);
        }
        None
    }

    /// The enclosing scope, `None` at the root.
    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.graph
            .edges_directed(node(scope), Direction::Incoming)
            .find(|edge| matches!(edge.weight(), ScopeEdge::Contains(_)))
            .map(|edge| scope_id(edge.source()))
    }

    /// The name `scope` is registered under in its parent.
    pub fn scope_name(&self, scope: ScopeId) -> Option<&str> {
        self.graph
            .edges_directed(node(scope), Direction::Incoming)
            .find_map(|edge| match edge.weight() {
                ScopeEdge::Contains(name) => Some(name.as_str()),
            })
    }

    /// Scope names from the root down to `scope`.
    pub fn scope_path(&self, scope: ScopeId) -> Vec<String> {
        let mut path = Vec::new();
        let mut current = scope;
        while let Some(parent) = self.parent(current) {
            if let Some(name) = self.scope_name(current) {
                path.push(name.to_string());
            }
            current = parent;
        }
        path.reverse();
        path
    }

    /// Qualified name for a symbol declared in `scope`.
    pub fn qualified_name(&self, scope: ScopeId, simple_name: &str) -> String {
        let path = self.scope_path(scope);
        if path.is_empty() {
            simple_name.to_string()
        } else {
            format!("{}::{}", path.join("::"), simple_name)
        }
    }

    // ========================================================================
    // Symbols
    // ========================================================================

    /// Insert a declaration into `scope`.
    ///
    /// A name already bound to functions absorbs a new function as its next
    /// overload. Any other redefinition reports `DuplicateSymbol` at the new
    /// declaration and returns `false`; the existing entry is kept.
    pub fn insert_symbolic_object(
        &mut self,
        scope: ScopeId,
        symbol: SymbolicObject,
        sink: &mut dyn DiagnosticSink,
    ) -> bool {
        let Some(data) = self.get_mut(scope) else {
            return false;
        };
        let name = symbol.declared_place().text().to_string();

        if let Some(existing) = data.symbols.get_mut(&name) {
            if let (SymbolEntry::Functions(overloads), SymbolicObject::Function(next)) =
                (existing, &symbol)
            {
                overloads.push(next.clone());
                return true;
            }
            sink.report(AnalysisError::DuplicateSymbol {
                name,
                span: symbol.declared_place().span(),
            });
            return false;
        }

        data.symbols.insert(name, symbol.into());
        true
    }

    /// Look up a symbol in `scope` only.
    pub fn find_symbol_shallowly(&self, scope: ScopeId, name: &str) -> Option<&SymbolEntry> {
        self.get(scope)?.symbols.get(name)
    }

    /// Lexical lookup: `scope`, then each enclosing scope up to the root.
    pub fn find_symbol_with_parent(&self, scope: ScopeId, name: &str) -> Option<FoundSymbol<'_>> {
        let mut current = Some(scope);
        while let Some(s) = current {
            if let Some(symbol) = self.find_symbol_shallowly(s, name) {
                return Some(FoundSymbol { symbol, scope: s });
            }
            current = self.parent(s);
        }
        None
    }

    // ========================================================================
    // References and Completion
    // ========================================================================

    /// Record that `referenced_token` resolves to `declared_symbol`.
    pub fn push_reference(&mut self, scope: ScopeId, reference: ReferenceInformation) {
        if let Some(data) = self.get_mut(scope) {
            data.referenced.push(reference);
        }
    }

    pub fn references(&self, scope: ScopeId) -> &[ReferenceInformation] {
        self.get(scope).map_or(&[], |d| d.referenced.as_slice())
    }

    pub fn push_completion_hint(&mut self, scope: ScopeId, hint: ComplementHint) {
        if let Some(data) = self.get_mut(scope) {
            data.completion_hints.push(hint);
        }
    }

    pub fn completion_hints(&self, scope: ScopeId) -> &[ComplementHint] {
        self.get(scope).map_or(&[], |d| d.completion_hints.as_slice())
    }

    /// Every reference in the tree that resolves to `declaration`.
    pub fn collect_references(&self, declaration: &Token) -> Vec<&ReferenceInformation> {
        self.graph
            .node_weights()
            .flat_map(|data| data.referenced.iter())
            .filter(|r| r.declared_symbol.declared_place().is_same(declaration))
            .collect()
    }

    /// The declaration referenced by the token at `line:col`, if any.
    pub fn find_declaration_at(&self, line: u32, col: u32) -> Option<&SymbolicObject> {
        self.graph
            .node_weights()
            .flat_map(|data| data.referenced.iter())
            .find(|r| r.referenced_token.span().contains(line, col))
            .map(|r| &r.declared_symbol)
    }
}
