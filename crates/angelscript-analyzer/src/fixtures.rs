//! Binder stand-in for unit tests: builds scopes and symbols directly.

use std::rc::Rc;

use angelscript_core::node::{ClassDecl, EnumDecl, FunctionDecl, ParamDecl, ScopeOwner};
use angelscript_core::{
    DeducedType, Diagnostics, ScopeId, SourceType, Span, SymbolicFunction, SymbolicObject,
    SymbolicType, Token,
};
use angelscript_registry::{BuiltinRegistry, ScopeTree};

use crate::AnalysisContext;

pub(crate) struct Fixture {
    pub tree: ScopeTree,
    pub builtins: BuiltinRegistry,
    pub diagnostics: Diagnostics,
    next_line: u32,
}

/// Parameter type and whether it has a default expression.
pub(crate) type Param = (Option<DeducedType>, bool);

impl Fixture {
    pub fn new() -> Self {
        Self {
            tree: ScopeTree::new(),
            builtins: BuiltinRegistry::new(),
            diagnostics: Diagnostics::new(),
            next_line: 1,
        }
    }

    pub fn ctx(&mut self) -> AnalysisContext<'_> {
        AnalysisContext::new(&mut self.tree, &self.builtins, &mut self.diagnostics)
    }

    pub fn root(&self) -> ScopeId {
        self.tree.root()
    }

    /// A fresh identifier on its own line.
    pub fn ident(&mut self, name: &str) -> Token {
        let line = self.next_line;
        self.next_line += 1;
        Token::identifier(name, Span::new(line, 1, name.len() as u32))
    }

    pub fn builtin(&self, name: &str) -> DeducedType {
        let sym = self
            .builtins
            .get_by_name(name)
            .unwrap_or_else(|| panic!("no builtin {name}"));
        DeducedType::new(sym, None)
    }

    /// Declare `class name : bases` in `scope` and open its member scope.
    pub fn class(
        &mut self,
        scope: ScopeId,
        name: &str,
        bases: &[&DeducedType],
    ) -> (DeducedType, ScopeId) {
        let identifier = self.ident(name);
        let decl = Rc::new(ClassDecl {
            identifier: identifier.clone(),
            base_names: bases.iter().map(|b| b.declared_place().clone()).collect(),
            span: identifier.span(),
        });
        let sym = Rc::new(
            SymbolicType::new(identifier, SourceType::Class(decl.clone()))
                .with_base_list(bases.iter().map(|b| Some((*b).clone())).collect()),
        );
        self.tree.insert_symbolic_object(
            scope,
            SymbolicObject::Type(sym.clone()),
            &mut self.diagnostics,
        );
        let class_scope = self
            .tree
            .create_scope(scope, name, Some(ScopeOwner::Class(decl)));
        (DeducedType::new(sym, Some(scope)), class_scope)
    }

    /// Declare `enum name` in `scope`. Enums get no member scope.
    pub fn enumeration(&mut self, scope: ScopeId, name: &str) -> DeducedType {
        let identifier = self.ident(name);
        let decl = Rc::new(EnumDecl {
            identifier: identifier.clone(),
            span: identifier.span(),
        });
        let sym = Rc::new(SymbolicType::new(identifier, SourceType::Enum(decl)));
        self.tree.insert_symbolic_object(
            scope,
            SymbolicObject::Type(sym.clone()),
            &mut self.diagnostics,
        );
        DeducedType::new(sym, Some(scope))
    }

    /// Declare a function in `scope` and return it.
    pub fn function(
        &mut self,
        scope: ScopeId,
        name: &str,
        params: Vec<Param>,
        return_type: Option<DeducedType>,
    ) -> Rc<SymbolicFunction> {
        let identifier = self.ident(name);
        let param_decls = params
            .iter()
            .enumerate()
            .map(|(i, (_, has_default))| {
                let p = self.ident(&format!("p{i}"));
                if *has_default {
                    ParamDecl::with_default(p.clone(), p.span())
                } else {
                    ParamDecl::named(p)
                }
            })
            .collect();
        let decl = Rc::new(FunctionDecl {
            identifier: identifier.clone(),
            params: param_decls,
            span: identifier.span(),
        });
        let func = Rc::new(SymbolicFunction::new(
            decl,
            return_type,
            params.into_iter().map(|(ty, _)| ty).collect(),
        ));
        self.tree.insert_symbolic_object(
            scope,
            SymbolicObject::Function(func.clone()),
            &mut self.diagnostics,
        );
        func
    }
}

/// Required parameter of the given type.
pub(crate) fn req(ty: &DeducedType) -> Param {
    (Some(ty.clone()), false)
}

/// Parameter with a default expression.
pub(crate) fn opt(ty: &DeducedType) -> Param {
    (Some(ty.clone()), true)
}
