//! Declaration and call node shapes consumed from the parser.
//!
//! These mirror only the parts of the syntax tree the semantic core reads.
//! Nodes are shared read-only via `Rc`; the analyzer never mutates them.

use std::rc::Rc;

use crate::{Span, Token};

/// `class Name : Base, ... { ... }`
#[derive(Debug)]
pub struct ClassDecl {
    pub identifier: Token,
    /// Names listed after `:` as written; resolution happens in the binder.
    pub base_names: Vec<Token>,
    pub span: Span,
}

/// `enum Name { ... }`
#[derive(Debug)]
pub struct EnumDecl {
    pub identifier: Token,
    pub span: Span,
}

/// One declared parameter of a function.
#[derive(Debug, Clone)]
pub struct ParamDecl {
    /// Parameter name; unnamed parameters are legal in declarations.
    pub identifier: Option<Token>,
    /// Span of the default expression, if one was written.
    pub default_expr: Option<Span>,
}

impl ParamDecl {
    pub fn named(identifier: Token) -> Self {
        Self {
            identifier: Some(identifier),
            default_expr: None,
        }
    }

    pub fn with_default(identifier: Token, default_expr: Span) -> Self {
        Self {
            identifier: Some(identifier),
            default_expr: Some(default_expr),
        }
    }

    #[inline]
    pub fn has_default(&self) -> bool {
        self.default_expr.is_some()
    }

    /// Name used in diagnostics.
    pub fn display_name(&self) -> &str {
        self.identifier.as_ref().map_or("(unnamed)", |t| t.text())
    }
}

/// A function, method or constructor declaration.
#[derive(Debug)]
pub struct FunctionDecl {
    pub identifier: Token,
    pub params: Vec<ParamDecl>,
    pub span: Span,
}

/// `if`/`for`/`while` and other statement blocks that open a scope.
#[derive(Debug)]
pub struct BlockDecl {
    pub span: Span,
}

/// The construct that opens a scope.
#[derive(Debug, Clone)]
pub enum ScopeOwner {
    Class(Rc<ClassDecl>),
    Enum(Rc<EnumDecl>),
    Function(Rc<FunctionDecl>),
    Block(Rc<BlockDecl>),
}

impl ScopeOwner {
    #[inline]
    pub fn is_class(&self) -> bool {
        matches!(self, ScopeOwner::Class(_))
    }
}

/// The call expression being resolved against an overload set.
#[derive(Debug, Clone)]
pub enum CallerNode {
    /// `name(args)`
    FuncCall { identifier: Token, span: Span },
    /// `Type(args)`
    ConstructCall { type_identifier: Token, span: Span },
}

impl CallerNode {
    /// The token a resolved call is recorded against.
    pub fn identifier(&self) -> &Token {
        match self {
            CallerNode::FuncCall { identifier, .. } => identifier,
            CallerNode::ConstructCall {
                type_identifier, ..
            } => type_identifier,
        }
    }

    /// Range of the whole call expression.
    pub fn span(&self) -> Span {
        match self {
            CallerNode::FuncCall { span, .. } | CallerNode::ConstructCall { span, .. } => *span,
        }
    }
}
