//! Symbol entries stored in scopes.

use std::rc::Rc;

use crate::node::{ClassDecl, EnumDecl, FunctionDecl};
use crate::{DeducedType, Token};

/// Builtin type categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// A generic parameter of a template declaration.
    Template,
    String,
    Bool,
    Number,
    Void,
    /// `?`, accepts and converts to anything.
    Any,
    /// `auto`, placeholder for an inferred type.
    Auto,
}

/// What a type symbol was declared from.
#[derive(Debug, Clone)]
pub enum SourceType {
    Primitive(PrimitiveType),
    Enum(Rc<EnumDecl>),
    Class(Rc<ClassDecl>),
}

impl SourceType {
    #[inline]
    pub fn primitive(&self) -> Option<PrimitiveType> {
        match self {
            SourceType::Primitive(p) => Some(*p),
            _ => None,
        }
    }

    #[inline]
    pub fn is_class(&self) -> bool {
        matches!(self, SourceType::Class(_))
    }
}

/// Discriminant of a [`SymbolicObject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Type,
    Function,
    Variable,
}

/// A declared type: builtin, enum or class.
#[derive(Debug)]
pub struct SymbolicType {
    pub declared_place: Token,
    pub source_type: SourceType,
    /// Generic parameters when this is a template definition.
    pub template_types: Option<Vec<Token>>,
    /// Immediate bases, in declaration order. Unresolved bases stay `None`.
    pub base_list: Vec<Option<DeducedType>>,
}

impl SymbolicType {
    pub fn new(declared_place: Token, source_type: SourceType) -> Self {
        Self {
            declared_place,
            source_type,
            template_types: None,
            base_list: Vec::new(),
        }
    }

    pub fn primitive(declared_place: Token, primitive: PrimitiveType) -> Self {
        Self::new(declared_place, SourceType::Primitive(primitive))
    }

    pub fn with_template_types(mut self, template_types: Vec<Token>) -> Self {
        self.template_types = Some(template_types);
        self
    }

    pub fn with_base_list(mut self, base_list: Vec<Option<DeducedType>>) -> Self {
        self.base_list = base_list;
        self
    }

    /// Whether both refer to the same declaration.
    #[inline]
    pub fn is_same(&self, other: &SymbolicType) -> bool {
        self.declared_place.is_same(&other.declared_place)
    }
}

/// A declared function, method or constructor.
#[derive(Debug)]
pub struct SymbolicFunction {
    pub declared_place: Token,
    pub source_node: Rc<FunctionDecl>,
    pub return_type: Option<DeducedType>,
    /// One entry per declared parameter; `None` when the type failed to resolve.
    pub parameter_types: Vec<Option<DeducedType>>,
}

impl SymbolicFunction {
    pub fn new(
        source_node: Rc<FunctionDecl>,
        return_type: Option<DeducedType>,
        parameter_types: Vec<Option<DeducedType>>,
    ) -> Self {
        Self {
            declared_place: source_node.identifier.clone(),
            source_node,
            return_type,
            parameter_types,
        }
    }
}

#[derive(Debug)]
pub struct SymbolicVariable {
    pub declared_place: Token,
    pub ty: Option<DeducedType>,
}

impl SymbolicVariable {
    pub fn new(declared_place: Token, ty: Option<DeducedType>) -> Self {
        Self { declared_place, ty }
    }
}

/// A single declaration, as handed to the binder's insertion primitive.
#[derive(Debug, Clone)]
pub enum SymbolicObject {
    Type(Rc<SymbolicType>),
    Function(Rc<SymbolicFunction>),
    Variable(Rc<SymbolicVariable>),
}

impl SymbolicObject {
    pub fn declared_place(&self) -> &Token {
        match self {
            SymbolicObject::Type(t) => &t.declared_place,
            SymbolicObject::Function(f) => &f.declared_place,
            SymbolicObject::Variable(v) => &v.declared_place,
        }
    }

    pub fn kind(&self) -> SymbolKind {
        match self {
            SymbolicObject::Type(_) => SymbolKind::Type,
            SymbolicObject::Function(_) => SymbolKind::Function,
            SymbolicObject::Variable(_) => SymbolKind::Variable,
        }
    }
}

impl From<SymbolicType> for SymbolicObject {
    fn from(t: SymbolicType) -> Self {
        SymbolicObject::Type(Rc::new(t))
    }
}

impl From<SymbolicFunction> for SymbolicObject {
    fn from(f: SymbolicFunction) -> Self {
        SymbolicObject::Function(Rc::new(f))
    }
}

impl From<SymbolicVariable> for SymbolicObject {
    fn from(v: SymbolicVariable) -> Self {
        SymbolicObject::Variable(Rc::new(v))
    }
}

impl From<Rc<SymbolicType>> for SymbolicObject {
    fn from(t: Rc<SymbolicType>) -> Self {
        SymbolicObject::Type(t)
    }
}

impl From<Rc<SymbolicFunction>> for SymbolicObject {
    fn from(f: Rc<SymbolicFunction>) -> Self {
        SymbolicObject::Function(f)
    }
}

impl From<Rc<SymbolicVariable>> for SymbolicObject {
    fn from(v: Rc<SymbolicVariable>) -> Self {
        SymbolicObject::Variable(v)
    }
}

/// All functions sharing one name in one scope, in declaration order.
///
/// Never empty: it is created from the first declaration and only grows.
#[derive(Debug, Clone)]
pub struct Overloads(Vec<Rc<SymbolicFunction>>);

impl Overloads {
    pub fn new(first: Rc<SymbolicFunction>) -> Self {
        Self(vec![first])
    }

    pub fn push(&mut self, next: Rc<SymbolicFunction>) {
        self.0.push(next);
    }

    /// The first declaration.
    pub fn first(&self) -> &Rc<SymbolicFunction> {
        &self.0[0]
    }

    #[inline]
    pub fn as_slice(&self) -> &[Rc<SymbolicFunction>] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<SymbolicFunction>> {
        self.0.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Value stored under one name in a scope's symbol map.
#[derive(Debug, Clone)]
pub enum SymbolEntry {
    Type(Rc<SymbolicType>),
    Functions(Overloads),
    Variable(Rc<SymbolicVariable>),
}

impl SymbolEntry {
    /// The first declaration under this name.
    pub fn declared_place(&self) -> &Token {
        match self {
            SymbolEntry::Type(t) => &t.declared_place,
            SymbolEntry::Functions(o) => &o.first().declared_place,
            SymbolEntry::Variable(v) => &v.declared_place,
        }
    }

    pub fn kind(&self) -> SymbolKind {
        match self {
            SymbolEntry::Type(_) => SymbolKind::Type,
            SymbolEntry::Functions(_) => SymbolKind::Function,
            SymbolEntry::Variable(_) => SymbolKind::Variable,
        }
    }

    pub fn as_type(&self) -> Option<&Rc<SymbolicType>> {
        match self {
            SymbolEntry::Type(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_functions(&self) -> Option<&Overloads> {
        match self {
            SymbolEntry::Functions(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&Rc<SymbolicVariable>> {
        match self {
            SymbolEntry::Variable(v) => Some(v),
            _ => None,
        }
    }
}

impl From<SymbolicObject> for SymbolEntry {
    fn from(obj: SymbolicObject) -> Self {
        match obj {
            SymbolicObject::Type(t) => SymbolEntry::Type(t),
            SymbolicObject::Function(f) => SymbolEntry::Functions(Overloads::new(f)),
            SymbolicObject::Variable(v) => SymbolEntry::Variable(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Span;
    use crate::node::ParamDecl;

    fn function(name: &str, params: usize) -> Rc<SymbolicFunction> {
        let decl = Rc::new(FunctionDecl {
            identifier: Token::identifier(name, Span::new(1, 1, name.len() as u32)),
            params: (0..params)
                .map(|i| ParamDecl::named(Token::identifier(format!("p{i}"), Span::new(1, 1, 2))))
                .collect(),
            span: Span::new(1, 1, 10),
        });
        Rc::new(SymbolicFunction::new(decl, None, vec![None; params]))
    }

    #[test]
    fn function_takes_declared_place_from_node() {
        let f = function("go", 0);
        assert!(f.declared_place.is_same(&f.source_node.identifier));
    }

    #[test]
    fn overloads_keep_declaration_order() {
        let mut set = Overloads::new(function("f", 1));
        set.push(function("f", 2));
        set.push(function("f", 3));

        let arities: Vec<_> = set.iter().map(|f| f.parameter_types.len()).collect();
        assert_eq!(arities, vec![1, 2, 3]);
        assert_eq!(set.first().parameter_types.len(), 1);
    }

    #[test]
    fn entry_from_object_kinds() {
        let var: SymbolicObject =
            SymbolicVariable::new(Token::identifier("v", Span::new(1, 1, 1)), None).into();
        assert_eq!(var.kind(), SymbolKind::Variable);
        assert_eq!(SymbolEntry::from(var).kind(), SymbolKind::Variable);

        let func = SymbolicObject::Function(function("f", 0));
        let entry = SymbolEntry::from(func);
        assert_eq!(entry.as_functions().map(Overloads::len), Some(1));
    }

    #[test]
    fn same_text_different_declaration() {
        let a = SymbolicType::new(
            Token::identifier("Foo", Span::new(1, 7, 3)),
            SourceType::Class(Rc::new(ClassDecl {
                identifier: Token::identifier("Foo", Span::new(1, 7, 3)),
                base_names: vec![],
                span: Span::new(1, 1, 12),
            })),
        );
        let b = SymbolicType::primitive(Token::identifier("Foo", Span::new(4, 7, 3)), PrimitiveType::Bool);
        assert!(!a.is_same(&b));
        assert!(a.is_same(&a));
    }
}
