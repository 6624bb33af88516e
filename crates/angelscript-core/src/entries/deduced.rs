//! Deduced types and template translations.
//!
//! A [`DeducedType`] is the static type the checker computed for an
//! expression. When that type is a generic instantiation it carries the
//! [`TemplateTranslation`] built at the instantiation site.

use std::fmt;
use std::rc::Rc;

use crate::{ScopeId, SymbolicFunction, SymbolicType, Token};

/// The symbol a deduced type denotes.
///
/// A function symbol here means a function-handler value.
#[derive(Debug, Clone)]
pub enum DeducedSymbol {
    Type(Rc<SymbolicType>),
    Function(Rc<SymbolicFunction>),
}

impl DeducedSymbol {
    pub fn declared_place(&self) -> &Token {
        match self {
            DeducedSymbol::Type(t) => &t.declared_place,
            DeducedSymbol::Function(f) => &f.declared_place,
        }
    }

    pub fn as_type(&self) -> Option<&Rc<SymbolicType>> {
        match self {
            DeducedSymbol::Type(t) => Some(t),
            DeducedSymbol::Function(_) => None,
        }
    }

    pub fn as_function(&self) -> Option<&Rc<SymbolicFunction>> {
        match self {
            DeducedSymbol::Function(f) => Some(f),
            DeducedSymbol::Type(_) => None,
        }
    }
}

/// Statically computed type of an expression.
#[derive(Debug, Clone)]
pub struct DeducedType {
    pub symbol: DeducedSymbol,
    /// Scope the declaration should be further resolved from (constructors, members).
    pub source_scope: Option<ScopeId>,
    /// Substitution applied to this type when it is a generic instantiation.
    pub template_translate: Option<Rc<TemplateTranslation>>,
}

impl DeducedType {
    pub fn new(symbol: Rc<SymbolicType>, source_scope: Option<ScopeId>) -> Self {
        Self {
            symbol: DeducedSymbol::Type(symbol),
            source_scope,
            template_translate: None,
        }
    }

    /// A function-handler type.
    pub fn function(symbol: Rc<SymbolicFunction>, source_scope: Option<ScopeId>) -> Self {
        Self {
            symbol: DeducedSymbol::Function(symbol),
            source_scope,
            template_translate: None,
        }
    }

    pub fn with_translation(mut self, translation: TemplateTranslation) -> Self {
        self.template_translate = Some(Rc::new(translation));
        self
    }

    #[inline]
    pub fn declared_place(&self) -> &Token {
        self.symbol.declared_place()
    }

    #[inline]
    pub fn as_type(&self) -> Option<&Rc<SymbolicType>> {
        self.symbol.as_type()
    }

    /// Whether both denote the same declaration, ignoring translations.
    #[inline]
    pub fn is_same_declaration(&self, other: &DeducedType) -> bool {
        self.declared_place().is_same(other.declared_place())
    }
}

/// Renders an optional deduced type for diagnostics.
pub struct DisplayDeduced<'a>(pub Option<&'a DeducedType>);

impl fmt::Display for DisplayDeduced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ty) => write!(f, "{ty}"),
            None => f.write_str("(unknown)"),
        }
    }
}

impl fmt::Display for DeducedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.declared_place().text())?;
        if let Some(translation) = &self.template_translate {
            f.write_str("<")?;
            for (i, binding) in translation.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", DisplayDeduced(binding.value.as_ref()))?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

/// One generic parameter bound at an instantiation site.
#[derive(Debug, Clone)]
pub struct TemplateBinding {
    pub param: Token,
    /// `None` marks a slot that is intentionally left unresolved.
    pub value: Option<DeducedType>,
}

/// Map from a generic parameter's declaring token to its bound type.
///
/// Keyed by token identity and kept in insertion order. Translations are
/// small (one entry per generic parameter), so lookups scan.
#[derive(Debug, Clone, Default)]
pub struct TemplateTranslation {
    bindings: Vec<TemplateBinding>,
}

impl TemplateTranslation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `param`, replacing any existing binding for the same declaration.
    pub fn insert(&mut self, param: Token, value: Option<DeducedType>) {
        match self.bindings.iter_mut().find(|b| b.param.is_same(&param)) {
            Some(existing) => existing.value = value,
            None => self.bindings.push(TemplateBinding { param, value }),
        }
    }

    /// The binding for `param`: `None` if it is not a key, `Some(None)` if it
    /// is bound as unresolved.
    pub fn get(&self, param: &Token) -> Option<Option<&DeducedType>> {
        self.bindings
            .iter()
            .find(|b| b.param.is_same(param))
            .map(|b| b.value.as_ref())
    }

    pub fn contains(&self, param: &Token) -> bool {
        self.bindings.iter().any(|b| b.param.is_same(param))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateBinding> {
        self.bindings.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
