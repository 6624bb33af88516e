//! Symbol table entry types.
//!
//! - [`SymbolicType`], [`SymbolicFunction`], [`SymbolicVariable`] - declarations
//! - [`SymbolicObject`] - one declaration, as inserted by the binder
//! - [`SymbolEntry`], [`Overloads`] - what a scope stores under one name
//! - [`DeducedType`], [`TemplateTranslation`] - results of type deduction

mod deduced;
mod symbol;

pub use deduced::{
    DeducedSymbol, DeducedType, DisplayDeduced, TemplateBinding, TemplateTranslation,
};
pub use symbol::{
    Overloads, PrimitiveType, SourceType, SymbolEntry, SymbolKind, SymbolicFunction,
    SymbolicObject, SymbolicType, SymbolicVariable,
};
