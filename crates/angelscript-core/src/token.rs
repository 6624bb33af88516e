//! Lexical tokens as supplied by the parser.
//!
//! The semantic core never lexes source text. It consumes [`Token`]s whose
//! identity is fixed at creation: every token gets a fresh [`TokenId`], and
//! clones keep it. Declaration identity throughout the analyzer is token
//! identity, so two declarations spelled the same are still distinct.

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

use bitflags::bitflags;

use crate::Span;

/// Numeric reserved words, each of which denotes a builtin number type.
pub const NUMBER_TYPE_NAMES: &[&str] = &[
    "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16", "uint32", "uint64",
    "float", "double",
];

static NEXT_TOKEN_ID: AtomicU32 = AtomicU32::new(1);

/// Stable identity of a token, assigned once when the token is created.
///
/// # Example
///
/// ```
/// use angelscript_core::{Span, Token};
///
/// let a = Token::identifier("Foo", Span::new(1, 7, 3));
/// let b = Token::identifier("Foo", Span::new(9, 7, 3));
/// assert_ne!(a.id(), b.id());
/// assert_eq!(a.clone().id(), a.id());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(u32);

impl TokenId {
    fn fresh() -> Self {
        Self(NEXT_TOKEN_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the underlying index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tok_{}", self.0)
    }
}

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Reserved,
    Identifier,
    Number,
    String,
    Comment,
}

bitflags! {
    /// Properties the lexer precomputes for a token.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TokenFlags: u8 {
        /// Reserved word naming a numeric type (`int`, `float`, ...).
        const NUMBER_RESERVED = 1 << 0;
        /// Synthetic token created for a builtin type; has no source location.
        const BUILTIN = 1 << 1;
    }
}

#[derive(Debug)]
struct TokenData {
    id: TokenId,
    text: String,
    kind: TokenKind,
    span: Span,
    flags: TokenFlags,
}

/// A lexical token with identity.
///
/// Cheap to clone; clones share the same [`TokenId`].
#[derive(Debug, Clone)]
pub struct Token(Rc<TokenData>);

impl Token {
    /// Create a token with explicit flags.
    pub fn new(text: impl Into<String>, kind: TokenKind, span: Span, flags: TokenFlags) -> Self {
        Self(Rc::new(TokenData {
            id: TokenId::fresh(),
            text: text.into(),
            kind,
            span,
            flags,
        }))
    }

    /// Create an identifier token.
    pub fn identifier(text: impl Into<String>, span: Span) -> Self {
        Self::new(text, TokenKind::Identifier, span, TokenFlags::empty())
    }

    /// Create a reserved-word token, flagging numeric type names.
    pub fn reserved(text: impl Into<String>, span: Span) -> Self {
        let text = text.into();
        let flags = if NUMBER_TYPE_NAMES.contains(&text.as_str()) {
            TokenFlags::NUMBER_RESERVED
        } else {
            TokenFlags::empty()
        };
        Self::new(text, TokenKind::Reserved, span, flags)
    }

    /// Create the synthetic token anchoring a builtin type.
    pub fn builtin(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut flags = TokenFlags::BUILTIN;
        if NUMBER_TYPE_NAMES.contains(&text.as_str()) {
            flags |= TokenFlags::NUMBER_RESERVED;
        }
        Self::new(text, TokenKind::Reserved, Span::default(), flags)
    }

    #[inline]
    pub fn id(&self) -> TokenId {
        self.0.id
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.0.text
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.0.kind
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.0.span
    }

    #[inline]
    pub fn flags(&self) -> TokenFlags {
        self.0.flags
    }

    /// Whether this token is a reserved word naming a numeric type.
    #[inline]
    pub fn is_number_reserved(&self) -> bool {
        self.0.flags.contains(TokenFlags::NUMBER_RESERVED)
    }

    /// Whether this token was synthesized for a builtin type.
    #[inline]
    pub fn is_builtin(&self) -> bool {
        self.0.flags.contains(TokenFlags::BUILTIN)
    }

    /// Whether both tokens are the same declaration (identity, not text).
    #[inline]
    pub fn is_same(&self, other: &Token) -> bool {
        self.0.id == other.0.id
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = Token::identifier("x", Span::new(1, 1, 1));
        let b = Token::identifier("x", Span::new(1, 1, 1));
        assert_ne!(a.id(), b.id());
        assert!(!a.is_same(&b));
    }

    #[test]
    fn clone_keeps_identity() {
        let a = Token::identifier("x", Span::new(1, 1, 1));
        let b = a.clone();
        assert!(a.is_same(&b));
    }

    #[test]
    fn reserved_number_flag() {
        assert!(Token::reserved("double", Span::new(1, 1, 6)).is_number_reserved());
        assert!(!Token::reserved("bool", Span::new(1, 1, 4)).is_number_reserved());
    }

    #[test]
    fn builtin_has_no_location() {
        let tok = Token::builtin("int");
        assert!(tok.is_builtin());
        assert!(tok.is_number_reserved());
        assert!(tok.span().is_virtual());
        assert_eq!(tok.kind(), TokenKind::Reserved);
    }
}
