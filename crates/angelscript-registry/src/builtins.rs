//! Builtin Type Registry - singleton symbols for primitive types.
//!
//! Built once per session and passed by reference to the binder and the
//! checker. Every builtin is anchored on a synthetic token with no source
//! location, so identity comparisons treat each builtin as one stable
//! declaration.

use std::rc::Rc;

use angelscript_core::{NUMBER_TYPE_NAMES, PrimitiveType, RegistryError, SymbolicType, Token};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Immutable set of builtin type symbols.
#[derive(Debug)]
pub struct BuiltinRegistry {
    numbers: FxHashMap<String, Rc<SymbolicType>>,
    string: Rc<SymbolicType>,
    bool_type: Rc<SymbolicType>,
    void: Rc<SymbolicType>,
    any: Rc<SymbolicType>,
    auto: Rc<SymbolicType>,
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinRegistry {
    /// Create a registry holding every numeric alias in [`NUMBER_TYPE_NAMES`].
    pub fn new() -> Self {
        Self::with_number_types(NUMBER_TYPE_NAMES)
    }

    /// Create a registry over an explicit numeric alias list.
    pub fn with_number_types<S: AsRef<str>>(number_names: &[S]) -> Self {
        let numbers: FxHashMap<_, _> = number_names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                (name.to_string(), make_builtin(name, PrimitiveType::Number))
            })
            .collect();

        debug!(numbers = numbers.len(), "builtin registry created");

        Self {
            numbers,
            string: make_builtin("string", PrimitiveType::String),
            bool_type: make_builtin("bool", PrimitiveType::Bool),
            void: make_builtin("void", PrimitiveType::Void),
            any: make_builtin("?", PrimitiveType::Any),
            auto: make_builtin("auto", PrimitiveType::Auto),
        }
    }

    /// Resolve a reserved-word token to its builtin type.
    ///
    /// Returns `Ok(None)` for tokens that do not name a builtin. A token
    /// flagged as numeric whose alias is missing is a registry setup bug and
    /// returns [`RegistryError::MissingNumericAlias`].
    pub fn try_get_builtin_type(
        &self,
        token: &Token,
    ) -> Result<Option<Rc<SymbolicType>>, RegistryError> {
        let found = match token.text() {
            "bool" => Some(&self.bool_type),
            "void" => Some(&self.void),
            "?" => Some(&self.any),
            "auto" => Some(&self.auto),
            text if token.is_number_reserved() => Some(
                self.numbers
                    .get(text)
                    .ok_or_else(|| RegistryError::MissingNumericAlias(text.to_string()))?,
            ),
            _ => None,
        };
        Ok(found.cloned())
    }

    /// Look up any builtin by its spelling, including `string`.
    pub fn get_by_name(&self, name: &str) -> Option<Rc<SymbolicType>> {
        match name {
            "string" => Some(self.string.clone()),
            "bool" => Some(self.bool_type.clone()),
            "void" => Some(self.void.clone()),
            "?" => Some(self.any.clone()),
            "auto" => Some(self.auto.clone()),
            _ => self.numbers.get(name).cloned(),
        }
    }

    pub fn number(&self, name: &str) -> Option<&Rc<SymbolicType>> {
        self.numbers.get(name)
    }

    pub fn string(&self) -> &Rc<SymbolicType> {
        &self.string
    }

    pub fn bool(&self) -> &Rc<SymbolicType> {
        &self.bool_type
    }

    pub fn void(&self) -> &Rc<SymbolicType> {
        &self.void
    }

    pub fn any(&self) -> &Rc<SymbolicType> {
        &self.any
    }

    pub fn auto(&self) -> &Rc<SymbolicType> {
        &self.auto
    }

    /// Number of registered numeric aliases.
    pub fn number_count(&self) -> usize {
        self.numbers.len()
    }
}

fn make_builtin(name: &str, primitive: PrimitiveType) -> Rc<SymbolicType> {
    Rc::new(SymbolicType::primitive(Token::builtin(name), primitive))
}
