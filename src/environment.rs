use std::collections::HashMap;

use crate::error::RuntimeError;
use crate::object::Object;
use crate::token::Token;

/// The scope chain, kept as a stack of scopes instead of back-referencing
/// scope objects. Index 0 is the global scope; blocks push on entry and pop
/// on exit, so nesting is strict and the chain is trivially acyclic.
#[derive(Debug)]
pub struct Environment {
    scopes: Vec<HashMap<String, Object>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    pub fn new() -> Self {
        Self {
            scopes: vec![HashMap::new()],
        }
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    pub fn pop_scope(&mut self) {
        self.scopes.pop();
        assert!(!self.scopes.is_empty(), "popped the global scope");
    }

    /// Bind `name` in the innermost scope. Re-declaring an existing name in
    /// the same scope is legal; the last write wins.
    pub fn define(&mut self, name: &str, value: Object) {
        self.scopes
            .last_mut()
            .expect("global scope is always present")
            .insert(name.to_owned(), value);
    }

    /// Rebind `name` in the nearest scope that already defines it. Never
    /// creates a new binding.
    pub fn assign(&mut self, name: &Token, value: Object) -> Result<(), RuntimeError> {
        for scope in self.scopes.iter_mut().rev() {
            if let Some(slot) = scope.get_mut(&name.lexeme) {
                *slot = value;
                return Ok(());
            }
        }

        Err(RuntimeError::undefined_variable(name))
    }

    pub fn get(&self, name: &Token) -> Result<Object, RuntimeError> {
        for scope in self.scopes.iter().rev() {
            if let Some(value) = scope.get(&name.lexeme) {
                return Ok(value.clone());
            }
        }

        Err(RuntimeError::undefined_variable(name))
    }
}
