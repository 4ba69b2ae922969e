//! # Record Handlers
//!
//! A handler ("module") owns one record type: its backing table and the
//! add / delete / list operations against it. Handlers are stateless; the
//! connection is lent to every call by whoever owns it (see [`crate::api`]).
//!
//! ## Adding a New Record Type
//!
//! 1. Create a new file in this directory implementing [`Module`]
//! 2. Register it in [`Registry::with_builtin`]

use crate::error::{BbdbError, Result};
use log::debug;
use rusqlite::Connection;
use std::collections::HashMap;

pub mod domains;

pub use domains::Domains;

/// The contract every record handler implements.
pub trait Module {
    /// Aliases this handler answers to. All lowercase.
    fn names(&self) -> &'static [&'static str];

    /// Plural noun used in console feedback, e.g. "No domains found."
    fn label(&self) -> &'static str;

    /// Create the backing table. Safe to run more than once.
    fn init(&self, conn: &Connection) -> Result<()>;

    /// Insert a new record. Fails with [`BbdbError::Duplicate`] if it already exists.
    fn add(&self, conn: &Connection, value: &str) -> Result<()>;

    /// Remove a record by exact match. Removing a missing value is not an error.
    fn delete(&self, conn: &Connection, value: &str) -> Result<()>;

    /// Every stored value, in whatever order the table yields them.
    fn all(&self, conn: &Connection) -> Result<Vec<String>>;
}

/// Ordered set of handlers plus an alias lookup.
///
/// When two handlers claim the same alias, the one registered first keeps it.
#[derive(Default)]
pub struct Registry {
    modules: Vec<Box<dyn Module>>,
    aliases: HashMap<&'static str, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in handler.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(Domains));
        registry
    }

    pub fn register(&mut self, module: Box<dyn Module>) {
        let slot = self.modules.len();
        for name in module.names() {
            self.aliases.entry(*name).or_insert(slot);
        }
        self.modules.push(module);
    }

    /// Find the handler answering to `typ`. The match is exact, callers
    /// lowercase the token beforehand.
    pub fn resolve(&self, typ: &str) -> Result<&dyn Module> {
        let module = self
            .aliases
            .get(typ)
            .map(|&slot| self.modules[slot].as_ref())
            .ok_or_else(|| BbdbError::ModuleNotFound(typ.to_string()))?;
        debug!("resolved '{}' to handler '{}'", typ, module.label());
        Ok(module)
    }

    /// Handlers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Module> {
        self.modules.iter().map(|m| m.as_ref())
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
