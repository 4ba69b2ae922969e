//! # API Facade
//!
//! [`BbdbApi`] is the single entry point for every bbdb operation. It owns
//! the database connection and the handler [`Registry`], and lends the
//! connection to the command layer one call at a time.
//!
//! The facade:
//! - **Resolves** the handler named by a [`Command`]'s type
//! - **Validates** the action
//! - **Dispatches** to `commands/*.rs` and returns a structured [`CmdResult`]
//!
//! It never prints. Rendering results and errors is the CLI's job.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::{Action, Command};
use crate::modules::{Module, Registry};
use crate::store;
use log::debug;
use rusqlite::Connection;

pub struct BbdbApi {
    conn: Connection,
    registry: Registry,
}

impl BbdbApi {
    pub fn new(conn: Connection, registry: Registry) -> Self {
        Self { conn, registry }
    }

    pub fn in_memory() -> Result<Self> {
        let conn = store::open_in_memory()?;
        Ok(Self::new(conn, Registry::with_builtin()))
    }

    /// Run a parsed command.
    ///
    /// The handler is resolved before the action is checked, so an unknown
    /// type wins over an unknown action. Nothing touches storage unless both
    /// are valid.
    pub fn execute(&self, command: &Command) -> Result<CmdResult> {
        let module = self.resolve(&command.typ)?;
        let action: Action = command.action.parse()?;
        let value = command.arg.as_deref();
        debug!("{} on {}", action, module.label());

        match action {
            Action::Add => commands::add::run(module, &self.conn, value),
            Action::All => commands::all::run(module, &self.conn),
            Action::Delete => commands::delete::run(module, &self.conn, value),
        }
    }

    pub fn init_all(&self) -> Result<CmdResult> {
        commands::init::run(&self.registry, &self.conn)
    }

    pub fn resolve(&self, typ: &str) -> Result<&dyn Module> {
        self.registry.resolve(typ)
    }
}
