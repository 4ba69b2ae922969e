use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::modules::Registry;
use log::debug;
use rusqlite::Connection;

/// Create the backing table of every registered handler, in order.
/// Stops at the first failure.
pub fn run(registry: &Registry, conn: &Connection) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for module in registry.iter() {
        module.init(conn)?;
        debug!("initialized storage for {}", module.label());
        result.add_message(CmdMessage::success(format!("Initialized: {}", module.label())));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::{Domains, Module};
    use crate::store;

    #[test]
    fn creates_tables_for_every_handler() {
        let conn = store::open_in_memory().unwrap();
        let registry = Registry::with_builtin();

        let result = run(&registry, &conn).unwrap();
        assert_eq!(result.messages, vec![CmdMessage::success("Initialized: domains")]);
        Domains.add(&conn, "example.com").unwrap();
    }

    #[test]
    fn running_twice_keeps_existing_records() {
        let conn = store::open_in_memory().unwrap();
        let registry = Registry::with_builtin();

        run(&registry, &conn).unwrap();
        Domains.add(&conn, "example.com").unwrap();
        run(&registry, &conn).unwrap();

        assert_eq!(Domains.all(&conn).unwrap(), vec!["example.com"]);
    }
}
