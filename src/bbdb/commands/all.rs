use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::modules::Module;
use log::debug;
use rusqlite::Connection;

pub fn run(module: &dyn Module, conn: &Connection) -> Result<CmdResult> {
    let values = module.all(conn)?;
    debug!("listed {} {}", values.len(), module.label());

    let mut result = CmdResult::default();
    if values.is_empty() {
        result.add_message(CmdMessage::info(format!("No {} found.", module.label())));
    }
    Ok(result.with_listed_values(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::Domains;
    use crate::store;

    #[test]
    fn empty_table_yields_no_records_message() {
        let conn = store::open_in_memory().unwrap();
        Domains.init(&conn).unwrap();

        let result = run(&Domains, &conn).unwrap();
        assert!(result.listed_values.is_empty());
        assert_eq!(result.messages, vec![CmdMessage::info("No domains found.")]);
    }

    #[test]
    fn lists_every_value_without_messages() {
        let conn = store::open_in_memory().unwrap();
        Domains.init(&conn).unwrap();
        Domains.add(&conn, "a.com").unwrap();
        Domains.add(&conn, "b.com").unwrap();

        let mut result = run(&Domains, &conn).unwrap();
        assert!(result.messages.is_empty());
        result.listed_values.sort();
        assert_eq!(result.listed_values, vec!["a.com", "b.com"]);
    }
}
