use super::Module;
use crate::error::Result;
use crate::store;
use rusqlite::{params, Connection};

/// Handler for plain domain names, one per row.
pub struct Domains;

impl Module for Domains {
    fn names(&self) -> &'static [&'static str] {
        &["domains", "domain"]
    }

    fn label(&self) -> &'static str {
        "domains"
    }

    fn init(&self, conn: &Connection) -> Result<()> {
        conn.execute_batch("CREATE TABLE IF NOT EXISTS domains (domain TEXT NOT NULL UNIQUE);")?;
        Ok(())
    }

    fn add(&self, conn: &Connection, value: &str) -> Result<()> {
        conn.execute("INSERT INTO domains (domain) VALUES (?1)", params![value])
            .map_err(|e| store::classify(e, value))?;
        Ok(())
    }

    fn delete(&self, conn: &Connection, value: &str) -> Result<()> {
        conn.execute("DELETE FROM domains WHERE domain = ?1", params![value])?;
        Ok(())
    }

    fn all(&self, conn: &Connection) -> Result<Vec<String>> {
        let mut stmt = conn.prepare("SELECT domain FROM domains")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let values = rows.collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(values)
    }
}
