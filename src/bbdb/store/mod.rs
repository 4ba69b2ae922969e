//! # Storage Layer
//!
//! bbdb keeps every record in a single SQLite file, one table per handler.
//! This module owns the connection lifecycle; handlers never open or close
//! it themselves, they only borrow it for the duration of one call.
//!
//! ## Storage Format
//!
//! ```text
//! bbdb.db
//! └── domains (domain TEXT NOT NULL UNIQUE)
//! ```
//!
//! Tests use [`open_in_memory`] so they never touch the filesystem.

use crate::error::{BbdbError, Result};
use log::debug;
use rusqlite::{Connection, ErrorCode};
use std::path::Path;

/// Open (creating if needed) the database file at `path`.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    debug!("opening database at {}", path.display());
    Ok(Connection::open(path)?)
}

pub fn open_in_memory() -> Result<Connection> {
    Ok(Connection::open_in_memory()?)
}

/// Round-trip a trivial query to make sure the handle is usable.
pub fn ping(conn: &Connection) -> Result<()> {
    conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
    Ok(())
}

/// Maps a failed write of `value` onto the crate error type.
///
/// Constraint violations become [`BbdbError::Duplicate`]; every other
/// failure stays a storage error.
pub fn classify(err: rusqlite::Error, value: &str) -> BbdbError {
    match err.sqlite_error_code() {
        Some(ErrorCode::ConstraintViolation) => BbdbError::Duplicate(value.to_string()),
        _ => BbdbError::Storage(err),
    }
}
