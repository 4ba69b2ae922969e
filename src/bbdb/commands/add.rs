use crate::commands::{require_value, CmdMessage, CmdResult};
use crate::error::Result;
use crate::modules::Module;
use log::debug;
use rusqlite::Connection;

pub fn run(module: &dyn Module, conn: &Connection, value: Option<&str>) -> Result<CmdResult> {
    let value = require_value(value)?;
    module.add(conn, value)?;
    debug!("added '{}' to {}", value, module.label());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Added: {}", value)));
    Ok(result)
}
