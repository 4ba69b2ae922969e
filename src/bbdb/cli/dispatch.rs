use super::Console;
use bbdb::api::BbdbApi;
use bbdb::error::BbdbError;
use bbdb::model::Command;
use bbdb::tokenize::tokenize;
use log::debug;
use std::io::{self, Write};

/// Tokenize, resolve and run one input line, rendering the outcome.
///
/// Every failure is reported on stderr and stays local to this line; only
/// an I/O error on the console itself is returned.
pub fn process_line<O: Write, E: Write>(
    api: &BbdbApi,
    line: &str,
    console: &mut Console<O, E>,
) -> io::Result<()> {
    let command = match tokenize(line) {
        Ok(command) => command,
        Err(e) => return console.error("parse error", &e.to_string()),
    };
    debug!("dispatching {:?}", command);

    match api.execute(&command) {
        Ok(result) => console.print_result(&result),
        Err(e) => {
            debug!("command failed: {:?}", e);
            let (prefix, detail) = describe_failure(&command, &e);
            console.error(&prefix, &detail)
        }
    }
}

fn describe_failure(command: &Command, err: &BbdbError) -> (String, String) {
    match err {
        BbdbError::ModuleNotFound(_) => ("module error".to_string(), err.to_string()),
        BbdbError::UnknownAction(action) => ("unknown action".to_string(), action.clone()),
        _ => (format!("{} error", command.action), err.to_string()),
    }
}
