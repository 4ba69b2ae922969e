use crate::error::{BbdbError, Result};
use crate::model::Command;

/// Splits a raw input line into a [`Command`].
///
/// Needs at least two whitespace-separated fields. A third field becomes the
/// argument; anything after it is dropped. Action and type are lowercased,
/// the argument is kept verbatim.
pub fn tokenize(line: &str) -> Result<Command> {
    let mut fields = line.split_whitespace();

    let (action, typ) = match (fields.next(), fields.next()) {
        (Some(action), Some(typ)) => (action, typ),
        _ => return Err(BbdbError::Parse(line.to_string())),
    };
    let arg = fields.next().map(str::to_string);

    Ok(Command::new(action.to_lowercase(), typ.to_lowercase(), arg))
}

/// Builds the synthetic line used for argument mode, so positional
/// arguments go through exactly the same tokenizer as stdin.
pub fn join_args<S: AsRef<str>>(args: &[S]) -> String {
    args.iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(" ")
        .trim()
        .to_string()
}
