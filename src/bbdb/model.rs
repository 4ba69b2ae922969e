use crate::error::BbdbError;
use std::fmt;
use std::str::FromStr;

/// The operations a handler can be asked to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    All,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::All => "all",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = BbdbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Action::Add),
            "all" => Ok(Action::All),
            "delete" => Ok(Action::Delete),
            other => Err(BbdbError::UnknownAction(other.to_string())),
        }
    }
}

/// A single parsed input line: `action type [argument]`.
///
/// `action` and `typ` are already lowercased. `action` stays a raw string so
/// an unknown action can still be reported after the handler is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub action: String,
    pub typ: String,
    pub arg: Option<String>,
}

impl Command {
    pub fn new(action: impl Into<String>, typ: impl Into<String>, arg: Option<String>) -> Self {
        Self {
            action: action.into(),
            typ: typ.into(),
            arg,
        }
    }
}
