use crate::error::{BbdbError, Result};

pub mod add;
pub mod all;
pub mod delete;
pub mod init;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_values: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_values(mut self, values: Vec<String>) -> Self {
        self.listed_values = values;
        self
    }
}

/// `add` and `delete` need a value; an absent one is rejected before the
/// handler ever sees it.
pub(crate) fn require_value(value: Option<&str>) -> Result<&str> {
    value.ok_or(BbdbError::MissingArgument)
}
