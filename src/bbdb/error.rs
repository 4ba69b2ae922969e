use thiserror::Error;

#[derive(Error, Debug)]
pub enum BbdbError {
    #[error("not enough tokens in '{0}'")]
    Parse(String),

    #[error("no such module: {0}")]
    ModuleNotFound(String),

    #[error("{0}")]
    UnknownAction(String),

    #[error("missing argument")]
    MissingArgument,

    #[error("duplicate value: {0}")]
    Duplicate(String),

    #[error("{0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BbdbError>;
