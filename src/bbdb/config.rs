use crate::error::{BbdbError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "bbdb.json";
const DEFAULT_DB_PATH: &str = "bbdb.db";

/// Configuration for bbdb, read from `bbdb.json` in the working directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BbdbConfig {
    /// Database file; relative paths resolve against the working directory
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_PATH)
}

impl Default for BbdbConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

impl BbdbConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BbdbError::Io)?;
        let config: BbdbConfig = serde_json::from_str(&content).map_err(BbdbError::Config)?;
        Ok(config)
    }

    /// The flag or environment override wins over the file.
    pub fn with_db_override(mut self, db: Option<PathBuf>) -> Self {
        if let Some(path) = db {
            self.db_path = path;
        }
        self
    }
}
