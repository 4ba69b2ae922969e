use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bbdb", version)]
#[command(about = "Keep a small list of records (domains) in a local database", long_about = None)]
pub struct Cli {
    /// Database file (overrides db_path from bbdb.json)
    #[arg(long, env = "BBDB_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// `init`, or `<action> <type> [argument]`. Reads commands from stdin when omitted.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
