use bbdb::api::BbdbApi;
use bbdb::config::BbdbConfig;
use bbdb::modules::Registry;
use bbdb::store;
use clap::Parser;
use log::debug;
use std::io::{self, Write};
use std::path::PathBuf;

mod args;
mod cli;
use args::Cli;
use cli::{run_mode, Console, Mode};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut console = Console::new(
        stdout.lock(),
        stderr.lock(),
        console::colors_enabled(),
        console::colors_enabled_stderr(),
    );

    // Always exit 0; failures have already been reported on stderr.
    if let Err(e) = run(cli, &mut console) {
        debug!("console write failed: {}", e);
    }
    if let Err(e) = console.flush() {
        debug!("console flush failed: {}", e);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn run<O: Write, E: Write>(cli: Cli, console: &mut Console<O, E>) -> io::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match BbdbConfig::load(&cwd) {
        Ok(config) => config,
        Err(e) => {
            console.error("config error", &e.to_string())?;
            BbdbConfig::default()
        }
    }
    .with_db_override(cli.db);

    let conn = match store::open(&config.db_path) {
        Ok(conn) => conn,
        Err(e) => return console.error("failed to open db", &e.to_string()),
    };
    if let Err(e) = store::ping(&conn) {
        return console.error("failed to ping db", &e.to_string());
    }

    let api = BbdbApi::new(conn, Registry::with_builtin());
    let mode = Mode::select(&cli.args);
    run_mode(&api, mode, io::stdin().lock(), console)
}
