use super::{process_line, Console};
use bbdb::api::BbdbApi;
use bbdb::tokenize::join_args;
use log::debug;
use std::io::{self, BufRead, Write};

const INIT_KEYWORD: &str = "init";

/// How this invocation gets its commands. Chosen once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Create every handler's table, then exit.
    Init,
    /// Run the single command assembled from positional arguments.
    Args(String),
    /// Read commands from stdin until end of stream.
    Interactive,
}

impl Mode {
    pub fn select<S: AsRef<str>>(args: &[S]) -> Self {
        match args {
            [first, ..] if first.as_ref() == INIT_KEYWORD => Mode::Init,
            _ if args.len() >= 2 => Mode::Args(join_args(args)),
            _ => Mode::Interactive,
        }
    }
}

pub fn run_mode<R: BufRead, O: Write, E: Write>(
    api: &BbdbApi,
    mode: Mode,
    input: R,
    console: &mut Console<O, E>,
) -> io::Result<()> {
    debug!("running in {:?} mode", mode);
    match mode {
        Mode::Init => match api.init_all() {
            Ok(result) => console.print_result(&result),
            Err(e) => console.error("init error", &e.to_string()),
        },
        Mode::Args(line) => process_line(api, &line, console),
        Mode::Interactive => run_interactive(api, input, console),
    }
}

/// Dispatch stdin line by line until end of stream.
///
/// Lines are read as raw bytes and decoded lossily, so one line that is not
/// valid UTF-8 cannot end the loop. Only empty lines are skipped.
fn run_interactive<R: BufRead, O: Write, E: Write>(
    api: &BbdbApi,
    mut input: R,
    console: &mut Console<O, E>,
) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        let line = strip_line_ending(&buf);
        if line.is_empty() {
            continue;
        }
        process_line(api, &String::from_utf8_lossy(line), console)?;
    }
}

fn strip_line_ending(buf: &[u8]) -> &[u8] {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::testing::{console, output};
    use std::io::Cursor;

    fn api() -> BbdbApi {
        let api = BbdbApi::in_memory().unwrap();
        api.init_all().unwrap();
        api
    }

    #[test]
    fn init_keyword_selects_init_mode() {
        assert_eq!(Mode::select(&["init"]), Mode::Init);
        assert_eq!(Mode::select(&["init", "domains", "x"]), Mode::Init);
    }

    #[test]
    fn init_keyword_is_case_sensitive() {
        assert_eq!(Mode::select(&["INIT"]), Mode::Interactive);
    }

    #[test]
    fn two_or_more_args_select_argument_mode() {
        assert_eq!(
            Mode::select(&["all", "domains"]),
            Mode::Args("all domains".to_string())
        );
        assert_eq!(
            Mode::select(&["add", "domains", "example.com"]),
            Mode::Args("add domains example.com".to_string())
        );
    }

    #[test]
    fn fewer_args_fall_back_to_stdin() {
        let none: [&str; 0] = [];
        assert_eq!(Mode::select(&none), Mode::Interactive);
        assert_eq!(Mode::select(&["add"]), Mode::Interactive);
    }

    #[test]
    fn init_mode_reports_each_handler() {
        let api = BbdbApi::in_memory().unwrap();
        let mut c = console();
        run_mode(&api, Mode::Init, Cursor::new(""), &mut c).unwrap();

        let (out, err) = output(c);
        assert_eq!(out, "Initialized: domains\n");
        assert!(err.is_empty());
    }

    #[test]
    fn init_mode_ignores_stdin() {
        let api = BbdbApi::in_memory().unwrap();
        let mut c = console();
        run_mode(&api, Mode::Init, Cursor::new("add domains x.com\n"), &mut c).unwrap();

        let (out, _) = output(c);
        assert_eq!(out, "Initialized: domains\n");
    }

    #[test]
    fn interactive_mode_skips_empty_lines() {
        let api = api();
        let mut c = console();
        let input = "add domains a.com\n\n\r\nall domains\n";
        run_mode(&api, Mode::Interactive, Cursor::new(input), &mut c).unwrap();

        let (out, err) = output(c);
        assert_eq!(out, "Added: a.com\na.com\n");
        assert!(err.is_empty());
    }

    #[test]
    fn whitespace_only_line_is_a_parse_error() {
        let api = api();
        let mut c = console();
        run_mode(&api, Mode::Interactive, Cursor::new("   \nall domains\n"), &mut c).unwrap();

        let (out, err) = output(c);
        assert_eq!(out, "No domains found.\n");
        assert_eq!(err, "parse error: not enough tokens in '   '\n");
    }

    #[test]
    fn invalid_utf8_line_does_not_end_the_loop() {
        let api = api();
        let mut c = console();
        let input: &[u8] =
            b"add domains a.com\nadd domains \xff\xfe.com\nadd domains b.com\nall domains\n";
        run_mode(&api, Mode::Interactive, Cursor::new(input), &mut c).unwrap();

        let (out, err) = output(c);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Added: a.com");
        assert_eq!(lines[1], "Added: \u{fffd}\u{fffd}.com");
        assert_eq!(lines[2], "Added: b.com");
        let mut listed = lines[3..].to_vec();
        listed.sort();
        assert_eq!(listed, vec!["a.com", "b.com", "\u{fffd}\u{fffd}.com"]);
        assert!(err.is_empty());
    }

    #[test]
    fn last_line_without_newline_is_dispatched() {
        let api = api();
        let mut c = console();
        run_mode(&api, Mode::Interactive, Cursor::new("all domains"), &mut c).unwrap();

        let (out, _) = output(c);
        assert_eq!(out, "No domains found.\n");
    }

    #[test]
    fn interactive_mode_continues_after_errors() {
        let api = api();
        let mut c = console();
        let input = "oops\nadd domains a.com\nadd domains a.com\nall domains";
        run_mode(&api, Mode::Interactive, Cursor::new(input), &mut c).unwrap();

        let (out, err) = output(c);
        assert_eq!(out, "Added: a.com\na.com\n");
        assert_eq!(
            err,
            "parse error: not enough tokens in 'oops'\nadd error: duplicate value: a.com\n"
        );
    }

    #[test]
    fn argument_mode_matches_interactive_mode() {
        let args_api = api();
        let mut args_console = console();
        let mode = Mode::select(&["add", "domains", "example.com"]);
        run_mode(&args_api, mode, Cursor::new(""), &mut args_console).unwrap();

        let stdin_api = api();
        let mut stdin_console = console();
        run_mode(
            &stdin_api,
            Mode::Interactive,
            Cursor::new("add domains example.com\n"),
            &mut stdin_console,
        )
        .unwrap();

        assert_eq!(output(args_console), output(stdin_console));
    }

    #[test]
    fn argument_mode_runs_only_one_command() {
        let api = api();
        let mut c = console();
        let mode = Mode::select(&["all", "domains"]);
        run_mode(&api, mode, Cursor::new("add domains x.com\n"), &mut c).unwrap();

        let (out, _) = output(c);
        assert_eq!(out, "No domains found.\n");
    }
}
