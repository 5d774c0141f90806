use std::{
    fs,
    io::{self, Write},
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use log::info;
use stackcalc::{process, tokenize};
use tracing_subscriber::filter::LevelFilter;

/// stackcalc evaluates integer arithmetic expressions using `+`, `-`, `*`, `/`
/// and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the contents as a path to a file with one expression per line.
    #[arg(short, long)]
    file: bool,

    /// Print the tokens of each expression before its result.
    #[arg(short, long)]
    tokens: bool,

    /// Increase log output. May be given up to three times.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match execute(&args, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Failed to write output: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Loads the expressions named by `args` and evaluates them.
///
/// # Returns
/// `Ok(true)` if every expression evaluated, `Ok(false)` if the input file
/// could not be read or any expression failed.
fn execute(args: &Args, out: &mut impl Write, err: &mut impl Write) -> io::Result<bool> {
    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => {
                info!("read expressions from '{}'", args.contents);
                script
            },
            Err(e) => {
                writeln!(err, "Failed to read the input file '{}': {e}", args.contents)?;
                return Ok(false);
            },
        }
    } else {
        args.contents.clone()
    };

    run_script(&script, args.tokens, out, err)
}

/// Evaluates each non-blank line of `script`.
///
/// Results go to `out`, one per line. Failures go to `err` as
/// `Error on line N: <message>`, with `N` counted from 1 over all lines.
fn run_script(script: &str,
              show_tokens: bool,
              out: &mut impl Write,
              err: &mut impl Write)
              -> io::Result<bool> {
    let mut succeeded = true;
    for (index, expression) in script.lines().enumerate() {
        if expression.trim().is_empty() {
            continue;
        }
        if show_tokens {
            writeln!(out, "{:?}", tokenize(expression))?;
        }
        match process(expression) {
            Ok(value) => writeln!(out, "{value}")?,
            Err(e) => {
                writeln!(err, "Error on line {}: {e}", index + 1)?;
                succeeded = false;
            },
        }
    }
    Ok(succeeded)
}

/// Installs a stderr subscriber. Library `log` records are forwarded to it.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(std::io::stderr)
                             .init();
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;

    use super::{Args, execute, run_script};

    fn run(script: &str, show_tokens: bool) -> (bool, String, String) {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let succeeded = run_script(script, show_tokens, &mut out, &mut err).unwrap();
        (succeeded, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    fn run_args(argv: &[&str]) -> (bool, String, String) {
        let args = Args::try_parse_from(argv).unwrap();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let succeeded = execute(&args, &mut out, &mut err).unwrap();
        (succeeded, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn one_result_per_line() {
        let (succeeded, out, err) = run("2 + 2\n3 * (4 - 1)\n8 / 4 / 2", false);
        assert!(succeeded);
        assert_eq!(out, "4\n9\n1\n");
        assert!(err.is_empty());
    }

    #[test]
    fn blank_lines_are_skipped_but_counted() {
        let (succeeded, out, err) = run("1 + 1\n\n   \n5 / 0\n(2\n7", false);
        assert!(!succeeded);
        assert_eq!(out, "2\n7\n");
        assert_eq!(err, "Error on line 4: Division by zero.\nError on line 5: Malformed expression.\n");
    }

    #[test]
    fn tokens_are_printed_before_result() {
        let (succeeded, out, _) = run("3 + 4", true);
        assert!(succeeded);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[Number("));
        assert!(lines[0].contains("Operator(Add)"));
        assert_eq!(lines[1], "7");
    }

    #[test]
    fn exact_results_beyond_machine_integers() {
        let (succeeded, out, _) = run("99999999999999999999 - 99999999999999999998\n9223372036854775807 + 1", false);
        assert!(succeeded);
        assert_eq!(out, "1\n9223372036854775808\n");
    }

    #[test]
    fn expression_from_argument() {
        let (succeeded, out, err) = run_args(&["stackcalc", "(2 * 4) - 2"]);
        assert!(succeeded);
        assert_eq!(out, "6\n");
        assert!(err.is_empty());
    }

    #[test]
    fn expressions_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1 + 1\n\n2 * (3 + 4)\n2 +\n").unwrap();
        let path = file.path().to_str().unwrap();

        let (succeeded, out, err) = run_args(&["stackcalc", "-f", path]);
        assert!(!succeeded);
        assert_eq!(out, "2\n14\n");
        assert_eq!(err, "Error on line 4: Malformed expression.\n");
    }

    #[test]
    fn unreadable_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.calc");
        let path = missing.to_str().unwrap();

        let (succeeded, out, err) = run_args(&["stackcalc", "--file", path]);
        assert!(!succeeded);
        assert!(out.is_empty());
        assert!(err.starts_with("Failed to read the input file"));
    }
}
