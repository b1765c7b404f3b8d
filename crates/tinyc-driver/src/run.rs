//! The driver's core logic: reading input, selecting a mode, and writing
//! the result to stdout.

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::cli::Cli;
use crate::error::Result;

enum Mode {
    Lex,
    Parse,
    Dump,
}

impl Mode {
    fn from_cli(cli: &Cli) -> Self {
        if cli.lex {
            Mode::Lex
        } else if cli.dump {
            Mode::Dump
        } else {
            Mode::Parse
        }
    }
}

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.file {
        Some(path) => run_file(cli, path),
        None => run_stdin(cli),
    }
}

fn run_file(cli: &Cli, path: &Path) -> Result<()> {
    let mode = Mode::from_cli(cli);
    let source = std::fs::read_to_string(path)?;
    let filename = path.to_string_lossy();
    debug!(file = %filename, "read source file");
    let rendered = process(&source, &filename, &mode, cli.compact)?;
    println!("{rendered}");
    Ok(())
}

/// Reads TinyC programs from stdin one line at a time, echoing each one's
/// parse result. This is not a full line-editing REPL — it stands in for
/// the interactive form the CLI contract names as an external collaborator.
fn run_stdin(cli: &Cli) -> Result<()> {
    let mode = Mode::from_cli(cli);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match process(&line, "<stdin>", &mode, cli.compact) {
            Ok(rendered) => writeln!(stdout, "{rendered}")?,
            Err(err) => eprintln!("{} {}", err.prefix(), err),
        }
    }
    Ok(())
}

fn process(source: &str, filename: &str, mode: &Mode, compact: bool) -> Result<String> {
    match mode {
        Mode::Lex => {
            debug!(phase = "lex", "tokenizing source");
            let tokens = tinyc_lex::Lexer::new(source, filename).tokenize()?;
            Ok(tokens
                .iter()
                .map(|token| {
                    format!(
                        "{:?} {:?} ({})",
                        token.kind(),
                        token.lexeme().as_str(),
                        token.location()
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"))
        }
        Mode::Parse => {
            debug!(phase = "parse", "parsing source");
            let program = tinyc_parse::parse(source, filename)?;
            let json_mode = if compact {
                tinyc_json::Mode::Compact
            } else {
                tinyc_json::Mode::Pretty
            };
            debug!(phase = "emit", "emitting JSON");
            Ok(tinyc_json::emit(&program, json_mode))
        }
        Mode::Dump => {
            debug!(phase = "parse", "parsing source");
            let program = tinyc_parse::parse(source, filename)?;
            debug!(phase = "emit", "emitting debug dump");
            Ok(tinyc_dump::dump(&program))
        }
    }
}
