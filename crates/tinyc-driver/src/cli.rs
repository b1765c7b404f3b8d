//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// TinyC frontend driver: lexes, parses, and emits a TinyC source file.
///
/// With no arguments, reads TinyC programs from stdin one line at a time
/// and echoes each one's parse result.
#[derive(Parser, Debug)]
#[command(name = "tinyc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "TinyC lexer/parser front end", long_about = None)]
pub struct Cli {
    /// Print the token stream instead of parsing.
    #[arg(short = 'l', long, conflicts_with_all = ["parse", "dump"])]
    pub lex: bool,

    /// Parse and print the AST as JSON (the default when a file is given).
    #[arg(short = 'p', long, conflicts_with = "dump")]
    pub parse: bool,

    /// Parse and print the AST as an indented debug tree.
    #[arg(short = 'd', long)]
    pub dump: bool,

    /// Emit JSON without indentation (only meaningful with --parse).
    #[arg(long)]
    pub compact: bool,

    /// Enable debug-level tracing of the lex/parse/emit phases.
    #[arg(short, long)]
    pub verbose: bool,

    /// The TinyC source file to process. Omit to read from stdin.
    pub file: Option<PathBuf>,
}
