use clap::{Parser, ValueEnum};
use colored::*;
use specfall_core::{Evaluate, LexicalPolicy, Strictness, StructuralPolicy, TestExtractor};
use std::path::PathBuf;
use std::process::ExitCode;

mod harness;

use harness::{FileSet, RunReporter, DEFAULT_SPEC_DIR};

/// Best-effort harness for Lua-style describe/it spec files.
///
/// Discovers *_spec.lua files, extracts suites and cases by scanning
/// their brace structure, and classifies each case with a heuristic
/// verdict policy. No test code is ever executed.
///
/// EXAMPLES:
///     specfall                          Run every spec under tests/spec
///     specfall parser                   Run specs whose name contains "parser"
///     specfall tests/spec/io_spec.lua   Run exactly one file
///     specfall --policy=lexical         Classify by token counting
///     specfall --json                   Emit a JSON report
///
/// ENVIRONMENT VARIABLES:
///     SPECFALL_JSON   Set to '1' for JSON output by default
///     NO_COLOR        Set to disable colored output
#[derive(Parser)]
#[command(name = "specfall")]
#[command(version)]
struct Cli {
    /// Spec file path, or substring pattern over spec file names
    pattern: Option<String>,
    /// Directory searched for *_spec.lua files
    #[arg(long, default_value = DEFAULT_SPEC_DIR)]
    dir: PathBuf,
    /// Verdict policy applied to each extracted case
    #[arg(long, value_enum, default_value_t = Policy::Structural)]
    policy: Policy,
    /// Treat unterminated suite or case blocks as extraction errors
    #[arg(long)]
    strict_scan: bool,
    /// Output a JSON report instead of terminal text
    #[arg(long, env = "SPECFALL_JSON")]
    json: bool,
    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    no_color: bool,
}

/// Selectable verdict policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Policy {
    /// Require assert.* calls and reject known malformed constructs
    Structural,
    /// Weigh success-indicator tokens against failure-indicator tokens
    Lexical,
}

impl Policy {
    fn build(self) -> Box<dyn Evaluate> {
        match self {
            Policy::Structural => Box::new(StructuralPolicy::new()),
            Policy::Lexical => Box::new(LexicalPolicy::new()),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let files = match FileSet::resolve(cli.pattern.as_deref(), &cli.dir) {
        Ok(files) => files,
        Err(err) => {
            eprintln!("{}: {}", "error".red().bold(), err);
            return ExitCode::FAILURE;
        }
    };

    let strictness = if cli.strict_scan {
        Strictness::Strict
    } else {
        Strictness::Lenient
    };
    let extractor = TestExtractor::new().with_strictness(strictness);

    let mut reporter = RunReporter::new(extractor, cli.policy.build()).with_quiet(cli.json);
    reporter.run_all(&files);

    if cli.json {
        println!("{}", reporter.json_report());
    }

    reporter.tally().exit_code()
}
