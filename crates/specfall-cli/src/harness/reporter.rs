//! Run reporter - extraction and verdict output per spec file

use crate::harness::discovery::FileSet;
use anyhow::{Context, Result};
use colored::*;
use specfall_core::{Evaluate, TestCase, TestExtractor};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

/// Width of the rule lines framing the banner and summary
const RULE_WIDTH: usize = 60;

/// Aggregate counts for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTally {
    /// Cases the active policy judged passing
    pub passed: u32,
    /// Cases the active policy judged failing
    pub failed: u32,
    /// Files that could not be processed at all
    pub errors: u32,
}

impl RunTally {
    /// Count one passing case
    pub fn record_pass(&mut self) {
        self.passed += 1;
    }

    /// Count one failing case
    pub fn record_fail(&mut self) {
        self.failed += 1;
    }

    /// Count one file-level error
    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    /// A run succeeds only when no case failed and no file errored
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }

    /// Total cases evaluated
    pub fn total(&self) -> u32 {
        self.passed + self.failed
    }

    /// Process exit status for this tally
    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// One evaluated case, kept for the JSON report
struct CaseRecord {
    file: String,
    name: String,
    passed: bool,
    reason: String,
}

/// Drives extraction and heuristic evaluation over a file set.
///
/// Files are processed strictly in order. A file that cannot be read or
/// extracted is reported as an error and never aborts the run.
pub struct RunReporter {
    extractor: TestExtractor,
    policy: Box<dyn Evaluate>,
    /// Suppress terminal output (used when emitting JSON)
    quiet: bool,
    tally: RunTally,
    records: Vec<CaseRecord>,
}

impl RunReporter {
    /// Create a reporter with the given extractor and verdict policy
    pub fn new(extractor: TestExtractor, policy: Box<dyn Evaluate>) -> Self {
        Self {
            extractor,
            policy,
            quiet: false,
            tally: RunTally::default(),
            records: Vec::new(),
        }
    }

    /// Suppress terminal output
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Counts accumulated so far
    pub fn tally(&self) -> RunTally {
        self.tally
    }

    /// Process every file in the set: banner, per-file results, summary
    pub fn run_all(&mut self, files: &FileSet) {
        self.print_banner();
        for path in files.iter() {
            self.run_file(path);
        }
        self.print_summary();
    }

    /// Warn that verdicts are heuristic before any result is printed
    pub fn print_banner(&self) {
        self.say("=".repeat(RULE_WIDTH));
        self.say(format!(
            "{}: no interpreter available, falling back to heuristics",
            "WARNING".yellow().bold()
        ));
        self.say("Test bodies are scanned and classified, never executed.");
        self.say("=".repeat(RULE_WIDTH));
    }

    /// Extract and evaluate a single spec file
    pub fn run_file(&mut self, path: &Path) {
        self.say(format!("\n{}", "=".repeat(RULE_WIDTH)));
        self.say(format!("Testing:\t{}", path.display()));
        self.say("=".repeat(RULE_WIDTH));

        match self.process_file(path) {
            Ok(cases) if cases.is_empty() => {
                self.tally.record_error();
                self.say(format!(
                    "{}\t||\tNo tests found in {}",
                    "ERROR".yellow().bold(),
                    path.display()
                ));
            }
            Ok(cases) => {
                for case in &cases {
                    self.report_case(path, case);
                }
            }
            Err(err) => {
                self.tally.record_error();
                self.say(format!("{}\t||\t{:#}", "ERROR".yellow().bold(), err));
            }
        }
    }

    /// Final counts, framed like the banner
    pub fn print_summary(&self) {
        self.say(format!("\n{}", "=".repeat(RULE_WIDTH)));
        self.say(format!("{}", "Test Summary".bold()));
        self.say("=".repeat(RULE_WIDTH));

        let failed = if self.tally.failed > 0 {
            self.tally.failed.to_string().red().bold()
        } else {
            self.tally.failed.to_string().normal()
        };
        let errors = if self.tally.errors > 0 {
            self.tally.errors.to_string().yellow().bold()
        } else {
            self.tally.errors.to_string().normal()
        };

        self.say(format!(
            "Passed:\t{}",
            self.tally.passed.to_string().green().bold()
        ));
        self.say(format!("Failed:\t{}", failed));
        self.say(format!("Errors:\t{}", errors));
        self.say("=".repeat(RULE_WIDTH));

        let status = if self.tally.is_success() {
            "PASSED".green().bold()
        } else {
            "FAILED".red().bold()
        };
        self.say(format!("Result: {} (heuristic verdicts only)", status));
    }

    /// Machine-readable report over everything recorded so far
    pub fn json_report(&self) -> serde_json::Value {
        let results: Vec<_> = self
            .records
            .iter()
            .map(|record| {
                serde_json::json!({
                    "file": record.file,
                    "name": record.name,
                    "passed": record.passed,
                    "reason": record.reason,
                })
            })
            .collect();

        serde_json::json!({
            "tests": self.tally.total(),
            "passed": self.tally.passed,
            "failed": self.tally.failed,
            "errors": self.tally.errors,
            "results": results,
        })
    }

    /// Read and extract one file; any failure here is a file-level error
    fn process_file(&self, path: &Path) -> Result<Vec<TestCase>> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let cases = self.extractor.extract(&text)?;
        Ok(cases)
    }

    fn report_case(&mut self, path: &Path, case: &TestCase) {
        let verdict = self.policy.evaluate(case);

        let label = if verdict.is_pass() {
            "PASS".green().bold()
        } else {
            "FAIL".red().bold()
        };
        self.say(format!("{}\t||\t{}", label, case.full_name));
        if verdict.is_fail() {
            self.say(format!("\tReason: {}", verdict.reason));
        }

        if verdict.is_pass() {
            self.tally.record_pass();
        } else {
            self.tally.record_fail();
        }
        self.records.push(CaseRecord {
            file: path.display().to_string(),
            name: case.full_name.clone(),
            passed: verdict.passed,
            reason: verdict.reason,
        });
    }

    fn say(&self, line: impl std::fmt::Display) {
        if !self.quiet {
            println!("{}", line);
        }
    }
}
