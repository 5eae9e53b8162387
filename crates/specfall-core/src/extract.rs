//! Test extraction - locate `describe`/`it` declarations and bound their bodies
//!
//! Declarations are matched against a fixed signature
//! (`describe("name", function()` / `it("name", function()`), then each block
//! is bounded with the brace-depth scanner. This is pattern matching over
//! text, not parsing: a file that cannot be matched meaningfully simply
//! yields an empty case list.

use crate::error::ExtractError;
use crate::scanner::scan_block;
use regex::Regex;

/// Suite declaration signature (`describe` block opening a function)
const SUITE_PATTERN: &str = r#"describe\s*\(\s*["']([^"']+)["']\s*,\s*function\s*\(\s*\)"#;

/// Case declaration signature (`it` block opening a function)
const CASE_PATTERN: &str = r#"it\s*\(\s*["']([^"']+)["']\s*,\s*function\s*\(\s*\)"#;

/// How to treat blocks whose closing brace is never found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Keep the truncated body and carry on (matches the historical behavior)
    #[default]
    Lenient,
    /// Surface an [`ExtractError::UnterminatedBlock`] for the whole file
    Strict,
}

/// A named block bounded in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'t> {
    /// Name given in the declaration
    pub name: &'t str,
    /// Raw text between the declaration header and the closing brace
    pub body: &'t str,
}

/// A single extracted test case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Name of the enclosing `describe` block
    pub suite_name: String,
    /// Name of the `it` block
    pub case_name: String,
    /// `"<suite_name> <case_name>"`, never empty
    pub full_name: String,
    /// Raw, trimmed source text of the case body
    pub body: String,
}

impl TestCase {
    /// Build a case record; the body is trimmed, names are kept verbatim.
    pub fn new(suite_name: &str, case_name: &str, body: &str) -> Self {
        Self {
            suite_name: suite_name.to_string(),
            case_name: case_name.to_string(),
            full_name: format!("{} {}", suite_name, case_name),
            body: body.trim().to_string(),
        }
    }
}

/// Extractor with the declaration signatures compiled once
pub struct TestExtractor {
    strictness: Strictness,
    suite_re: Regex,
    case_re: Regex,
}

impl Default for TestExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TestExtractor {
    /// Create an extractor with lenient scan handling
    pub fn new() -> Self {
        Self {
            strictness: Strictness::Lenient,
            suite_re: Regex::new(SUITE_PATTERN).expect("suite pattern compiles"),
            case_re: Regex::new(CASE_PATTERN).expect("case pattern compiles"),
        }
    }

    /// Set how unterminated blocks are treated
    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Find suite declarations in source order.
    ///
    /// Matching is non-overlapping and first-match-per-declaration; each
    /// match is bounded by one scanner invocation.
    pub fn find_suites<'t>(&self, text: &'t str) -> Result<Vec<Block<'t>>, ExtractError> {
        self.find_blocks(&self.suite_re, text, "describe")
    }

    /// Find case declarations within a previously bounded suite body.
    ///
    /// Cases outside any suite are invisible to this design, matching the
    /// expected shape of spec files.
    pub fn find_cases<'t>(&self, suite_body: &'t str) -> Result<Vec<Block<'t>>, ExtractError> {
        self.find_blocks(&self.case_re, suite_body, "it")
    }

    /// Extract the flat list of test cases for one file's source text.
    ///
    /// Produces one [`TestCase`] per (suite, case) pair, preserving source
    /// order of suites and, within each suite, source order of cases.
    pub fn extract(&self, text: &str) -> Result<Vec<TestCase>, ExtractError> {
        let mut cases = Vec::new();

        for suite in self.find_suites(text)? {
            for case in self.find_cases(suite.body)? {
                cases.push(TestCase::new(suite.name, case.name, case.body));
            }
        }

        Ok(cases)
    }

    fn find_blocks<'t>(
        &self,
        re: &Regex,
        text: &'t str,
        kind: &'static str,
    ) -> Result<Vec<Block<'t>>, ExtractError> {
        let mut blocks = Vec::new();

        for caps in re.captures_iter(text) {
            let name = match caps.get(1) {
                Some(m) => m.as_str(),
                None => continue,
            };
            let header_end = caps.get(0).map_or(text.len(), |m| m.end());

            let scan = scan_block(text, header_end);
            if !scan.terminated && self.strictness == Strictness::Strict {
                return Err(ExtractError::UnterminatedBlock {
                    kind,
                    name: name.to_string(),
                });
            }

            blocks.push(Block {
                name,
                body: scan.body,
            });
        }

        Ok(blocks)
    }
}
