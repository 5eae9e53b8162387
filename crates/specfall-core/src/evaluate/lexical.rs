//! Lexical-heuristic verdict policy (alternate strategy)
//!
//! Counts occurrences of fixed success-indicator tokens against fixed
//! failure-indicator tokens over the lowercased body. Coarser than the
//! structural policy but tolerant of unfamiliar assertion spellings.

use super::{Evaluate, Verdict, HEURISTIC_SUFFIX};
use crate::extract::TestCase;
use regex::Regex;

/// Tokens suggesting the body expects successful behavior
const SUCCESS_TOKENS: &[&str] = &["assert.", "should", "expect", "function", "return"];

/// Tokens suggesting the body raises or checks for failure
const FAILURE_TOKENS: &[&str] = &["error(", "fail", "nil"];

/// Equality-style assertions; these always resolve truthy in this harness
const EQUALITY_CALL: &str = r"assert\.(equals?|same|are)\b";

/// Token-counting classification
pub struct LexicalPolicy {
    equality: Regex,
}

impl Default for LexicalPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl LexicalPolicy {
    /// Create the policy with its equality signature compiled once
    pub fn new() -> Self {
        Self {
            equality: Regex::new(EQUALITY_CALL).expect("equality pattern compiles"),
        }
    }

    fn tag_equality(&self, body: &str, mut reason: String) -> String {
        if self.equality.is_match(body) {
            reason.push_str(HEURISTIC_SUFFIX);
        }
        reason
    }
}

impl Evaluate for LexicalPolicy {
    fn evaluate(&self, case: &TestCase) -> Verdict {
        let body = case.body.trim();

        if body.is_empty() {
            return Verdict::fail("empty test body");
        }

        let lower = body.to_lowercase();
        let success: usize = SUCCESS_TOKENS
            .iter()
            .map(|token| lower.matches(token).count())
            .sum();
        let failure: usize = FAILURE_TOKENS
            .iter()
            .map(|token| lower.matches(token).count())
            .sum();
        let has_assertion = lower.contains("assert.");

        if success > failure && has_assertion {
            let reason = self.tag_equality(
                &lower,
                String::from("success indicators outweigh failure indicators (not executed)"),
            );
            return Verdict::pass(reason);
        }

        let present: Vec<&str> = FAILURE_TOKENS
            .iter()
            .filter(|token| lower.contains(**token))
            .copied()
            .collect();
        if !present.is_empty() {
            return Verdict::fail(format!(
                "failure indicators present: {}",
                present.join(", ")
            ));
        }

        let reason = self.tag_equality(
            &lower,
            String::from("no failure indicators found (not executed)"),
        );
        Verdict::pass(reason)
    }
}
