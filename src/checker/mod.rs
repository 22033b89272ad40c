//! Checker module for validating alias and env files

mod duplicate;
mod quoting;

pub use duplicate::DuplicateChecker;
pub use quoting::QuotingChecker;

use crate::model::{AliasRecord, EnvRecord};

/// Parsed content of the files being checked
#[derive(Debug, Default)]
pub struct CheckInput<'a> {
    pub aliases: &'a [AliasRecord],
    pub env: &'a [EnvRecord],
}

/// Trait for individual checks
pub trait Checker {
    fn check(&self, input: &CheckInput<'_>) -> CheckResult;
}

/// Check result
#[derive(Debug, Default)]
pub struct CheckResult {
    pub issues: Vec<CheckIssue>,
}

impl CheckResult {
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn add_issue(&mut self, issue: CheckIssue) {
        self.issues.push(issue);
    }

    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

/// A single check issue
#[derive(Debug)]
pub struct CheckIssue {
    pub message: String,
    /// 1-based line number of the first offending line
    pub line_number: Option<usize>,
    pub entry_name: Option<String>,
}

/// Run all checks
pub fn check_all(input: &CheckInput<'_>) -> CheckResult {
    let mut result = CheckResult::new();

    result.issues.extend(DuplicateChecker.check(input).issues);
    result.issues.extend(QuotingChecker.check(input).issues);
    result.issues.sort_by_key(|i| i.line_number);

    result
}
