//! Duplicate definition checker

use super::{CheckInput, CheckIssue, CheckResult, Checker};
use std::collections::BTreeMap;

/// Checks for aliases or variables defined more than once.
///
/// Only the last definition takes effect when the file is sourced.
pub struct DuplicateChecker;

impl DuplicateChecker {
    fn report(result: &mut CheckResult, kind: &str, seen: BTreeMap<&str, Vec<usize>>) {
        for (name, lines) in seen {
            if lines.len() < 2 {
                continue;
            }
            let listed: Vec<String> = lines.iter().map(|l| (l + 1).to_string()).collect();
            result.add_issue(CheckIssue {
                message: format!(
                    "Duplicate {} '{}' defined on lines: {}",
                    kind,
                    name,
                    listed.join(", ")
                ),
                line_number: lines.first().map(|l| l + 1),
                entry_name: Some(name.to_string()),
            });
        }
    }
}

impl Checker for DuplicateChecker {
    fn check(&self, input: &CheckInput<'_>) -> CheckResult {
        let mut result = CheckResult::new();

        let mut aliases: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for record in input.aliases {
            if let Some(name) = record.name() {
                aliases.entry(name).or_default().push(record.line_number());
            }
        }

        let mut vars: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for record in input.env {
            if let Some(name) = record.var_name() {
                vars.entry(name).or_default().push(record.line_number());
            }
        }

        Self::report(&mut result, "alias", aliases);
        Self::report(&mut result, "variable", vars);

        result
    }
}
