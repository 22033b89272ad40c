//! Quoting checker

use super::{CheckInput, CheckIssue, CheckResult, Checker};
use crate::model::{AliasRecord, QuoteStyle};

/// Flags aliases whose value is neither one single- nor one double-quoted
/// string. Those are saved verbatim instead of being normalized.
pub struct QuotingChecker;

impl Checker for QuotingChecker {
    fn check(&self, input: &CheckInput<'_>) -> CheckResult {
        let mut result = CheckResult::new();

        for record in input.aliases {
            if let AliasRecord::Alias {
                line,
                name,
                quote: QuoteStyle::Raw,
                ..
            } = record
            {
                result.add_issue(CheckIssue {
                    message: format!(
                        "Alias '{}' mixes quoted and unquoted parts; it will be saved as written",
                        name
                    ),
                    line_number: Some(line + 1),
                    entry_name: Some(name.clone()),
                });
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::check_all;
    use crate::parser::{AliasParser, Parser};

    #[test]
    fn test_mixed_quotes_flagged() {
        let aliases = AliasParser::new().parse("alias ok='fine'\nalias mixed='a' && \"b\"");
        let result = QuotingChecker.check(&CheckInput {
            aliases: &aliases,
            env: &[],
        });
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].line_number, Some(2));
    }

    #[test]
    fn test_check_all_sorted_by_line() {
        let aliases =
            AliasParser::new().parse("alias m='a'\"b\"\nalias d=x\nalias d=y");
        let result = check_all(&CheckInput {
            aliases: &aliases,
            env: &[],
        });
        let lines: Vec<_> = result.issues.iter().map(|i| i.line_number).collect();
        assert_eq!(lines, vec![Some(1), Some(2)]);
    }
}
