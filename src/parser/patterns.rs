//! # Line Patterns
//!
//! Regex patterns for the line grammar of `.aliases` and `.env` files.
//!
//! ## Regex Notes
//!
//! Rust's `regex` crate has no lookahead. An alias definition can never start
//! with `#` because the pattern requires optional whitespace followed by the
//! `alias` keyword, so no negative lookahead is needed to reject comments.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches an alias definition: `alias name=command`
    ///
    /// Captures:
    /// - Group 1: alias name (word characters, `-` and `.`)
    /// - Group 2: raw command, quotes included
    pub static ref ALIAS_RE: Regex = Regex::new(
        r#"^\s*alias\s+([\w\-.]+)=(.+)$"#
    ).unwrap();

    /// Matches a valid alias name on its own
    pub static ref ALIAS_NAME_RE: Regex = Regex::new(
        r#"^[\w\-.]+$"#
    ).unwrap();

    /// Matches an export: `export NAME=value`
    ///
    /// Captures:
    /// - Group 1: variable name
    /// - Group 2: raw value, quotes included
    pub static ref EXPORT_RE: Regex = Regex::new(
        r#"^\s*export\s+([\w_]+)=(.+)$"#
    ).unwrap();

    /// Matches a comment line
    ///
    /// Captures:
    /// - Group 1: comment body after the leading `#` and whitespace
    pub static ref COMMENT_RE: Regex = Regex::new(
        r#"^\s*#\s*(.*)$"#
    ).unwrap();
}

/// Substring that marks an env file shebang.
pub const SHEBANG_PREFIX: &str = "#!/usr/bin/env";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_re() {
        let caps = ALIAS_RE.captures(r#"alias gs="git status""#).unwrap();
        assert_eq!(&caps[1], "gs");
        assert_eq!(&caps[2], r#""git status""#);
    }

    #[test]
    fn test_alias_re_special_names() {
        assert!(ALIAS_RE.is_match("alias ..='cd ..'"));
        assert!(ALIAS_RE.is_match("alias docker-up='docker compose up'"));
        assert!(ALIAS_RE.is_match("  alias ll=ls"));
        assert!(!ALIAS_RE.is_match("alias ~='cd ~'"));
    }

    #[test]
    fn test_alias_re_rejects_comment() {
        assert!(!ALIAS_RE.is_match("# alias gs='git status'"));
        assert!(!ALIAS_RE.is_match("#alias gs='git status'"));
    }

    #[test]
    fn test_alias_re_requires_value() {
        assert!(!ALIAS_RE.is_match("alias empty="));
    }

    #[test]
    fn test_alias_name_re() {
        assert!(ALIAS_NAME_RE.is_match("git-st.short_1"));
        assert!(!ALIAS_NAME_RE.is_match("bad name"));
        assert!(!ALIAS_NAME_RE.is_match(""));
    }

    #[test]
    fn test_export_re() {
        let caps = EXPORT_RE.captures("export EDITOR=nvim").unwrap();
        assert_eq!(&caps[1], "EDITOR");
        assert_eq!(&caps[2], "nvim");

        assert!(!EXPORT_RE.is_match("export EDITOR="));
        assert!(!EXPORT_RE.is_match("export -f myfunc"));
    }

    #[test]
    fn test_comment_re() {
        let caps = COMMENT_RE.captures("  #   Git stuff").unwrap();
        assert_eq!(&caps[1], "Git stuff");
    }
}
