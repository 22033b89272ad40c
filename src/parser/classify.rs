//! # Line Classifier
//!
//! Categorizes one raw line of an `.aliases` or `.env` file.
//!
//! ## Rule Priority
//!
//! Rules are tried in a fixed order and the first match wins:
//!
//! | # | Kind | Files | Detection |
//! |---|------|-------|-----------|
//! | 0 | Marker | both | exact generated-file comment |
//! | 1 | Shebang | env | contains `#!/usr/bin/env` |
//! | 2 | Alias | aliases | [`ALIAS_RE`] |
//! | 3 | Export | env | [`EXPORT_RE`] |
//! | 4 | Heading | both | [`COMMENT_RE`], non-empty title, not a commented-out alias |
//! | 5 | Plain | both | everything else |
//!
//! Every `try_parse_*` function is total: it returns `None` instead of failing,
//! so a malformed definition always degrades to a plain passthrough line.

use super::patterns::*;
use super::GENERATED_MARKER;
use crate::model::{FileKind, QuoteStyle};

/// Category of a single line, borrowing from the line text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// The generated-file warning comment hulk injects on save
    Marker,
    Shebang,
    Alias { name: &'a str, command: &'a str },
    Export { name: &'a str, value: &'a str },
    Heading { title: &'a str },
    Plain,
}

/// Classify `line` according to the grammar of `file`.
///
/// `.bashrc` lines are never classified; they get the alias grammar here only
/// so the function stays total.
pub fn classify(line: &str, file: FileKind) -> LineKind<'_> {
    if is_marker(line) {
        return LineKind::Marker;
    }

    match file {
        FileKind::Env => {
            if is_shebang(line) {
                return LineKind::Shebang;
            }
            if let Some((name, value)) = try_parse_export(line) {
                return LineKind::Export { name, value };
            }
        }
        FileKind::Aliases | FileKind::BashRc => {
            if let Some((name, command)) = try_parse_alias(line) {
                return LineKind::Alias { name, command };
            }
        }
    }

    match try_parse_heading(line) {
        Some(title) => LineKind::Heading { title },
        None => LineKind::Plain,
    }
}

pub fn is_marker(line: &str) -> bool {
    line.trim() == GENERATED_MARKER
}

pub fn is_shebang(line: &str) -> bool {
    line.contains(SHEBANG_PREFIX)
}

/// `alias name=command` → `(name, raw command)`
pub fn try_parse_alias(line: &str) -> Option<(&str, &str)> {
    let caps = ALIAS_RE.captures(line)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// `export NAME=value` → `(name, raw value)`
pub fn try_parse_export(line: &str) -> Option<(&str, &str)> {
    let caps = EXPORT_RE.captures(line)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// `# Title` → `Title`
///
/// Shebangs (`#!...`), comments with nothing after the `#`, and commented-out
/// alias definitions are not headings.
pub fn try_parse_heading(line: &str) -> Option<&str> {
    if line.trim_start().starts_with("#!") {
        return None;
    }
    let caps = COMMENT_RE.captures(line)?;
    let title = caps.get(1)?.as_str().trim_end();
    if title.is_empty() || ALIAS_RE.is_match(title) {
        return None;
    }
    Some(title)
}

/// Split a raw alias command into its unquoted text and the quoting to
/// restore on save.
///
/// - `"git status"` → `git status`, [`QuoteStyle::Double`]
/// - `'ls -la'` → `ls -la`, [`QuoteStyle::Single`]
/// - `ls` → `ls`, [`QuoteStyle::Double`]
/// - `'a' && "b"` → kept verbatim, [`QuoteStyle::Raw`]
pub fn unquote_command(raw: &str) -> (String, QuoteStyle) {
    let value = raw.trim_end();

    if let Some(inner) = wrapped_in(value, '"') {
        if !has_unescaped(inner, '"') {
            return (inner.to_string(), QuoteStyle::Double);
        }
    }
    if let Some(inner) = wrapped_in(value, '\'') {
        if !inner.contains('\'') {
            return (inner.to_string(), QuoteStyle::Single);
        }
    }
    if value.contains('"') || value.contains('\'') {
        return (value.to_string(), QuoteStyle::Raw);
    }
    (value.to_string(), QuoteStyle::Double)
}

/// Strip one pair of wrapping double quotes from an env value.
///
/// Single-quoted values are kept as written. An unbalanced leading quote is
/// left in place rather than dropped.
pub fn strip_value_quotes(raw: &str) -> &str {
    let value = raw.trim_end();
    wrapped_in(value, '"').unwrap_or(value)
}

fn wrapped_in(value: &str, quote: char) -> Option<&str> {
    if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
        Some(&value[1..value.len() - 1])
    } else {
        None
    }
}

fn has_unescaped(value: &str, quote: char) -> bool {
    let mut escaped = false;
    for c in value.chars() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return true;
        }
    }
    false
}
