//! # Parser Module
//!
//! Turns the text of `~/.aliases` and `~/.env` into ordered record lists.
//!
//! ## Architecture Overview
//!
//! ```text
//! parser/
//! ├── mod.rs          - This file: Parser trait, line splitting, marker constant
//! ├── patterns.rs     - Regex patterns (ALIAS_RE, EXPORT_RE, COMMENT_RE)
//! ├── classify.rs     - Line classifier (rule priority, quote handling)
//! ├── alias.rs        - AliasParser: .aliases → Vec<AliasRecord>
//! └── env.rs          - EnvParser: .env → Vec<EnvRecord>
//! ```
//!
//! ## Line Identity
//!
//! Content is split on `\r?\n` without dropping a trailing empty segment, so
//! a file ending in a newline yields a final empty line. Every input line
//! except the generated marker produces exactly one record, in file order.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hulk::parser::{AliasParser, Parser};
//!
//! let records = AliasParser::new().parse("# Git\nalias gs='git status'\n");
//! ```

mod alias;
pub mod classify;
mod env;
pub mod patterns;

pub use alias::AliasParser;
pub use classify::{classify, LineKind};
pub use env::EnvParser;

use crate::model::FileKind;

/// Warning comment written as the second line of every generated `.aliases`.
pub const GENERATED_MARKER: &str =
    "# This file is generated by Hulk. Direct edits may be overwritten";

/// Trait for configuration file parsers.
pub trait Parser {
    /// Record type produced for each line
    type Record;

    /// Parse full file content into one record per line, in file order.
    fn parse(&self, content: &str) -> Vec<Self::Record>;

    /// The file grammar this parser handles.
    fn file_kind(&self) -> FileKind;
}

/// Split content into `(index, line)` pairs on `\r?\n`.
pub fn split_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .enumerate()
}
