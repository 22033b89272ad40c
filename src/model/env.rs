//! Records parsed from an `.env` file

use serde::{Deserialize, Serialize};

/// A single line of an `.env` file.
///
/// `Var` records carry the name of the most recent `Group` above them, or
/// [`DEFAULT_GROUP`](super::DEFAULT_GROUP) when none precedes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EnvRecord {
    Shebang {
        line: usize,
        text: String,
    },
    Var {
        line: usize,
        name: String,
        value: String,
        group: String,
    },
    Group {
        line: usize,
        text: String,
        name: String,
    },
    Line {
        line: usize,
        text: String,
    },
}

impl EnvRecord {
    pub fn line_number(&self) -> usize {
        match self {
            EnvRecord::Shebang { line, .. }
            | EnvRecord::Var { line, .. }
            | EnvRecord::Group { line, .. }
            | EnvRecord::Line { line, .. } => *line,
        }
    }

    /// Variable name, for `Var` records only.
    pub fn var_name(&self) -> Option<&str> {
        match self {
            EnvRecord::Var { name, .. } => Some(name),
            _ => None,
        }
    }
}
