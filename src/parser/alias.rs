//! `.aliases` parser

use super::classify::{classify, unquote_command, LineKind};
use super::{split_lines, Parser};
use crate::model::{AliasRecord, FileKind, DEFAULT_GROUP};

/// Parser for `~/.aliases`.
///
/// Tracks the current group while scanning: every heading replaces it, and
/// each alias records the group in effect on its line.
#[derive(Debug, Default)]
pub struct AliasParser;

impl AliasParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for AliasParser {
    type Record = AliasRecord;

    fn parse(&self, content: &str) -> Vec<AliasRecord> {
        let mut records = Vec::new();
        let mut current_group = DEFAULT_GROUP.to_string();

        for (line, text) in split_lines(content) {
            let record = match classify(text, self.file_kind()) {
                LineKind::Marker => continue,
                LineKind::Alias { name, command } => {
                    let (command, quote) = unquote_command(command);
                    AliasRecord::Alias {
                        line,
                        name: name.to_string(),
                        command,
                        group: current_group.clone(),
                        quote,
                    }
                }
                LineKind::Heading { title } => {
                    current_group = title.to_string();
                    AliasRecord::Heading {
                        line,
                        text: text.to_string(),
                        title: title.to_string(),
                    }
                }
                LineKind::Shebang | LineKind::Export { .. } | LineKind::Plain => {
                    AliasRecord::Line {
                        line,
                        text: text.to_string(),
                    }
                }
            };
            records.push(record);
        }

        records
    }

    fn file_kind(&self) -> FileKind {
        FileKind::Aliases
    }
}
