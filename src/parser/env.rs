//! `.env` parser

use super::classify::{classify, strip_value_quotes, LineKind};
use super::{split_lines, Parser};
use crate::model::{EnvRecord, FileKind, DEFAULT_GROUP};

/// Parser for `~/.env`.
///
/// Group state is updated strictly in file order and persists until the
/// next heading.
#[derive(Debug, Default)]
pub struct EnvParser;

impl EnvParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for EnvParser {
    type Record = EnvRecord;

    fn parse(&self, content: &str) -> Vec<EnvRecord> {
        let mut records = Vec::new();
        let mut current_group = DEFAULT_GROUP.to_string();

        for (line, text) in split_lines(content) {
            let record = match classify(text, self.file_kind()) {
                LineKind::Marker => continue,
                LineKind::Shebang => EnvRecord::Shebang {
                    line,
                    text: text.to_string(),
                },
                LineKind::Export { name, value } => EnvRecord::Var {
                    line,
                    name: name.to_string(),
                    value: strip_value_quotes(value).to_string(),
                    group: current_group.clone(),
                },
                LineKind::Heading { title } => {
                    current_group = title.to_string();
                    EnvRecord::Group {
                        line,
                        text: text.to_string(),
                        name: title.to_string(),
                    }
                }
                LineKind::Alias { .. } | LineKind::Plain => EnvRecord::Line {
                    line,
                    text: text.to_string(),
                },
            };
            records.push(record);
        }

        records
    }

    fn file_kind(&self) -> FileKind {
        FileKind::Env
    }
}
