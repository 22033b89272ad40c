//! `.aliases` formatter

use super::Formatter;
use crate::model::{AliasRecord, QuoteStyle};
use crate::parser::GENERATED_MARKER;

/// Writes alias records back as a complete `.aliases` file.
///
/// This is a full rewrite: the output contains exactly the given records, in
/// list order, plus the generated-file marker as the second line.
#[derive(Debug, Default)]
pub struct AliasFormatter;

impl AliasFormatter {
    pub fn new() -> Self {
        Self
    }

    fn format_alias(name: &str, command: &str, quote: QuoteStyle) -> String {
        match quote {
            QuoteStyle::Double => format!("alias {}=\"{}\"", name, command),
            QuoteStyle::Single => format!("alias {}='{}'", name, command),
            QuoteStyle::Raw => format!("alias {}={}", name, command),
        }
    }
}

impl Formatter for AliasFormatter {
    type Record = AliasRecord;

    fn format(&self, records: &[AliasRecord]) -> String {
        let mut lines: Vec<String> = records.iter().map(|r| self.format_record(r)).collect();
        let marker_at = lines.len().min(1);
        lines.insert(marker_at, GENERATED_MARKER.to_string());
        lines.join("\n")
    }

    fn format_record(&self, record: &AliasRecord) -> String {
        match record {
            AliasRecord::Alias {
                name,
                command,
                quote,
                ..
            } => Self::format_alias(name, command, *quote),
            AliasRecord::Heading { text, .. } | AliasRecord::Line { text, .. } => text.clone(),
        }
    }
}
