//! Formatter module: records back to file text

mod alias;

pub use alias::AliasFormatter;

/// Trait for configuration file formatters
pub trait Formatter {
    /// Record type consumed by this formatter
    type Record;

    /// Format the complete file content
    fn format(&self, records: &[Self::Record]) -> String;

    /// Format a single record as one line
    fn format_record(&self, record: &Self::Record) -> String;
}
