//! Records parsed from an `.aliases` file

use serde::{Deserialize, Serialize};

/// Group assigned to definitions that appear before any heading.
pub const DEFAULT_GROUP: &str = "General";

/// Quoting used when an alias command is written back to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuoteStyle {
    /// `alias name="command"` (also used for unquoted originals)
    #[default]
    Double,
    /// `alias name='command'`
    Single,
    /// Written back exactly as read; used when the original value mixes
    /// quoted and unquoted parts and re-wrapping would change its meaning
    Raw,
}

/// A single line of an `.aliases` file.
///
/// # Variants
/// - `Alias`: `alias name=command`, with the command stored unquoted and the
///   title of the nearest preceding heading in `group`
/// - `Heading`: a `# Title` comment that opens a group
/// - `Line`: anything else, kept verbatim (blank lines, commented-out aliases)
///
/// `line` is the 0-based index in the file the record was parsed from. Records
/// created in memory carry the index they were inserted at, which is only
/// informational: the serializer writes records in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AliasRecord {
    Alias {
        line: usize,
        name: String,
        command: String,
        group: String,
        #[serde(default)]
        quote: QuoteStyle,
    },
    Heading {
        line: usize,
        text: String,
        title: String,
    },
    Line {
        line: usize,
        text: String,
    },
}

impl AliasRecord {
    /// Build a new alias for insertion, double-quoted on save.
    pub fn alias(
        name: impl Into<String>,
        command: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        AliasRecord::Alias {
            line: 0,
            name: name.into(),
            command: command.into(),
            group: group.into(),
            quote: QuoteStyle::Double,
        }
    }

    /// Build a new heading from its title (`# <title>`).
    pub fn heading(title: impl Into<String>) -> Self {
        let title = title.into();
        AliasRecord::Heading {
            line: 0,
            text: format!("# {}", title),
            title,
        }
    }

    pub fn line_number(&self) -> usize {
        match self {
            AliasRecord::Alias { line, .. }
            | AliasRecord::Heading { line, .. }
            | AliasRecord::Line { line, .. } => *line,
        }
    }

    /// Alias name, for `Alias` records only.
    pub fn name(&self) -> Option<&str> {
        match self {
            AliasRecord::Alias { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Group an alias belongs to, for `Alias` records only.
    pub fn group(&self) -> Option<&str> {
        match self {
            AliasRecord::Alias { group, .. } => Some(group),
            _ => None,
        }
    }

    /// Heading title, for `Heading` records only.
    pub fn heading_title(&self) -> Option<&str> {
        match self {
            AliasRecord::Heading { title, .. } => Some(title),
            _ => None,
        }
    }

    /// Blank passthrough line (empty or whitespace-only).
    pub fn is_blank(&self) -> bool {
        matches!(self, AliasRecord::Line { text, .. } if text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_constructor_defaults() {
        let record = AliasRecord::alias("gs", "git status", "Git");
        assert_eq!(record.name(), Some("gs"));
        assert_eq!(record.group(), Some("Git"));
        assert!(matches!(
            record,
            AliasRecord::Alias {
                quote: QuoteStyle::Double,
                ..
            }
        ));
    }

    #[test]
    fn test_heading_constructor() {
        let record = AliasRecord::heading("Docker");
        assert_eq!(record.heading_title(), Some("Docker"));
        assert!(matches!(record, AliasRecord::Heading { ref text, .. } if text == "# Docker"));
    }

    #[test]
    fn test_is_blank() {
        let blank = AliasRecord::Line {
            line: 3,
            text: "   ".into(),
        };
        assert!(blank.is_blank());
        assert_eq!(blank.line_number(), 3);

        let other = AliasRecord::Line {
            line: 4,
            text: "# alias old=thing".into(),
        };
        assert!(!other.is_blank());
        assert!(!AliasRecord::heading("Git").is_blank());
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_string(&AliasRecord::alias("ll", "ls -la", "General")).unwrap();
        assert!(json.contains(r#""type":"alias""#));
        let back: AliasRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name(), Some("ll"));
    }
}
