use hulk::model::AliasRecord;
use hulk::parser::{AliasParser, EnvParser, Parser};
use hulk::{AliasFormatter, EnvRecord, Formatter};

const CORPUS: &[&str] = &[
    "# Git\nalias gs=\"git status\"\n\n# System\nalias ll=\"ls -la\"",
    "alias ll='ls -la'\nalias la=ls\n",
    "#!/bin/bash\n# Navigation\nalias ..='cd ..'\nalias ...='cd ../..'\n\n# Docker\nalias dc='docker compose'\nalias dps=\"docker ps\"\n",
    "\n\n# Empty group\n\n# Tools\nalias k=kubectl\n# alias old='disabled'\necho not-an-alias\n",
    "  alias spaced='indented definition'\r\n#   Windows  \r\nalias w=\"dir\"\r\n",
    "# Mixed\nalias both='a' && \"b\"\nalias esc=\"echo \\\"hi\\\"\"\n",
    "",
];

/// (name, command, group) of every alias, in order
fn triples(records: &[AliasRecord]) -> Vec<(String, String, String)> {
    records
        .iter()
        .filter_map(|r| match r {
            AliasRecord::Alias {
                name,
                command,
                group,
                ..
            } => Some((name.clone(), command.clone(), group.clone())),
            _ => None,
        })
        .collect()
}

fn roundtrip(content: &str) -> String {
    AliasFormatter::new().format(&AliasParser::new().parse(content))
}

#[test]
fn test_roundtrip_preserves_aliases_and_groups() {
    let parser = AliasParser::new();
    for content in CORPUS {
        let original = parser.parse(content);
        let reparsed = parser.parse(&roundtrip(content));
        assert_eq!(triples(&original), triples(&reparsed), "content: {:?}", content);
    }
}

#[test]
fn test_roundtrip_is_idempotent() {
    for content in CORPUS {
        let once = roundtrip(content);
        let twice = roundtrip(&once);
        assert_eq!(once, twice, "content: {:?}", content);
    }
}

#[test]
fn test_roundtrip_keeps_non_alias_lines() {
    let content = CORPUS[3];
    let out = roundtrip(content);
    assert!(out.contains("# alias old='disabled'"));
    assert!(out.contains("echo not-an-alias"));
    assert!(out.contains("# Empty group"));
}

#[test]
fn test_group_inheritance() {
    let records = AliasParser::new().parse(CORPUS[2]);
    let mut heading: Option<String> = None;
    for record in &records {
        match record {
            AliasRecord::Heading { title, .. } => heading = Some(title.clone()),
            AliasRecord::Alias { group, .. } => {
                assert_eq!(Some(group), heading.as_ref());
            }
            AliasRecord::Line { .. } => {}
        }
    }
    assert_eq!(
        triples(&records)
            .into_iter()
            .map(|(name, _, group)| (name, group))
            .collect::<Vec<_>>(),
        vec![
            ("..".to_string(), "Navigation".to_string()),
            ("...".to_string(), "Navigation".to_string()),
            ("dc".to_string(), "Docker".to_string()),
            ("dps".to_string(), "Docker".to_string()),
        ]
    );
}

#[test]
fn test_line_indices_match_source() {
    let content = CORPUS[3];
    let records = AliasParser::new().parse(content);
    assert_eq!(records.len(), content.split('\n').count());
    for (index, record) in records.iter().enumerate() {
        assert_eq!(record.line_number(), index);
    }
}

#[test]
fn test_crlf_and_indentation() {
    let records = AliasParser::new().parse(CORPUS[4]);
    let triples = triples(&records);
    assert_eq!(
        triples[0],
        (
            "spaced".to_string(),
            "indented definition".to_string(),
            "General".to_string()
        )
    );
    assert_eq!(triples[1].2, "Windows");
}

#[test]
fn test_env_example() {
    let records = EnvParser::new().parse("export FOO=\"bar\"\nexport FOO2=bar\n# Group\nexport X='y'");
    let values: Vec<_> = records
        .iter()
        .filter_map(|r| match r {
            EnvRecord::Var {
                name, value, group, ..
            } => Some((name.as_str(), value.as_str(), group.as_str())),
            _ => None,
        })
        .collect();
    assert_eq!(
        values,
        vec![
            ("FOO", "bar", "General"),
            ("FOO2", "bar", "General"),
            ("X", "'y'", "Group")
        ]
    );
}
