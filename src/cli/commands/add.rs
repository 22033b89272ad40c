//! Add command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::args::ConflictStrategy;
use crate::cli::Context;
use crate::model::{AliasRecord, FileKind, QuoteStyle, DEFAULT_GROUP};
use crate::parser::patterns::ALIAS_NAME_RE;
use crate::store::{Record, RecordStore, StoreKey};

/// Execute the add command
pub fn execute(ctx: &Context, definition: &str, group: &str) -> Result<()> {
    let (name, command) = parse_alias_definition(definition)?;

    let mut store = RecordStore::new(&ctx.api);
    ctx.load_or_create(FileKind::Aliases, |_| {
        store.fetch(StoreKey::Aliases).map(|records| records.len())
    })?;

    let existing: Vec<_> = store
        .get(StoreKey::Aliases)
        .unwrap_or_default()
        .iter()
        .filter_map(|stored| match &stored.record {
            Record::Alias(AliasRecord::Alias {
                name: existing_name,
                command,
                ..
            }) if *existing_name == name => Some((stored.id, command.clone())),
            _ => None,
        })
        .collect();

    if let Some((_, existing_command)) = existing.first() {
        let should_overwrite = match ctx.on_conflict {
            ConflictStrategy::Skip => {
                ctx.print_warning(&format!("alias '{}' already exists, skipping", name));
                return Ok(());
            }
            ConflictStrategy::Overwrite => true,
            ConflictStrategy::Ask => {
                println!(
                    "alias '{}' already exists with value: {}",
                    name.cyan(),
                    existing_command.dimmed()
                );
                ctx.confirm("Overwrite?", false)?
            }
        };

        if !should_overwrite {
            println!("Skipped.");
            return Ok(());
        }

        for (id, _) in &existing {
            store.delete(StoreKey::Aliases, *id);
        }
    }

    if group != DEFAULT_GROUP && !has_heading(&store, group) {
        let ends_blank = store
            .get(StoreKey::Aliases)
            .and_then(|records| records.last())
            .map_or(true, |last| {
                last.record.as_alias().is_some_and(AliasRecord::is_blank)
            });
        if !ends_blank {
            store.add(
                StoreKey::Aliases,
                AliasRecord::Line {
                    line: 0,
                    text: String::new(),
                },
            );
        }
        store.add(StoreKey::Aliases, AliasRecord::heading(group));
    }

    let (command, quote) = quote_for(&command);
    store.add(
        StoreKey::Aliases,
        AliasRecord::Alias {
            line: 0,
            name: name.clone(),
            command: command.clone(),
            group: group.to_string(),
            quote,
        },
    );
    store.save(StoreKey::Aliases)?;

    ctx.print_success(&format!(
        "Added alias '{}' = '{}' in {}",
        name.cyan(),
        command,
        group.bold()
    ));
    ctx.print_reload_hint();

    Ok(())
}

fn has_heading<B: crate::store::Backend>(store: &RecordStore<B>, group: &str) -> bool {
    store
        .get(StoreKey::Aliases)
        .unwrap_or_default()
        .iter()
        .any(|stored| {
            stored
                .record
                .as_alias()
                .and_then(AliasRecord::heading_title)
                == Some(group)
        })
}

/// Split `NAME=COMMAND`, stripping one pair of wrapping quotes from the command.
pub(crate) fn parse_alias_definition(definition: &str) -> Result<(String, String)> {
    let Some((name, command)) = definition.split_once('=') else {
        anyhow::bail!("Invalid alias format. Use: NAME=COMMAND");
    };

    let name = name.trim();
    if !ALIAS_NAME_RE.is_match(name) {
        anyhow::bail!(
            "Invalid alias name '{}'. Use letters, digits, '_', '-' or '.'",
            name
        );
    }

    let command = command.trim();
    let command = ['"', '\'']
        .into_iter()
        .find_map(|q| {
            command
                .strip_prefix(q)
                .and_then(|c| c.strip_suffix(q))
        })
        .unwrap_or(command);
    if command.is_empty() {
        anyhow::bail!("Alias '{}' needs a command", name);
    }

    Ok((name.to_string(), command.to_string()))
}

/// Pick the quoting for a new alias command so the shell sees it unchanged.
fn quote_for(command: &str) -> (String, QuoteStyle) {
    if !command.contains('"') {
        (command.to_string(), QuoteStyle::Double)
    } else if !command.contains('\'') {
        (command.to_string(), QuoteStyle::Single)
    } else {
        (command.replace('"', "\\\""), QuoteStyle::Double)
    }
}
