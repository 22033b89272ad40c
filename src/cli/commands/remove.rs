//! Remove command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;
use crate::model::AliasRecord;
use crate::store::{Record, RecordStore, StoreKey};

/// Execute the remove command
pub fn execute(ctx: &Context, name: &str) -> Result<()> {
    let mut store = RecordStore::new(&ctx.api);
    let records = store.fetch(StoreKey::Aliases)?;

    let matches: Vec<_> = records
        .iter()
        .filter_map(|stored| match &stored.record {
            Record::Alias(AliasRecord::Alias {
                name: alias_name,
                command,
                group,
                ..
            }) if alias_name == name => Some((stored.id, command.clone(), group.clone())),
            _ => None,
        })
        .collect();

    if matches.is_empty() {
        ctx.print_error(&format!("alias '{}' not found", name));
        return Ok(());
    }

    for (_, command, group) in &matches {
        println!(
            "Found alias '{}' = '{}' in {}",
            name.cyan(),
            command.dimmed(),
            group.bold()
        );
    }

    if !ctx.confirm("Remove this alias?", false)? {
        println!("Cancelled.");
        return Ok(());
    }

    for (id, _, _) in &matches {
        store.delete(StoreKey::Aliases, *id);
    }
    store.save(StoreKey::Aliases)?;

    ctx.print_success(&format!("Removed alias '{}'", name.cyan()));
    ctx.print_reload_hint();

    Ok(())
}
