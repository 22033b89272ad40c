//! Aliases command: grouped alias listing

use anyhow::Result;
use colored::Colorize;

use super::{column_widths, terminal_width, truncate_value};
use crate::cli::Context;
use crate::model::{AliasRecord, FileKind};

/// Execute the aliases command
pub fn execute(ctx: &Context, group: Option<&str>) -> Result<()> {
    let records = ctx.load_or_create(FileKind::Aliases, |api| api.get_aliases())?;
    let (name_w, value_w) = column_widths(terminal_width());

    let mut current: Option<&str> = None;
    let mut shown = 0;

    for record in &records {
        let AliasRecord::Alias {
            name,
            command,
            group: alias_group,
            ..
        } = record
        else {
            continue;
        };
        if group.is_some_and(|g| g != alias_group.as_str()) {
            continue;
        }

        if current != Some(alias_group.as_str()) {
            if current.is_some() {
                println!();
            }
            println!("{}", alias_group.bold().blue());
            current = Some(alias_group.as_str());
        }

        println!(
            "  {:<name_w$} {}",
            truncate_value(name, name_w).green(),
            truncate_value(command, value_w).dimmed(),
            name_w = name_w
        );
        shown += 1;
    }

    if shown == 0 {
        println!("{}", "No aliases found.".dimmed());
    } else {
        println!();
        println!("{}", format!("Total: {} alias(es)", shown).dimmed());
    }

    Ok(())
}
