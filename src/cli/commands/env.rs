//! Env command: grouped variable listing

use anyhow::Result;
use colored::Colorize;

use super::{column_widths, terminal_width, truncate_value};
use crate::cli::Context;
use crate::model::{EnvRecord, FileKind};

/// Execute the env command
pub fn execute(ctx: &Context, group: Option<&str>) -> Result<()> {
    let records = ctx.load_or_create(FileKind::Env, |api| api.get_env())?;
    let (name_w, value_w) = column_widths(terminal_width());

    let mut current: Option<&str> = None;
    let mut shown = 0;

    for record in &records {
        let EnvRecord::Var {
            name,
            value,
            group: var_group,
            ..
        } = record
        else {
            continue;
        };
        if group.is_some_and(|g| g != var_group.as_str()) {
            continue;
        }

        if current != Some(var_group.as_str()) {
            if current.is_some() {
                println!();
            }
            println!("{}", var_group.bold().blue());
            current = Some(var_group.as_str());
        }

        println!(
            "  {:<name_w$} {}",
            truncate_value(name, name_w).yellow(),
            truncate_value(value, value_w).dimmed(),
            name_w = name_w
        );
        shown += 1;
    }

    if shown == 0 {
        println!("{}", "No variables found.".dimmed());
    } else {
        println!();
        println!("{}", format!("Total: {} variable(s)", shown).dimmed());
    }

    Ok(())
}
