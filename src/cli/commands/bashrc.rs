//! Bashrc command: raw passthrough

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;

/// Execute the bashrc command
pub fn execute(ctx: &Context) -> Result<()> {
    let lines = ctx.api.get_bashrc()?;
    let width = lines.len().to_string().len();

    for (index, line) in lines.iter().enumerate() {
        println!(
            "{} {}",
            format!("{:>width$}", index + 1, width = width).dimmed(),
            line
        );
    }

    Ok(())
}
