//! Check command implementation

use anyhow::Result;
use colored::Colorize;

use crate::checker::{check_all, CheckInput};
use crate::cli::Context;
use crate::error::HulkError;

/// Execute the check command
pub fn execute(ctx: &Context) -> Result<()> {
    let aliases = or_empty(ctx, ctx.api.get_aliases())?;
    let env = or_empty(ctx, ctx.api.get_env())?;

    let result = check_all(&CheckInput {
        aliases: &aliases,
        env: &env,
    });

    if result.is_ok() {
        ctx.print_success("No issues found");
        let definitions = aliases.iter().filter(|r| r.name().is_some()).count()
            + env.iter().filter(|r| r.var_name().is_some()).count();
        println!(
            "{}",
            format!("Checked {} definition(s)", definitions).dimmed()
        );
        return Ok(());
    }

    println!("{}", "Issues found:".red().bold());
    for issue in &result.issues {
        print!("  {}", "⚠".yellow());
        if let Some(line) = issue.line_number {
            print!(" Line {}", line);
        }
        if let Some(ref name) = issue.entry_name {
            print!(" ({})", name.cyan());
        }
        println!(": {}", issue.message);
    }

    Ok(())
}

/// A missing file has nothing to check.
fn or_empty<T>(ctx: &Context, loaded: crate::Result<Vec<T>>) -> Result<Vec<T>> {
    match loaded {
        Err(HulkError::FileNotFound(path)) => {
            ctx.print_warning(&format!("Skipping missing {}", path.display()));
            Ok(Vec::new())
        }
        other => Ok(other?),
    }
}
