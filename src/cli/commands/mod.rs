//! CLI command implementations

pub mod add;
pub mod aliases;
pub mod backup;
pub mod bashrc;
pub mod check;
pub mod env;
pub mod info;
pub mod init;
pub mod remove;
pub mod serve;

use anyhow::Result;

use crate::cli::args::Commands;
use crate::cli::Context;

/// Dispatch a parsed subcommand
pub fn run(ctx: &Context, command: &Commands) -> Result<()> {
    match command {
        Commands::Aliases { group } => aliases::execute(ctx, group.as_deref()),
        Commands::Env { group } => env::execute(ctx, group.as_deref()),
        Commands::Bashrc => bashrc::execute(ctx),
        Commands::Add { definition, group } => add::execute(ctx, definition, group),
        Commands::Remove { name } => remove::execute(ctx, name),
        Commands::Check => check::execute(ctx),
        Commands::Backup { backup_command } => backup::execute(ctx, backup_command),
        Commands::Info => info::execute(ctx),
        Commands::Init => init::execute(ctx),
        Commands::Serve => serve::execute(ctx),
    }
}

/// Get terminal width, defaulting to 80 if unable to detect
pub(crate) fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Split the width left after the name column between name and value
pub(crate) fn column_widths(term_width: usize) -> (usize, usize) {
    // "  " indent + space between columns
    let available = term_width.saturating_sub(3);
    let name_width = (available * 30 / 100).clamp(8, 24);
    let value_width = available.saturating_sub(name_width + 1).max(10);
    (name_width, value_width)
}

/// Truncate a string to fit within max_width, adding "..." if truncated
pub(crate) fn truncate_value(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        format!("{}...", s.chars().take(max_width - 3).collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_value() {
        assert_eq!(truncate_value("git status", 20), "git status");
        assert_eq!(truncate_value("git status --short", 10), "git sta...");
        assert_eq!(truncate_value("abcdef", 2), "ab");
    }

    #[test]
    fn test_column_widths() {
        let (name, value) = column_widths(80);
        assert_eq!(name, 23);
        assert_eq!(value, 53);

        let (name, value) = column_widths(10);
        assert_eq!(name, 8);
        assert_eq!(value, 10);
    }
}
