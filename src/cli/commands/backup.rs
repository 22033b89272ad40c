//! Backup command implementation

use anyhow::Result;
use colored::Colorize;

use crate::backup::BackupManager;
use crate::cli::args::BackupCommands;
use crate::cli::Context;

/// Execute the backup command
pub fn execute(ctx: &Context, backup_cmd: &BackupCommands) -> Result<()> {
    let manager = ctx.api.backups();

    match backup_cmd {
        BackupCommands::List => list_backups(manager),
        BackupCommands::Restore { id } => restore_backup(ctx, manager, id),
        BackupCommands::Clean { keep } => clean_backups(manager, *keep),
    }
}

fn list_backups(manager: &BackupManager) -> Result<()> {
    let backups = manager.list_backups()?;

    if backups.is_empty() {
        println!("{}", "No backups found.".dimmed());
        return Ok(());
    }

    println!("{}", "Available backups:".bold());
    println!();

    println!(
        "{:<40} {:<12} {}",
        "ID".bold().cyan(),
        "FILE".bold().cyan(),
        "SIZE".bold().cyan()
    );
    println!("{}", "─".repeat(64).dimmed());

    for backup in &backups {
        println!(
            "{:<40} {:<12} {}",
            backup.id.white(),
            backup.source_name.dimmed(),
            format_size(backup.size).dimmed()
        );
    }

    println!();
    println!("{}", format!("Total: {} backup(s)", backups.len()).dimmed());

    Ok(())
}

fn restore_backup(ctx: &Context, manager: &BackupManager, id: &str) -> Result<()> {
    let Some(backup) = manager.get_backup(id)? else {
        anyhow::bail!("Backup not found: {}", id);
    };

    let target = ctx.api.get_home_dir().join(&backup.source_name);
    println!(
        "Restoring backup: {} ({}) to {}",
        backup.id.cyan(),
        backup.timestamp.dimmed(),
        target.display()
    );

    if !ctx.confirm("This will overwrite the current file. Continue?", false)? {
        println!("Cancelled.");
        return Ok(());
    }

    manager.restore_backup(&backup.id, &target)?;

    ctx.print_success(&format!(
        "Restored backup to {}",
        target.display().to_string().cyan()
    ));
    ctx.print_reload_hint();

    Ok(())
}

fn clean_backups(manager: &BackupManager, keep: usize) -> Result<()> {
    let removed = manager.cleanup_keep(keep)?;

    if removed == 0 {
        println!("{}", "No old backups to clean.".dimmed());
    } else {
        println!(
            "{} Removed {} old backup(s), keeping {}",
            "✓".green(),
            removed,
            keep
        );
    }

    Ok(())
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
