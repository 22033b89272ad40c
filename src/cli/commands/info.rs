//! Info command: resolved paths

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::cli::Context;
use crate::model::FileKind;

/// Execute the info command
pub fn execute(ctx: &Context) -> Result<()> {
    let api = &ctx.api;
    let paths = api.paths();

    println!("{:<10} {}", "home".bold(), api.get_home_dir().display());
    for kind in [FileKind::Aliases, FileKind::Env, FileKind::BashRc] {
        print_path(kind.file_name(), &paths.file(kind));
    }
    print_path("config", &paths.config_file());
    println!(
        "{:<10} {}",
        "backups".bold(),
        api.backups().backup_dir().display()
    );

    if !api.has_hulk_config() {
        println!();
        println!("{}", "No hulk config yet. Run 'hulk init' to create one.".dimmed());
    }

    Ok(())
}

fn print_path(label: &str, path: &Path) {
    let marker = if path.exists() {
        "✓".green()
    } else {
        "✗".red()
    };
    println!("{:<10} {} {}", label.bold(), marker, path.display());
}
