//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::model::DEFAULT_GROUP;

#[derive(Parser)]
#[command(name = "hulk")]
#[command(about = "Bash alias and environment file manager")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Home directory holding .aliases, .env and .bashrc
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<String>,

    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// What to do when an alias being added already exists
    #[arg(long, global = true, default_value = "ask")]
    pub on_conflict: ConflictStrategy,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List aliases by group
    #[command(visible_alias = "ls")]
    Aliases {
        /// Only show this group
        #[arg(short, long)]
        group: Option<String>,
    },

    /// List exported variables by group
    Env {
        /// Only show this group
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Print ~/.bashrc with line numbers
    Bashrc,

    /// Add an alias
    Add {
        /// NAME=COMMAND
        definition: String,
        /// Group (heading) to add the alias under
        #[arg(short, long, default_value = DEFAULT_GROUP)]
        group: String,
    },

    /// Remove an alias
    #[command(visible_alias = "rm")]
    Remove {
        /// Alias name
        name: String,
    },

    /// Check for duplicate definitions and unusual quoting
    Check,

    /// Backup management
    Backup {
        #[command(subcommand)]
        backup_command: BackupCommands,
    },

    /// Show resolved paths and whether they exist
    Info,

    /// Create ~/.config/hulk/config.json with default settings
    Init,

    /// Answer newline-delimited JSON requests on stdin
    Serve,
}

#[derive(Subcommand)]
pub enum BackupCommands {
    /// List backups
    List,
    /// Restore a backup over the file it was taken from
    Restore {
        /// Backup ID
        id: String,
    },
    /// Remove old backups
    Clean {
        /// Number to keep
        #[arg(long, default_value = "20")]
        keep: usize,
    },
}

#[derive(Clone, Copy, ValueEnum, Default, PartialEq, Eq, Debug)]
pub enum ConflictStrategy {
    #[default]
    Ask,
    Skip,
    Overwrite,
}
