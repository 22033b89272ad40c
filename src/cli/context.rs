//! Command execution context

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;
use std::io::IsTerminal;

use crate::api::HulkApi;
use crate::cli::args::{Cli, ConflictStrategy};
use crate::error::HulkError;
use crate::model::{FileKind, HulkPaths};
use crate::utils::path::expand_tilde;

/// Common context for command execution
pub struct Context {
    pub api: HulkApi,
    pub yes: bool,
    pub on_conflict: ConflictStrategy,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let paths = match &cli.home {
            Some(home) => HulkPaths::new(expand_tilde(home)),
            None => HulkPaths::from_env()?,
        };
        let api = HulkApi::for_home(paths.home())?;

        Ok(Self {
            api,
            yes: cli.yes,
            on_conflict: cli.on_conflict,
        })
    }

    /// Ask a yes/no question; `--yes` answers it without prompting.
    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.yes {
            return Ok(true);
        }
        if !std::io::stdin().is_terminal() {
            anyhow::bail!("{} (not a terminal; pass --yes to confirm)", prompt);
        }
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    /// Run `load`, offering to create the file when it does not exist.
    pub fn load_or_create<T>(
        &self,
        kind: FileKind,
        mut load: impl FnMut(&HulkApi) -> crate::Result<T>,
    ) -> Result<T> {
        match load(&self.api) {
            Err(err @ HulkError::FileNotFound(_)) => {
                let path = self.api.paths().file(kind);
                if !self.confirm(&format!("'{}' not found. Create it?", path.display()), true)? {
                    return Err(err.into());
                }
                self.api.create_file(kind)?;
                self.print_success(&format!("Created: {}", path.display()));
                Ok(load(&self.api)?)
            }
            other => Ok(other?),
        }
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print reload hint after modifying the aliases file
    pub fn print_reload_hint(&self) {
        let reload_cmd = format!("source {}", self.api.paths().aliases().display());
        println!(
            "{} {}",
            "→".cyan(),
            format!("Run '{}' to apply changes", reload_cmd).dimmed()
        );
    }
}
