//! hulk - Bash alias and environment file manager

use anyhow::Result;
use clap::Parser;

use hulk::cli::{commands, Cli, Context};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let ctx = Context::from_cli(&cli)?;
    hulk::logging::init(&ctx.api.config().log.level);
    tracing::debug!(home = %ctx.api.get_home_dir().display(), "resolved home directory");

    commands::run(&ctx, &cli.command)
}
