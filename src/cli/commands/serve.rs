//! Serve command: JSON request loop on stdin/stdout

use anyhow::{Context as _, Result};

use crate::cli::Context;

/// Execute the serve command
pub fn execute(ctx: &Context) -> Result<()> {
    tracing::info!(home = %ctx.api.get_home_dir().display(), "serving requests on stdin");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    ctx.api
        .serve(stdin.lock(), stdout.lock())
        .context("Request loop failed")
}
