//! Init command: create the config file

use anyhow::Result;

use crate::cli::Context;

/// Execute the init command
pub fn execute(ctx: &Context) -> Result<()> {
    let path = ctx.api.paths().config_file();
    if ctx.api.init_config()? {
        ctx.print_success(&format!("Created: {}", path.display()));
    } else {
        ctx.print_warning(&format!("Already exists: {}", path.display()));
    }
    Ok(())
}
