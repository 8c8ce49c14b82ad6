//! `devsync handler <name>` — scaffold a shell-based event handler.

use anyhow::{Context, Result};
use clap::Args;

/// Arguments for `devsync handler`.
#[derive(Args, Debug)]
pub struct HandlerArgs {
    /// Handler name; creates ~/devsync/scripts/<name>_handler/.
    pub name: String,
}

impl HandlerArgs {
    pub fn run(self) -> Result<()> {
        let dir = devsync_daemon::scaffold(&self.name)
            .with_context(|| format!("failed to scaffold handler '{}'", self.name))?;

        println!("✓ Created handler scaffold: {}", dir.display());
        println!(
            "  Point a sync entry at it with: devsync add ... --binary {}",
            dir.join("handler.sh").display()
        );
        Ok(())
    }
}
