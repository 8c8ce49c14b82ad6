//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result};

pub mod add;
pub mod daemon;
pub mod delete;
pub mod handler;
pub mod list;

/// Create the conf file's parent directory if missing, so a first write to
/// the default `~/devsync/conf/` location succeeds on a fresh install.
pub(crate) fn ensure_conf_dir(conf: &Path) -> Result<()> {
    if let Some(parent) = conf.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create '{}'", parent.display()))?;
        }
    }
    Ok(())
}
