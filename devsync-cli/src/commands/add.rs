//! `devsync add` — append one sync entry and rewrite the conf file.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use devsync_core::{
    conf,
    entries::{self, NewEntry},
    DEFAULT_PORT,
};

/// Arguments for `devsync add`.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Absolute path or '.' for the source directory.
    #[arg(long, short = 's')]
    pub source: Option<String>,

    /// Target directory path (host:path or a local path).
    #[arg(long, short = 't')]
    pub target: Option<String>,

    /// SSH port.
    #[arg(long, short = 'p', default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Sync identifier label.
    #[arg(long, short = 'a')]
    pub alias: Option<String>,

    /// Path to a binary handler script. When omitted, no binary directive
    /// is written.
    #[arg(long, short = 'b')]
    pub binary: Option<String>,
}

impl AddArgs {
    pub fn run(self, conf: &Path) -> Result<()> {
        // Presence is not enough: an empty string is a missing field.
        let source = self.source.filter(|s| !s.trim().is_empty());
        let target = self.target.filter(|t| !t.trim().is_empty());
        let (Some(source), Some(target)) = (source, target) else {
            anyhow::bail!("to add a sync you must specify --source and --target");
        };

        let cwd = std::env::current_dir().context("cannot determine working directory")?;
        let resolved = entries::resolve_source(&source, &cwd);

        let existing = conf::load(conf)
            .with_context(|| format!("failed to read conf file '{}'", conf.display()))?;
        let updated = entries::add(
            &existing,
            NewEntry {
                alias: self.alias,
                source: resolved.to_string_lossy().into_owned(),
                target,
                port: self.port,
                binary: self.binary,
            },
        );

        super::ensure_conf_dir(conf)?;
        conf::save(conf, &updated)
            .with_context(|| format!("failed to write conf file '{}'", conf.display()))?;

        println!("Sync added successfully!");
        Ok(())
    }
}
