//! `devsync delete` — remove sync entries and rewrite the conf file.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use devsync_core::{conf, entries};

/// Arguments for `devsync delete`.
///
/// An alias deletes by exact alias match; without one, both `--source` and
/// `--target` are required and every exactly-matching pair is removed.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Sync identifier label to remove.
    #[arg(long, short = 'a')]
    pub alias: Option<String>,

    /// Absolute path or '.' for the source directory.
    #[arg(long, short = 's')]
    pub source: Option<String>,

    /// Target directory path.
    #[arg(long, short = 't')]
    pub target: Option<String>,
}

impl DeleteArgs {
    pub fn run(self, conf: &Path) -> Result<()> {
        let existing = conf::load(conf)
            .with_context(|| format!("failed to read conf file '{}'", conf.display()))?;

        // An empty-after-trim alias is the same as no alias at all; it
        // must not select alias mode (which would match every unaliased
        // entry).
        let alias = self.alias.as_deref().filter(|a| !a.trim().is_empty());
        let (survivors, removed) = match alias {
            Some(alias) => entries::delete_by_alias(&existing, alias),
            None => {
                let source = self.source.filter(|s| !s.trim().is_empty());
                let target = self.target.filter(|t| !t.trim().is_empty());
                let (Some(source), Some(target)) = (source, target) else {
                    anyhow::bail!(
                        "to remove a sync by source and target you must specify --source and --target"
                    );
                };
                let cwd =
                    std::env::current_dir().context("cannot determine working directory")?;
                let resolved = entries::resolve_source(&source, &cwd);
                entries::delete_by_pair(
                    &existing,
                    &resolved.to_string_lossy(),
                    &target,
                )
            }
        };

        // Zero matches still rewrites the file unchanged; deletion is
        // idempotent, not an error.
        super::ensure_conf_dir(conf)?;
        conf::save(conf, &survivors)
            .with_context(|| format!("failed to write conf file '{}'", conf.display()))?;

        if removed == 0 {
            println!("No matching entry found to remove.");
        } else {
            println!("{removed} entry(ies) removed.");
        }
        Ok(())
    }
}
