//! `devsync list` — show configured sync entries.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use devsync_core::{conf, SyncEntry};

/// Arguments for `devsync list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "alias")]
    alias: String,
    #[tabled(rename = "source")]
    source: String,
    #[tabled(rename = "target")]
    target: String,
    #[tabled(rename = "port")]
    port: u16,
    #[tabled(rename = "binary")]
    binary: String,
}

impl ListArgs {
    pub fn run(self, conf: &Path) -> Result<()> {
        let entries = conf::load(conf)
            .with_context(|| format!("failed to read conf file '{}'", conf.display()))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&entries).context("failed to serialize entries")?
            );
            return Ok(());
        }

        if entries.is_empty() {
            println!("No sync entries found.");
            return Ok(());
        }

        println!(
            "{} sync entr{} in {}",
            entries.len(),
            if entries.len() == 1 { "y" } else { "ies" },
            conf.display().to_string().bold(),
        );
        print_table(&entries);
        Ok(())
    }
}

fn print_table(entries: &[SyncEntry]) {
    let rows: Vec<EntryRow> = entries
        .iter()
        .map(|e| EntryRow {
            alias: if e.has_alias() {
                e.alias_str().to_string()
            } else {
                "(no alias)".bright_black().to_string()
            },
            source: e.source.clone(),
            target: e.target.clone(),
            port: e.port,
            binary: e.binary_str().to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}
