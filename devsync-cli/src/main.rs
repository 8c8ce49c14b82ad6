//! devsync — lsyncd configuration management CLI.
//!
//! # Usage
//!
//! ```text
//! devsync add --source <path|.> --target <host:path> [--port N] [--alias A] [--binary B]
//! devsync list [--json]
//! devsync delete [--alias A | --source <path> --target <host:path>]
//! devsync daemon list|stop|restart [FILTER]
//! devsync handler <name>
//! ```
//!
//! All entry commands operate on one conf file per invocation: `--conf`,
//! or `~/devsync/conf/lsyncd.conf.lua` when omitted.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    add::AddArgs, daemon::DaemonCommand, delete::DeleteArgs, handler::HandlerArgs, list::ListArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "devsync",
    version,
    about = "Manage and synchronize lsyncd configuration files",
    long_about = None,
)]
struct Cli {
    /// Lua configuration file (.conf.lua). Defaults to
    /// ~/devsync/conf/lsyncd.conf.lua.
    #[arg(long, short = 'c', global = true, value_name = "FILE")]
    conf: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a sync entry to the configuration.
    Add(AddArgs),

    /// List configured sync entries.
    List(ListArgs),

    /// Remove sync entries by alias, or by source and target.
    Delete(DeleteArgs),

    /// Manage running lsyncd processes.
    Daemon {
        #[command(subcommand)]
        command: DaemonCommand,
    },

    /// Scaffold a shell-based event handler.
    Handler(HandlerArgs),
}

/// Explicit `--conf` wins; otherwise the conventional location under home.
fn conf_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok(devsync_daemon::paths::default_conf_path(&home))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Add(args) => args.run(&conf_path(cli.conf)?),
        Commands::List(args) => args.run(&conf_path(cli.conf)?),
        Commands::Delete(args) => args.run(&conf_path(cli.conf)?),
        Commands::Daemon { command } => commands::daemon::run(command),
        Commands::Handler(args) => args.run(),
    }
}
