//! `devsync daemon` — lsyncd process lifecycle.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use devsync_daemon::process;

#[derive(Subcommand, Debug)]
pub enum DaemonCommand {
    /// List running lsyncd processes.
    List(FilterArgs),
    /// Stop lsyncd processes.
    Stop(FilterArgs),
    /// Stop matching lsyncd processes and start a fresh one.
    Restart(FilterArgs),
}

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Config file path (or any command-line substring) to match.
    pub filter: Option<String>,
}

pub fn run(command: DaemonCommand) -> Result<()> {
    match command {
        DaemonCommand::List(args) => {
            let procs = process::list_processes(args.filter.as_deref());
            if procs.is_empty() {
                println!("No lsyncd processes found.");
                return Ok(());
            }
            for proc in procs {
                println!("{:>8}  {}", proc.pid, proc.cmdline);
            }
        }
        DaemonCommand::Stop(args) => {
            let stopped = process::stop(args.filter.as_deref());
            println!("Stopped {stopped} lsyncd process(es)");
        }
        DaemonCommand::Restart(args) => {
            let config = args.filter.as_deref();
            let stopped = process::restart(config).context("failed to restart lsyncd")?;
            println!("Stopped {stopped} lsyncd process(es)");
            match config {
                Some(cfg) => println!("lsyncd restarted with config: {cfg}"),
                None => println!("lsyncd restarted (all)"),
            }
        }
    }
    Ok(())
}
