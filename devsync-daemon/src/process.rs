//! Lsyncd process management: enumerate, stop, restart.
//!
//! Fire-and-forget by design: stop sends TERM once per match with no wait
//! or retry, restart spawns detached and never monitors the child. Matching
//! is substring matching on the full command line, which is how a config
//! file path selects "its" daemon instance.

use std::process::{Command, Stdio};

use sysinfo::{Pid, ProcessesToUpdate, Signal, System};

use crate::error::DaemonError;
use crate::paths::LSYNCD_BIN;

/// One running lsyncd process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LsyncdProcess {
    pub pid: u32,
    pub cmdline: String,
}

/// Whether a process with `cmdline` counts as a managed lsyncd instance.
///
/// The devsync process itself is excluded by pid, not by cmdline, so a
/// conf path mentioning "lsyncd" doesn't hide it from itself.
fn is_match(pid: u32, own_pid: u32, cmdline: &str, filter: Option<&str>) -> bool {
    if pid == own_pid || !cmdline.contains(LSYNCD_BIN) {
        return false;
    }
    match filter {
        Some(f) => cmdline.contains(f),
        None => true,
    }
}

fn cmdline_of(proc: &sysinfo::Process) -> String {
    proc.cmd()
        .iter()
        .map(|s| s.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Enumerate running lsyncd processes, optionally restricted to those whose
/// command line contains `filter` (typically a config file path).
pub fn list_processes(filter: Option<&str>) -> Vec<LsyncdProcess> {
    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::All, true);

    let own_pid = std::process::id();
    let mut found: Vec<LsyncdProcess> = system
        .processes()
        .iter()
        .filter_map(|(pid, proc)| {
            let cmdline = cmdline_of(proc);
            if is_match(pid.as_u32(), own_pid, &cmdline, filter) {
                Some(LsyncdProcess {
                    pid: pid.as_u32(),
                    cmdline,
                })
            } else {
                None
            }
        })
        .collect();
    found.sort_by_key(|p| p.pid);
    found
}

/// TERM every matching lsyncd process. Returns how many were signalled.
pub fn stop(filter: Option<&str>) -> usize {
    let targets = list_processes(filter);
    if targets.is_empty() {
        return 0;
    }

    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::All, true);
    for target in &targets {
        if let Some(proc) = system.process(Pid::from_u32(target.pid)) {
            tracing::info!("stopping lsyncd pid {}", target.pid);
            let _ = proc.kill_with(Signal::Term);
        }
    }
    targets.len()
}

/// Stop matching lsyncd processes, then spawn a fresh `lsyncd [config]`
/// detached from this process. Returns how many were stopped.
pub fn restart(config: Option<&str>) -> Result<usize, DaemonError> {
    let stopped = stop(config);

    let mut command = Command::new(LSYNCD_BIN);
    if let Some(cfg) = config {
        command.arg(cfg);
    }
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    command.spawn().map_err(|e| DaemonError::Spawn {
        program: LSYNCD_BIN.to_string(),
        source: e,
    })?;
    tracing::info!("spawned {} (config: {:?})", LSYNCD_BIN, config);
    Ok(stopped)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
