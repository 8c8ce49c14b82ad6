//! Entry mutation operations.
//!
//! Thin, pure logic over the ordered entry sequence: every operation takes
//! a slice and produces a fresh `Vec`, never mutating in place. The caller
//! passes the result to [`crate::conf::save`]. The working directory used
//! for source resolution is an explicit parameter so the core stays free of
//! process-wide state.

use std::path::{Path, PathBuf};

use crate::types::SyncEntry;

/// Caller-supplied fields for a new sync entry. `source` must already be
/// absolute (see [`resolve_source`]); presence of source/target is the
/// CLI's usage check, not enforced here.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub alias: Option<String>,
    pub source: String,
    pub target: String,
    pub port: u16,
    pub binary: Option<String>,
}

/// Resolve a user-supplied source path against an explicit working
/// directory: `"."` becomes `cwd` itself, a relative path is joined onto
/// `cwd`, an absolute path passes through unchanged.
pub fn resolve_source(raw: &str, cwd: &Path) -> PathBuf {
    if raw == "." {
        return cwd.to_path_buf();
    }
    let path = Path::new(raw);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Append one new entry to the end of the sequence.
pub fn add(entries: &[SyncEntry], new: NewEntry) -> Vec<SyncEntry> {
    let mut result = entries.to_vec();
    result.push(SyncEntry {
        alias: new.alias,
        source: new.source,
        target: new.target,
        port: new.port,
        binary: new.binary,
        on_event: vec![],
    });
    result
}

/// Remove every entry whose trimmed alias exactly equals `alias`.
///
/// Returns the survivors and the number removed. Zero matches is a normal
/// outcome, not an error; duplicate aliases all go at once.
pub fn delete_by_alias(entries: &[SyncEntry], alias: &str) -> (Vec<SyncEntry>, usize) {
    let survivors: Vec<SyncEntry> = entries
        .iter()
        .filter(|e| e.alias_str() != alias)
        .cloned()
        .collect();
    let removed = entries.len() - survivors.len();
    (survivors, removed)
}

/// Remove every entry whose `source` and `target` both exactly equal the
/// supplied, already-resolved values.
pub fn delete_by_pair(
    entries: &[SyncEntry],
    source: &str,
    target: &str,
) -> (Vec<SyncEntry>, usize) {
    let survivors: Vec<SyncEntry> = entries
        .iter()
        .filter(|e| !(e.source == source && e.target == target))
        .cloned()
        .collect();
    let removed = entries.len() - survivors.len();
    (survivors, removed)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
