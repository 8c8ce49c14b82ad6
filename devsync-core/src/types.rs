//! Domain types for devsync.
//!
//! A configuration document is an ordered list of [`SyncEntry`] records;
//! document order and vec order are the same thing, and both survive a
//! read-mutate-write cycle for untouched entries.

use serde::{Deserialize, Serialize};

/// SSH port used when a sync block carries no parseable `rsh` directive.
pub const DEFAULT_PORT: u16 = 22;

// ---------------------------------------------------------------------------
// EventHook
// ---------------------------------------------------------------------------

/// A file-event hook attached to a sync entry.
///
/// Reserved for a future version of the conf format; `SyncEntry::on_event`
/// is always empty today and the writer never emits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventHook {
    /// File name the hook reacts to.
    pub file: String,
    /// Shell command to run when the file changes.
    pub cmd: String,
}

// ---------------------------------------------------------------------------
// SyncEntry
// ---------------------------------------------------------------------------

/// One configured directory-to-directory synchronization rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncEntry {
    /// User-chosen label for lookup and deletion. `None` and an
    /// empty-after-trim string are the same observable state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Absolute source path text. May be empty if the document omitted it.
    pub source: String,

    /// Destination, typically `host:path` or a local path. May be empty.
    pub target: String,

    /// SSH port carried by the `rsh` directive; defaulted, never absent.
    pub port: u16,

    /// Optional handler script wrapping the rsync invocation. Emitted into
    /// the conf document only when non-empty after trimming.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary: Option<String>,

    /// Reserved; always empty in this version.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub on_event: Vec<EventHook>,
}

impl SyncEntry {
    /// The trimmed alias, or `""` when no alias is set.
    pub fn alias_str(&self) -> &str {
        self.alias.as_deref().map(str::trim).unwrap_or("")
    }

    /// The trimmed binary path, or `""` when no binary handler is set.
    pub fn binary_str(&self) -> &str {
        self.binary.as_deref().map(str::trim).unwrap_or("")
    }

    /// Whether this entry carries an identifying alias.
    pub fn has_alias(&self) -> bool {
        !self.alias_str().is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
