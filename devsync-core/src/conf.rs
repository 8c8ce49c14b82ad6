//! Lsyncd configuration reader/writer.
//!
//! # Document shape
//!
//! ```text
//! settings { ... }            (fixed preamble, identical on every write)
//!
//! -- alias: <alias>           (optional, one line per entry)
//! sync {
//!     default.rsync,
//!     source = "<path>",
//!     target = "<host:path>",
//!     rsync  = { rsh = "ssh -p <port>", ..., binary = "<path>", }
//! }
//! ```
//!
//! Parsing is text-region scanning, not a Lua grammar. A line-oriented
//! scanner locates each `sync {` opener and collects the block body until
//! the first line that begins with `}` in column 0 (or, for a single-line
//! block, the first `}` on the opening line). Fields are then extracted
//! independently inside the collected body; malformed or missing fields
//! degrade to defaults and never fail parsing. A block whose body itself
//! contains a column-0 `}` before its real closer is out of contract.
//!
//! A missing file reads as an empty configuration; only real I/O failures
//! are errors.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{io_err, ConfError};
use crate::types::{SyncEntry, DEFAULT_PORT};

// ---------------------------------------------------------------------------
// 1. Extraction patterns
// ---------------------------------------------------------------------------

/// The single-line alias marker. Binds to a sync block only when nothing
/// but whitespace separates it from the block's opening line.
static ALIAS_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*--\s*alias:\s*(?P<alias>.*)$").expect("invalid alias marker regex")
});

/// A sync block opener; everything after `{` on the same line belongs to
/// the block body.
static SYNC_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*sync\s*\{(?P<rest>.*)$").expect("invalid sync opener regex")
});

static SOURCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"source\s*=\s*"([^"]+)""#).expect("invalid source regex")
});

static TARGET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"target\s*=\s*"([^"]+)""#).expect("invalid target regex")
});

/// Only the exact `ssh -p <digits>` shape carries a port; any other rsh
/// formatting silently falls back to [`DEFAULT_PORT`].
static RSH_PORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"rsh\s*=\s*"ssh\s+-p\s+(\d+)""#).expect("invalid rsh regex")
});

static BINARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"binary\s*=\s*"([^"]+)""#).expect("invalid binary regex")
});

// ---------------------------------------------------------------------------
// 2. Load
// ---------------------------------------------------------------------------

/// Load all sync entries from the conf file at `path`.
///
/// A missing file is not an error; it reads as an empty configuration so
/// that first-ever add and list-on-fresh-install need no special-casing.
pub fn load(path: &Path) -> Result<Vec<SyncEntry>, ConfError> {
    if !path.exists() {
        tracing::debug!("conf file {} absent, treating as empty", path.display());
        return Ok(vec![]);
    }

    let content = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let entries = parse(&content);
    tracing::debug!("loaded {} sync entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Parse a conf document into sync entries, in document order.
///
/// Every completed block yields exactly one entry; unmatched fields resolve
/// to their defaults. An unterminated trailing block is dropped. Never fails.
pub fn parse(content: &str) -> Vec<SyncEntry> {
    let mut entries = Vec::new();
    let mut pending_alias: Option<String> = None;
    // An open sync block: the alias captured at its opener, plus the body
    // collected so far.
    let mut open: Option<(Option<String>, String)> = None;

    for line in content.lines() {
        if let Some((alias, mut body)) = open.take() {
            if line.starts_with('}') {
                entries.push(entry_from_block(alias, &body));
            } else {
                body.push_str(line);
                body.push('\n');
                open = Some((alias, body));
            }
            continue;
        }

        if let Some(caps) = ALIAS_LINE_RE.captures(line) {
            pending_alias =
                Some(caps["alias"].trim().to_string()).filter(|a| !a.is_empty());
            continue;
        }

        if let Some(caps) = SYNC_OPEN_RE.captures(line) {
            let rest = &caps["rest"];
            let alias = pending_alias.take();
            match rest.find('}') {
                // Single-line block: body is whatever sits between the braces.
                Some(close) => entries.push(entry_from_block(alias, &rest[..close])),
                None => {
                    let mut body = String::from(rest);
                    body.push('\n');
                    open = Some((alias, body));
                }
            }
            continue;
        }

        // Any other content line breaks the alias-to-block adjacency;
        // blank lines do not.
        if !line.trim().is_empty() {
            pending_alias = None;
        }
    }

    entries
}

/// Best-effort field extraction over one block body. Missing fields take
/// their documented defaults; this never fails.
fn entry_from_block(alias: Option<String>, block: &str) -> SyncEntry {
    let source = SOURCE_RE
        .captures(block)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default();

    let target = TARGET_RE
        .captures(block)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default();

    // An rsh port too large for u16 is just another malformed directive
    // and takes the default.
    let port = RSH_PORT_RE
        .captures(block)
        .and_then(|c| c[1].parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);

    let binary = BINARY_RE
        .captures(block)
        .map(|c| c[1].trim().to_string())
        .filter(|b| !b.is_empty());

    SyncEntry {
        alias,
        source,
        target,
        port,
        binary,
        on_event: vec![],
    }
}

// ---------------------------------------------------------------------------
// 3. Save
// ---------------------------------------------------------------------------

/// Overwrite the conf file at `path` with the full entry sequence.
///
/// Total overwrite, not an in-place patch: entries omitted from the input
/// are gone from the file. Output bytes are deterministic for equal input.
pub fn save(path: &Path, entries: &[SyncEntry]) -> Result<(), ConfError> {
    let doc = render(entries);
    std::fs::write(path, doc).map_err(|e| io_err(path, e))?;
    tracing::info!("wrote {} sync entries to {}", entries.len(), path.display());
    Ok(())
}

/// Render the full conf document: the fixed settings block, then one sync
/// block per entry in sequence order, each followed by a blank line.
pub fn render(entries: &[SyncEntry]) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("settings {".to_string());
    lines.push(r#"    logfile    = "/tmp/lsyncd.log",         -- Log file path"#.to_string());
    lines.push(r#"    statusFile = "/tmp/lsyncd-status.log",  -- Status file path"#.to_string());
    lines.push(
        "    nodaemon   = false,                     -- Run in background or foreground"
            .to_string(),
    );
    lines.push("}\n".to_string());

    for entry in entries {
        let alias = entry.alias_str();
        if !alias.is_empty() {
            lines.push(format!("-- alias: {alias}"));
        }
        lines.push("sync {".to_string());
        lines.push("    default.rsync,".to_string());
        lines.push(format!(r#"    source = "{}","#, entry.source));
        lines.push(format!(r#"    target = "{}","#, entry.target));
        lines.push("    rsync  = {".to_string());
        lines.push(format!(r#"        rsh      = "ssh -p {}","#, entry.port));
        lines.push("        archive  = true,".to_string());
        lines.push("        compress = true,".to_string());
        lines.push("        verbose  = true,".to_string());
        lines.push(r#"        _extra   = {"--delete"},"#.to_string());
        let binary = entry.binary_str();
        if !binary.is_empty() {
            lines.push(format!(r#"        binary   = "{binary}","#));
        }
        lines.push("    }".to_string());
        lines.push("}\n".to_string());
    }

    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
