//! Conf-document roundtrip tests for `devsync-core`.
//!
//! Each `#[case]` is isolated — no shared state. A sequence written with
//! `conf::save` must read back field-for-field with `conf::load` (alias
//! already trimmed, port already materialized in the input fixtures).

use devsync_core::conf;
use devsync_core::types::{SyncEntry, DEFAULT_PORT};
use rstest::rstest;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn entry(
    alias: Option<&str>,
    source: &str,
    target: &str,
    port: u16,
    binary: Option<&str>,
) -> SyncEntry {
    SyncEntry {
        alias: alias.map(str::to_owned),
        source: source.to_string(),
        target: target.to_string(),
        port,
        binary: binary.map(str::to_owned),
        on_event: vec![],
    }
}

fn empty_sequence() -> Vec<SyncEntry> {
    vec![]
}

fn single_full() -> Vec<SyncEntry> {
    vec![entry(
        Some("api"),
        "/code/api",
        "dev:/srv/api",
        2222,
        Some("/opt/devsync/handler.sh"),
    )]
}

fn no_alias_no_binary() -> Vec<SyncEntry> {
    vec![entry(None, "/code/web", "dev:/srv/web", DEFAULT_PORT, None)]
}

fn empty_paths() -> Vec<SyncEntry> {
    // Documents can legitimately omit source/target; they round-trip as "".
    vec![entry(Some("bare"), "", "", DEFAULT_PORT, None)]
}

fn mixed_sequence() -> Vec<SyncEntry> {
    vec![
        entry(Some("a"), "/1", "h:/1", DEFAULT_PORT, None),
        entry(None, "/2", "h:/2", 1022, Some("/opt/h.sh")),
        entry(Some("a"), "/3", "h:/3", 65535, None),
        entry(Some("c"), "/4", "box:/srv/4", 22, None),
    ]
}

// ---------------------------------------------------------------------------
// Parameterised write-then-read roundtrip
// ---------------------------------------------------------------------------

#[rstest]
#[case("empty", empty_sequence())]
#[case("single_full", single_full())]
#[case("no_alias_no_binary", no_alias_no_binary())]
#[case("empty_paths", empty_paths())]
#[case("mixed", mixed_sequence())]
fn conf_roundtrip(#[case] label: &str, #[case] entries: Vec<SyncEntry>) {
    let tmp = TempDir::new().expect("tempdir");
    let path = tmp.path().join("lsyncd.conf.lua");

    conf::save(&path, &entries).unwrap_or_else(|e| panic!("[{label}] save failed: {e}"));
    let back = conf::load(&path).unwrap_or_else(|e| panic!("[{label}] load failed: {e}"));

    assert_eq!(entries, back, "[{label}] entries changed across roundtrip");
}

// ---------------------------------------------------------------------------
// Read-mutate-write cycle preserves untouched entries
// ---------------------------------------------------------------------------

#[test]
fn untouched_entries_survive_rewrite_byte_for_byte() {
    let tmp = TempDir::new().expect("tempdir");
    let path = tmp.path().join("lsyncd.conf.lua");

    conf::save(&path, &mixed_sequence()).expect("save");
    let first = std::fs::read_to_string(&path).expect("read");

    let loaded = conf::load(&path).expect("load");
    conf::save(&path, &loaded).expect("resave");
    let second = std::fs::read_to_string(&path).expect("read");

    assert_eq!(first, second, "load-then-save must be byte-identical");
}
