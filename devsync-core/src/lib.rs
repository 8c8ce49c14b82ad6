//! devsync core library — domain types, conf persistence, entry mutation.
//!
//! Public API surface:
//! - [`types`] — [`SyncEntry`] and friends
//! - [`error`] — [`ConfError`]
//! - [`conf`] — load / save / parse / render
//! - [`entries`] — add / delete / source resolution

pub mod conf;
pub mod entries;
pub mod error;
pub mod types;

pub use error::ConfError;
pub use types::{EventHook, SyncEntry, DEFAULT_PORT};
