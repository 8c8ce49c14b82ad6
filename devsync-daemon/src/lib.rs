//! Lsyncd process management and handler scaffolding.

mod error;
pub mod handler;
pub mod paths;
pub mod process;

pub use error::DaemonError;
pub use handler::{scaffold, scaffold_at};
pub use process::{list_processes, restart, stop, LsyncdProcess};
