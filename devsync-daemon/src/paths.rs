use std::path::{Path, PathBuf};

/// Binary name of the external synchronization daemon.
pub const LSYNCD_BIN: &str = "lsyncd";

pub const DEFAULT_CONF_FILE: &str = "lsyncd.conf.lua";

pub fn devsync_root(home: &Path) -> PathBuf {
    home.join("devsync")
}

pub fn scripts_dir(home: &Path) -> PathBuf {
    devsync_root(home).join("scripts")
}

pub fn handler_dir(home: &Path, name: &str) -> PathBuf {
    scripts_dir(home).join(format!("{name}_handler"))
}

pub fn conf_dir(home: &Path) -> PathBuf {
    devsync_root(home).join("conf")
}

pub fn default_conf_path(home: &Path) -> PathBuf {
    conf_dir(home).join(DEFAULT_CONF_FILE)
}
