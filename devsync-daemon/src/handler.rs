//! Handler scaffolding generator.
//!
//! `devsync handler <name>` creates `~/devsync/scripts/<name>_handler/` with
//! two shell scripts: `handler.sh`, an rsync wrapper that sources the user
//! hook after a successful transfer, and `<name>.sh`, a commented stub the
//! user fills in. The wrapper is what a sync entry's `binary` field points
//! at. Templates are fixed strings, not data-driven.

use std::path::{Path, PathBuf};

use crate::error::{io_err, DaemonError};
use crate::paths::handler_dir;

/// Create the scaffold under `<home>/devsync/scripts/<name>_handler/`.
///
/// Idempotent on the directory; existing script files are overwritten with
/// the pristine templates. Returns the handler directory.
pub fn scaffold_at(home: &Path, name: &str) -> Result<PathBuf, DaemonError> {
    let dir = handler_dir(home, name);
    std::fs::create_dir_all(&dir).map_err(|e| io_err(&dir, e))?;

    let wrapper_path = dir.join("handler.sh");
    std::fs::write(&wrapper_path, wrapper_template(name)).map_err(|e| io_err(&wrapper_path, e))?;
    set_executable(&wrapper_path)?;

    let hook_path = dir.join(format!("{name}.sh"));
    std::fs::write(&hook_path, hook_template(name)).map_err(|e| io_err(&hook_path, e))?;
    set_executable(&hook_path)?;

    tracing::info!("scaffolded handler '{}' at {}", name, dir.display());
    Ok(dir)
}

/// `scaffold_at` convenience wrapper — derives home from `dirs::home_dir()`.
pub fn scaffold(name: &str) -> Result<PathBuf, DaemonError> {
    let home = dirs::home_dir().ok_or(DaemonError::HomeNotFound)?;
    scaffold_at(&home, name)
}

fn wrapper_template(name: &str) -> String {
    format!(
        r#"/usr/bin/rsync "$@"
result=$?
(
  if [ $result -eq 0 ]; then
     source ~/devsync/scripts/{name}_handler/{name}.sh
  fi
) >/dev/null 2>/dev/null </dev/null
exit $result
"#
    )
}

fn hook_template(name: &str) -> String {
    format!(
        r#"#!/bin/bash
# echo "OK" > /tmp/devsync-{name}-handler.txt
# /usr/bin/sshpass -p '<SECRET>' ssh <USER>@<ADDRESS> 'echo OK > /tmp/devsync-{name}-handler.txt'
"#
    )
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<(), DaemonError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .map_err(|e| io_err(path, e))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<(), DaemonError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn scaffold_creates_both_scripts() {
        let home = TempDir::new().expect("tempdir");
        let dir = scaffold_at(home.path(), "deploy").expect("scaffold");

        assert!(dir.ends_with("devsync/scripts/deploy_handler"));
        assert!(dir.join("handler.sh").exists());
        assert!(dir.join("deploy.sh").exists());
    }

    #[test]
    fn wrapper_runs_rsync_then_sources_hook() {
        let home = TempDir::new().expect("tempdir");
        let dir = scaffold_at(home.path(), "deploy").expect("scaffold");
        let wrapper = std::fs::read_to_string(dir.join("handler.sh")).expect("read");

        assert!(wrapper.starts_with("/usr/bin/rsync \"$@\"\n"));
        assert!(wrapper.contains("source ~/devsync/scripts/deploy_handler/deploy.sh"));
        assert!(wrapper.ends_with("exit $result\n"));
    }

    #[test]
    fn hook_is_a_commented_stub() {
        let home = TempDir::new().expect("tempdir");
        let dir = scaffold_at(home.path(), "deploy").expect("scaffold");
        let hook = std::fs::read_to_string(dir.join("deploy.sh")).expect("read");

        assert!(hook.starts_with("#!/bin/bash\n"));
        assert!(hook.contains("/tmp/devsync-deploy-handler.txt"));
    }

    #[test]
    #[cfg(unix)]
    fn scripts_are_executable() {
        use std::os::unix::fs::PermissionsExt;

        let home = TempDir::new().expect("tempdir");
        let dir = scaffold_at(home.path(), "deploy").expect("scaffold");
        for script in ["handler.sh", "deploy.sh"] {
            let mode = std::fs::metadata(dir.join(script))
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o755, "{script} should be executable");
        }
    }

    #[test]
    fn scaffold_is_idempotent() {
        let home = TempDir::new().expect("tempdir");
        scaffold_at(home.path(), "deploy").expect("first");
        let dir = scaffold_at(home.path(), "deploy").expect("second");
        assert!(dir.join("handler.sh").exists());
    }
}
