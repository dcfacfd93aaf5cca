//! Executable-bit fix for the wrapper script

use crate::error::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[cfg(unix)]
const OWNER_EXECUTE: u32 = 0o100;

/// Filesystem change to make before launching the command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum PermissionFix {
    /// Add the owner-execute bit to the file
    OwnerExecute(PathBuf),
}

impl PermissionFix {
    pub fn path(&self) -> &Path {
        match self {
            PermissionFix::OwnerExecute(path) => path,
        }
    }

    /// Apply the fix. Returns `Ok(true)` only when a permission bit was added.
    ///
    /// A missing file is not an error.
    pub fn apply(&self) -> Result<bool> {
        match self {
            PermissionFix::OwnerExecute(path) => add_owner_execute(path),
        }
    }

    /// Apply the fix, logging instead of returning failures
    pub fn apply_logged(&self) -> bool {
        match self.apply() {
            Ok(true) => {
                tracing::info!("Added +x permission to file: {}", self.path().display());
                true
            }
            Ok(false) => false,
            Err(e) => {
                tracing::error!(
                    "Failed to add the executable permissions to file: {}: {}",
                    self.path().display(),
                    e
                );
                false
            }
        }
    }
}

#[cfg(unix)]
fn add_owner_execute(path: &Path) -> Result<bool> {
    use std::fs;
    use std::io::ErrorKind;
    use std::os::unix::fs::PermissionsExt;

    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("Skipping permission fix, no file at {}", path.display());
            return Ok(false);
        }
        Err(e) => return Err(e.into()),
    };

    let mut perms = metadata.permissions();
    let mode = perms.mode();
    if mode & OWNER_EXECUTE != 0 {
        return Ok(false);
    }
    perms.set_mode(mode | OWNER_EXECUTE);
    fs::set_permissions(path, perms)?;
    Ok(true)
}

#[cfg(not(unix))]
fn add_owner_execute(_path: &Path) -> Result<bool> {
    Ok(false)
}
