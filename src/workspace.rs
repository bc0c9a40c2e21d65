//! Workspace inspection and idempotent mutation primitives.
//!
//! Every operation is safe to repeat: pre-existing state is skipped silently
//! and a log line is emitted only on the branch that changed the filesystem.

use crate::error::ScaffoldError;
use crate::templates::GUARD_FILE;
use std::fs;
use std::path::Path;
use tracing::info;

/// Whether the workspace already carries a project manifest.
///
/// The guard check: a present `package.json` means a prior run (or a
/// hand-rolled project) owns this directory and the scaffolder must not touch it.
pub fn is_scaffolded(root: &Path) -> bool {
    root.join(GUARD_FILE).exists()
}

/// Create a directory and all missing parents.
///
/// Returns whether anything was created. A pre-existing path is a no-op.
pub fn ensure_dir(root: &Path, rel: &str) -> Result<bool, ScaffoldError> {
    let path = root.join(rel);
    if path.exists() {
        return Ok(false);
    }
    fs::create_dir_all(&path).map_err(|e| ScaffoldError::fs(&path, e))?;
    info!(path = %path.display(), "created directory");
    Ok(true)
}

/// Write a file only if nothing exists at the path.
///
/// Never diffs or merges: a manually edited file survives a re-run untouched.
/// Returns whether the file was written.
pub fn write_if_missing(root: &Path, rel: &str, content: &str) -> Result<bool, ScaffoldError> {
    let path = root.join(rel);
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ScaffoldError::fs(parent, e))?;
    }
    fs::write(&path, content).map_err(|e| ScaffoldError::fs(&path, e))?;
    info!(path = %path.display(), "created file");
    Ok(true)
}

/// Delete a file, tolerating absence. Returns whether a file was removed.
pub fn remove_file_if_exists(root: &Path, rel: &str) -> Result<bool, ScaffoldError> {
    let path = root.join(rel);
    match fs::remove_file(&path) {
        Ok(()) => {
            info!(path = %path.display(), "removed file");
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(ScaffoldError::fs(&path, e)),
    }
}
