//! Non-destructive recursive copy of payload trees
//!
//! Copies a payload directory into the project root, creating directories as
//! needed and never overwriting files that already exist at the destination.
//! Snippet files carrying the template-marker extension are left to the
//! scoped-block and post-install paths and excluded from the generic copy.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::{GraftError, Result};

/// Extension marking snippet files that are merged rather than copied
pub const TEMPLATE_EXTENSION: &str = "txt";

fn copy_error(path: &Path, reason: impl std::fmt::Display) -> GraftError {
    GraftError::CopyFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Copy `source` into `dest_root`, skipping files that already exist
///
/// Walks the source pre-order so directories exist before their contents.
/// Returns `true` iff at least one new file was copied; a missing `source`
/// is treated as nothing to copy.
pub fn copy_tree(source: &Path, dest_root: &Path) -> Result<bool> {
    if !source.is_dir() {
        return Ok(false);
    }

    let mut changed = false;

    for entry in WalkDir::new(source).min_depth(1) {
        let entry = entry.map_err(|e| copy_error(source, &e))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| copy_error(entry.path(), e))?;
        let target = dest_root.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target).map_err(|e| copy_error(&target, e))?;
        } else if !target.exists() {
            if has_template_extension(entry.path()) {
                continue;
            }
            copy_file(entry.path(), &target)?;
            changed = true;
        }
    }

    Ok(changed)
}

fn has_template_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == TEMPLATE_EXTENSION)
}

/// Copy a single file, propagating the source's executable bits
pub fn copy_file(source: &Path, target: &Path) -> Result<()> {
    if target.exists() {
        return Ok(());
    }

    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent).map_err(|e| copy_error(parent, e))?;
    }

    std::fs::copy(source, target).map_err(|e| copy_error(target, e))?;
    propagate_executable_bits(source, target);
    Ok(())
}

/// Union the source's executable bits into the destination mode, best-effort
#[cfg(unix)]
fn propagate_executable_bits(source: &Path, target: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let Ok(source_meta) = std::fs::metadata(source) else {
        return;
    };
    let Ok(target_meta) = std::fs::metadata(target) else {
        return;
    };

    let executable = source_meta.permissions().mode() & 0o111;
    if executable == 0 {
        return;
    }

    let mut permissions = target_meta.permissions();
    permissions.set_mode(permissions.mode() | executable);
    let _ = std::fs::set_permissions(target, permissions);
}

#[cfg(not(unix))]
fn propagate_executable_bits(_source: &Path, _target: &Path) {}
