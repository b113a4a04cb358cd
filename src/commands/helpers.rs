//! Shared helpers for command implementations

use std::path::PathBuf;

use crate::error::{GraftError, Result};

/// Resolve the project root from `--workspace` or the current directory
pub fn resolve_project_root(workspace: Option<PathBuf>) -> Result<PathBuf> {
    let root = match workspace {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    if !root.is_dir() {
        return Err(GraftError::ProjectRootNotFound {
            path: root.display().to_string(),
        });
    }

    Ok(root)
}
