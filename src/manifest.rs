//! Package list loading
//!
//! The dependency manager hands over the installed package set as a JSON
//! file: an array of `{name, path}` entries. Relative install paths are
//! resolved against the project root. Nothing else about the dependency
//! graph is consumed here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GraftError, Result};

/// Default package list file name under the project root
pub const DEFAULT_PACKAGE_LIST: &str = "packages.json";

/// One installed package as reported by the dependency manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Unique package name, also used as the scoped-block key
    pub name: String,
    /// Install path; relative paths are taken from the project root
    pub path: PathBuf,
}

/// Load the package list, resolving install paths against `project_root`
pub fn load_packages(project_root: &Path, list_path: &Path) -> Result<Vec<Package>> {
    let absolute = if list_path.is_absolute() {
        list_path.to_path_buf()
    } else {
        project_root.join(list_path)
    };

    if !absolute.is_file() {
        return Err(GraftError::PackageListNotFound {
            path: absolute.display().to_string(),
        });
    }

    let content =
        std::fs::read_to_string(&absolute).map_err(|e| GraftError::FileReadFailed {
            path: absolute.display().to_string(),
            reason: e.to_string(),
        })?;

    let mut packages: Vec<Package> =
        serde_json::from_str(&content).map_err(|e| GraftError::PackageListParseFailed {
            path: absolute.display().to_string(),
            reason: e.to_string(),
        })?;

    for package in &mut packages {
        if package.path.is_relative() {
            package.path = project_root.join(&package.path);
        }
    }

    Ok(packages)
}
