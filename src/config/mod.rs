//! Host configuration and the installed-package ledger
//!
//! `graft.yaml` carries the host's exclusion list. `graft.lock` records the
//! names already processed by earlier runs; the merge engine treats it as
//! advisory input and only the command layer writes it back.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraftError, Result};

/// Host configuration file name under the project root
pub const CONFIG_FILE: &str = "graft.yaml";

/// Ledger file name under the project root
pub const LEDGER_FILE: &str = "graft.lock";

/// Host configuration (`graft.yaml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Package names never processed for this project
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl ProjectConfig {
    /// Load configuration from the project root; a missing file means defaults
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| GraftError::ConfigReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        serde_yaml::from_str(&content).map_err(|e| GraftError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    pub fn excluded_set(&self) -> HashSet<String> {
        self.exclude.iter().cloned().collect()
    }
}

/// Lock-like record of already-processed package names (`graft.lock`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub installed: Vec<String>,
}

impl Ledger {
    /// Load the ledger from the project root; a missing file means empty
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(LEDGER_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| GraftError::ConfigReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        serde_json::from_str(&content).map_err(|e| GraftError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    pub fn installed_set(&self) -> HashSet<String> {
        self.installed.iter().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.installed.iter().any(|n| n == name)
    }

    /// Merge processed names into the ledger, keeping it sorted and unique
    pub fn record<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.installed.extend(names);
        self.installed.sort();
        self.installed.dedup();
    }

    /// Drop a name from the ledger; returns whether it was present
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.installed.len();
        self.installed.retain(|n| n != name);
        self.installed.len() != before
    }

    /// Write the ledger back to the project root
    pub fn save(&self, project_root: &Path) -> Result<()> {
        let path = project_root.join(LEDGER_FILE);
        let mut json =
            serde_json::to_string_pretty(self).map_err(|e| GraftError::ConfigParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        json.push('\n');

        std::fs::write(&path, json).map_err(|e| GraftError::FileWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
