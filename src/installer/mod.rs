//! Installation orchestration
//!
//! One pass walks the package set in input order and decides, per package,
//! whether and how to apply its payload: duplicates collapse to the first
//! occurrence, excluded and already-installed names are skipped with a note,
//! and everything else gets its snippets merged and its files copied. A
//! filesystem failure is fatal for that package only; the pass continues.
//!
//! Processing is strictly sequential: packages append to the same shared
//! `.env` and `.gitignore`, and the block idempotence check is a
//! read-modify-write that requires serialized access.

pub mod report;

use std::collections::HashSet;
use std::path::PathBuf;

use crate::block;
use crate::copier;
use crate::error::{GraftError, Result};
use crate::manifest::Package;
use crate::payload::Payload;
use crate::progress::ProgressDisplay;
use crate::project::ProjectType;
use crate::ui::Console;

pub use report::{Outcome, PackageRecord, Report};

/// Env file maintained at the project root
pub const ENV_FILE: &str = ".env";

/// Ignore file maintained at the project root
pub const IGNORE_FILE: &str = ".gitignore";

/// Drives the merge engine over one package set
pub struct Orchestrator<'a> {
    project_root: PathBuf,
    console: &'a dyn Console,
    show_progress: bool,
}

impl<'a> Orchestrator<'a> {
    pub fn new(project_root: impl Into<PathBuf>, console: &'a dyn Console) -> Self {
        Self {
            project_root: project_root.into(),
            console,
            show_progress: false,
        }
    }

    /// Show a progress bar while processing
    pub fn with_progress(mut self) -> Self {
        self.show_progress = true;
        self
    }

    /// Process every package once for the given project type
    ///
    /// The project root is checked against the type's markers once, up
    /// front; an incompatible root yields an empty report and no package is
    /// touched.
    pub fn run(
        &self,
        packages: &[Package],
        project_type: &ProjectType,
        excluded: &HashSet<String>,
        installed: &HashSet<String>,
    ) -> Report {
        if !project_type.is_compatible(&self.project_root) {
            self.console.info(&format!(
                "No compatible project type detected for \"{}\"",
                project_type.label
            ));
            return Report::incompatible(&project_type.label);
        }

        let progress = self
            .show_progress
            .then(|| ProgressDisplay::new(packages.len() as u64));

        let mut processed: HashSet<String> = HashSet::new();
        let mut records = Vec::new();

        for package in packages {
            if let Some(ref pb) = progress {
                pb.update_package(&package.name);
            }

            if !processed.insert(package.name.clone()) {
                self.console.debug(&format!(
                    "- Duplicate package entry {}, keeping first occurrence",
                    package.name
                ));
                if let Some(ref pb) = progress {
                    pb.inc_package();
                }
                continue;
            }

            records.push(self.process_package(package, project_type, excluded, installed));

            if let Some(ref pb) = progress {
                pb.inc_package();
            }
        }

        if let Some(ref pb) = progress {
            pb.finish();
        }

        Report {
            project_type: project_type.label.clone(),
            compatible: true,
            records,
        }
    }

    fn process_package(
        &self,
        package: &Package,
        project_type: &ProjectType,
        excluded: &HashSet<String>,
        installed: &HashSet<String>,
    ) -> PackageRecord {
        let payload = Payload::resolve(&package.path, &project_type.label);

        if !payload.exists() {
            self.console.debug(&format!(
                "- No \"{}\" payload for {}",
                project_type.label, package.name
            ));
            return PackageRecord::skipped(&package.name, Outcome::SkippedNoPayload);
        }

        if excluded.contains(&package.name) {
            self.console
                .info(&format!("- Skipping {} (excluded)", package.name));
            return PackageRecord::skipped(&package.name, Outcome::SkippedExcluded);
        }

        if installed.contains(&package.name) {
            self.console
                .info(&format!("- Skipping {} (already installed)", package.name));
            return PackageRecord::skipped(&package.name, Outcome::SkippedAlreadyInstalled);
        }

        self.console.debug(&format!(
            "- Installing {} from {}",
            package.name,
            payload.root().display()
        ));

        match self.apply_payload(package, &payload) {
            Ok(record) => {
                if matches!(record.outcome, Outcome::Applied { changed: true }) {
                    self.console.info(&format!("- Configured {}", package.name));
                } else {
                    self.console
                        .info(&format!("- Already configured {}", package.name));
                }
                record
            }
            Err(e) => {
                self.console
                    .error(&format!("- Failed to configure {}: {e}", package.name));
                PackageRecord::skipped(
                    &package.name,
                    Outcome::Failed {
                        reason: e.to_string(),
                    },
                )
            }
        }
    }

    fn apply_payload(&self, package: &Package, payload: &Payload) -> Result<PackageRecord> {
        let mut changed = false;

        changed |= block::inject_from(
            &payload.env_snippet(),
            &self.project_root.join(ENV_FILE),
            &package.name,
        )?;
        changed |= block::inject_from(
            &payload.ignore_snippet(),
            &self.project_root.join(IGNORE_FILE),
            &package.name,
        )?;

        let post_install = self.read_post_install(payload)?;
        if let Some(ref note) = post_install {
            self.console.info(note);
        }

        let manifest = payload.manifest();
        if let Some(ref path) = manifest {
            self.console
                .debug(&format!("- Manifest at {}", path.display()));
        }

        changed |= copier::copy_tree(payload.root(), &self.project_root)?;

        Ok(PackageRecord {
            name: package.name.clone(),
            outcome: Outcome::Applied { changed },
            post_install,
            manifest,
        })
    }

    fn read_post_install(&self, payload: &Payload) -> Result<Option<String>> {
        let path = payload.post_install_note();
        if !path.is_file() {
            return Ok(None);
        }

        let note = std::fs::read_to_string(&path).map_err(|e| GraftError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(note))
    }
}
