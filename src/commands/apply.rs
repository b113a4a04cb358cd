//! Apply command implementation
//!
//! Runs the merge engine once over the installed package set:
//! 1. Load the package list, host configuration, and ledger
//! 2. Resolve the project types to process (explicit or auto-detected)
//! 3. Run one orchestration pass per project type
//! 4. Merge processed names back into the ledger
//!
//! A per-package failure is reported and skipped; only unreadable inputs
//! (package list, configuration) abort the command.

use std::path::PathBuf;

use crate::cli::ApplyArgs;
use crate::config::{Ledger, ProjectConfig};
use crate::error::Result;
use crate::installer::Orchestrator;
use crate::manifest;
use crate::project;
use crate::ui::{Console, TermConsole};

use super::helpers;

pub fn run(workspace: Option<PathBuf>, verbose: bool, args: ApplyArgs) -> Result<()> {
    let project_root = helpers::resolve_project_root(workspace)?;
    let console = TermConsole::new(verbose);

    let packages = manifest::load_packages(&project_root, &args.packages)?;
    let config = ProjectConfig::load(&project_root)?;
    let mut ledger = Ledger::load(&project_root)?;

    let excluded = config.excluded_set();
    let installed = ledger.installed_set();

    let explicit = !args.project_types.is_empty();
    let project_types = project::resolve_project_types(&project_root, &args.project_types)?;

    let orchestrator = Orchestrator::new(project_root.clone(), &console).with_progress();

    let mut detected_named = false;
    let mut processed: Vec<String> = Vec::new();
    let mut changed = 0usize;
    let mut failed = 0usize;

    for project_type in &project_types {
        if project_type.is_named() && project_type.is_compatible(&project_root) {
            console.info(&format!(
                "Detected project type \"{}\"",
                project_type.label
            ));
            detected_named = true;
        }

        let report = orchestrator.run(&packages, project_type, &excluded, &installed);
        processed.extend(report.processed_names());
        changed += report.changed_count();
        failed += report.failed_count();
    }

    if !explicit && !detected_named {
        console.info("Did not detect a specific project type for auto-configuration");
    }

    if changed > 0 {
        console.info(&format!("Configured {changed} package(s)"));
    }
    if failed > 0 {
        console.warning(&format!("{failed} package(s) failed to configure"));
    }

    if !processed.is_empty() {
        ledger.record(processed);
        ledger.save(&project_root)?;
    }

    Ok(())
}
