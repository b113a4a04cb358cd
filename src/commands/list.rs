//! List command implementation
//!
//! Shows one entry per package from the package list: which project types it
//! ships payloads for and whether it is excluded or already installed.

use std::path::PathBuf;

use console::Style;

use crate::cli::ListArgs;
use crate::config::{Ledger, ProjectConfig};
use crate::error::Result;
use crate::manifest;
use crate::payload::Payload;
use crate::project;

use super::helpers;

pub fn run(workspace: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let project_root = helpers::resolve_project_root(workspace)?;

    let packages = manifest::load_packages(&project_root, &args.packages)?;
    let config = ProjectConfig::load(&project_root)?;
    let ledger = Ledger::load(&project_root)?;

    if packages.is_empty() {
        println!("No packages in the package list");
        return Ok(());
    }

    let project_types = project::default_project_types();

    for package in &packages {
        println!("  {}", Style::new().bold().yellow().apply_to(&package.name));

        let payloads: Vec<&str> = project_types
            .iter()
            .filter(|t| Payload::resolve(&package.path, &t.label).exists())
            .map(|t| t.label.as_str())
            .collect();

        if payloads.is_empty() {
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Payloads:"),
                Style::new().dim().apply_to("none")
            );
        } else {
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Payloads:"),
                payloads.join(", ")
            );
        }

        let mut status = Vec::new();
        if config.exclude.contains(&package.name) {
            status.push(format!("{}", Style::new().yellow().apply_to("excluded")));
        }
        if ledger.contains(&package.name) {
            status.push(format!("{}", Style::new().green().apply_to("installed")));
        }
        if !status.is_empty() {
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Status:"),
                status.join(", ")
            );
        }
    }

    Ok(())
}
