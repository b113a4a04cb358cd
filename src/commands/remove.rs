//! Remove command implementation
//!
//! Deletes a package's scoped blocks from the project's shared files and
//! drops its name from the ledger so a later apply reinstalls it.

use std::path::PathBuf;

use crate::block;
use crate::cli::RemoveArgs;
use crate::config::{LEDGER_FILE, Ledger};
use crate::error::Result;
use crate::installer::{ENV_FILE, IGNORE_FILE};
use crate::ui::{Console, TermConsole};

use super::helpers;

pub fn run(workspace: Option<PathBuf>, verbose: bool, args: RemoveArgs) -> Result<()> {
    let project_root = helpers::resolve_project_root(workspace)?;
    let console = TermConsole::new(verbose);

    let mut changed = false;
    for file in [ENV_FILE, IGNORE_FILE] {
        if block::remove_block(&project_root.join(file), &args.name)? {
            console.info(&format!("- Removed {} block from {file}", args.name));
            changed = true;
        }
    }

    let mut ledger = Ledger::load(&project_root)?;
    if ledger.remove(&args.name) {
        ledger.save(&project_root)?;
        console.debug(&format!("- Dropped {} from {LEDGER_FILE}", args.name));
    }

    if !changed {
        console.info(&format!("No blocks found for {}", args.name));
    }

    Ok(())
}
