//! Graft - post-install payload merger
//!
//! A command line tool that merges installation payloads shipped by installed
//! dependencies (env snippets, ignore rules, template files, post-install
//! notes) into the consuming project's tree, idempotently and without ever
//! overwriting existing content.

use clap::Parser;
use std::path::PathBuf;

mod block;
mod cli;
mod commands;
mod config;
mod copier;
mod error;
mod installer;
mod manifest;
mod payload;
mod progress;
mod project;
mod ui;

use cli::{Cli, Commands};
use error::{GraftError, Result};

/// Check that the requested project root exists before dispatching
fn check_project_root(workspace: Option<PathBuf>) -> Result<()> {
    let root = workspace.unwrap_or_else(|| std::env::current_dir().unwrap());

    if !root.is_dir() {
        return Err(GraftError::ProjectRootNotFound {
            path: root.display().to_string(),
        });
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Check the project root for commands that operate on one
    // Version and completions can run from anywhere
    let needs_project = matches!(
        cli.command,
        Commands::Apply(_) | Commands::Remove(_) | Commands::List(_)
    );

    if needs_project {
        if let Err(e) = check_project_root(cli.workspace.clone()) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    let result = match cli.command {
        Commands::Apply(args) => commands::apply::run(cli.workspace, cli.verbose, args),
        Commands::Remove(args) => commands::remove::run(cli.workspace, cli.verbose, args),
        Commands::List(args) => commands::list::run(cli.workspace, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
