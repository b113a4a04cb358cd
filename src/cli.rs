//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Graft - post-install payload merger
///
/// Merge installation payloads shipped by dependencies into the project tree.
#[derive(Parser, Debug)]
#[command(
    name = "graft",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Idempotent post-install payload merger for project trees",
    long_about = "Graft post-processes installed dependencies: packages shipping an .install/ \
                  payload get their env and ignore snippets merged into the project's shared \
                  files inside scoped blocks, and their template files copied without ever \
                  overwriting existing content. Running it twice never duplicates anything.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  graft apply\n    \
                  graft apply --project-type symfony\n    \
                  graft remove acme/widget\n    \
                  graft list\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/graft-rs/graft"
)]
pub struct Cli {
    /// Project root (defaults to current directory)
    #[arg(long, short = 'w', global = true)]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply payloads of installed packages to the project
    Apply(ApplyArgs),

    /// Remove a package's scoped blocks from the shared files
    Remove(RemoveArgs),

    /// Show payload status for each installed package
    List(ListArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the apply command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Apply with auto-detected project types:\n    graft apply\n\n\
                  Apply for one project type only:\n    graft apply --project-type symfony\n\n\
                  Apply a package list written elsewhere:\n    graft apply --packages build/packages.json\n\n\
                  Verbose run from another directory:\n    graft -v -w ../app apply")]
pub struct ApplyArgs {
    /// Package list file (name + install path pairs)
    #[arg(long, default_value = "packages.json")]
    pub packages: PathBuf,

    /// Process only these project types instead of auto-detecting
    #[arg(long = "project-type", value_name = "TYPE")]
    pub project_types: Vec<String>,
}

/// Arguments for the remove command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove a package's blocks:\n    graft remove acme/widget\n\n\
                  From another directory:\n    graft -w ../app remove acme/widget")]
pub struct RemoveArgs {
    /// Package name whose blocks should be removed
    pub name: String,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show payload status per package:\n    graft list\n\n\
                  Use an explicit package list:\n    graft list --packages build/packages.json")]
pub struct ListArgs {
    /// Package list file (name + install path pairs)
    #[arg(long, default_value = "packages.json")]
    pub packages: PathBuf,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    graft completions --shell bash > ~/.bash_completion.d/graft\n\n\
                  Generate zsh completions:\n    graft completions --shell zsh > ~/.zfunc/_graft\n\n\
                  Generate fish completions:\n    graft completions --shell fish > ~/.config/fish/completions/graft.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
