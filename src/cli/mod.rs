//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - init: Init command arguments
//! - install: Install command arguments
//! - repos: Repository management arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod init;
pub mod install;
pub mod repos;

pub use completions::CompletionsArgs;
pub use init::InitArgs;
pub use install::InstallArgs;
pub use repos::{ReposArgs, ReposSubcommand};

/// Rigger - module installer for Grunt build pipelines
#[derive(Parser, Debug)]
#[command(
    name = "rigger",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Module installer for generated Grunt build pipelines",
    long_about = "Rigger resolves named build modules across a prioritized list of repositories \
                  (local directories or remote HTTP endpoints) and splices their subtasks, \
                  package dependencies, and configuration fragments into a generated Gruntfile.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  rigger init                          \x1b[90m# Generate the build descriptor\x1b[0m\n   \
                  rigger install lint                  \x1b[90m# Install the lint module\x1b[0m\n   \
                  rigger install lint --at 0           \x1b[90m# Insert before the first subtask\x1b[0m\n   \
                  rigger repos list                    \x1b[90m# List configured repositories\x1b[0m\n   \
                  rigger repos add-local ~/modules     \x1b[90m# Add a local repository\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory holding the Gruntfile (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "RIGGER_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the build descriptor and project skeleton
    Init(InitArgs),

    /// Install a module into the build descriptor
    Install(InstallArgs),

    /// Manage module repositories
    #[command(name = "repos")]
    Repos(ReposArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
