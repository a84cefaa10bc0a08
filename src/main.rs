//! Rigger - module installer for generated Grunt build pipelines
//!
//! A command line tool that resolves named modules across a prioritized list
//! of repositories (local directories or remote HTTP endpoints) and splices
//! their subtasks, package dependencies, and configuration fragments into a
//! generated Gruntfile.

use clap::Parser;

mod cli;
mod commands;
mod descriptor;
mod error;
mod installer;
mod progress;
mod registry;
mod source;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init(args) => commands::init::run(cli.workspace, args),
        Commands::Install(args) => commands::install::run(cli.workspace, args),
        Commands::Repos(args) => commands::repos::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}
