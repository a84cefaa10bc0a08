//! Install command implementation
//!
//! Wires the CLI arguments to the install planner: registry from the user
//! configuration, npm as the package installer, and either the interactive
//! placement prompt or the fixed `--at` index.

use std::path::PathBuf;

use console::style;

use crate::cli::InstallArgs;
use crate::commands::helpers;
use crate::descriptor::patch::TaskPlacement;
use crate::error::Result;
use crate::installer::{FixedPlacement, InstallPlanner, InteractivePlacement, NpmInstaller};
use crate::registry::Registry;

/// Run install command
pub fn run(workspace: Option<PathBuf>, args: InstallArgs) -> Result<()> {
    let workspace = helpers::resolve_workspace_path(workspace)?;
    let registry = Registry::load(&helpers::rigger_home()?)?;

    let mut packages = NpmInstaller;
    let mut placement: Box<dyn TaskPlacement> = match args.at {
        Some(index) => Box::new(FixedPlacement::new(index)),
        None => Box::new(InteractivePlacement),
    };

    InstallPlanner::new(&registry, &workspace, &mut packages, placement.as_mut())
        .install(&args.name)?;

    println!(
        "{}",
        style(format!("Module {} installed successfully", args.name)).green()
    );
    Ok(())
}
