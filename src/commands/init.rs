//! Init command implementation
//!
//! Writes the descriptor template into the workspace, creates the source
//! tree skeleton, and installs the base packages the generated Gruntfile
//! requires. Requires an existing package.json.

use std::fs;
use std::path::{Path, PathBuf};

use console::style;

use crate::cli::InitArgs;
use crate::commands::helpers;
use crate::error::{Result, RiggerError};
use crate::installer::{NpmInstaller, PackageInstaller};

const DESCRIPTOR_TEMPLATE: &str = include_str!("../../templates/Gruntfile.js");

const BASE_PACKAGES: [&str; 4] = [
    "load-grunt-tasks",
    "merge",
    "grunt-contrib-clean",
    "grunt-contrib-copy",
];

const SKELETON_DIRS: [&str; 5] = ["src", "test", "src/assets", "src/js", "src/css"];

/// Run init command
pub fn run(workspace: Option<PathBuf>, args: InitArgs) -> Result<()> {
    let workspace = helpers::resolve_workspace_path(workspace)?;

    if !workspace.join("package.json").exists() {
        return Err(RiggerError::MissingPackageManifest);
    }

    let descriptor_path = workspace.join("Gruntfile.js");
    if descriptor_path.exists() && !args.force {
        return Err(RiggerError::AlreadyInitialised);
    }

    fs::write(&descriptor_path, DESCRIPTOR_TEMPLATE).map_err(|e| {
        RiggerError::FileWriteFailed {
            path: descriptor_path.display().to_string(),
            reason: e.to_string(),
        }
    })?;

    for dir in SKELETON_DIRS {
        create_dir(&workspace.join(dir))?;
    }

    let packages: Vec<String> = BASE_PACKAGES.iter().map(|p| p.to_string()).collect();
    let mut npm = NpmInstaller;
    npm.install(&workspace, &packages)?;

    println!("{}", style("Project initialised successfully").green());
    Ok(())
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| RiggerError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
