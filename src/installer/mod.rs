//! Install orchestration
//!
//! Strict sequence with abort on first error: resolve the module across the
//! registry, fetch its declaration documents, install declared packages
//! (external side effect, not rolled back), then load, patch, and persist
//! the descriptor. The descriptor write is all-or-nothing: the file is never
//! touched unless every prior step succeeded.

use std::fs;
use std::path::Path;

use console::style;

use crate::descriptor::patch::{self, TaskPlacement};
use crate::descriptor::Descriptor;
use crate::error::{Result, RiggerError};
use crate::registry::Registry;

pub mod packages;
pub mod placement;

pub use packages::{NpmInstaller, PackageInstaller};
pub use placement::{FixedPlacement, InteractivePlacement};

/// Orchestrates one install operation against one workspace
pub struct InstallPlanner<'a> {
    registry: &'a Registry,
    workspace: &'a Path,
    packages: &'a mut dyn PackageInstaller,
    placement: &'a mut dyn TaskPlacement,
}

impl<'a> InstallPlanner<'a> {
    pub fn new(
        registry: &'a Registry,
        workspace: &'a Path,
        packages: &'a mut dyn PackageInstaller,
        placement: &'a mut dyn TaskPlacement,
    ) -> Self {
        Self {
            registry,
            workspace,
            packages,
            placement,
        }
    }

    pub fn install(&mut self, name: &str) -> Result<()> {
        let (module, origin) = self.registry.find_module(name)?;
        let metadata = module.info()?;
        let fragment = module.config_fragment()?;

        println!(
            "Installing module {} from {}",
            style(name).bold().yellow(),
            origin
        );

        if !metadata.packages.is_empty() {
            self.packages.install(self.workspace, &metadata.packages)?;
        }

        let descriptor_path = self.workspace.join("Gruntfile.js");
        if !descriptor_path.exists() {
            return Err(RiggerError::NotInitialised {
                path: self.workspace.display().to_string(),
            });
        }

        let text =
            fs::read_to_string(&descriptor_path).map_err(|e| RiggerError::FileReadFailed {
                path: descriptor_path.display().to_string(),
                reason: e.to_string(),
            })?;

        let mut descriptor = Descriptor::parse(&text)?;
        patch::apply_module(&mut descriptor, name, &metadata, &fragment, self.placement)?;

        fs::write(&descriptor_path, descriptor.to_text()).map_err(|e| {
            RiggerError::FileWriteFailed {
                path: descriptor_path.display().to_string(),
                reason: e.to_string(),
            }
        })
    }
}
