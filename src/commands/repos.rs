//! Repository management command implementation

use crate::cli::{ReposArgs, ReposSubcommand};
use crate::commands::helpers;
use crate::error::Result;
use crate::registry::{Registry, RepositoryConfig};

/// Run repos command; the bare command lists, like `repos list`
pub fn run(args: ReposArgs) -> Result<()> {
    let mut registry = Registry::load(&helpers::rigger_home()?)?;

    match args.command {
        None | Some(ReposSubcommand::List) => {
            for description in registry.descriptions() {
                println!("{}", description);
            }
        }
        Some(ReposSubcommand::AddLocal { path }) => {
            registry.add(RepositoryConfig::Local { path });
            registry.save()?;
            println!("Repository added successfully");
        }
        Some(ReposSubcommand::AddRemote { url }) => {
            registry.add(RepositoryConfig::Remote { url });
            registry.save()?;
            println!("Repository added successfully");
        }
        Some(ReposSubcommand::RemoveLocal { path }) => {
            registry.remove(&RepositoryConfig::Local { path });
            registry.save()?;
            println!("Repository removed successfully");
        }
        Some(ReposSubcommand::RemoveRemote { url }) => {
            registry.remove(&RepositoryConfig::Remote { url });
            registry.save()?;
            println!("Repository removed successfully");
        }
    }

    Ok(())
}
