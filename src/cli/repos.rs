use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Arguments for the repos command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List configured repositories:\n    rigger repos\n\n\
                  Add a local repository:\n    rigger repos add-local ~/rigger-modules\n\n\
                  Add a remote repository:\n    rigger repos add-remote https://modules.example.org\n\n\
                  Remove a repository:\n    rigger repos remove-remote https://modules.example.org")]
pub struct ReposArgs {
    #[command(subcommand)]
    pub command: Option<ReposSubcommand>,
}

/// Repository subcommands
#[derive(Subcommand, Debug)]
pub enum ReposSubcommand {
    /// List configured repositories in probe order
    List,

    /// Append a local repository
    AddLocal {
        /// Directory containing one subdirectory per module
        path: PathBuf,
    },

    /// Append a remote repository
    AddRemote {
        /// Base URL serving <name>/module.json and <name>/config.js
        url: String,
    },

    /// Remove the first local repository with this path
    RemoveLocal {
        /// Path of the repository to remove
        path: PathBuf,
    },

    /// Remove the first remote repository with this url
    RemoveRemote {
        /// URL of the repository to remove
        url: String,
    },
}
