//! Error types and handling for Rigger
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Rigger operations
#[derive(Error, Diagnostic, Debug)]
pub enum RiggerError {
    // Repository errors
    #[error("Unknown repository type: {kind}")]
    #[diagnostic(
        code(rigger::registry::unknown_kind),
        help("Supported repository types are \"local\" and \"remote\"")
    )]
    RepositoryTypeUnknown { kind: String },

    #[error("Module {name} not found")]
    #[diagnostic(
        code(rigger::resolve::not_found),
        help("Check the module name and your configured repositories (rigger repos list)")
    )]
    ModuleNotFound { name: String },

    #[error("Transport error for {url}: {reason}")]
    #[diagnostic(code(rigger::resolve::transport))]
    Transport { url: String, reason: String },

    // Module errors
    #[error("Failed to parse module metadata from {origin}: {reason}")]
    #[diagnostic(code(rigger::module::metadata_parse))]
    MetadataParse { origin: String, reason: String },

    #[error("Module {name} already installed")]
    #[diagnostic(code(rigger::descriptor::already_installed))]
    AlreadyInstalled { name: String },

    // Descriptor errors
    #[error("Descriptor is corrupt: {reason}")]
    #[diagnostic(
        code(rigger::descriptor::corrupt),
        help("Regenerate the Gruntfile with 'rigger init --force' and reinstall your modules")
    )]
    DescriptorCorrupt { reason: String },

    // Workspace errors
    #[error("Can't find Gruntfile.js in {path}")]
    #[diagnostic(
        code(rigger::workspace::not_initialised),
        help("Run 'rigger init' to generate the build descriptor")
    )]
    NotInitialised { path: String },

    #[error("This project has already been initialised")]
    #[diagnostic(
        code(rigger::workspace::already_initialised),
        help("Pass --force to overwrite the existing Gruntfile.js")
    )]
    AlreadyInitialised,

    #[error("Can't find package.json. Run \"npm init\" before running rigger")]
    #[diagnostic(code(rigger::workspace::missing_manifest))]
    MissingPackageManifest,

    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(rigger::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid repository entry: {message}")]
    #[diagnostic(code(rigger::config::invalid))]
    ConfigInvalid { message: String },

    // Package installation errors
    #[error("Package installation failed: {reason}")]
    #[diagnostic(code(rigger::packages::install_failed))]
    PackageInstallFailed { reason: String },

    // Prompt errors
    #[error("Prompt failed: {reason}")]
    #[diagnostic(code(rigger::prompt::failed))]
    Prompt { reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(rigger::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(rigger::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(rigger::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for RiggerError {
    fn from(err: std::io::Error) -> Self {
        RiggerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for RiggerError {
    fn from(err: inquire::InquireError) -> Self {
        RiggerError::Prompt {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, RiggerError>;
