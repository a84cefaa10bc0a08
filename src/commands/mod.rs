//! Command implementations for the Rigger CLI

pub mod completions;
pub mod helpers;
pub mod init;
pub mod install;
pub mod repos;
pub mod version;
