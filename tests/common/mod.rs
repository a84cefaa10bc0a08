//! Common test utilities for Rigger integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub mod http;

/// The descriptor template the init command ships
#[allow(dead_code)]
pub const TEMPLATE: &str = include_str!("../../templates/Gruntfile.js");

/// A test project: isolated user config dir, workspace, and module repository
#[allow(dead_code)]
pub struct TestProject {
    /// RIGGER_HOME for this test
    pub home: TempDir,
    /// Workspace root holding the Gruntfile
    pub workspace: TempDir,
    /// A local module repository
    pub repo: TempDir,
}

#[allow(dead_code)]
impl TestProject {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("Failed to create home directory"),
            workspace: TempDir::new().expect("Failed to create workspace directory"),
            repo: TempDir::new().expect("Failed to create repository directory"),
        }
    }

    /// The rigger binary, wired to this project's home and workspace
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("rigger").expect("Failed to find rigger binary");
        cmd.env("RIGGER_HOME", self.home.path());
        cmd.env_remove("RIGGER_WORKSPACE");
        cmd.current_dir(self.workspace.path());

        #[cfg(unix)]
        {
            let stub_bin = self.home.path().join("bin");
            let path = std::env::var("PATH").unwrap_or_default();
            cmd.env("PATH", format!("{}:{}", stub_bin.display(), path));
        }

        cmd
    }

    /// Write the shipped descriptor template into the workspace
    pub fn init_gruntfile(&self) {
        self.write_gruntfile(TEMPLATE);
    }

    pub fn write_gruntfile(&self, content: &str) {
        std::fs::write(self.workspace.path().join("Gruntfile.js"), content)
            .expect("Failed to write Gruntfile");
    }

    pub fn gruntfile(&self) -> String {
        std::fs::read_to_string(self.workspace.path().join("Gruntfile.js"))
            .expect("Failed to read Gruntfile")
    }

    pub fn write_package_json(&self) {
        std::fs::write(
            self.workspace.path().join("package.json"),
            r#"{"name": "test-project", "version": "1.0.0"}"#,
        )
        .expect("Failed to write package.json");
    }

    /// Create a module in this project's local repository
    pub fn add_module(&self, name: &str, module_json: &str, config_js: &str) {
        add_module_at(self.repo.path(), name, module_json, config_js);
    }

    /// Point the registry at this project's local repository only
    pub fn register_local_repo(&self) {
        self.register_repos(&[repo_entry("local", "path", self.repo.path().to_str().unwrap())]);
    }

    /// Write the registry config with the given repository entries, in order
    pub fn register_repos(&self, entries: &[serde_json::Value]) {
        let config = serde_json::json!({
            "modules": { "repositories": entries }
        });
        std::fs::write(
            self.home.path().join("config.json"),
            serde_json::to_string_pretty(&config).expect("Failed to serialize registry"),
        )
        .expect("Failed to write registry config");
    }

    /// Install a stub npm that records its arguments to `npm.log`
    #[cfg(unix)]
    pub fn stub_npm(&self) {
        use std::os::unix::fs::PermissionsExt;

        let bin = self.home.path().join("bin");
        std::fs::create_dir_all(&bin).expect("Failed to create stub bin directory");

        let log = self.home.path().join("npm.log");
        let script = format!("#!/bin/sh\necho \"$@\" >> \"{}\"\nexit 0\n", log.display());
        let npm = bin.join("npm");
        std::fs::write(&npm, script).expect("Failed to write npm stub");
        std::fs::set_permissions(&npm, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark npm stub executable");
    }

    /// Arguments recorded by the npm stub, one line per invocation
    #[cfg(unix)]
    pub fn npm_log(&self) -> String {
        std::fs::read_to_string(self.home.path().join("npm.log")).unwrap_or_default()
    }

    pub fn registry_config_path(&self) -> PathBuf {
        self.home.path().join("config.json")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a module declaration under an arbitrary repository directory
#[allow(dead_code)]
pub fn add_module_at(repo: &Path, name: &str, module_json: &str, config_js: &str) {
    let dir = repo.join(name);
    std::fs::create_dir_all(&dir).expect("Failed to create module directory");
    std::fs::write(dir.join("module.json"), module_json).expect("Failed to write module.json");
    std::fs::write(dir.join("config.js"), config_js).expect("Failed to write config.js");
}

/// Build one registry repository entry
#[allow(dead_code)]
pub fn repo_entry(kind: &str, key: &str, value: &str) -> serde_json::Value {
    serde_json::json!({ "kind": kind, "config": { key: value } })
}
