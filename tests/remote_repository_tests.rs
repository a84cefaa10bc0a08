//! Remote repository wire contract tests against a local stub HTTP server

mod common;

use std::collections::HashMap;

use common::{TestProject, http::StubServer, repo_entry};
use predicates::prelude::*;

#[test]
fn test_install_from_remote_repository() {
    let server = StubServer::with_module(
        "lint",
        r#"{"goal": "validate", "tasks": ["do-lint-a"]}"#,
        "{ lint: { remote: true } }",
    );

    let project = TestProject::new();
    project.register_repos(&[repo_entry("remote", "url", server.url())]);
    project.init_gruntfile();

    project
        .cmd()
        .args(["install", "lint"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("remote:{}", server.url())));

    let gruntfile = project.gruntfile();
    assert!(gruntfile.contains("grunt.registerTask(\"do-lint\", [\"do-lint-a\"]);"));
    assert!(gruntfile.contains("merge(config, { lint: { remote: true } });"));
}

#[test]
fn test_remote_404_continues_to_next_repository() {
    // Empty server: every probe answers 404.
    let server = StubServer::start(HashMap::new());

    let project = TestProject::new();
    project.add_module("lint", r#"{"goal": "validate", "tasks": ["do-lint-a"]}"#, "{}");
    project.register_repos(&[
        repo_entry("remote", "url", server.url()),
        repo_entry("local", "path", project.repo.path().to_str().unwrap()),
    ]);
    project.init_gruntfile();

    project
        .cmd()
        .args(["install", "lint"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Module lint installed successfully"));
}

#[test]
fn test_remote_404_everywhere_is_not_found() {
    let server = StubServer::start(HashMap::new());

    let project = TestProject::new();
    project.register_repos(&[repo_entry("remote", "url", server.url())]);
    project.init_gruntfile();

    project
        .cmd()
        .args(["install", "lint"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ERROR: Module lint not found"));
}

#[test]
fn test_remote_server_error_aborts_search() {
    let mut routes = HashMap::new();
    routes.insert("/lint/module.json".to_string(), (500, String::new()));
    let server = StubServer::start(routes);

    // A later repository has the module, but the transport error must
    // propagate instead of being coerced into "not found".
    let project = TestProject::new();
    project.add_module("lint", r#"{"goal": "validate", "tasks": ["do-lint-a"]}"#, "{}");
    project.register_repos(&[
        repo_entry("remote", "url", server.url()),
        repo_entry("local", "path", project.repo.path().to_str().unwrap()),
    ]);
    project.init_gruntfile();

    project
        .cmd()
        .args(["install", "lint"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transport error"))
        .stderr(predicate::str::contains("server returned status 500"));

    assert_eq!(project.gruntfile(), common::TEMPLATE);
}

#[test]
fn test_unreachable_remote_is_transport_error() {
    let project = TestProject::new();
    project.register_repos(&[repo_entry("remote", "url", "http://127.0.0.1:1")]);
    project.init_gruntfile();

    project
        .cmd()
        .args(["install", "lint"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ERROR: Transport error"));
}

#[test]
fn test_remote_malformed_metadata_is_parse_error() {
    let server = StubServer::with_module("lint", "not json at all", "{}");

    let project = TestProject::new();
    project.register_repos(&[repo_entry("remote", "url", server.url())]);
    project.init_gruntfile();

    project
        .cmd()
        .args(["install", "lint"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse module metadata"));
}
