//! Command-line surface checks that stop before any external tool runs.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bootstrap() -> Command {
    Command::new(env!("CARGO_BIN_EXE_devenv-bootstrap"))
}

#[test]
fn test_project_name_is_required() {
    bootstrap()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("<PROJECT_NAME>"));
}

#[test]
fn test_help_describes_project_name() {
    bootstrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name of the Django project"));
}

#[test]
fn test_empty_project_name_rejected() {
    let temp = TempDir::new().unwrap();
    bootstrap()
        .current_dir(temp.path())
        .arg("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn test_existing_project_directory_rejected() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("blog")).unwrap();

    bootstrap()
        .current_dir(temp.path())
        .arg("blog")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(std::fs::read_dir(temp.path().join("blog")).unwrap().count(), 0);
}
