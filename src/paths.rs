//! Single source of truth for the generated project layout.
//!
//! This module defines WHERE things land. It has no I/O.
//!
//! ```text
//! <project>/
//! ├── .vscode/settings.json
//! ├── .devcontainer/devcontainer.json
//! ├── .github/workflows/main.yml
//! ├── docker-compose.yml
//! ├── Dockerfile
//! ├── .gitignore
//! ├── requirements.txt
//! └── venv/                    # isolated Python environment
//! ```

use std::path::{Path, PathBuf};

use crate::environment::HostOs;

pub const VSCODE_SETTINGS: &str = ".vscode/settings.json";
pub const DEVCONTAINER: &str = ".devcontainer/devcontainer.json";
pub const DOCKER_COMPOSE: &str = "docker-compose.yml";
pub const DOCKERFILE: &str = "Dockerfile";
pub const CI_WORKFLOW: &str = ".github/workflows/main.yml";
pub const GITIGNORE: &str = ".gitignore";
pub const REQUIREMENTS: &str = "requirements.txt";

/// Virtual environment directory, relative to the project root.
pub const VENV_DIR: &str = "venv";

/// Interpreter inside the project's virtual environment.
pub fn venv_python(project_root: &Path, host: HostOs) -> PathBuf {
    let venv = project_root.join(VENV_DIR);
    match host {
        HostOs::Windows => venv.join("Scripts").join("python.exe"),
        HostOs::Unix => venv.join("bin").join("python"),
    }
}

/// Resolve a layout entry such as [`DOCKER_COMPOSE`] under the project root.
pub fn in_project(project_root: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .fold(project_root.to_path_buf(), |path, part| path.join(part))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venv_python_per_host() {
        let root = Path::new("blog");
        assert_eq!(
            venv_python(root, HostOs::Unix),
            Path::new("blog").join("venv").join("bin").join("python")
        );
        assert_eq!(
            venv_python(root, HostOs::Windows),
            Path::new("blog")
                .join("venv")
                .join("Scripts")
                .join("python.exe")
        );
    }

    #[test]
    fn test_in_project_splits_nested_entries() {
        let path = in_project(Path::new("blog"), CI_WORKFLOW);
        assert_eq!(
            path,
            Path::new("blog")
                .join(".github")
                .join("workflows")
                .join("main.yml")
        );
    }
}
