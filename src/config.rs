use anyhow::{Context, Result};
use std::env;
use std::path::{self, Path, PathBuf};

use crate::environment::HostOs;
use crate::paths;

/// Interpreter override, e.g. `DEVENV_PYTHON=python3`.
pub const PYTHON_ENV: &str = "DEVENV_PYTHON";

/// Log filter, e.g. `DEVENV_LOG=debug`.
pub const LOG_ENV: &str = "DEVENV_LOG";

pub const DEFAULT_PYTHON: &str = "python";

/// Everything one bootstrap run needs, fixed before the first command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    project_name: String,
    base_dir: PathBuf,
    host: HostOs,
    python: String,
}

impl RunConfig {
    /// Build a config rooted at `base_dir`, made absolute against the current
    /// directory so child processes running inside the project still resolve
    /// the venv interpreter.
    ///
    /// The project name is used verbatim; the only check is that it is not
    /// empty. Anything else is left to `django-admin`.
    pub fn new(
        project_name: impl Into<String>,
        base_dir: impl Into<PathBuf>,
        host: HostOs,
    ) -> Result<Self> {
        let project_name = project_name.into();
        if project_name.is_empty() {
            anyhow::bail!("Project name must not be empty");
        }

        let base_dir = base_dir.into();
        let base_dir = path::absolute(&base_dir)
            .with_context(|| format!("Failed to resolve {}", base_dir.display()))?;

        Ok(Self {
            project_name,
            base_dir,
            host,
            python: DEFAULT_PYTHON.to_string(),
        })
    }

    /// Config for the current process: working directory, host OS and
    /// `DEVENV_PYTHON`.
    pub fn from_env(project_name: impl Into<String>) -> Result<Self> {
        let base_dir = env::current_dir().context("Failed to read current directory")?;
        Ok(Self::new(project_name, base_dir, HostOs::current())?.with_python(python_from_env()))
    }

    pub fn with_python(mut self, python: impl Into<String>) -> Self {
        self.python = python.into();
        self
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn host(&self) -> HostOs {
        self.host
    }

    pub fn python(&self) -> &str {
        &self.python
    }

    /// Directory `django-admin startproject` creates; root of every later step.
    pub fn project_root(&self) -> PathBuf {
        self.base_dir.join(&self.project_name)
    }

    pub fn venv_python(&self) -> PathBuf {
        paths::venv_python(&self.project_root(), self.host)
    }
}

/// Interpreter named by `DEVENV_PYTHON`, or `python`.
pub fn python_from_env() -> String {
    env::var(PYTHON_ENV)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_PYTHON.to_string())
}
