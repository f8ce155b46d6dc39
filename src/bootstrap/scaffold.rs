use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::RunConfig;
use crate::process::{CommandRunner, Invocation};

/// Refuse to run over an existing project directory.
///
/// Bootstrapping is not idempotent: a second run would re-scaffold into a
/// populated tree. Checked before any command runs.
pub fn ensure_target_free(config: &RunConfig) -> Result<()> {
    let root = config.project_root();
    if root.exists() {
        anyhow::bail!(
            "Project directory already exists: {} (remove it or pick another name)",
            root.display()
        );
    }
    Ok(())
}

/// `django-admin startproject <name>` in the base directory.
///
/// Returns the new project root, which every later step is rooted at.
pub fn scaffold_project(config: &RunConfig, runner: &dyn CommandRunner) -> Result<PathBuf> {
    let invocation = Invocation::new("django-admin")
        .args(["startproject", config.project_name()])
        .current_dir(config.base_dir());

    runner
        .run(&invocation)
        .with_context(|| format!("Failed to create Django project '{}'", config.project_name()))?;

    let root = config.project_root();
    if !root.is_dir() {
        anyhow::bail!(
            "django-admin succeeded but {} was not created",
            root.display()
        );
    }

    Ok(root)
}
