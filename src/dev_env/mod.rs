//! Generated project configuration
//!
//! Each file the bootstrap writes into a new project is a [`ConfigTemplate`]:
//! a relative path plus a pure render from [`RunConfig`]. Rendering never
//! touches the filesystem; [`write_artifacts`] does the writing.

pub mod devcontainer;
pub mod docker;
pub mod gitignore;
pub mod vscode;
pub mod workflow;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::RunConfig;
use crate::paths;

/// A configuration file rendered into the generated project.
pub trait ConfigTemplate {
    /// Location relative to the project root, `/`-separated.
    fn path(&self) -> &'static str;

    /// File contents for this run.
    fn render(&self, config: &RunConfig) -> Result<String>;
}

/// A rendered template, ready to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: &'static str,
    pub contents: String,
}

/// All templates, in the order they are written.
pub fn templates() -> Vec<Box<dyn ConfigTemplate>> {
    vec![
        Box::new(vscode::VsCodeSettings),
        Box::new(devcontainer::DevContainer),
        Box::new(docker::Compose),
        Box::new(docker::Dockerfile),
        Box::new(workflow::CiWorkflow),
        Box::new(gitignore::GitIgnore),
    ]
}

pub fn render_all(config: &RunConfig) -> Result<Vec<Artifact>> {
    templates()
        .iter()
        .map(|template| -> Result<Artifact> {
            let contents = template
                .render(config)
                .with_context(|| format!("Failed to render {}", template.path()))?;
            Ok(Artifact {
                path: template.path(),
                contents,
            })
        })
        .collect()
}

/// Write artifacts under `project_root`, creating parent directories.
pub fn write_artifacts(project_root: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(artifacts.len());

    for artifact in artifacts {
        let target = paths::in_project(project_root, artifact.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&target, &artifact.contents)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        tracing::debug!(path = %target.display(), "wrote");
        written.push(target);
    }

    Ok(written)
}

/// Render every template and write it into the project root.
pub fn emit(config: &RunConfig) -> Result<Vec<PathBuf>> {
    let artifacts = render_all(config)?;
    write_artifacts(&config.project_root(), &artifacts)
}
