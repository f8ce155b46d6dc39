//! Bootstrap a Django development environment
//!
//! # Process
//!
//! 0. **Preflight**: refuse to run over an existing `./<name>` directory
//! 1. **Dependencies**: upgrade pip, install `pyyaml` and `django`
//! 2. **Platform tools**: Chocolatey/Docker Desktop/gh on Windows, Homebrew elsewhere
//! 3. **Scaffold**: `django-admin startproject <name>`
//! 4. **Config files**: editor, dev container, compose, Dockerfile, CI, `.gitignore`
//! 5. **Finalize**: venv, dev tooling, `requirements.txt`, `git init`, `git add .`
//!
//! Every step is fatal: the first failure ends the run and nothing after it
//! executes. Nothing already done is rolled back, so a failed run leaves a
//! partial project behind and a re-run is refused by the preflight check.

pub mod dependencies;
pub mod finalize;
pub mod provision;
pub mod scaffold;

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::RunConfig;
use crate::dev_env;
use crate::process::CommandRunner;

pub use provision::ProvisionReport;

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct BootstrapSummary {
    pub project_root: PathBuf,
    pub provision: ProvisionReport,
    /// Config files written, in write order.
    pub files: Vec<PathBuf>,
}

/// Run the whole pipeline for `config`.
///
/// # Errors
///
/// Returns the first failure. When an external command failed, the chain
/// contains a [`crate::error::CommandError`] carrying its exit status.
pub fn execute(config: &RunConfig, runner: &dyn CommandRunner) -> Result<BootstrapSummary> {
    scaffold::ensure_target_free(config)?;

    println!("{}", "📦 Installing Python packages...".bold());
    dependencies::install_python_packages(config, runner)?;

    println!("\n{} ({})", "🔧 Checking platform tools".bold(), config.host());
    let provision = provision::provision(config.host(), runner)?;

    println!(
        "\n{} {}",
        "🏗️  Creating Django project:".bold(),
        config.project_name()
    );
    let project_root = scaffold::scaffold_project(config, runner)?;

    println!("\n{}", "📝 Writing configuration files...".bold());
    let files = dev_env::emit(config)?;
    for file in &files {
        let shown = file.strip_prefix(&project_root).unwrap_or(file.as_path());
        println!("   {} {}", "✓".green(), shown.display());
    }

    println!("\n{}", "🐍 Setting up virtual environment...".bold());
    finalize::finalize_environment(config, runner)?;

    println!(
        "\n{}",
        "✅ Docker Compose and Dev Container setup complete.".green().bold()
    );

    Ok(BootstrapSummary {
        project_root,
        provision,
        files,
    })
}
