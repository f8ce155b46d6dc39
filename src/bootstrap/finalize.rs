use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::RunConfig;
use crate::paths;
use crate::process::{CommandRunner, Invocation};

/// Development tooling installed into the project's virtual environment.
pub const DEV_PACKAGES: &[&str] = &[
    "django",
    "django-rest-framework",
    "Sphinx",
    "flake8",
    "pytest",
    "pylint",
    "black",
];

/// venv, dev tooling, `requirements.txt`, then `git init` and `git add .`.
///
/// Each step is fatal; nothing after a failing step runs.
pub fn finalize_environment(config: &RunConfig, runner: &dyn CommandRunner) -> Result<()> {
    let root = config.project_root();
    let venv_python = config.venv_python().to_string_lossy().into_owned();

    runner
        .run(
            &Invocation::new(config.python())
                .args(["-m", "venv", paths::VENV_DIR])
                .current_dir(&root),
        )
        .context("Failed to create virtual environment")?;

    runner
        .run(
            &Invocation::new(venv_python.as_str())
                .args(["-m", "pip", "install"])
                .args(DEV_PACKAGES.iter().copied())
                .current_dir(&root),
        )
        .context("Failed to install development packages")?;

    write_requirements(&root, runner, &venv_python)?;

    init_repository(&root, runner)
}

/// `pip freeze` from the venv into `requirements.txt`.
fn write_requirements(root: &Path, runner: &dyn CommandRunner, venv_python: &str) -> Result<()> {
    let frozen = runner
        .capture(
            &Invocation::new(venv_python)
                .args(["-m", "pip", "freeze"])
                .current_dir(root),
        )
        .context("Failed to freeze dependencies")?;

    let target = root.join(paths::REQUIREMENTS);
    fs::write(&target, frozen).with_context(|| format!("Failed to write {}", target.display()))
}

fn init_repository(root: &Path, runner: &dyn CommandRunner) -> Result<()> {
    runner
        .run(&Invocation::new("git").arg("init").current_dir(root))
        .context("Failed to initialize git repository")?;

    runner
        .run(&Invocation::new("git").args(["add", "."]).current_dir(root))
        .context("Failed to stage changes")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::HostOs;
    use crate::error::exit_code;
    use crate::process::testing::RecordingRunner;
    use tempfile::TempDir;

    fn project(temp: &TempDir) -> Result<RunConfig> {
        let config = RunConfig::new("blog", temp.path(), HostOs::Unix)?;
        fs::create_dir(config.project_root())?;
        Ok(config)
    }

    #[test]
    fn test_finalize_runs_in_order() -> Result<()> {
        let temp = TempDir::new()?;
        let config = project(&temp)?;
        let runner = RecordingRunner::new().stdout("Django==5.0\nblack==24.1.0\n");

        finalize_environment(&config, &runner)?;

        let venv_python = config.venv_python().to_string_lossy().into_owned();
        assert_eq!(
            runner.calls(),
            vec![
                "python -m venv venv".to_string(),
                format!(
                    "{venv_python} -m pip install django django-rest-framework Sphinx flake8 pytest pylint black"
                ),
                format!("{venv_python} -m pip freeze"),
                "git init".to_string(),
                "git add .".to_string(),
            ]
        );
        assert_eq!(
            fs::read_to_string(config.project_root().join("requirements.txt"))?,
            "Django==5.0\nblack==24.1.0\n"
        );
        Ok(())
    }

    #[test]
    fn test_failed_install_skips_freeze_and_git() -> Result<()> {
        let temp = TempDir::new()?;
        let config = project(&temp)?;
        let venv_python = config.venv_python().to_string_lossy().into_owned();
        let runner = RecordingRunner::new().failing(&format!("{venv_python} -m pip install"), 4);

        let err = finalize_environment(&config, &runner).unwrap_err();

        assert_eq!(exit_code(&err), 4);
        assert_eq!(runner.calls().len(), 2);
        assert!(!config.project_root().join("requirements.txt").exists());
        Ok(())
    }
}
