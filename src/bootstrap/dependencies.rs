use anyhow::{Context, Result};

use crate::config::RunConfig;
use crate::process::{CommandRunner, Invocation};

/// Libraries installed into the host interpreter before anything else.
pub const BASELINE_PACKAGES: &[&str] = &["pyyaml", "django"];

/// Upgrade pip, then install the baseline packages (django provides `django-admin`).
pub fn install_python_packages(config: &RunConfig, runner: &dyn CommandRunner) -> Result<()> {
    let pip = || Invocation::new(config.python()).args(["-m", "pip", "install"]);

    runner
        .run(&pip().args(["--upgrade", "pip"]))
        .context("Failed to upgrade pip")?;

    runner
        .run(&pip().args(BASELINE_PACKAGES.iter().copied()))
        .with_context(|| format!("Failed to install {}", BASELINE_PACKAGES.join(", ")))?;

    Ok(())
}
