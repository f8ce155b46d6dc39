//! Platform tools: Chocolatey, Docker and the GitHub CLI.
//!
//! Windows probes first and runs a single elevated installer only when
//! something is missing. Other hosts always run one Homebrew install.
//! Installer failures are fatal; probe failures only pick the branch.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::environment::{detect_tools, HostOs, ToolProbe, ToolStatus};
use crate::process::{CommandRunner, Invocation};

pub const WINDOWS_PROBES: &[ToolProbe] = &[
    ToolProbe::new("choco", &["-v"]),
    ToolProbe::new("docker", &["-v"]),
    ToolProbe::new("gh", &["--version"]),
];

const CHOCOLATEY_BOOTSTRAP: &str = "Set-ExecutionPolicy Bypass -Scope Process -Force; \
     iex ((New-Object System.Net.WebClient).DownloadString('https://chocolatey.org/install.ps1'))";

const CHOCO_INSTALL: &str = "choco install docker-desktop gh -y";

pub const BREW_PACKAGES: &[&str] = &["docker", "docker-compose", "gh"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
    pub host: HostOs,
    /// Probe results; empty when the host does not probe.
    pub tools: Vec<ToolStatus>,
    /// Rendered installer command, if one ran.
    pub installer: Option<String>,
}

pub fn provision(host: HostOs, runner: &dyn CommandRunner) -> Result<ProvisionReport> {
    match host {
        HostOs::Windows => provision_windows(runner),
        HostOs::Unix => provision_unix(runner),
    }
}

fn provision_windows(runner: &dyn CommandRunner) -> Result<ProvisionReport> {
    let tools = detect_tools(runner, WINDOWS_PROBES);
    display_tool_status(&tools);

    if tools.iter().all(|t| t.available) {
        return Ok(ProvisionReport {
            host: HostOs::Windows,
            tools,
            installer: None,
        });
    }

    let choco_missing = tools.iter().any(|t| t.name == "choco" && !t.available);
    if choco_missing {
        println!("   Chocolatey not found, it will be installed first");
    }
    println!("   Installing Docker Desktop and GitHub CLI (elevated)...");

    let installer = windows_installer(choco_missing);
    runner
        .run(&installer)
        .context("Failed to install Docker Desktop and GitHub CLI")?;
    println!("   {} Docker Desktop and GitHub CLI installed", "✓".green().bold());

    Ok(ProvisionReport {
        host: HostOs::Windows,
        tools,
        installer: Some(installer.to_string()),
    })
}

fn provision_unix(runner: &dyn CommandRunner) -> Result<ProvisionReport> {
    let installer = Invocation::new("brew")
        .arg("install")
        .args(BREW_PACKAGES.iter().copied());

    runner
        .run(&installer)
        .with_context(|| format!("Failed to install {}", BREW_PACKAGES.join(", ")))?;

    Ok(ProvisionReport {
        host: HostOs::Unix,
        tools: Vec::new(),
        installer: Some(installer.to_string()),
    })
}

/// One elevated PowerShell that optionally bootstraps Chocolatey, then always
/// installs Docker Desktop and gh together. Waits for the elevated process and
/// exits with its status. A declined UAC prompt or failed launch stops the
/// wrapper with a non-zero status.
pub fn windows_installer(include_chocolatey: bool) -> Invocation {
    let script = if include_chocolatey {
        format!("{CHOCOLATEY_BOOTSTRAP}; {CHOCO_INSTALL}")
    } else {
        CHOCO_INSTALL.to_string()
    };

    let elevated = format!(
        "$ErrorActionPreference = 'Stop'; \
         $p = Start-Process -Verb RunAs -Wait -PassThru -FilePath 'powershell.exe' \
         -ArgumentList {}; if (-not $p) {{ exit 1 }}; exit $p.ExitCode",
        powershell_quote(&format!("-NoProfile -Command {script}"))
    );

    Invocation::new("powershell").args(["-NoProfile", "-Command", elevated.as_str()])
}

/// Single-quoted PowerShell literal.
fn powershell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn display_tool_status(tools: &[ToolStatus]) {
    for tool in tools {
        let status = if tool.available {
            "✓".green().bold()
        } else {
            "✗".red().bold()
        };
        println!("   {status} {}", tool.name);
    }
}
