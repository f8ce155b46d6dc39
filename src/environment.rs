use std::env;
use std::fmt;

use crate::process::{CommandRunner, Invocation};

/// Host operating system family. Only the Windows/other split matters here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Windows,
    Unix,
}

impl HostOs {
    pub fn current() -> Self {
        if cfg!(windows) {
            HostOs::Windows
        } else {
            HostOs::Unix
        }
    }

    pub fn is_windows(self) -> bool {
        self == HostOs::Windows
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostOs::Windows => write!(f, "windows ({})", env::consts::ARCH),
            HostOs::Unix => write!(f, "{} ({})", env::consts::OS, env::consts::ARCH),
        }
    }
}

/// A tool and the arguments that make it print its version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolProbe {
    pub name: &'static str,
    pub version_args: &'static [&'static str],
}

impl ToolProbe {
    pub const fn new(name: &'static str, version_args: &'static [&'static str]) -> Self {
        Self { name, version_args }
    }

    pub fn invocation(&self) -> Invocation {
        Invocation::new(self.name).args(self.version_args.iter().copied())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolStatus {
    pub name: String,
    pub available: bool,
}

/// Probe each tool in order. A failed probe is a status, not an error.
pub fn detect_tools(runner: &dyn CommandRunner, probes: &[ToolProbe]) -> Vec<ToolStatus> {
    probes
        .iter()
        .map(|probe| ToolStatus {
            name: probe.name.to_string(),
            available: runner.probe(&probe.invocation()),
        })
        .collect()
}
