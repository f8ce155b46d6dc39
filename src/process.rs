//! External command execution.
//!
//! Every external tool the bootstrap touches goes through [`CommandRunner`].
//! The three operations carry distinct failure policies:
//!
//! - [`CommandRunner::run`]: stdio inherited, any non-zero exit is an error
//! - [`CommandRunner::capture`]: stdout captured, any non-zero exit is an error
//! - [`CommandRunner::probe`]: never an error, only answers "is it there?"

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::CommandError;

/// A program, its arguments and the directory to run it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(dir) = &self.cwd {
            command.current_dir(dir);
        }
        command
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Executes external commands on behalf of the bootstrap pipeline.
pub trait CommandRunner {
    /// Run to completion with inherited stdio. A non-zero exit is an error.
    fn run(&self, invocation: &Invocation) -> Result<(), CommandError>;

    /// Run to completion and return stdout. A non-zero exit is an error.
    fn capture(&self, invocation: &Invocation) -> Result<String, CommandError>;

    /// True when the program is installed and the invocation exits successfully.
    fn probe(&self, invocation: &Invocation) -> bool;
}

/// Runs commands on the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), CommandError> {
        tracing::debug!(command = %invocation, cwd = ?invocation.cwd(), "running");

        let status = invocation
            .to_command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| CommandError::Spawn {
                command: invocation.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(CommandError::Failed {
                command: invocation.to_string(),
                code: status.code(),
            });
        }

        Ok(())
    }

    fn capture(&self, invocation: &Invocation) -> Result<String, CommandError> {
        tracing::debug!(command = %invocation, cwd = ?invocation.cwd(), "capturing");

        let output = invocation
            .to_command()
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| CommandError::Spawn {
                command: invocation.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(CommandError::Failed {
                command: invocation.to_string(),
                code: output.status.code(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| CommandError::InvalidOutput {
            command: invocation.to_string(),
        })
    }

    fn probe(&self, invocation: &Invocation) -> bool {
        if which::which(invocation.program()).is_err() {
            tracing::debug!(program = invocation.program(), "not found on PATH");
            return false;
        }

        let present = invocation
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false);

        if !present {
            tracing::warn!(command = %invocation, "version probe failed");
        }
        present
    }
}
