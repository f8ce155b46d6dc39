//! Typed failures for external commands.
//!
//! Everything else in the crate propagates `anyhow::Error`; a `CommandError`
//! sits at the root of the chain whenever a child process was the cause, so
//! the binary can exit with the same status the failing tool returned.

use thiserror::Error;

/// An external command that could not be started or exited unsuccessfully.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The program could not be spawned (usually: not on `PATH`).
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran and exited with a non-zero status, or was killed.
    #[error("`{command}` {}", describe_status(.code))]
    Failed { command: String, code: Option<i32> },

    /// The program succeeded but its stdout was not valid UTF-8.
    #[error("`{command}` produced non UTF-8 output")]
    InvalidOutput { command: String },
}

impl CommandError {
    /// Status the process should exit with when this error ends the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Failed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn describe_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

/// Exit status for an error that ended the run.
///
/// Uses the status of the first [`CommandError`] found in the chain, and `1`
/// for every other failure.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<CommandError>())
        .map_or(1, CommandError::exit_code)
}
