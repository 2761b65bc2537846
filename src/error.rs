//! Error taxonomy for the bootstrap sequence.
//!
//! Three failure classes: a missing toolchain (precondition, exit 1),
//! a delegated command failing (its exit code is propagated verbatim),
//! and an unresolvable home directory (strict-mode analog, exit 1).

use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    /// The build toolchain is not resolvable on the search path.
    #[error("cargo is required to build {tool}, and is not installed")]
    ToolchainMissing { tool: String },

    /// The toolchain is present but older than the configured minimum.
    #[error("cargo {installed} does not satisfy the requirement {requirement}")]
    ToolchainTooOld {
        installed: String,
        requirement: String,
    },

    /// A delegated build or install command exited non-zero.
    #[error("`{command}` exited with {status}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
    },

    /// No CARGO_HOME and the user home directory cannot be determined.
    #[error("cannot determine the user home directory and CARGO_HOME is not set")]
    HomeDirUnavailable,
}

impl SetupError {
    /// Process exit code this failure maps to. Delegated command
    /// failures propagate the child's own code; a signal-terminated
    /// child has no code and maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            SetupError::CommandFailed { status, .. } => status.code().unwrap_or(1),
            _ => 1,
        }
    }
}
