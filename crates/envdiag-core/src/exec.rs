//! External command execution.
//!
//! Every probe shells out through [`run`] or [`run_in`]. A command that
//! exits non-zero, or that cannot be started at all, still produces a
//! [`CommandResult`]. Interpretation is left to each call site, because
//! tools signal success differently (several print informational text to
//! stderr even when they succeed).

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::Command;

/// Captured outcome of one external command invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResult {
    /// Trimmed standard output.
    pub stdout: String,

    /// Trimmed standard error.
    pub stderr: String,

    /// Exit code (0 = success, -1 = could not start or killed by signal).
    pub exit_code: i32,
}

impl CommandResult {
    /// Whether the command ran and exited zero.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Run a command in the current working directory.
pub fn run(program: &str, args: &[&str]) -> CommandResult {
    run_in(program, args, None)
}

/// Run a command, in `dir` when given.
///
/// Both output streams are captured in full and never inherited by the
/// parent process. A spawn failure (typically a missing tool) is returned
/// as exit code -1 with the OS error text as stderr.
pub fn run_in(program: &str, args: &[&str], dir: Option<&Path>) -> CommandResult {
    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }

    match cmd.output() {
        Ok(output) => CommandResult {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            exit_code: output.status.code().unwrap_or(-1),
        },
        Err(e) => CommandResult {
            stdout: String::new(),
            stderr: e.to_string(),
            exit_code: -1,
        },
    }
}
