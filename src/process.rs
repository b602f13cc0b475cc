//! Process execution and executable lookup.
//!
//! Adapters never spawn processes directly; they go through the
//! `ProcessRunner` and `CommandChecker` handed to them in a `LintContext`,
//! so tests can swap in fakes.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::AdapterError;
use crate::result::RawToolOutput;

/// Options for a single command run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Working directory for the command.
    pub dir: PathBuf,
    /// Return non-zero exits as output instead of failing.
    pub ignore_errors: bool,
}

impl RunOptions {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            ignore_errors: false,
        }
    }

    pub fn ignore_errors(mut self, ignore: bool) -> Self {
        self.ignore_errors = ignore;
        self
    }
}

/// Runs shell commands.
pub trait ProcessRunner: Send + Sync {
    /// Run `command` through the shell.
    ///
    /// Fails with `AdapterError::Process` when `ignore_errors` is false and the
    /// exit status is non-zero.
    fn run(&self, command: &str, options: &RunOptions) -> Result<RawToolOutput, AdapterError>;
}

/// Reports whether an executable can be resolved.
pub trait CommandChecker: Send + Sync {
    fn exists(&self, name: &str) -> bool;
}

/// Runs commands with the platform shell and trims captured output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ProcessRunner for ShellRunner {
    fn run(&self, command: &str, options: &RunOptions) -> Result<RawToolOutput, AdapterError> {
        let mut cmd = shell_command(command);
        if !options.dir.as_os_str().is_empty() {
            cmd.current_dir(&options.dir);
        }

        let output = cmd.output().map_err(|source| AdapterError::Spawn {
            command: command.to_string(),
            source,
        })?;

        // Killed by a signal: no exit code to report.
        let status = output.status.code().unwrap_or(-1);
        let raw = RawToolOutput {
            status,
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        };

        if status != 0 && !options.ignore_errors {
            return Err(AdapterError::Process {
                command: command.to_string(),
                status,
                stderr: raw.stderr,
            });
        }

        Ok(raw)
    }
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", command]);
    cmd
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}

/// Resolves executables with `which`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathLookup;

impl CommandChecker for PathLookup {
    fn exists(&self, name: &str) -> bool {
        which::which(name).is_ok()
    }
}
