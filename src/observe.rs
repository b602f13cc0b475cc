//! Observation hooks called by adapters at fixed points.
//!
//! Adapters report what they are doing through a `LintObserver` instead of
//! writing to the console. The default `TracingObserver` turns each hook into
//! a `tracing` event; tests use recording observers.

use std::path::Path;

use crate::error::AdapterError;
use crate::result::RawToolOutput;

/// Receives progress notifications from adapters.
///
/// Every hook has an empty default so implementations only override what
/// they care about.
pub trait LintObserver: Send + Sync {
    /// `verify_setup` is about to fail.
    fn setup_failed(&self, _adapter: &str, _error: &AdapterError) {}

    /// Self-discovery matched these files (relative to the lint root).
    fn files_discovered(&self, _adapter: &str, _dir: &Path, _files: &[String]) {}

    /// Self-discovery matched nothing, so the tool will not run.
    fn no_files_matched(&self, _adapter: &str, _dir: &Path) {}

    /// A command line was built and is about to run.
    fn command_built(&self, _adapter: &str, _command: &str) {}

    /// The tool finished and produced raw output.
    fn raw_output(&self, _adapter: &str, _output: &RawToolOutput) {}
}

/// Ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl LintObserver for NullObserver {}

/// Emits each notification as a `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl LintObserver for TracingObserver {
    fn setup_failed(&self, adapter: &str, error: &AdapterError) {
        tracing::error!(target: "lintbridge", adapter, error = %error, "setup verification failed");
    }

    fn files_discovered(&self, adapter: &str, dir: &Path, files: &[String]) {
        tracing::debug!(
            target: "lintbridge",
            adapter,
            dir = %dir.display(),
            count = files.len(),
            files = ?files,
            "matched files"
        );
    }

    fn no_files_matched(&self, adapter: &str, dir: &Path) {
        tracing::info!(
            target: "lintbridge",
            adapter,
            dir = %dir.display(),
            "no matching files, skipping tool invocation"
        );
    }

    fn command_built(&self, adapter: &str, command: &str) {
        tracing::debug!(target: "lintbridge", adapter, command, "running command");
    }

    fn raw_output(&self, adapter: &str, output: &RawToolOutput) {
        tracing::debug!(
            target: "lintbridge",
            adapter,
            status = output.status,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "tool finished"
        );
        if !output.stderr.is_empty() {
            tracing::trace!(target: "lintbridge", adapter, stderr = %output.stderr);
        }
    }
}
