//! The contract every tool adapter implements.

use std::path::Path;

use super::LintContext;
use crate::error::AdapterError;
use crate::process::RunOptions;
use crate::result::{LintResult, RawToolOutput};

/// Wraps one external linter or formatter.
///
/// Adapters are stateless: every call receives its collaborators through a
/// `LintContext`, so one static instance can serve concurrent runs.
///
/// # Fix mode
///
/// Adapters that rewrite files must not be run concurrently against the same
/// directory. The `Runner` serializes format adapters; callers driving
/// adapters directly are responsible for doing the same.
pub trait Adapter: Send + Sync {
    /// Display name used in errors and reports (e.g., "ESLint").
    fn name(&self) -> &'static str;

    /// Executable that must be on `PATH` for the tool to work.
    fn executable(&self) -> &'static str;

    /// Cheap command proving the tool runs (e.g., `flake8 --version`).
    fn version_command(&self) -> &'static str;

    /// Extensions linted when the caller does not configure any (without dot).
    fn default_extensions(&self) -> &'static [&'static str];

    /// Confirm the tool is installed and answers its version probe in `dir`.
    fn verify_setup(
        &self,
        ctx: &LintContext<'_>,
        dir: &Path,
        prefix: &str,
    ) -> Result<(), AdapterError> {
        let result = probe(self, ctx, dir, prefix);
        if let Err(e) = &result {
            ctx.observer.setup_failed(self.name(), e);
        }
        result
    }

    /// Run the tool and return its raw output without interpreting it.
    fn lint(
        &self,
        ctx: &LintContext<'_>,
        dir: &Path,
        extensions: &[String],
        args: &str,
        fix: bool,
        prefix: &str,
    ) -> Result<RawToolOutput, AdapterError>;

    /// Normalize raw output into a `LintResult`.
    ///
    /// Must be pure: the same input always yields the same result.
    fn parse_output(&self, dir: &Path, output: &RawToolOutput) -> Result<LintResult, AdapterError>;
}

fn probe<A: Adapter + ?Sized>(
    adapter: &A,
    ctx: &LintContext<'_>,
    dir: &Path,
    prefix: &str,
) -> Result<(), AdapterError> {
    if !ctx.commands.exists(adapter.executable()) {
        return Err(AdapterError::setup(
            adapter.name(),
            format!("`{}` was not found on PATH", adapter.executable()),
        ));
    }

    let command = super::build_command(&[prefix, adapter.version_command()]);
    ctx.runner
        .run(&command, &RunOptions::new(dir))
        .map(|_| ())
        .map_err(|e| AdapterError::setup(adapter.name(), format!("`{}` failed: {}", command, e)))
}
