//! Adapters for external linters and formatters.
//!
//! Each adapter knows how to verify that its tool is installed, how to build
//! the tool's command line, and how to read the tool's output grammar:
//!
//! - `ApiLinter`: YAML stanzas, discovers `.proto` files itself
//! - `EsLint`: JSON report with warning/error severities
//! - `Flake8`: `path:line:col: CODE message` lines
//! - `Black`, `Gofmt`: unified diffs
//! - `Prettier`: list of files that need formatting
//! - `SwiftFormatLockwood`: `path:line:col: level: message` lines on stderr
//!
//! # Adding a New Adapter
//!
//! Implement `Adapter` in a new module and add an entry to the table in
//! `registry.rs`.

mod api_linter;
mod black;
mod eslint;
mod flake8;
mod gofmt;
mod prettier;
mod swiftformat;
mod traits;

pub use api_linter::ApiLinter;
pub use black::Black;
pub use eslint::EsLint;
pub use flake8::Flake8;
pub use gofmt::Gofmt;
pub use prettier::Prettier;
pub use swiftformat::SwiftFormatLockwood;
pub use traits::Adapter;

use std::path::Path;

use globset::{Glob, GlobMatcher};
use walkdir::WalkDir;

use crate::error::AdapterError;
use crate::observe::{LintObserver, TracingObserver};
use crate::process::{CommandChecker, PathLookup, ProcessRunner, RunOptions, ShellRunner};
use crate::result::RawToolOutput;

/// Collaborators an adapter needs to talk to the outside world.
#[derive(Clone, Copy)]
pub struct LintContext<'a> {
    pub runner: &'a dyn ProcessRunner,
    pub commands: &'a dyn CommandChecker,
    pub observer: &'a dyn LintObserver,
}

impl<'a> LintContext<'a> {
    pub fn new(
        runner: &'a dyn ProcessRunner,
        commands: &'a dyn CommandChecker,
        observer: &'a dyn LintObserver,
    ) -> Self {
        Self {
            runner,
            commands,
            observer,
        }
    }
}

impl LintContext<'static> {
    /// Real shell, `PATH` lookup, and `tracing` output.
    pub fn system() -> Self {
        static RUNNER: ShellRunner = ShellRunner;
        static COMMANDS: PathLookup = PathLookup;
        static OBSERVER: TracingObserver = TracingObserver;
        Self::new(&RUNNER, &COMMANDS, &OBSERVER)
    }
}

/// Join non-empty command parts with single spaces.
pub fn build_command(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Wrap a path in double quotes for the shell.
pub fn quote_arg(arg: &str) -> String {
    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Comma-separated extension list with a leading dot on each entry.
pub(crate) fn dotted_extensions(extensions: &[String]) -> String {
    extensions
        .iter()
        .map(|e| format!(".{}", e.trim_start_matches('.')))
        .collect::<Vec<_>>()
        .join(",")
}

/// Run a lint command with non-zero exits treated as regular output.
pub(crate) fn run_tool(
    ctx: &LintContext<'_>,
    adapter: &str,
    dir: &Path,
    command: &str,
) -> Result<RawToolOutput, AdapterError> {
    ctx.observer.command_built(adapter, command);
    let output = ctx
        .runner
        .run(command, &RunOptions::new(dir).ignore_errors(true))?;
    ctx.observer.raw_output(adapter, &output);
    Ok(output)
}

/// Recursively collect files under `dir` matching `pattern`.
///
/// Hidden files and directories are skipped, and symlinked directories are
/// not entered. Entries below `dir` that cannot be read are skipped. Paths are
/// relative to `dir`, use `/` separators, and are sorted.
pub(crate) fn discover_files(dir: &Path, pattern: &str) -> Result<Vec<String>, AdapterError> {
    let matcher: GlobMatcher = Glob::new(pattern)
        .map_err(|e| AdapterError::Discovery {
            dir: dir.display().to_string(),
            reason: e.to_string(),
        })?
        .compile_matcher();

    let root = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(AdapterError::Discovery {
                    dir: root.display().to_string(),
                    reason: e.to_string(),
                });
            }
            Err(e) => {
                tracing::debug!(target: "lintbridge", error = %e, "skipping unreadable entry");
                continue;
            }
        };
        // Symlinks to files count; symlinks to directories are not walked.
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(root) else {
            continue;
        };
        let rel = rel.to_string_lossy().replace('\\', "/");
        if matcher.is_match(&rel) {
            files.push(rel);
        }
    }

    files.sort();
    Ok(files)
}
