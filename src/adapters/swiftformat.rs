//! SwiftFormat by Nick Lockwood (`swiftformat`).
//!
//! In `--lint` mode problems are written to stderr, one per line:
//! `/path/file.swift:12:1: warning: (indent) Indent code in accordance with the scope level.`

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{build_command, run_tool, Adapter, LintContext};
use crate::error::AdapterError;
use crate::output::relative_path;
use crate::result::{Finding, LintResult, RawToolOutput, Severity};

const NAME: &str = "SwiftFormat";

static PROBLEM_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?):(\d+):\d+: (warning|error): (.*)$").expect("valid swiftformat regex")
});

/// Adapter for `swiftformat`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwiftFormatLockwood;

impl Adapter for SwiftFormatLockwood {
    fn name(&self) -> &'static str {
        NAME
    }

    fn executable(&self) -> &'static str {
        "swiftformat"
    }

    fn version_command(&self) -> &'static str {
        "swiftformat --version"
    }

    fn default_extensions(&self) -> &'static [&'static str] {
        &["swift"]
    }

    fn lint(
        &self,
        ctx: &LintContext<'_>,
        dir: &Path,
        _extensions: &[String],
        args: &str,
        fix: bool,
        prefix: &str,
    ) -> Result<RawToolOutput, AdapterError> {
        let lint_arg = if fix { "" } else { "--lint" };
        let command = build_command(&[prefix, "swiftformat", lint_arg, args, "\".\""]);
        run_tool(ctx, NAME, dir, &command)
    }

    fn parse_output(&self, dir: &Path, output: &RawToolOutput) -> Result<LintResult, AdapterError> {
        let mut result = LintResult::new();

        for line in output.stderr.lines() {
            let Some(caps) = PROBLEM_LINE.captures(line.trim_end()) else {
                continue;
            };
            let line_no: usize = caps[2]
                .parse()
                .map_err(|e| AdapterError::parse(NAME, format!("line number in {:?}: {}", line, e)))?;
            // Formatting differences fail the run whatever level they are printed at.
            result.push(
                Severity::Error,
                Finding::at_line(relative_path(dir, &caps[1]), line_no, &caps[4]),
            );
        }

        result.is_success = output.succeeded();
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stderr_lines() {
        let output = RawToolOutput {
            status: 1,
            stdout: String::new(),
            stderr: "Running SwiftFormat...\n\
                     /repo/file1.swift:3:1: warning: (indent) Indent code in accordance with the scope level.\n\
                     /repo/file1.swift:5:1: warning: (trailingSpace) Remove trailing space at end of a line.\n\
                     SwiftFormat completed in 0.01s."
                .to_string(),
        };
        let result = SwiftFormatLockwood
            .parse_output(Path::new("/repo"), &output)
            .unwrap();

        assert!(!result.is_success);
        assert_eq!(result.error.len(), 2);
        assert_eq!(result.error[0].path, "file1.swift");
        assert_eq!(result.error[0].first_line, 3);
        assert_eq!(
            result.error[0].message,
            "(indent) Indent code in accordance with the scope level."
        );
    }
}
