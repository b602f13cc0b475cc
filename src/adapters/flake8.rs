//! Flake8 for Python.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{build_command, quote_arg, run_tool, Adapter, LintContext};
use crate::error::AdapterError;
use crate::output::relative_path;
use crate::result::{Finding, LintResult, RawToolOutput, Severity};

const NAME: &str = "Flake8";

/// `path:line:column: CODE message`
static PROBLEM_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?):(\d+):\d+: (\w+) (.*)$").expect("valid flake8 regex")
});

/// Adapter for `flake8`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flake8;

impl Adapter for Flake8 {
    fn name(&self) -> &'static str {
        NAME
    }

    fn executable(&self) -> &'static str {
        "flake8"
    }

    fn version_command(&self) -> &'static str {
        "flake8 --version"
    }

    fn default_extensions(&self) -> &'static [&'static str] {
        &["py"]
    }

    fn lint(
        &self,
        ctx: &LintContext<'_>,
        dir: &Path,
        extensions: &[String],
        args: &str,
        _fix: bool,
        prefix: &str,
    ) -> Result<RawToolOutput, AdapterError> {
        // flake8 only reports; fix mode lints as usual.
        let patterns = extensions
            .iter()
            .map(|e| format!("*.{}", e.trim_start_matches('.')))
            .collect::<Vec<_>>()
            .join(",");
        let filename_arg = format!("--filename {}", quote_arg(&patterns));
        let command = build_command(&[prefix, "flake8", &filename_arg, args, "\".\""]);
        run_tool(ctx, NAME, dir, &command)
    }

    fn parse_output(&self, dir: &Path, output: &RawToolOutput) -> Result<LintResult, AdapterError> {
        let mut result = LintResult::new();

        for line in output.stdout.lines() {
            let Some(caps) = PROBLEM_LINE.captures(line.trim_end()) else {
                continue;
            };
            let line_no: usize = caps[2]
                .parse()
                .map_err(|e| AdapterError::parse(NAME, format!("line number in {:?}: {}", line, e)))?;
            result.push(
                Severity::Error,
                Finding::at_line(
                    relative_path(dir, &caps[1]),
                    line_no,
                    format!("{} ({})", &caps[4], &caps[3]),
                ),
            );
        }

        result.is_success = output.succeeded();
        Ok(result)
    }
}
