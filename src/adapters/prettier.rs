//! Prettier, run through `npx`.
//!
//! With `--list-different` Prettier prints one path per line for every file
//! whose formatting differs. It gives no line information, so each file is
//! reported as a single finding at line 1.

use std::path::Path;

use super::{build_command, quote_arg, run_tool, Adapter, LintContext};
use crate::error::AdapterError;
use crate::output::relative_path;
use crate::result::{Finding, LintResult, RawToolOutput, Severity};

const NAME: &str = "Prettier";
const MESSAGE: &str =
    "There are issues with this file's formatting, please run Prettier to fix the errors";

/// Adapter for `prettier`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prettier;

impl Adapter for Prettier {
    fn name(&self) -> &'static str {
        NAME
    }

    fn executable(&self) -> &'static str {
        "npx"
    }

    fn version_command(&self) -> &'static str {
        "npx --no-install prettier --version"
    }

    fn default_extensions(&self) -> &'static [&'static str] {
        &["css", "html", "js", "json", "jsx", "md", "sass", "scss", "ts", "tsx", "vue", "yaml", "yml"]
    }

    fn lint(
        &self,
        ctx: &LintContext<'_>,
        dir: &Path,
        extensions: &[String],
        args: &str,
        fix: bool,
        prefix: &str,
    ) -> Result<RawToolOutput, AdapterError> {
        let exts: Vec<&str> = extensions
            .iter()
            .map(|e| e.trim_start_matches('.'))
            .collect();
        // Brace expansion needs at least two alternatives.
        let glob = if exts.len() == 1 {
            format!("**/*.{}", exts[0])
        } else {
            format!("**/*.{{{}}}", exts.join(","))
        };
        let mode_arg = if fix { "--write" } else { "--list-different" };
        let command = build_command(&[
            prefix,
            "npx --no-install prettier --no-color",
            mode_arg,
            args,
            &quote_arg(&glob),
        ]);
        run_tool(ctx, NAME, dir, &command)
    }

    fn parse_output(&self, dir: &Path, output: &RawToolOutput) -> Result<LintResult, AdapterError> {
        let mut result = LintResult::new();
        result.is_success = output.succeeded();
        if result.is_success {
            return Ok(result);
        }

        for path in output.stdout.lines().map(str::trim).filter(|l| !l.is_empty()) {
            result.push(
                Severity::Error,
                Finding::at_line(relative_path(dir, path), 1, MESSAGE),
            );
        }
        Ok(result)
    }
}
