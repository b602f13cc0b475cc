//! ESLint, run through `npx` so the project's local install is used.

use std::path::Path;

use serde::Deserialize;

use super::{build_command, dotted_extensions, run_tool, Adapter, LintContext};
use crate::error::AdapterError;
use crate::output::{from_json, relative_path};
use crate::result::{Finding, LintResult, RawToolOutput, Severity};

const NAME: &str = "ESLint";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileReport {
    file_path: String,
    #[serde(default)]
    messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Message {
    #[serde(default)]
    rule_id: Option<String>,
    message: String,
    #[serde(default)]
    line: usize,
    #[serde(default)]
    end_line: Option<usize>,
    severity: u8,
}

/// Adapter for `eslint`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EsLint;

impl Adapter for EsLint {
    fn name(&self) -> &'static str {
        NAME
    }

    fn executable(&self) -> &'static str {
        "npx"
    }

    fn version_command(&self) -> &'static str {
        "npx --no-install eslint -v"
    }

    fn default_extensions(&self) -> &'static [&'static str] {
        &["js"]
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
        let ext_arg = format!("--ext {}", dotted_extensions(extensions));
        let fix_arg = if fix { "--fix" } else { "" };
        let command = build_command(&[
            prefix,
            "npx --no-install eslint --no-color --format json",
            fix_arg,
            &ext_arg,
            args,
            "\".\"",
        ]);
        run_tool(ctx, NAME, dir, &command)
    }

    fn parse_output(&self, dir: &Path, output: &RawToolOutput) -> Result<LintResult, AdapterError> {
        let reports: Vec<FileReport> = from_json(NAME, &output.stdout)?;

        let mut result = LintResult::new();
        for report in &reports {
            let path = relative_path(dir, &report.file_path);
            for msg in &report.messages {
                let message = match &msg.rule_id {
                    Some(rule) => format!("{} ({})", msg.message, rule),
                    None => msg.message.clone(),
                };
                let finding = Finding::new(
                    path.clone(),
                    msg.line,
                    msg.end_line.unwrap_or(msg.line),
                    message,
                );
                let severity = if msg.severity == 1 {
                    Severity::Warning
                } else {
                    Severity::Error
                };
                result.push(severity, finding);
            }
        }
        result.is_success = output.succeeded();
        Ok(result)
    }
}
