//! Black, the Python formatter.

use std::path::Path;

use super::{build_command, quote_arg, run_tool, Adapter, LintContext};
use crate::error::AdapterError;
use crate::output::findings_from_diff;
use crate::result::{LintResult, RawToolOutput, Severity};

const NAME: &str = "Black";

/// Adapter for `black`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Black;

impl Adapter for Black {
    fn name(&self) -> &'static str {
        NAME
    }

    fn executable(&self) -> &'static str {
        "black"
    }

    fn version_command(&self) -> &'static str {
        "black --version"
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
        fix: bool,
        prefix: &str,
    ) -> Result<RawToolOutput, AdapterError> {
        let fix_arg = if fix { "" } else { "--check --diff" };
        let exts = extensions
            .iter()
            .map(|e| regex::escape(e.trim_start_matches('.')))
            .collect::<Vec<_>>()
            .join("|");
        let include_arg = format!("--include {}", quote_arg(&format!("^.*\\.({})$", exts)));
        let command = build_command(&[prefix, "black", fix_arg, &include_arg, args, "\".\""]);
        run_tool(ctx, NAME, dir, &command)
    }

    fn parse_output(&self, dir: &Path, output: &RawToolOutput) -> Result<LintResult, AdapterError> {
        let mut result = LintResult::new();
        result.is_success = output.succeeded();
        if result.is_success {
            return Ok(result);
        }

        let findings =
            findings_from_diff(dir, &output.stdout).map_err(|e| AdapterError::parse(NAME, e))?;
        for finding in findings {
            result.push(Severity::Error, finding);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_becomes_findings() {
        let output = RawToolOutput {
            status: 1,
            stdout: "--- file1.py\t2020-01-01 00:00:00+00:00\n\
                     +++ file1.py\t2020-01-01 00:00:01+00:00\n\
                     @@ -1,2 +1,2 @@\n\
                     -x = [1,2]\n\
                     +x = [1, 2]\n \n"
                .to_string(),
            stderr: "would reformat file1.py\nOh no! 1 file would be reformatted.".to_string(),
        };
        let result = Black.parse_output(Path::new("."), &output).unwrap();

        assert!(!result.is_success);
        assert_eq!(result.error.len(), 1);
        assert_eq!(result.error[0].path, "file1.py");
        assert_eq!(result.error[0].first_line, 1);
        assert_eq!(result.error[0].last_line, 2);
    }

    #[test]
    fn test_success_ignores_stdout() {
        let output = RawToolOutput {
            status: 0,
            stdout: "All done!".to_string(),
            stderr: String::new(),
        };
        let result = Black.parse_output(Path::new("."), &output).unwrap();
        assert!(result.is_success);
        assert!(result.error.is_empty());
    }
}
