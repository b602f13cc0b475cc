//! gofmt, the Go formatter.
//!
//! gofmt exits with status 0 even when files need formatting, so success is
//! decided by the diff it prints.

use std::path::Path;

use super::{build_command, run_tool, Adapter, LintContext};
use crate::error::AdapterError;
use crate::output::findings_from_diff;
use crate::result::{LintResult, RawToolOutput, Severity};

const NAME: &str = "gofmt";

/// Adapter for `gofmt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gofmt;

impl Adapter for Gofmt {
    fn name(&self) -> &'static str {
        NAME
    }

    fn executable(&self) -> &'static str {
        "go"
    }

    fn version_command(&self) -> &'static str {
        // gofmt has no version flag; it ships with the go toolchain.
        "go version"
    }

    fn default_extensions(&self) -> &'static [&'static str] {
        &["go"]
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
        let mode_arg = if fix { "-w" } else { "-d" };
        let command = build_command(&[prefix, "gofmt -l", mode_arg, args, "\".\""]);
        run_tool(ctx, NAME, dir, &command)
    }

    fn parse_output(&self, dir: &Path, output: &RawToolOutput) -> Result<LintResult, AdapterError> {
        let findings =
            findings_from_diff(dir, &output.stdout).map_err(|e| AdapterError::parse(NAME, e))?;

        let mut result = LintResult::new();
        for finding in findings {
            result.push(Severity::Error, finding);
        }
        result.is_success = output.succeeded() && result.error.is_empty();
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOFMT_DIFF: &str = "file1.go
diff file1.go.orig file1.go
--- file1.go.orig
+++ file1.go
@@ -3,3 +3,3 @@
 import \"fmt\"
-func main () {
+func main() {
 \tfmt.Println(\"hi\")";

    #[test]
    fn test_zero_status_with_diff_fails() {
        let output = RawToolOutput {
            status: 0,
            stdout: GOFMT_DIFF.to_string(),
            stderr: String::new(),
        };
        let result = Gofmt.parse_output(Path::new("."), &output).unwrap();

        assert!(!result.is_success);
        assert_eq!(result.error.len(), 1);
        assert_eq!(result.error[0].path, "file1.go");
        assert_eq!(result.error[0].first_line, 3);
        assert_eq!(result.error[0].last_line, 5);
    }

    #[test]
    fn test_syntax_error_status_fails() {
        let output = RawToolOutput {
            status: 2,
            stdout: String::new(),
            stderr: "file1.go:3:1: expected declaration".to_string(),
        };
        let result = Gofmt.parse_output(Path::new("."), &output).unwrap();
        assert!(!result.is_success);
        assert!(result.error.is_empty());
    }
}
