//! Google API linter (https://linter.aip.dev/).
//!
//! `api-linter` has no recursive file discovery, so the adapter finds the
//! `.proto` files itself and passes them explicitly. Output is YAML:
//!
//! ```yaml
//! - file_path: some/path/to/a.proto
//!   problems:
//!   - message: Delete methods should include `(google.api.method_signature) = "name"`
//!     location:
//!       start_position:
//!         line_number: 184
//!         column_number: 3
//!       end_position:
//!         line_number: 219
//!         column_number: 3
//!     rule_id: core::0135::method-signature
//!     rule_doc_uri: https://linter.aip.dev/135/method-signature
//! ```

use std::path::Path;

use serde::Deserialize;

use super::{build_command, discover_files, quote_arg, run_tool, Adapter, LintContext};
use crate::error::AdapterError;
use crate::output::from_yaml;
use crate::result::{Finding, LintResult, RawToolOutput, Severity};

const NAME: &str = "APILinter";
const PROTO_GLOB: &str = "**/*.proto";

/// One file's problems.
#[derive(Debug, Deserialize)]
struct ResultStanza {
    file_path: String,
    #[serde(default)]
    problems: Vec<ProblemSpec>,
}

#[derive(Debug, Deserialize)]
struct ProblemSpec {
    message: String,
    location: SourceLocation,
}

#[derive(Debug, Deserialize)]
struct SourceLocation {
    start_position: CodePosition,
    end_position: CodePosition,
}

#[derive(Debug, Deserialize)]
struct CodePosition {
    #[serde(default)]
    line_number: usize,
}

/// Adapter for `api-linter`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiLinter;

impl ApiLinter {
    fn finding_for_problem(path: &str, problem: &ProblemSpec) -> Finding {
        Finding::new(
            path,
            problem.location.start_position.line_number,
            problem.location.end_position.line_number,
            problem.message.as_str(),
        )
    }

    /// Flatten file stanzas into findings, keeping file and problem order.
    fn map_problems(stanzas: &[ResultStanza]) -> Vec<Finding> {
        stanzas
            .iter()
            .flat_map(|stanza| {
                stanza
                    .problems
                    .iter()
                    .map(move |problem| Self::finding_for_problem(&stanza.file_path, problem))
            })
            .collect()
    }
}

impl Adapter for ApiLinter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn executable(&self) -> &'static str {
        "api-linter"
    }

    fn version_command(&self) -> &'static str {
        "api-linter --version"
    }

    fn default_extensions(&self) -> &'static [&'static str] {
        &["proto"]
    }

    fn lint(
        &self,
        ctx: &LintContext<'_>,
        dir: &Path,
        _extensions: &[String],
        args: &str,
        _fix: bool,
        prefix: &str,
    ) -> Result<RawToolOutput, AdapterError> {
        // api-linter cannot fix; fix mode lints as usual.
        let files = discover_files(dir, PROTO_GLOB)?;
        ctx.observer.files_discovered(NAME, dir, &files);

        if files.is_empty() {
            ctx.observer.no_files_matched(NAME, dir);
            return Ok(RawToolOutput::empty());
        }

        let file_args = files
            .iter()
            .map(|f| quote_arg(f))
            .collect::<Vec<_>>()
            .join(" ");
        let command = build_command(&[prefix, "api-linter", args, &file_args]);
        run_tool(ctx, NAME, dir, &command)
    }

    fn parse_output(&self, _dir: &Path, output: &RawToolOutput) -> Result<LintResult, AdapterError> {
        let stanzas: Vec<ResultStanza> = from_yaml(NAME, &output.stdout)?;

        let mut result = LintResult::new();
        for finding in Self::map_problems(&stanzas) {
            result.push(Severity::Error, finding);
        }
        result.is_success = output.succeeded() && result.error.is_empty();
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: i32, stdout: &str) -> RawToolOutput {
        RawToolOutput {
            status,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    const TWO_FILES: &str = "\
- file_path: a.proto
  problems:
  - message: first
    location:
      start_position: {line_number: 3, column_number: 1}
      end_position: {line_number: 4, column_number: 9}
    rule_id: core::0131::request-name-field
    rule_doc_uri: https://linter.aip.dev/131/request-name-field
  - message: second
    location:
      start_position: {line_number: 7, column_number: 1}
      end_position: {line_number: 7, column_number: 20}
- file_path: b.proto
  problems:
  - message: third
    location:
      start_position: {line_number: 1, column_number: 1}
      end_position: {line_number: 2, column_number: 1}
";

    #[test]
    fn test_flatten_preserves_order() {
        let result = ApiLinter
            .parse_output(Path::new("."), &raw(0, TWO_FILES))
            .unwrap();

        let got: Vec<_> = result
            .error
            .iter()
            .map(|f| (f.path.as_str(), f.message.as_str(), f.first_line, f.last_line))
            .collect();
        assert_eq!(
            got,
            vec![
                ("a.proto", "first", 3, 4),
                ("a.proto", "second", 7, 7),
                ("b.proto", "third", 1, 2),
            ]
        );
        assert!(result.warning.is_empty());
        assert!(!result.is_success);
    }

    #[test]
    fn test_file_without_problems() {
        let yaml = "- file_path: clean.proto\n  problems: []\n";
        let result = ApiLinter.parse_output(Path::new("."), &raw(0, yaml)).unwrap();
        assert!(result.is_success);
        assert!(result.error.is_empty());
    }

    #[test]
    fn test_non_zero_status_without_findings_fails() {
        let result = ApiLinter.parse_output(Path::new("."), &raw(1, "")).unwrap();
        assert!(!result.is_success);
        assert!(result.error.is_empty());
    }

    #[test]
    fn test_zero_status_with_findings_fails() {
        let result = ApiLinter
            .parse_output(Path::new("."), &raw(0, TWO_FILES))
            .unwrap();
        assert!(!result.is_success);
        assert_eq!(result.error.len(), 3);
    }

    #[test]
    fn test_malformed_yaml() {
        let err = ApiLinter
            .parse_output(Path::new("."), &raw(0, "- file_path: [broken"))
            .unwrap_err();
        assert!(matches!(err, AdapterError::Parse { .. }));
    }

    #[test]
    fn test_missing_location_is_parse_error() {
        let yaml = "- file_path: a.proto\n  problems:\n  - message: no location\n";
        let err = ApiLinter.parse_output(Path::new("."), &raw(0, yaml)).unwrap_err();
        assert_eq!(err.kind(), "parse");
    }
}
