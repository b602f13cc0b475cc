//! Normalized result types shared by every adapter.

use serde::{Deserialize, Serialize};

/// Severity a finding is reported at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One normalized violation, independent of the tool that reported it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// File path relative to the lint root.
    pub path: String,
    /// First affected line (1-indexed).
    pub first_line: usize,
    /// Last affected line, never before `first_line`.
    pub last_line: usize,
    pub message: String,
}

impl Finding {
    /// Create a finding, clamping line numbers so `1 <= first_line <= last_line`.
    pub fn new(
        path: impl Into<String>,
        first_line: usize,
        last_line: usize,
        message: impl Into<String>,
    ) -> Self {
        let first_line = first_line.max(1);
        Self {
            path: path.into(),
            first_line,
            last_line: last_line.max(first_line),
            message: message.into(),
        }
    }

    /// Finding covering a single line.
    pub fn at_line(path: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::new(path, line, line, message)
    }
}

/// Normalized outcome of one adapter invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintResult {
    pub is_success: bool,
    pub warning: Vec<Finding>,
    pub error: Vec<Finding>,
}

impl Default for LintResult {
    fn default() -> Self {
        Self {
            is_success: true,
            warning: Vec::new(),
            error: Vec::new(),
        }
    }
}

impl LintResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a finding into the list matching its severity.
    pub fn push(&mut self, severity: Severity, finding: Finding) {
        match severity {
            Severity::Warning => self.warning.push(finding),
            Severity::Error => self.error.push(finding),
        }
    }

    /// Total number of findings at any severity.
    pub fn finding_count(&self) -> usize {
        self.warning.len() + self.error.len()
    }

    /// Check if there are any error-severity findings.
    pub fn has_errors(&self) -> bool {
        !self.error.is_empty()
    }
}

/// Exit status and captured streams of one tool run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawToolOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl RawToolOutput {
    /// Successful run that produced no output.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn succeeded(&self) -> bool {
        self.status == 0
    }
}
