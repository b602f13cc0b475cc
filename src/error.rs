//! Errors raised while verifying, running, or parsing an adapter.

use thiserror::Error;

/// Errors that can occur while driving an external tool.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// The tool is missing or does not answer its version probe.
    #[error("{adapter} is not installed: {reason}")]
    Setup { adapter: String, reason: String },

    /// A command failed where a non-zero exit was not expected.
    #[error("command `{command}` failed with status {status}: {stderr}")]
    Process {
        command: String,
        status: i32,
        stderr: String,
    },

    /// The shell could not be started at all.
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Self-discovery could not walk the working directory.
    #[error("could not discover files in {dir}: {reason}")]
    Discovery { dir: String, reason: String },

    /// Tool output did not match the grammar the adapter expects.
    #[error("could not parse {adapter} output: {reason}")]
    Parse { adapter: String, reason: String },
}

impl AdapterError {
    pub fn setup(adapter: &str, reason: impl Into<String>) -> Self {
        AdapterError::Setup {
            adapter: adapter.to_string(),
            reason: reason.into(),
        }
    }

    pub fn parse(adapter: &str, reason: impl std::fmt::Display) -> Self {
        AdapterError::Parse {
            adapter: adapter.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Short machine-readable kind, used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            AdapterError::Setup { .. } => "setup",
            AdapterError::Process { .. } | AdapterError::Spawn { .. } => "process",
            AdapterError::Discovery { .. } => "discovery",
            AdapterError::Parse { .. } => "parse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_error_names_adapter() {
        let err = AdapterError::setup("APILinter", "api-linter not found on PATH");
        assert_eq!(
            err.to_string(),
            "APILinter is not installed: api-linter not found on PATH"
        );
        assert_eq!(err.kind(), "setup");
    }

    #[test]
    fn test_kinds() {
        let err = AdapterError::Process {
            command: "flake8 .".to_string(),
            status: 2,
            stderr: String::new(),
        };
        assert_eq!(err.kind(), "process");
        assert_eq!(AdapterError::parse("ESLint", "eof").kind(), "parse");
    }
}
