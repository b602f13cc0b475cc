//! lintbridge - uniform adapters for external linters and formatters.
//!
//! lintbridge runs third-party static-analysis and formatting tools, reads
//! their native output (diffs, YAML, JSON, plain text) and normalizes it
//! into a single `LintResult` shape a CI reporting layer can consume.
//!
//! # Architecture
//!
//! - `adapters`: one `Adapter` per tool (setup check, invocation, parsing)
//! - `registry`: identifier → adapter table, check vs format categories
//! - `output`: shared diff and structured-text parsers
//! - `process`: process execution and executable lookup
//! - `observe`: logging hooks called by adapters
//! - `runner`: runs many adapters, check adapters before format adapters
//! - `config`: YAML configuration schema
//! - `report`: output formatting (pretty, JSON)
//!
//! # Adding a New Tool
//!
//! Implement `Adapter` in `src/adapters/` and add it to the table in
//! `registry.rs`.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod observe;
pub mod output;
pub mod process;
pub mod registry;
pub mod report;
pub mod result;
pub mod runner;

pub use adapters::{Adapter, LintContext};
pub use config::Config;
pub use error::AdapterError;
pub use observe::{LintObserver, NullObserver, TracingObserver};
pub use process::{CommandChecker, PathLookup, ProcessRunner, RunOptions, ShellRunner};
pub use registry::{Category, RegistryEntry};
pub use result::{Finding, LintResult, RawToolOutput, Severity};
pub use runner::{Job, JobSettings, Outcome, OutcomeStatus, RunReport, Runner};
