//! Runs a set of adapters and collects one outcome per adapter.

use std::path::PathBuf;

use rayon::prelude::*;
use serde::Serialize;

use crate::adapters::LintContext;
use crate::error::AdapterError;
use crate::registry::{Category, RegistryEntry};
use crate::result::LintResult;

/// Resolved settings for one adapter run.
#[derive(Debug, Clone)]
pub struct JobSettings {
    /// Working directory the tool runs in.
    pub dir: PathBuf,
    /// Extensions to lint (without dot).
    pub extensions: Vec<String>,
    /// Extra arguments appended to the tool's command line.
    pub args: String,
    /// Let the tool rewrite files.
    pub fix: bool,
    /// Prepended to every command (e.g., `docker exec ci`).
    pub prefix: String,
}

impl JobSettings {
    /// Settings using the adapter's default extensions.
    pub fn for_entry(entry: &RegistryEntry, dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extensions: entry
                .adapter
                .default_extensions()
                .iter()
                .map(|e| e.to_string())
                .collect(),
            args: String::new(),
            fix: false,
            prefix: String::new(),
        }
    }
}

/// An adapter paired with its settings.
#[derive(Debug)]
pub struct Job {
    pub entry: &'static RegistryEntry,
    pub settings: JobSettings,
}

/// Result of one job.
#[derive(Debug)]
pub struct Outcome {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub result: Result<LintResult, AdapterError>,
}

impl Outcome {
    pub fn status(&self) -> OutcomeStatus {
        match &self.result {
            Ok(r) if r.is_success => OutcomeStatus::Passed,
            Ok(_) => OutcomeStatus::Failed,
            Err(_) => OutcomeStatus::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Passed,
    Failed,
    Error,
}

/// Outcomes in execution order: check adapters, then format adapters.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<Outcome>,
}

impl RunReport {
    pub fn passed(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| o.status() == OutcomeStatus::Passed)
    }

    pub fn has_errors(&self) -> bool {
        self.outcomes
            .iter()
            .any(|o| o.status() == OutcomeStatus::Error)
    }
}

/// Executes jobs against injected collaborators.
pub struct Runner<'a> {
    ctx: LintContext<'a>,
    verify_setup: bool,
}

impl<'a> Runner<'a> {
    pub fn new(ctx: LintContext<'a>) -> Self {
        Self {
            ctx,
            verify_setup: true,
        }
    }

    /// Set whether to probe each tool before running it.
    pub fn verify_setup(mut self, verify: bool) -> Self {
        self.verify_setup = verify;
        self
    }

    /// Run every job.
    ///
    /// Check adapters that only report run in parallel. Any job in fix mode
    /// runs alone, after the parallel batch. Format adapters run one at a
    /// time after every check adapter has finished. Outcomes keep input
    /// order within each category, checks first. A failing adapter is
    /// recorded in its outcome and does not stop the others.
    pub fn run(&self, jobs: &[Job]) -> RunReport {
        let (checks, formats): (Vec<(usize, &Job)>, Vec<(usize, &Job)>) = jobs
            .iter()
            .enumerate()
            .partition(|(_, j)| j.entry.category == Category::Check);
        let (parallel, serial): (Vec<(usize, &Job)>, Vec<(usize, &Job)>) =
            checks.into_iter().partition(|(_, j)| !j.settings.fix);

        let mut indexed: Vec<(usize, Outcome)> = parallel
            .par_iter()
            .map(|(i, job)| (*i, self.run_job(job)))
            .collect();
        indexed.extend(serial.iter().map(|(i, job)| (*i, self.run_job(job))));
        indexed.sort_by_key(|(i, _)| *i);

        let mut outcomes: Vec<Outcome> = indexed.into_iter().map(|(_, o)| o).collect();
        outcomes.extend(formats.iter().map(|(_, job)| self.run_job(job)));

        RunReport { outcomes }
    }

    /// Verify, lint, and parse a single job.
    pub fn run_job(&self, job: &Job) -> Outcome {
        Outcome {
            id: job.entry.id,
            name: job.entry.adapter.name(),
            category: job.entry.category,
            result: self.execute(job),
        }
    }

    fn execute(&self, job: &Job) -> Result<LintResult, AdapterError> {
        let adapter = job.entry.adapter;
        let s = &job.settings;

        if self.verify_setup {
            adapter.verify_setup(&self.ctx, &s.dir, &s.prefix)?;
        }

        let output = adapter.lint(&self.ctx, &s.dir, &s.extensions, &s.args, s.fix, &s.prefix)?;
        adapter.parse_output(&s.dir, &output)
    }
}
