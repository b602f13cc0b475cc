//! Output formatting for run results.
//!
//! Supports two output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::Serialize;

use crate::registry::Category;
use crate::result::{Finding, LintResult};
use crate::runner::{Outcome, OutcomeStatus, RunReport};

// =============================================================================
// JSON Format
// =============================================================================

/// JSON report structure.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub version: String,
    pub path: String,
    pub passed: bool,
    pub adapters: Vec<JsonOutcome<'a>>,
}

/// One adapter's entry in the JSON report.
#[derive(Serialize)]
pub struct JsonOutcome<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub category: Category,
    pub status: OutcomeStatus,
    /// Warnings plus errors; absent when the adapter did not produce a result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub findings: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<&'a LintResult>,
}

#[derive(Serialize)]
pub struct JsonError {
    pub kind: String,
    pub message: String,
}

/// Build the JSON report structure.
pub fn json_report<'a>(path: &str, report: &'a RunReport) -> JsonReport<'a> {
    JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        path: path.to_string(),
        passed: report.passed(),
        adapters: report.outcomes.iter().map(outcome_to_json).collect(),
    }
}

fn outcome_to_json(o: &Outcome) -> JsonOutcome<'_> {
    let (error, result) = match &o.result {
        Ok(r) => (None, Some(r)),
        Err(e) => (
            Some(JsonError {
                kind: e.kind().to_string(),
                message: e.to_string(),
            }),
            None,
        ),
    };
    JsonOutcome {
        id: o.id,
        name: o.name,
        category: o.category,
        status: o.status(),
        findings: result.map(LintResult::finding_count),
        error,
        result,
    }
}

/// Write results in JSON format.
pub fn write_json(path: &str, report: &RunReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&json_report(path, report))?;
    println!("{}", json);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write results in colored terminal format.
pub fn write_pretty(path: &str, report: &RunReport) {
    // Header
    println!();
    print!("  ");
    print!("{}", "lintbridge".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("  {}", "Linting: ".dimmed());
    println!("{}", path);
    println!();

    if report.outcomes.is_empty() {
        println!("  {}", "No adapters selected".yellow());
        println!();
        return;
    }

    for outcome in &report.outcomes {
        write_outcome(outcome);
    }

    write_final_status(report);
    println!();
}

fn write_outcome(outcome: &Outcome) {
    let label = match &outcome.result {
        Ok(r) if r.finding_count() > 0 => format!(
            "{} ({}) {}",
            outcome.name,
            outcome.category,
            format!("{} finding(s)", r.finding_count()).dimmed()
        ),
        _ => format!("{} ({})", outcome.name, outcome.category),
    };
    match outcome.status() {
        OutcomeStatus::Passed => println!("  {} {}", "✓".green(), label),
        OutcomeStatus::Failed => println!("  {} {}", "✗".red(), label),
        OutcomeStatus::Error => println!("  {} {}", "!".red().bold(), label),
    }

    match &outcome.result {
        Ok(result) => {
            write_findings(&result.error, "error");
            write_findings(&result.warning, "warning");
        }
        Err(e) => println!("      {}", e.to_string().red()),
    }
    println!();
}

fn write_findings(findings: &[Finding], level: &str) {
    for f in findings {
        let location = if f.first_line == f.last_line {
            format!("{}:{}", f.path, f.first_line)
        } else {
            format!("{}:{}-{}", f.path, f.first_line, f.last_line)
        };
        let level = match level {
            "error" => level.red(),
            _ => level.yellow(),
        };
        // Diff messages span several lines; show the first.
        let message = f.message.lines().next().unwrap_or("");
        println!("      {} {} {}", location.dimmed(), level, message);
    }
}

fn write_final_status(report: &RunReport) {
    let total = report.outcomes.len();
    let passed = report
        .outcomes
        .iter()
        .filter(|o| o.status() == OutcomeStatus::Passed)
        .count();

    if report.passed() {
        println!("  {} {}/{} adapters passed", "✓ PASS".green().bold(), passed, total);
    } else {
        println!("  {} {}/{} adapters passed", "✗ FAIL".red().bold(), passed, total);
    }
}
