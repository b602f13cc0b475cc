//! Command-line interface for lintbridge.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::adapters::LintContext;
use crate::config::{self, Config};
use crate::registry;
use crate::report;
use crate::runner::Runner;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Run external linters and formatters and report their findings uniformly.
#[derive(Parser)]
#[command(name = "lintbridge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log adapter activity (overridden by LINTBRIDGE_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the configured adapters
    #[command(visible_alias = "lint")]
    Run(RunArgs),
    /// List registered adapters
    List,
}

/// Arguments for the run command.
#[derive(Parser)]
pub struct RunArgs {
    /// Directory to lint
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Path to config YAML file (default: auto-discover in the linted directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Let adapters fix problems in place
    #[arg(long)]
    pub fix: bool,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Run only these adapters, ignoring `enabled` in the config
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Skip the installation check before each adapter
    #[arg(long)]
    pub skip_setup_check: bool,
}

/// Run the run command.
pub fn run_lint(args: &RunArgs) -> anyhow::Result<i32> {
    // Validate format
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    // Resolve path
    let root = match args.path.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: cannot access path {:?}: {}", args.path, e);
            return Ok(EXIT_ERROR);
        }
    };
    if !root.is_dir() {
        eprintln!("Error: {} is not a directory", root.display());
        return Ok(EXIT_ERROR);
    }

    // Load config, explicit or discovered
    let config_path = args.config.clone().or_else(|| config::discover(&root));
    let config = match &config_path {
        Some(p) => match Config::parse_file(p) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error parsing config {}: {}", p.display(), e);
                return Ok(EXIT_ERROR);
            }
        },
        None => Config::default(),
    };

    if let Err(e) = config::validate(&config) {
        eprintln!("Error: invalid config: {}", e);
        return Ok(EXIT_ERROR);
    }

    let ids: Vec<String> = if args.only.is_empty() {
        config.enabled_ids().into_iter().map(String::from).collect()
    } else {
        args.only.clone()
    };

    if ids.is_empty() {
        eprintln!("Warning: no adapters enabled");
        eprintln!("Add adapters to lintbridge.yaml or pass --only <ID>");
        return Ok(EXIT_SUCCESS);
    }

    let jobs = match config.jobs(&root, &ids, args.fix) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run 'lintbridge list' to see available adapters");
            return Ok(EXIT_ERROR);
        }
    };

    let runner = Runner::new(LintContext::system()).verify_setup(!args.skip_setup_check);
    let result = runner.run(&jobs);

    let path_str = args.path.to_string_lossy().to_string();
    match args.format.as_str() {
        "json" => report::write_json(&path_str, &result)?,
        _ => report::write_pretty(&path_str, &result),
    }

    if result.has_errors() {
        Ok(EXIT_ERROR)
    } else if result.passed() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED)
    }
}

/// Run the list command.
pub fn run_list() -> anyhow::Result<i32> {
    println!("Available adapters:");
    println!();

    for entry in registry::entries() {
        let name = match entry.alias_of {
            Some(target) => format!("{} (alias of {})", entry.adapter.name(), target),
            None => entry.adapter.name().to_string(),
        };
        println!("  {:<24} {:<8} {}", entry.id, entry.category.as_str(), name);
    }

    println!();
    println!("Check adapters always run before format adapters.");

    Ok(EXIT_SUCCESS)
}
