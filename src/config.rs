//! Configuration file schema for lintbridge.
//!
//! A configuration selects which adapters run and how:
//!
//! ```yaml
//! auto_fix: false
//! command_prefix: ""
//! adapters:
//!   eslint:
//!     extensions: [js, ts]
//!     args: "--max-warnings 0"
//!   apilinter:
//!     dir: protos
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::registry;
use crate::runner::{Job, JobSettings};

/// Default configuration file names to search for.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["lintbridge.yaml", ".lintbridge.yaml", "lintbridge.yml"];

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Fix mode for every adapter unless overridden.
    #[serde(default)]
    pub auto_fix: bool,
    /// Prefix for every command unless overridden.
    #[serde(default)]
    pub command_prefix: String,
    /// Per-adapter settings keyed by registry identifier.
    #[serde(default)]
    pub adapters: BTreeMap<String, AdapterConfig>,
}

/// Settings for one adapter.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdapterConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Working directory relative to the run root.
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default)]
    pub args: String,
    /// Defaults to the adapter's own extensions.
    #[serde(default)]
    pub extensions: Option<Vec<String>>,
    #[serde(default)]
    pub auto_fix: Option<bool>,
    #[serde(default)]
    pub command_prefix: Option<String>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: None,
            args: String::new(),
            extensions: None,
            auto_fix: None,
            command_prefix: None,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Parse a configuration from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse_str(&content)
    }

    /// Parse a configuration from YAML text. Blank text is an empty config.
    pub fn parse_str(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Identifiers of enabled adapters.
    pub fn enabled_ids(&self) -> Vec<&str> {
        self.adapters
            .iter()
            .filter(|(_, cfg)| cfg.enabled)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Resolve jobs for `ids` under `root`, check adapters first.
    ///
    /// Ids without a configuration entry run with defaults. The `force_fix`
    /// flag turns on fix mode regardless of the file.
    pub fn jobs<S: AsRef<str>>(
        &self,
        root: &Path,
        ids: &[S],
        force_fix: bool,
    ) -> anyhow::Result<Vec<Job>> {
        let planned = registry::plan(ids)?;
        let default_cfg = AdapterConfig::default();

        Ok(planned
            .into_iter()
            .map(|entry| {
                let cfg = self.adapters.get(entry.id).unwrap_or(&default_cfg);
                let mut settings = JobSettings::for_entry(entry, resolve_dir(root, cfg.dir.as_deref()));
                if let Some(exts) = &cfg.extensions {
                    settings.extensions = exts.clone();
                }
                settings.args = cfg.args.clone();
                settings.fix = force_fix || cfg.auto_fix.unwrap_or(self.auto_fix);
                settings.prefix = cfg
                    .command_prefix
                    .clone()
                    .unwrap_or_else(|| self.command_prefix.clone());
                Job { entry, settings }
            })
            .collect())
    }
}

fn resolve_dir(root: &Path, dir: Option<&str>) -> PathBuf {
    match dir {
        Some(d) if Path::new(d).is_absolute() => PathBuf::from(d),
        Some(d) => root.join(d),
        None => root.to_path_buf(),
    }
}

/// Discover a configuration file in `dir`.
pub fn discover(dir: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Validate a configuration.
pub fn validate(config: &Config) -> anyhow::Result<()> {
    for (id, cfg) in &config.adapters {
        registry::resolve(id)?;

        if let Some(exts) = &cfg.extensions {
            if exts.is_empty() {
                anyhow::bail!("adapter {:?}: extensions must not be empty", id);
            }
            if let Some(bad) = exts.iter().find(|e| e.trim_start_matches('.').is_empty()) {
                anyhow::bail!("adapter {:?}: invalid extension {:?}", id, bad);
            }
        }

        if cfg.dir.as_deref().is_some_and(|d| d.trim().is_empty()) {
            anyhow::bail!("adapter {:?}: dir must not be empty", id);
        }
    }

    Ok(())
}
