//! Static table of available adapters.
//!
//! Adapters fall into two categories. Check adapters report problems and
//! touch files only in fix mode; format adapters may rewrite files in place.
//! Formatting changes line numbers, so whenever both kinds run together every
//! check adapter must finish before any format adapter starts. `plan`
//! produces that order.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;

use crate::adapters::{
    Adapter, ApiLinter, Black, EsLint, Flake8, Gofmt, Prettier, SwiftFormatLockwood,
};

/// Whether an adapter may modify source files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Reports problems; rewrites files only in fix mode.
    Check,
    /// May rewrite files; runs after every check adapter.
    Format,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Check => "check",
            Category::Format => "format",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One identifier in the registry.
pub struct RegistryEntry {
    /// Stable short identifier (e.g., "eslint").
    pub id: &'static str,
    pub category: Category,
    pub adapter: &'static dyn Adapter,
    /// Identifier this entry is an alias of.
    pub alias_of: Option<&'static str>,
}

impl std::fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("adapter", &self.adapter.name())
            .field("alias_of", &self.alias_of)
            .finish()
    }
}

/// Unknown identifier passed to the registry.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown adapter {id:?} (available: {available})")]
pub struct UnknownAdapter {
    pub id: String,
    pub available: String,
}

static API_LINTER: ApiLinter = ApiLinter;
static ESLINT: EsLint = EsLint;
static FLAKE8: Flake8 = Flake8;
static BLACK: Black = Black;
static GOFMT: Gofmt = Gofmt;
static PRETTIER: Prettier = Prettier;
static SWIFT_FORMAT_LOCKWOOD: SwiftFormatLockwood = SwiftFormatLockwood;

static ENTRIES: &[RegistryEntry] = &[
    // Linters
    RegistryEntry {
        id: "apilinter",
        category: Category::Check,
        adapter: &API_LINTER,
        alias_of: None,
    },
    RegistryEntry {
        id: "eslint",
        category: Category::Check,
        adapter: &ESLINT,
        alias_of: None,
    },
    RegistryEntry {
        id: "flake8",
        category: Category::Check,
        adapter: &FLAKE8,
        alias_of: None,
    },
    // Formatters (run after linters)
    RegistryEntry {
        id: "black",
        category: Category::Format,
        adapter: &BLACK,
        alias_of: None,
    },
    RegistryEntry {
        id: "gofmt",
        category: Category::Format,
        adapter: &GOFMT,
        alias_of: None,
    },
    RegistryEntry {
        id: "prettier",
        category: Category::Format,
        adapter: &PRETTIER,
        alias_of: None,
    },
    RegistryEntry {
        id: "swift_format_lockwood",
        category: Category::Format,
        adapter: &SWIFT_FORMAT_LOCKWOOD,
        alias_of: None,
    },
    // Kept for configurations written before the lockwood/official split.
    RegistryEntry {
        id: "swiftformat",
        category: Category::Format,
        adapter: &SWIFT_FORMAT_LOCKWOOD,
        alias_of: Some("swift_format_lockwood"),
    },
];

static INDEX: Lazy<HashMap<&'static str, &'static RegistryEntry>> =
    Lazy::new(|| ENTRIES.iter().map(|e| (e.id, e)).collect());

/// All entries, linters first, aliases included.
pub fn entries() -> &'static [RegistryEntry] {
    ENTRIES
}

/// Look up an entry by identifier.
pub fn get(id: &str) -> Option<&'static RegistryEntry> {
    INDEX.get(id).copied()
}

/// Look up an entry, failing with the list of valid identifiers.
pub fn resolve(id: &str) -> Result<&'static RegistryEntry, UnknownAdapter> {
    get(id).ok_or_else(|| UnknownAdapter {
        id: id.to_string(),
        available: ids().join(", "),
    })
}

/// All identifiers in registration order.
pub fn ids() -> Vec<&'static str> {
    ENTRIES.iter().map(|e| e.id).collect()
}

/// Order a selection so all check adapters precede all format adapters.
///
/// Order within each category follows the input.
pub fn plan<S: AsRef<str>>(ids: &[S]) -> Result<Vec<&'static RegistryEntry>, UnknownAdapter> {
    let mut entries = ids
        .iter()
        .map(|id| resolve(id.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    // Stable sort keeps the caller's order inside a category.
    entries.sort_by_key(|e| e.category);
    Ok(entries)
}
