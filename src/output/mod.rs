//! Parsers that turn raw tool output into structured records.
//!
//! - `diff`: unified diffs printed by formatters in check mode
//! - `structured`: YAML and JSON documents, blank output treated as empty
//!
//! Line-oriented grammars are specific to one tool and live with their
//! adapter.

pub mod diff;
pub mod structured;

use std::path::{Component, Path, PathBuf};

pub use diff::{findings_from_diff, parse_diff, DiffError, FileDiff, Hunk};
pub use structured::{from_json, from_yaml};

/// Express a tool-reported path relative to the lint root.
///
/// Absolute paths under `dir` lose the `dir` prefix, a leading `./` is
/// dropped, and separators are normalized to `/`. Paths outside `dir` are
/// returned unchanged apart from separator normalization.
pub fn relative_path<P: AsRef<Path>>(dir: P, reported: &str) -> String {
    let reported_path = Path::new(reported);
    let dir = dir.as_ref();

    let rel: PathBuf = if reported_path.is_absolute() {
        if let Ok(stripped) = reported_path.strip_prefix(dir) {
            stripped.to_path_buf()
        } else if let Some(stripped) = dir
            .canonicalize()
            .ok()
            .and_then(|abs| reported_path.strip_prefix(abs).ok().map(Path::to_path_buf))
        {
            stripped
        } else {
            return reported.replace('\\', "/");
        }
    } else {
        reported_path.to_path_buf()
    };

    rel.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_strips_dir() {
        assert_eq!(relative_path("/repo", "/repo/src/a.js"), "src/a.js");
        assert_eq!(relative_path("/repo", "./src/a.js"), "src/a.js");
        assert_eq!(relative_path("/repo", "src/a.js"), "src/a.js");
    }

    #[test]
    fn test_relative_path_outside_dir() {
        assert_eq!(relative_path("/repo", "/other/a.js"), "/other/a.js");
    }
}
