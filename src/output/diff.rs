//! Unified diff parsing.
//!
//! Formatters run in check mode print the changes they would make as a
//! unified diff. Each hunk becomes one finding spanning the original lines
//! it would rewrite.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::relative_path;
use crate::result::Finding;

static HUNK_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@").expect("valid hunk header regex")
});

/// Errors produced while reading a diff.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DiffError {
    #[error("line {line}: hunk before any file header")]
    OrphanHunk { line: usize },
    #[error("line {line}: malformed hunk header {text:?}")]
    MalformedHeader { line: usize, text: String },
}

/// One contiguous block of changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    pub old_start: usize,
    pub old_lines: usize,
    /// Line count on the new side; decides where the hunk body ends.
    pub new_lines: usize,
    /// Body lines including their `+`, `-` or ` ` marker.
    pub lines: Vec<String>,
}

/// All hunks for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: String,
    pub hunks: Vec<Hunk>,
}

/// Parse unified diff text into per-file hunks.
///
/// Lines outside file and hunk headers (`diff --git`, `index`, tool chatter)
/// are skipped. Blank input yields no files.
pub fn parse_diff(text: &str) -> Result<Vec<FileDiff>, DiffError> {
    let mut files: Vec<FileDiff> = Vec::new();
    let mut old_path: Option<String> = None;
    let mut old_remaining = 0usize;
    let mut new_remaining = 0usize;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;

        // Inside a hunk every line is body, even ones starting with "---".
        if old_remaining > 0 || new_remaining > 0 {
            let hunk = files
                .last_mut()
                .and_then(|f| f.hunks.last_mut())
                .ok_or(DiffError::OrphanHunk { line: line_no })?;
            match line.chars().next() {
                Some('-') => old_remaining = old_remaining.saturating_sub(1),
                Some('+') => new_remaining = new_remaining.saturating_sub(1),
                Some('\\') => {}
                _ => {
                    old_remaining = old_remaining.saturating_sub(1);
                    new_remaining = new_remaining.saturating_sub(1);
                }
            }
            hunk.lines.push(line.to_string());
            continue;
        }

        if line.starts_with('\\') {
            if let Some(hunk) = files.last_mut().and_then(|f| f.hunks.last_mut()) {
                hunk.lines.push(line.to_string());
            }
        } else if let Some(rest) = line.strip_prefix("--- ") {
            old_path = Some(header_path(rest));
        } else if let Some(rest) = line.strip_prefix("+++ ") {
            let old = old_path.take();
            let mut path = header_path(rest);
            if path == "/dev/null" {
                path = old.clone().unwrap_or_default();
            }
            // Git style diffs prefix paths with a/ and b/.
            if old.as_deref().is_some_and(|o| o.starts_with("a/")) {
                if let Some(stripped) = path.strip_prefix("b/") {
                    path = stripped.to_string();
                }
            }
            files.push(FileDiff {
                path,
                hunks: Vec::new(),
            });
        } else if line.starts_with("@@") {
            let caps = HUNK_HEADER
                .captures(line)
                .ok_or_else(|| DiffError::MalformedHeader {
                    line: line_no,
                    text: line.to_string(),
                })?;
            let file = files
                .last_mut()
                .ok_or(DiffError::OrphanHunk { line: line_no })?;
            // An omitted count means one line.
            let num = |i: usize| match caps.get(i) {
                Some(m) => m.as_str().parse::<usize>().map_err(|_| DiffError::MalformedHeader {
                    line: line_no,
                    text: line.to_string(),
                }),
                None => Ok(1),
            };
            let hunk = Hunk {
                old_start: num(1)?,
                old_lines: num(2)?,
                new_lines: num(4)?,
                lines: Vec::new(),
            };
            old_remaining = hunk.old_lines;
            new_remaining = hunk.new_lines;
            file.hunks.push(hunk);
        }
    }

    Ok(files)
}

/// Strip the timestamp some tools append after a tab.
fn header_path(rest: &str) -> String {
    rest.split('\t').next().unwrap_or(rest).trim().to_string()
}

/// Convert a unified diff into one finding per hunk.
///
/// The finding spans the original lines the hunk would replace; its message
/// is the hunk body.
pub fn findings_from_diff<P: AsRef<Path>>(dir: P, text: &str) -> Result<Vec<Finding>, DiffError> {
    let dir = dir.as_ref();
    let files = parse_diff(text)?;

    Ok(files
        .iter()
        .flat_map(|file| {
            let path = relative_path(dir, &file.path);
            file.hunks.iter().map(move |hunk| {
                let last = hunk.old_start.saturating_add(hunk.old_lines).saturating_sub(1);
                Finding::new(path.clone(), hunk.old_start, last, hunk.lines.join("\n"))
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK_DIFF: &str = "--- file1.py\t2020-01-01 00:00:00.000000 +0000
+++ file1.py\t2020-01-01 00:00:01.000000 +0000
@@ -1,3 +1,3 @@
-def main ():
+def main():
     print(\"hello\")

@@ -10,2 +10,2 @@
-x = { 'a':37,'b':42 }
+x = {\"a\": 37, \"b\": 42}
 y = 1
would reformat file1.py";

    #[test]
    fn test_parse_black_diff() {
        let files = parse_diff(BLACK_DIFF).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "file1.py");
        assert_eq!(files[0].hunks.len(), 2);
        assert_eq!(files[0].hunks[0].old_start, 1);
        assert_eq!(files[0].hunks[0].old_lines, 3);
        assert_eq!(files[0].hunks[0].lines.len(), 4);
        assert_eq!(files[0].hunks[1].old_start, 10);
    }

    #[test]
    fn test_findings_from_diff() {
        let findings = findings_from_diff("/repo", BLACK_DIFF).unwrap();
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].path, "file1.py");
        assert_eq!(findings[0].first_line, 1);
        assert_eq!(findings[0].last_line, 3);
        assert!(findings[0].message.starts_with("-def main ():\n+def main():"));
        assert_eq!(findings[1].first_line, 10);
        assert_eq!(findings[1].last_line, 11);
    }

    #[test]
    fn test_git_style_prefixes() {
        let diff = "diff --git a/src/x.go b/src/x.go
--- a/src/x.go
+++ b/src/x.go
@@ -4 +4 @@
-func  x() {}
+func x() {}
";
        let files = parse_diff(diff).unwrap();
        assert_eq!(files[0].path, "src/x.go");
        assert_eq!(files[0].hunks[0].old_lines, 1);
        assert_eq!(files[0].hunks[0].new_lines, 1);
    }

    #[test]
    fn test_removed_line_that_looks_like_header() {
        let diff = "--- a.md
+++ a.md
@@ -1,2 +1,1 @@
--- old rule
 keep
";
        let files = parse_diff(diff).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].hunks[0].lines, vec!["--- old rule", " keep"]);
    }

    #[test]
    fn test_multiple_files_keep_order() {
        let diff = "--- b.go.orig
+++ b.go
@@ -1 +1 @@
-a
+b
--- a.go.orig
+++ a.go
@@ -2 +2 @@
-c
+d
";
        let findings = findings_from_diff(".", diff).unwrap();
        let paths: Vec<_> = findings.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["b.go", "a.go"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_diff("").unwrap().is_empty());
        assert!(findings_from_diff(".", "  \n").unwrap().is_empty());
    }

    #[test]
    fn test_orphan_hunk() {
        let err = parse_diff("@@ -1 +1 @@\n-a\n+b\n").unwrap_err();
        assert_eq!(err, DiffError::OrphanHunk { line: 1 });
    }

    #[test]
    fn test_hunk_range_at_usize_limit() {
        let diff = format!("--- a\n+++ a\n@@ -{},5 +1 @@\n", usize::MAX);
        let findings = findings_from_diff(".", &diff).unwrap();
        assert_eq!(findings[0].first_line, usize::MAX);
        assert_eq!(findings[0].last_line, usize::MAX);
    }

    #[test]
    fn test_hunk_number_too_large() {
        let err = parse_diff("--- a\n+++ a\n@@ -99999999999999999999999,1 +1 @@\n").unwrap_err();
        assert!(matches!(err, DiffError::MalformedHeader { line: 3, .. }));
    }

    #[test]
    fn test_malformed_header() {
        let err = parse_diff("--- a\n+++ a\n@@ nonsense @@\n").unwrap_err();
        assert!(matches!(err, DiffError::MalformedHeader { line: 3, .. }));
    }
}
