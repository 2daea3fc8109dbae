//! Recursive file discovery with glob filtering.
//!
//! Analysis jobs locate their inputs by scanning a data directory for files
//! matching a name pattern (`*.root`, `AnalysisResults*.root`, ...). The scan
//! is deliberately forgiving: a missing or unreadable directory simply
//! contributes no matches, so callers can probe speculative locations without
//! error handling at every call site.

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::error::Result;

/// Recursively collect every regular file under `root` whose base name
/// matches the glob `pattern`.
///
/// Ordering follows filesystem traversal order and is not sorted. A
/// non-existent root yields an empty list; unreadable subdirectories are
/// skipped. The only error path is a malformed pattern.
pub fn find_files(root: impl AsRef<Path>, pattern: &str) -> Result<Vec<PathBuf>> {
    find_files_observed(root, pattern, |_| {})
}

/// Same as [`find_files`], invoking `on_dir` once per directory entered.
///
/// The callback lets long scans drive a progress indicator without this
/// module assuming anything about the terminal.
pub fn find_files_observed(
    root: impl AsRef<Path>,
    pattern: &str,
    mut on_dir: impl FnMut(&Path),
) -> Result<Vec<PathBuf>> {
    let pattern = Pattern::new(pattern)?;
    let mut matches = Vec::new();
    walk(root.as_ref(), &pattern, &mut matches, &mut on_dir);
    Ok(matches)
}

fn walk(
    dir: &Path,
    pattern: &Pattern,
    matches: &mut Vec<PathBuf>,
    on_dir: &mut dyn FnMut(&Path),
) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        // Absent or unreadable directories contribute nothing.
        Err(_) => return,
    };
    on_dir(dir);

    for entry in entries.flatten() {
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(_) => continue,
        };
        if file_type.is_dir() {
            walk(&path, pattern, matches, on_dir);
        } else if file_type.is_file() {
            if let Some(file_name) = path.file_name().and_then(|s| s.to_str()) {
                if pattern.matches(file_name) {
                    matches.push(path);
                }
            }
        }
    }
}
