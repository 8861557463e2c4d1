//! Discovering and reading documents on disk.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::error::LoadError;
use crate::base::FileId;
use crate::syntax::{Document, parse_document};

/// Collect files with `extension` under `dir`, sorted by path.
///
/// Only `dir` itself is scanned unless `recursive` is set. Unreadable entries
/// are logged and skipped.
pub fn collect_file_paths(
    dir: &Path,
    extension: &str,
    recursive: bool,
) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::DirectoryNotFound(dir.to_path_buf()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(max_depth) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {e}", dir.display());
                continue;
            }
        };
        if entry.file_type().is_file() && has_extension(entry.path(), extension) {
            paths.push(entry.into_path());
        }
    }
    paths.sort();
    Ok(paths)
}

/// Check a path's extension, ignoring ASCII case.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Read and parse one document.
pub fn load_document(path: &Path, file: FileId) -> Result<Document, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    Ok(parse_document(&text, file)?)
}
