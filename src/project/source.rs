//! File set management for tracking source files.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::base::FileId;

/// Assigns stable [`FileId`]s to paths and maps them back for reporting.
#[derive(Debug, Default)]
pub struct FileSet {
    inner: RwLock<FileSetInner>,
}

#[derive(Debug, Default)]
struct FileSetInner {
    /// Path → FileId; the FileId is the insertion index.
    path_to_id: IndexMap<PathBuf, FileId>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create a FileId for a path.
    pub fn file_id(&self, path: &Path) -> FileId {
        // Fast path: read lock
        {
            let inner = self.inner.read();
            if let Some(&id) = inner.path_to_id.get(path) {
                return id;
            }
        }

        let mut inner = self.inner.write();
        let next = FileId::new(inner.path_to_id.len() as u32);
        *inner.path_to_id.entry(path.to_owned()).or_insert(next)
    }

    /// Get the path for a FileId.
    pub fn path(&self, file: FileId) -> Option<PathBuf> {
        self.inner
            .read()
            .path_to_id
            .get_index(file.index() as usize)
            .map(|(path, _)| path.clone())
    }

    /// Path for display, or the FileId itself for unknown files.
    pub fn display(&self, file: FileId) -> String {
        self.path(file)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| file.to_string())
    }

    pub fn len(&self) -> usize {
        self.inner.read().path_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
