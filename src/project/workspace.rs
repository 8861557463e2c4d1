//! A loaded document set.

use std::path::{Path, PathBuf};

use crate::base::FileId;
use crate::config::CheckerConfig;
use crate::hir::{KindReport, check_all};
use crate::syntax::{Document, parse_document};

use super::error::LoadError;
use super::source::FileSet;
use super::workspace_loader::WorkspaceLoader;

/// A file that was discovered but could not be loaded.
#[derive(Debug)]
pub struct LoadFailure {
    pub file: FileId,
    /// Path as shown in reports.
    pub path: PathBuf,
    pub error: LoadError,
}

/// Every document of one run, plus the files that failed to load.
///
/// Documents keep the order their files were registered in, so reports
/// built from a workspace do not depend on load scheduling.
#[derive(Debug, Default)]
pub struct Workspace {
    files: FileSet,
    documents: Vec<Document>,
    failures: Vec<LoadFailure>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every matching file under `dir`; see [`WorkspaceLoader`].
    pub fn load_directory(dir: impl AsRef<Path>, config: &CheckerConfig) -> Result<Self, LoadError> {
        WorkspaceLoader::new(config.clone()).load_directory(dir)
    }

    /// Parse `text` as the contents of `path` and add it.
    ///
    /// A parse failure is recorded instead of returned; the workspace stays
    /// usable either way.
    pub fn add_source(&mut self, path: impl AsRef<Path>, text: &str) -> FileId {
        let path = path.as_ref();
        let file = self.files.file_id(path);
        let result = parse_document(text, file).map_err(LoadError::from);
        self.record(file, path, result);
        file
    }

    pub(crate) fn record(
        &mut self,
        file: FileId,
        path: &Path,
        result: Result<Document, LoadError>,
    ) {
        match result {
            Ok(document) => self.documents.push(document),
            Err(error) => {
                tracing::warn!("Error parsing {}: {}", path.display(), error);
                self.failures.push(LoadFailure {
                    file,
                    path: path.to_path_buf(),
                    error,
                });
            }
        }
    }

    pub fn files(&self) -> &FileSet {
        &self.files
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn failures(&self) -> &[LoadFailure] {
        &self.failures
    }

    /// Run every configured reference kind over the loaded documents.
    pub fn check(&self, config: &CheckerConfig) -> Vec<KindReport> {
        check_all(&self.documents, config)
    }
}
