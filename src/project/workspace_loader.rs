use std::path::{Path, PathBuf};

use rayon::prelude::*;

use super::error::LoadError;
use super::file_loader;
use super::workspace::Workspace;
use crate::base::FileId;
use crate::config::CheckerConfig;

/// Loads document sets from disk according to a [`CheckerConfig`].
pub struct WorkspaceLoader {
    config: CheckerConfig,
}

impl WorkspaceLoader {
    pub fn new(config: CheckerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Loads every matching file under `path` into a fresh workspace.
    ///
    /// Files are registered in sorted path order before parsing, so FileIds
    /// and document order are the same for sequential and parallel loads.
    /// Only a missing directory is an error; unparsable files become
    /// [`LoadFailure`](super::LoadFailure)s.
    pub fn load_directory<P: AsRef<Path>>(&self, path: P) -> Result<Workspace, LoadError> {
        let dir = path.as_ref();
        let paths = file_loader::collect_file_paths(
            dir,
            &self.config.extension,
            self.config.recursive,
        )?;

        let mut workspace = Workspace::new();
        let entries: Vec<(FileId, PathBuf, PathBuf)> = paths
            .into_iter()
            .map(|full| {
                let shown = display_path(dir, &full);
                let file = workspace.files().file_id(&shown);
                (file, shown, full)
            })
            .collect();

        let load = |(file, _, full): &(FileId, PathBuf, PathBuf)| {
            file_loader::load_document(full, *file)
        };
        let results: Vec<_> = if self.config.parallel {
            entries.par_iter().map(load).collect()
        } else {
            entries.iter().map(load).collect()
        };

        for ((file, shown, _), result) in entries.iter().zip(results) {
            workspace.record(*file, shown, result);
        }

        tracing::debug!(
            "Loaded {} document(s) from {} ({} failed)",
            workspace.documents().len(),
            dir.display(),
            workspace.failures().len()
        );
        Ok(workspace)
    }

    /// Loads a single file into an existing workspace.
    pub fn load_file<P: AsRef<Path>>(&self, workspace: &mut Workspace, path: P) -> FileId {
        let path = path.as_ref();
        let file = workspace.files().file_id(path);
        let result = file_loader::load_document(path, file);
        workspace.record(file, path, result);
        file
    }
}

/// Path relative to the scanned directory, as shown in reports.
fn display_path(root: &Path, full: &Path) -> PathBuf {
    full.strip_prefix(root).unwrap_or(full).to_path_buf()
}
