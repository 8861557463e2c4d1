//! Loading document sets from disk.

mod error;
pub mod file_loader;
pub mod publish;
mod source;
mod workspace;
pub mod workspace_loader;

pub use error::{LoadError, PublishError};
pub use publish::{DEFAULT_OUTPUT_DIR, DEFAULT_STAMP, PublishSummary, Rewrite, publish, schema_location_rewrites};
pub use source::FileSet;
pub use workspace::{LoadFailure, Workspace};
pub use workspace_loader::WorkspaceLoader;
