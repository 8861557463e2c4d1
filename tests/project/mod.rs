//! Project layer tests
//!
//! Loading directories from disk, rendering reports and publishing
//! rewritten schema files.

mod tests_report;
mod tests_workspace_loading;
