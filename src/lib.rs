//! # ddsxml-xref
//!
//! Cross-reference checking for DDS-XML documents: every type, QoS profile
//! and QoS snippet reference must name a definition somewhere in the loaded
//! document set.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! report    → Text / JSON rendering of findings
//!   ↓
//! project   → Discovery, workspace loading, schema-location publishing
//!   ↓
//! hir       → Scope trees, definition tables, resolution, suggestions
//!   ↓
//! syntax    → XML loader and arena document trees
//!   ↓
//! base      → Primitives (FileId, LineIndex, vocabulary constants)
//! ```
//!
//! ## Example
//!
//! ```
//! use ddsxref::{CheckerConfig, Workspace};
//!
//! let mut ws = Workspace::new();
//! ws.add_source(
//!     "types.xml",
//!     r#"<dds xmlns="http://www.omg.org/spec/DDS-XML"><types>
//!          <module name="M">
//!            <struct name="Point"/>
//!            <typedef name="Alias" type="nonBasic" nonBasicTypeName="Point"/>
//!          </module>
//!        </types></dds>"#,
//! );
//!
//! let reports = ws.check(&CheckerConfig::default());
//! assert!(reports.iter().all(|r| r.is_clean()));
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → hir → project → report)
// ============================================================================

/// Foundation types: FileId, LineIndex, vocabulary constants
pub mod base;

/// Syntax: XML loading into arena document trees
pub mod syntax;

/// High-level IR: scoped symbol resolution
pub mod hir;

/// Checker configuration
pub mod config;

/// Project management: discovery, workspace loading, publishing
pub mod project;

/// Report rendering
pub mod report;

// Re-export foundation types
pub use base::{FileId, LineCol, LineIndex, TextSize};

// Re-export the main entry points
pub use config::CheckerConfig;
pub use hir::{Finding, KindReport, NamespaceKind, Reference, check_all, check_kind};
pub use project::{LoadError, LoadFailure, PublishError, Workspace, WorkspaceLoader};
pub use syntax::{Document, ParseError, parse_document};
