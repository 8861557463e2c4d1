//! High-level IR (HIR): scoped symbol resolution over document trees.
//!
//! ## Pipeline (one pass per [`NamespaceKind`])
//!
//! ```text
//! documents ──► ScopeTree::build        ← scopes + direct members
//!     │              │
//!     │              ▼
//!     │         DefinitionTable          ← qualified names (+ library members)
//!     ▼              │
//! collect_references │                   ← target + enclosing scope + site
//!     │              │
//!     └──► resolve ◄─┘                   ← ModuleChain / LibraryLevel lookup
//!            │
//!            ▼
//!     FindingCollector ──► suggest      ← grouped, sorted findings
//! ```

mod check;
mod diagnostics;
mod kind;
mod names;
mod references;
mod resolve;
mod scope;
mod suggest;

pub use check::{check_all, check_kind};
pub use diagnostics::{Finding, FindingCollector, KindReport, codes};
pub use kind::{NamespaceKind, ScopeStyle, Vocabulary};
pub use names::{absolute_form, local_segment, qualify};
pub use references::{Reference, collect_references};
pub use resolve::{LibraryLevel, ModuleChain, Resolution, Resolver, ScopeLookup, resolve};
pub use scope::{DefinitionTable, Scope, ScopeId, ScopeTree};
pub use suggest::suggest;
