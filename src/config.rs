//! Checker configuration.
//!
//! [`CheckerConfig`] carries everything a run needs besides the documents:
//! which element namespace to match, how files are discovered and which
//! reference kinds are checked. The CLI builds one from its flags.

use smol_str::SmolStr;

use crate::base::constants::{DDS_XML_NAMESPACE, DEFAULT_EXTENSION};
use crate::hir::NamespaceKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Namespace URI elements must be bound to. `None` matches any namespace.
    pub namespace: Option<SmolStr>,
    /// Extension (without the dot) of files picked up from a directory.
    pub extension: SmolStr,
    /// Descend into subdirectories during discovery.
    pub recursive: bool,
    /// Reference kinds to check, in report order.
    pub kinds: Vec<NamespaceKind>,
    /// Parse files and check kinds on the rayon thread pool.
    pub parallel: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            namespace: Some(SmolStr::new_static(DDS_XML_NAMESPACE)),
            extension: SmolStr::new_static(DEFAULT_EXTENSION),
            recursive: false,
            kinds: NamespaceKind::ALL.to_vec(),
            parallel: true,
        }
    }
}

impl CheckerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namespace(mut self, namespace: Option<impl Into<SmolStr>>) -> Self {
        self.namespace = namespace.map(Into::into);
        self
    }

    /// Match elements regardless of their namespace.
    pub fn any_namespace(mut self) -> Self {
        self.namespace = None;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<SmolStr>) -> Self {
        let extension = extension.into();
        self.extension = SmolStr::new(extension.trim_start_matches('.'));
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Restrict the run to `kinds`. Duplicates are dropped, order is kept.
    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = NamespaceKind>) -> Self {
        self.kinds.clear();
        for kind in kinds {
            if !self.kinds.contains(&kind) {
                self.kinds.push(kind);
            }
        }
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
