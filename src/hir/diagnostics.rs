//! Grouping unresolved references into findings.
//!
//! An unresolved reference is not an error of the checker, it is its product.
//! The [`FindingCollector`] groups unresolved references by the exact string
//! they reference, keeps each group's sites in the order they were seen, and
//! emits the groups sorted by that string with suggestions attached.

use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::kind::NamespaceKind;
use super::references::Reference;
use super::scope::DefinitionTable;
use super::suggest::suggest;

/// Standard diagnostic codes.
pub mod codes {
    /// Undefined reference (name not found).
    pub const UNDEFINED_REFERENCE: &str = "E0001";
}

/// Every unresolved use of one reference string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    /// The referenced string exactly as written.
    pub target: SmolStr,
    /// Referencing sites, in document order.
    pub sites: Vec<Reference>,
    /// Definitions sharing the target's local name.
    pub suggestions: Vec<Arc<str>>,
}

impl Finding {
    pub fn code(&self) -> &'static str {
        codes::UNDEFINED_REFERENCE
    }
}

/// Outcome of checking one namespace kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KindReport {
    pub kind: NamespaceKind,
    /// Distinct qualified names defined.
    pub definitions: usize,
    /// References examined.
    pub references: usize,
    /// Unresolved references grouped by target, sorted by target.
    pub findings: Vec<Finding>,
}

impl KindReport {
    /// True when every reference resolved.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Number of unresolved reference sites.
    pub fn unresolved(&self) -> usize {
        self.findings.iter().map(|f| f.sites.len()).sum()
    }
}

/// Collects unresolved references during a check.
#[derive(Clone, Debug, Default)]
pub struct FindingCollector {
    groups: IndexMap<SmolStr, Vec<Reference>>,
}

impl FindingCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an unresolved reference.
    pub fn add(&mut self, reference: Reference) {
        self.groups
            .entry(reference.target.clone())
            .or_default()
            .push(reference);
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sort the groups and attach suggestions from `table`.
    pub fn finish(mut self, table: &DefinitionTable) -> Vec<Finding> {
        self.groups.sort_unstable_keys();
        self.groups
            .into_iter()
            .map(|(target, sites)| Finding {
                suggestions: suggest(&target, table),
                target,
                sites,
            })
            .collect()
    }
}
