//! Running the checker over a document forest.
//!
//! Each namespace kind is an independent pass: build its scope tree and
//! Definition Table, collect its references, resolve each one and group the
//! failures. Passes share nothing but the read-only documents, so
//! [`check_all`] may run them on the rayon pool.

use rayon::prelude::*;

use super::diagnostics::{FindingCollector, KindReport};
use super::kind::{NamespaceKind, Vocabulary};
use super::references::collect_references;
use super::resolve::resolve;
use super::scope::{DefinitionTable, ScopeTree};
use crate::config::CheckerConfig;
use crate::syntax::Document;

/// Check every reference of `vocab`'s kind in `documents`.
pub fn check_kind(documents: &[Document], vocab: &Vocabulary) -> KindReport {
    let kind = vocab.kind();
    let tree = ScopeTree::build(documents, vocab);
    let table = DefinitionTable::from_tree(&tree, kind.scope_style());
    let references = collect_references(documents, &tree, vocab);
    let total = references.len();

    let mut collector = FindingCollector::new();
    for reference in references {
        if !resolve(&reference, &table).is_resolved() {
            collector.add(reference);
        }
    }
    let findings = collector.finish(&table);

    tracing::debug!(
        kind = %kind,
        definitions = table.len(),
        references = total,
        unresolved = findings.len(),
        "checked namespace kind"
    );

    KindReport {
        kind,
        definitions: table.len(),
        references: total,
        findings,
    }
}

/// Check every kind listed in `config`, reports in the same order.
pub fn check_all(documents: &[Document], config: &CheckerConfig) -> Vec<KindReport> {
    let run = |kind: &NamespaceKind| {
        check_kind(documents, &Vocabulary::new(*kind, config.namespace.clone()))
    };
    if config.parallel {
        config.kinds.par_iter().map(run).collect()
    } else {
        config.kinds.iter().map(run).collect()
    }
}
