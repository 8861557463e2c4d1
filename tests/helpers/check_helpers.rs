//! Helpers for building workspaces and inspecting reports.

use ddsxref::hir::{DefinitionTable, Reference, ScopeTree, Vocabulary, collect_references};
use ddsxref::{CheckerConfig, Document, KindReport, NamespaceKind, Workspace};

/// Workspace over in-memory sources; every source must parse.
pub fn workspace_from(files: &[(&str, &str)]) -> Workspace {
    let ws = workspace_allowing_failures(files);
    assert!(
        ws.failures().is_empty(),
        "Parse errors: {:?}",
        ws.failures()
    );
    ws
}

/// Workspace over in-memory sources; parse failures are kept.
pub fn workspace_allowing_failures(files: &[(&str, &str)]) -> Workspace {
    let mut ws = Workspace::new();
    for (path, text) in files {
        ws.add_source(path, text);
    }
    ws
}

/// Check a single kind over in-memory sources.
pub fn check_one(kind: NamespaceKind, files: &[(&str, &str)]) -> KindReport {
    let config = CheckerConfig::default().with_kinds([kind]);
    workspace_from(files)
        .check(&config)
        .pop()
        .expect("one report per configured kind")
}

/// Unresolved targets of a report, in report order.
pub fn unresolved_targets(report: &KindReport) -> Vec<&str> {
    report.findings.iter().map(|f| f.target.as_str()).collect()
}

/// Definition table and references of one kind, as the checker builds them.
pub fn analyse(kind: NamespaceKind, documents: &[Document]) -> (DefinitionTable, Vec<Reference>) {
    let vocab = Vocabulary::dds(kind);
    let tree = ScopeTree::build(documents, &vocab);
    let table = DefinitionTable::from_tree(&tree, kind.scope_style());
    let references = collect_references(documents, &tree, &vocab);
    (table, references)
}

/// The first reference whose target is `target`.
pub fn reference_to<'a>(references: &'a [Reference], target: &str) -> &'a Reference {
    references
        .iter()
        .find(|r| r.target == target)
        .unwrap_or_else(|| panic!("no reference to '{target}'"))
}
