//! "Did you mean" candidates for unresolved references.

use std::sync::Arc;

use super::names::{absolute_form, local_segment};
use super::scope::DefinitionTable;

/// Definitions whose local name equals `target`'s local name.
///
/// Sorted and deduplicated; the target itself (as written, or with its root
/// marker stripped) is never proposed. Only exact local-name matches count.
pub fn suggest(target: &str, table: &DefinitionTable) -> Vec<Arc<str>> {
    let name = target.trim();
    let canonical = absolute_form(name).unwrap_or(name);
    let local = local_segment(canonical);

    let mut candidates: Vec<Arc<str>> = table
        .qualified_names()
        .filter(|q| local_segment(q) == local && q.as_ref() != canonical)
        .cloned()
        .collect();
    candidates.sort();
    candidates.dedup();
    candidates
}
