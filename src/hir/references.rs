//! Reference collection.
//!
//! Every populated reference attribute on a reference-site element becomes
//! one [`Reference`], in document order. Each record carries the scope
//! context it will be resolved in:
//! - nested kinds get the full path of named scopes around the element;
//! - flat kinds get only the nearest enclosing scope's name, or nothing when
//!   that scope is anonymous or there is none.

use smol_str::SmolStr;

use super::kind::{NamespaceKind, ScopeStyle, Vocabulary};
use super::scope::ScopeTree;
use crate::base::FileId;
use crate::syntax::Document;

/// One use of a name where a definition is expected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    /// The attribute value exactly as written.
    pub target: SmolStr,
    pub kind: NamespaceKind,
    /// Enclosing scope identity, outermost segment first.
    pub scope: Vec<SmolStr>,
    pub file: FileId,
    /// Attribute the target was read from.
    pub attribute: SmolStr,
    /// Tag of the referencing element.
    pub element: SmolStr,
    /// `name` of the referencing element, if it has one.
    pub element_name: Option<SmolStr>,
    /// 1-based source line; `None` when the document carries no positions.
    pub line: Option<u32>,
}

/// Collect the references of `vocab`'s kind, with scopes taken from `tree`.
pub fn collect_references(
    documents: &[Document],
    tree: &ScopeTree,
    vocab: &Vocabulary,
) -> Vec<Reference> {
    let kind = vocab.kind();
    let mut references = Vec::new();

    for doc in documents {
        for (id, node) in doc.nodes() {
            if !vocab.is_reference_site(node) {
                continue;
            }
            for &attribute in kind.reference_attributes() {
                let Some(target) = node.attribute(attribute).filter(|v| !v.is_empty()) else {
                    continue;
                };
                let enclosing = tree.enclosing(doc, id);
                let scope = match kind.scope_style() {
                    ScopeStyle::Nested => tree.path(enclosing),
                    ScopeStyle::Flat => tree.scope(enclosing).name.iter().cloned().collect(),
                };
                references.push(Reference {
                    target: SmolStr::new(target),
                    kind,
                    scope,
                    file: doc.file(),
                    attribute: SmolStr::new_static(attribute),
                    element: SmolStr::new(node.tag()),
                    element_name: node.name().map(SmolStr::new),
                    line: node.line(),
                });
            }
        }
    }

    tracing::debug!(kind = %kind, count = references.len(), "collected references");
    references
}
