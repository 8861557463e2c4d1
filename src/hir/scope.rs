//! Scope collection and the Definition Table.
//!
//! A [`ScopeTree`] is built once per namespace kind from the whole document
//! forest. Scopes live in an arena; each one points at its parent by
//! [`ScopeId`], which is only used to walk upwards when computing paths.
//! Index 0 is the implicit, nameless global scope that holds every definition
//! not declared directly inside a scope element.
//!
//! The [`DefinitionTable`] flattens the tree into the set of fully-qualified
//! names plus, for flat (library) scoping, the per-scope-name set of names
//! declared directly in that scope.

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

use super::kind::{ScopeStyle, Vocabulary};
use super::names::qualify;
use crate::base::FileId;
use crate::syntax::{Document, NodeId};

/// Index of a scope inside its [`ScopeTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(u32);

impl ScopeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One scope element (module or library).
#[derive(Clone, Debug, Default)]
pub struct Scope {
    /// Declared name; anonymous scopes contribute no path segment.
    pub name: Option<SmolStr>,
    /// Enclosing scope. Only the global scope has none.
    pub parent: Option<ScopeId>,
    pub children: Vec<ScopeId>,
    /// Local names of the definitions that are direct children of this scope.
    pub members: Vec<SmolStr>,
}

#[derive(Clone, Debug)]
pub struct ScopeTree {
    scopes: Vec<Scope>,
    /// Scope opened by each scope element.
    by_node: FxHashMap<(FileId, NodeId), ScopeId>,
}

impl ScopeTree {
    pub const GLOBAL: ScopeId = ScopeId(0);

    /// Collect the scopes and definitions of `vocab`'s kind from `documents`.
    ///
    /// A scope's parent is its nearest enclosing scope element (a document
    /// root that is itself a scope is handled like any other). A definition
    /// belongs to a scope only when its direct parent element is that scope;
    /// otherwise it lands in the global scope under its bare name.
    pub fn build(documents: &[Document], vocab: &Vocabulary) -> Self {
        let mut tree = Self {
            scopes: vec![Scope::default()],
            by_node: FxHashMap::default(),
        };

        for doc in documents {
            // Pre-order: every ancestor scope is registered before its contents.
            for (id, node) in doc.nodes() {
                if vocab.is_scope(node) {
                    let parent = tree.enclosing(doc, id);
                    let scope = ScopeId(tree.scopes.len() as u32);
                    tree.scopes.push(Scope {
                        name: node.name().map(SmolStr::new),
                        parent: Some(parent),
                        ..Scope::default()
                    });
                    tree.scopes[parent.index()].children.push(scope);
                    tree.by_node.insert((doc.file(), id), scope);
                } else if vocab.is_definition(node) {
                    let Some(name) = node.name() else {
                        continue;
                    };
                    let owner = doc
                        .parent(id)
                        .and_then(|p| tree.scope_for_node(doc.file(), p))
                        .unwrap_or(Self::GLOBAL);
                    tree.scopes[owner.index()].members.push(SmolStr::new(name));
                }
            }
        }

        tracing::debug!(
            kind = %vocab.kind(),
            scopes = tree.scopes.len() - 1,
            "built scope tree"
        );
        tree
    }

    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    pub fn scopes(&self) -> impl Iterator<Item = (ScopeId, &Scope)> {
        self.scopes
            .iter()
            .enumerate()
            .map(|(i, scope)| (ScopeId(i as u32), scope))
    }

    /// Scope opened by the scope element `node` of `file`.
    pub fn scope_for_node(&self, file: FileId, node: NodeId) -> Option<ScopeId> {
        self.by_node.get(&(file, node)).copied()
    }

    /// Innermost scope enclosing `node` (not counting `node` itself).
    pub fn enclosing(&self, doc: &Document, node: NodeId) -> ScopeId {
        doc.ancestors(node)
            .find_map(|a| self.scope_for_node(doc.file(), a))
            .unwrap_or(Self::GLOBAL)
    }

    /// Names of the named scopes from the outermost down to `id`.
    pub fn path(&self, id: ScopeId) -> Vec<SmolStr> {
        let mut path: Vec<SmolStr> =
            std::iter::successors(Some(id), |&s| self.scope(s).parent)
                .filter_map(|s| self.scope(s).name.clone())
                .collect();
        path.reverse();
        path
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

/// Fully-qualified names of every definition of one kind.
///
/// Duplicate declarations of the same qualified name coalesce.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DefinitionTable {
    qualified: FxHashSet<Arc<str>>,
    /// Scope name → local names declared directly in a scope of that name.
    /// Only populated for [`ScopeStyle::Flat`].
    local_members: FxHashMap<SmolStr, FxHashSet<SmolStr>>,
}

impl DefinitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a scope tree.
    pub fn from_tree(tree: &ScopeTree, style: ScopeStyle) -> Self {
        let mut table = Self::new();
        for (id, scope) in tree.scopes() {
            let path = tree.path(id);
            for member in &scope.members {
                table.insert(&path, member);
            }
            if style == ScopeStyle::Flat {
                if let Some(name) = &scope.name {
                    for member in &scope.members {
                        table.declare_local(name, member);
                    }
                }
            }
        }
        table
    }

    /// Record `local` as declared under `path`.
    pub fn insert(&mut self, path: &[SmolStr], local: &str) {
        self.qualified.insert(Arc::from(qualify(path, local)));
    }

    /// Record `local` as a direct member of the scope named `scope`.
    pub fn declare_local(&mut self, scope: &str, local: &str) {
        self.local_members
            .entry(SmolStr::new(scope))
            .or_default()
            .insert(SmolStr::new(local));
    }

    pub fn contains(&self, qualified: &str) -> bool {
        self.qualified.contains(qualified)
    }

    /// Is `local` declared directly in a scope named `scope`?
    pub fn declares(&self, scope: &str, local: &str) -> bool {
        self.local_members
            .get(scope)
            .is_some_and(|names| names.contains(local))
    }

    pub fn qualified_names(&self) -> impl Iterator<Item = &Arc<str>> {
        self.qualified.iter()
    }

    pub fn len(&self) -> usize {
        self.qualified.len()
    }

    pub fn is_empty(&self) -> bool {
        self.qualified.is_empty()
    }
}
