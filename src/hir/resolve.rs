//! Name resolution: deciding whether a reference reaches a definition.
//!
//! Resolution rules, first match wins:
//!
//! 1. A qualified target (`A::B`) or a root-anchored one (`::B`) must be a
//!    Definition Table entry, root marker stripped.
//! 2. An unqualified target is looked up from its enclosing scope through the
//!    kind's [`ScopeLookup`] strategy.
//! 3. Failing that, it may name a global (unscoped) definition.
//!
//! The two strategies differ on purpose: modules nest, so [`ModuleChain`]
//! walks every truncation of the enclosing path innermost first; libraries are
//! one level deep, so [`LibraryLevel`] makes a single membership test against
//! the nearest library's direct members.

use smol_str::SmolStr;

use super::kind::ScopeStyle;
use super::names::{absolute_form, qualify};
use super::references::Reference;
use super::scope::DefinitionTable;

/// How a reference was (or was not) resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// Matched a table entry by its qualified name (rule 1).
    Qualified,
    /// Found from the enclosing scope (rule 2).
    Scoped,
    /// Matched a global definition (rule 3).
    Global,
    Unresolved,
}

impl Resolution {
    pub fn is_resolved(self) -> bool {
        self != Resolution::Unresolved
    }
}

/// Scope lookup strategy for unqualified names.
pub trait ScopeLookup {
    /// Is `name` visible from the scope identified by `scope`?
    fn is_member(&self, scope: &[SmolStr], name: &str) -> bool;
}

/// Nested-module lookup: try `scope[..i]::name` for `i` from the full path
/// down to one segment.
#[derive(Clone, Copy, Debug)]
pub struct ModuleChain<'a> {
    table: &'a DefinitionTable,
}

impl<'a> ModuleChain<'a> {
    pub fn new(table: &'a DefinitionTable) -> Self {
        Self { table }
    }
}

impl ScopeLookup for ModuleChain<'_> {
    fn is_member(&self, scope: &[SmolStr], name: &str) -> bool {
        (1..=scope.len())
            .rev()
            .any(|depth| self.table.contains(&qualify(&scope[..depth], name)))
    }
}

/// Flat-library lookup: is `name` a direct member of the nearest library?
#[derive(Clone, Copy, Debug)]
pub struct LibraryLevel<'a> {
    table: &'a DefinitionTable,
}

impl<'a> LibraryLevel<'a> {
    pub fn new(table: &'a DefinitionTable) -> Self {
        Self { table }
    }
}

impl ScopeLookup for LibraryLevel<'_> {
    fn is_member(&self, scope: &[SmolStr], name: &str) -> bool {
        scope
            .last()
            .is_some_and(|library| self.table.declares(library, name))
    }
}

/// Resolves references against one Definition Table.
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'a, L> {
    table: &'a DefinitionTable,
    lookup: L,
}

impl<'a, L: ScopeLookup> Resolver<'a, L> {
    pub fn new(table: &'a DefinitionTable, lookup: L) -> Self {
        Self { table, lookup }
    }

    /// Resolve `target` as written inside `scope`.
    pub fn resolve_name(&self, target: &str, scope: &[SmolStr]) -> Resolution {
        let name = target.trim();

        if let Some(absolute) = absolute_form(name) {
            return if self.table.contains(absolute) {
                Resolution::Qualified
            } else {
                Resolution::Unresolved
            };
        }
        if !scope.is_empty() && self.lookup.is_member(scope, name) {
            return Resolution::Scoped;
        }
        if self.table.contains(name) {
            return Resolution::Global;
        }
        Resolution::Unresolved
    }

    pub fn resolve(&self, reference: &Reference) -> Resolution {
        let result = self.resolve_name(&reference.target, &reference.scope);
        tracing::trace!(
            target_name = %reference.target,
            scope = ?reference.scope,
            ?result,
            "resolved reference"
        );
        result
    }
}

/// Resolve `reference` with the lookup strategy its kind calls for.
pub fn resolve(reference: &Reference, table: &DefinitionTable) -> Resolution {
    match reference.kind.scope_style() {
        ScopeStyle::Nested => Resolver::new(table, ModuleChain::new(table)).resolve(reference),
        ScopeStyle::Flat => Resolver::new(table, LibraryLevel::new(table)).resolve(reference),
    }
}
