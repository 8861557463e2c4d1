//! Namespace kinds and the element vocabulary each one is collected from.

use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

use crate::base::constants::*;
use crate::syntax::Node;

/// An independent name space checked in its own pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NamespaceKind {
    /// Data types declared inside nested `module`s.
    Types,
    /// `qos_profile`s declared inside `qos_library`s.
    Profiles,
    /// `qos_snippet`s declared inside `qos_library`s.
    Fragments,
}

/// How scopes of a kind nest, and therefore how unqualified names are looked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeStyle {
    /// Scopes nest arbitrarily; lookup walks the enclosing path innermost first.
    Nested,
    /// Scopes are one level deep; lookup checks the nearest scope only.
    Flat,
}

impl NamespaceKind {
    pub const ALL: [NamespaceKind; 3] = [
        NamespaceKind::Types,
        NamespaceKind::Profiles,
        NamespaceKind::Fragments,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NamespaceKind::Types => "types",
            NamespaceKind::Profiles => "profiles",
            NamespaceKind::Fragments => "fragments",
        }
    }

    pub fn scope_style(self) -> ScopeStyle {
        match self {
            NamespaceKind::Types => ScopeStyle::Nested,
            NamespaceKind::Profiles | NamespaceKind::Fragments => ScopeStyle::Flat,
        }
    }

    /// Tag of the container elements that open a scope.
    pub fn scope_tag(self) -> &'static str {
        match self {
            NamespaceKind::Types => MODULE_TAG,
            NamespaceKind::Profiles | NamespaceKind::Fragments => QOS_LIBRARY_TAG,
        }
    }

    /// Tags of the elements that declare a name of this kind.
    pub fn definition_tags(self) -> &'static [&'static str] {
        match self {
            NamespaceKind::Types => TYPE_TAGS,
            NamespaceKind::Profiles => &[QOS_PROFILE_TAG],
            NamespaceKind::Fragments => &[QOS_SNIPPET_TAG],
        }
    }

    /// Tags of the elements that may carry a reference of this kind.
    pub fn reference_tags(self) -> &'static [&'static str] {
        match self {
            NamespaceKind::Types => TYPE_REFERENCE_TAGS,
            NamespaceKind::Profiles => QOS_PROFILE_REFERENCE_TAGS,
            NamespaceKind::Fragments => QOS_SNIPPET_REFERENCE_TAGS,
        }
    }

    /// Attributes holding a reference, checked in this order.
    pub fn reference_attributes(self) -> &'static [&'static str] {
        match self {
            NamespaceKind::Types => TYPE_REFERENCE_ATTRIBUTES,
            NamespaceKind::Profiles | NamespaceKind::Fragments => &[BASE_NAME_ATTRIBUTE],
        }
    }
}

impl fmt::Display for NamespaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamespaceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "types" | "type" => Ok(NamespaceKind::Types),
            "profiles" | "profile" | "qos_profile" => Ok(NamespaceKind::Profiles),
            "fragments" | "fragment" | "snippets" | "qos_snippet" => Ok(NamespaceKind::Fragments),
            other => Err(format!("unknown namespace kind `{other}`")),
        }
    }
}

/// A [`NamespaceKind`] bound to the element namespace it is matched in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    kind: NamespaceKind,
    namespace: Option<SmolStr>,
}

impl Vocabulary {
    pub fn new(kind: NamespaceKind, namespace: Option<SmolStr>) -> Self {
        Self { kind, namespace }
    }

    /// Vocabulary matching elements in the DDS-XML namespace.
    pub fn dds(kind: NamespaceKind) -> Self {
        Self::new(kind, Some(SmolStr::new_static(DDS_XML_NAMESPACE)))
    }

    pub fn kind(&self) -> NamespaceKind {
        self.kind
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn is_scope(&self, node: &Node) -> bool {
        node.is(self.namespace(), &[self.kind.scope_tag()])
    }

    pub fn is_definition(&self, node: &Node) -> bool {
        node.is(self.namespace(), self.kind.definition_tags())
    }

    pub fn is_reference_site(&self, node: &Node) -> bool {
        node.is(self.namespace(), self.kind.reference_tags())
    }
}
