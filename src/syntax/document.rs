//! Read-only document trees.
//!
//! A [`Document`] is an arena of [`Node`]s addressed by [`NodeId`]. Nodes are
//! stored in document order, so iterating ids front to back is a pre-order
//! walk. Parent links are plain ids and never own anything.

use smol_str::SmolStr;

use super::error::ParseError;
use crate::base::FileId;
use crate::base::constants::NAME_ATTRIBUTE;

/// Index of a node inside its [`Document`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One element: tag, namespace, attributes and links to its neighbours.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    tag: SmolStr,
    namespace: Option<SmolStr>,
    attributes: Vec<(SmolStr, SmolStr)>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    line: Option<u32>,
}

impl Node {
    /// Local tag name, without any namespace prefix.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Namespace URI the element is bound to, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The element's declared `name`, ignoring empty values.
    pub fn name(&self) -> Option<&str> {
        self.attribute(NAME_ATTRIBUTE).filter(|n| !n.is_empty())
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// 1-based source line of the start tag, when known.
    pub fn line(&self) -> Option<u32> {
        self.line
    }

    /// Does this element carry one of `tags` in the given namespace?
    ///
    /// `namespace: None` accepts any namespace, including none at all.
    pub fn is(&self, namespace: Option<&str>, tags: &[&str]) -> bool {
        tags.contains(&self.tag.as_str())
            && namespace.is_none_or(|ns| self.namespace.as_deref() == Some(ns))
    }
}

/// A parsed document: one root element and everything below it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    file: FileId,
    nodes: Vec<Node>,
}

impl Document {
    pub fn file(&self) -> FileId {
        self.file
    }

    /// The outermost element.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Proper ancestors of `id`, innermost first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), |&p| self.parent(p))
    }

    /// Every node in document (pre-)order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i as u32), node))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Incrementally assembles a [`Document`] from start/end events.
#[derive(Debug)]
pub struct DocumentBuilder {
    file: FileId,
    nodes: Vec<Node>,
    open: Vec<NodeId>,
}

impl DocumentBuilder {
    pub fn new(file: FileId) -> Self {
        Self {
            file,
            nodes: Vec::new(),
            open: Vec::new(),
        }
    }

    /// Open an element as a child of the innermost open element.
    pub fn start<K, V>(
        &mut self,
        tag: impl Into<SmolStr>,
        namespace: Option<SmolStr>,
        attributes: impl IntoIterator<Item = (K, V)>,
        line: Option<u32>,
    ) -> Result<NodeId, ParseError>
    where
        K: Into<SmolStr>,
        V: Into<SmolStr>,
    {
        let tag = tag.into();
        let parent = self.open.last().copied();
        if parent.is_none() && !self.nodes.is_empty() {
            return Err(ParseError::MultipleRoots { tag });
        }

        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            tag,
            namespace,
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            children: Vec::new(),
            parent,
            line,
        });
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(id);
        }
        self.open.push(id);
        Ok(id)
    }

    /// Close the innermost open element.
    pub fn end(&mut self) -> Result<(), ParseError> {
        self.open.pop().map(|_| ()).ok_or(ParseError::UnexpectedEnd)
    }

    /// Open and immediately close an element.
    pub fn leaf<K, V>(
        &mut self,
        tag: impl Into<SmolStr>,
        namespace: Option<SmolStr>,
        attributes: impl IntoIterator<Item = (K, V)>,
        line: Option<u32>,
    ) -> Result<NodeId, ParseError>
    where
        K: Into<SmolStr>,
        V: Into<SmolStr>,
    {
        let id = self.start(tag, namespace, attributes, line)?;
        self.end()?;
        Ok(id)
    }

    pub fn finish(self) -> Result<Document, ParseError> {
        if let Some(&id) = self.open.last() {
            return Err(ParseError::UnclosedElement {
                tag: self.nodes[id.index()].tag.clone(),
            });
        }
        if self.nodes.is_empty() {
            return Err(ParseError::EmptyDocument);
        }
        Ok(Document {
            file: self.file,
            nodes: self.nodes,
        })
    }
}
