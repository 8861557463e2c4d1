//! Error types for turning source text into a [`Document`](super::Document).

use smol_str::SmolStr;
use thiserror::Error;

/// Errors raised while building a document tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Malformed XML reported by the reader.
    #[error("XML error at line {line}: {message}")]
    Xml { line: u32, message: String },

    /// An element prefix that no `xmlns` declaration binds.
    #[error("undeclared namespace prefix `{prefix}` at line {line}")]
    UnboundPrefix { prefix: SmolStr, line: u32 },

    /// End of input reached with elements still open.
    #[error("unclosed element <{tag}>")]
    UnclosedElement { tag: SmolStr },

    /// A closing tag with no open element.
    #[error("unexpected closing tag")]
    UnexpectedEnd,

    /// A second top-level element after the root was closed.
    #[error("more than one root element (second opened as <{tag}>)")]
    MultipleRoots { tag: SmolStr },

    /// Input without any element.
    #[error("document has no root element")]
    EmptyDocument,
}

impl ParseError {
    /// Create an XML error.
    pub fn xml(line: u32, message: impl Into<String>) -> Self {
        Self::Xml {
            line,
            message: message.into(),
        }
    }
}
