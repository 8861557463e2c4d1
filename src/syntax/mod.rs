//! Syntax: the document tree the resolver walks, and the XML reader that
//! produces it.

mod document;
mod error;
mod xml;

pub use document::{Document, DocumentBuilder, Node, NodeId};
pub use error::ParseError;
pub use xml::parse_document;
