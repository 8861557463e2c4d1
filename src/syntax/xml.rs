//! DDS-XML reading.
//!
//! Drives a namespace-aware `quick-xml` reader and feeds a
//! [`DocumentBuilder`]. Elements keep their local tag name plus the namespace
//! URI they resolve to, so `<dds:module>` and a default-namespaced `<module>`
//! look the same to the resolver.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;
use smol_str::SmolStr;

use super::document::{Document, DocumentBuilder};
use super::error::ParseError;
use crate::base::{FileId, LineIndex, TextSize};

/// Parse XML text into a [`Document`] tagged with `file`.
pub fn parse_document(text: &str, file: FileId) -> Result<Document, ParseError> {
    let lines = LineIndex::new(text);
    let line_at = |offset: u64| lines.line(TextSize::from(offset as u32));

    let mut reader = NsReader::from_str(text);
    let mut builder = DocumentBuilder::new(file);

    loop {
        // Text events are not trimmed, so this is the `<` of the next tag.
        let offset = reader.buffer_position();
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                open_element(&mut builder, &reader, &e, line_at(offset))?;
            }
            Ok(Event::Empty(e)) => {
                open_element(&mut builder, &reader, &e, line_at(offset))?;
                builder.end()?;
            }
            Ok(Event::End(_)) => builder.end()?,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ParseError::xml(
                    line_at(reader.error_position()),
                    e.to_string(),
                ));
            }
        }
    }

    builder.finish()
}

fn open_element(
    builder: &mut DocumentBuilder,
    reader: &NsReader<&[u8]>,
    e: &BytesStart<'_>,
    line: u32,
) -> Result<(), ParseError> {
    let (ns, local) = reader.resolve_element(e.name());
    let namespace = match ns {
        ResolveResult::Bound(ns) => Some(utf8(ns.as_ref(), line)?),
        ResolveResult::Unbound => None,
        ResolveResult::Unknown(prefix) => {
            return Err(ParseError::UnboundPrefix {
                prefix: utf8(&prefix, line)?,
                line,
            });
        }
    };
    let tag = utf8(local.as_ref(), line)?;

    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| ParseError::xml(line, format!("attribute error: {err}")))?;
        let key = utf8(attr.key.as_ref(), line)?;
        if key == "xmlns" || key.starts_with("xmlns:") {
            continue;
        }
        let value = attr
            .unescape_value()
            .map_err(|err| ParseError::xml(line, format!("attribute `{key}`: {err}")))?;
        attributes.push((key, SmolStr::new(value)));
    }

    builder.start(tag, namespace, attributes, Some(line))?;
    Ok(())
}

fn utf8(bytes: &[u8], line: u32) -> Result<SmolStr, ParseError> {
    std::str::from_utf8(bytes)
        .map(SmolStr::new)
        .map_err(|e| ParseError::xml(line, format!("invalid UTF-8: {e}")))
}
