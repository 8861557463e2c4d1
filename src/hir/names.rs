//! Helpers for `::`-qualified names.

use smol_str::SmolStr;

use crate::base::constants::{ROOT_MARKER, SEPARATOR};

/// Join a scope path and a local name: `["A", "B"]` + `"C"` is `A::B::C`.
pub fn qualify(path: &[SmolStr], local: &str) -> String {
    let mut name = String::new();
    for segment in path {
        name.push_str(segment);
        name.push_str(SEPARATOR);
    }
    name.push_str(local);
    name
}

/// The rightmost segment of a possibly-qualified name.
pub fn local_segment(name: &str) -> &str {
    name.rsplit(SEPARATOR).next().unwrap_or(name)
}

/// If `name` is qualified (or root-anchored), the table key it must match.
///
/// `::A::B` and `A::B` both yield `A::B`; `::B` yields `B`; `B` yields `None`.
pub fn absolute_form(name: &str) -> Option<&str> {
    if let Some(stripped) = name.strip_prefix(ROOT_MARKER) {
        Some(stripped)
    } else if name.contains(SEPARATOR) {
        Some(name)
    } else {
        None
    }
}
