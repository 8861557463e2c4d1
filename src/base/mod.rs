//! Foundation types for the checker.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`FileId`] - Interned file identifiers
//! - [`TextSize`] - Byte offsets into source text
//! - [`LineIndex`], [`LineCol`] - Offset to line conversion
//! - Domain constants (DDS-XML namespace, separators, tag vocabularies)
//!
//! This module has NO dependencies on other ddsxref modules.

pub mod constants;
mod file_id;
mod line_index;

pub use file_id::FileId;
pub use line_index::{LineCol, LineIndex, TextSize};

// Re-export text-size types for convenience
pub use text_size;
