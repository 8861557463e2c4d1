//! Publishing schema and example files with absolute schema locations.
//!
//! Sources reference their schemas through relative paths (`./dds-xml...`).
//! Published copies point at the stamped location on the OMG site instead.
//! Only the files directly inside the input directory are processed and the
//! sources are never modified.

use std::path::{Path, PathBuf};

use smol_str::SmolStr;

use super::error::PublishError;
use super::file_loader::collect_file_paths;

/// Stamp used when none is given.
pub const DEFAULT_STAMP: &str = "20250901";

/// Output directory used when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "omg_dds-xml_machine_readable";

const SPEC_BASE_URL: &str = "https://www.omg.org/spec/DDS-XML";

/// A literal text substitution applied to files with one extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rewrite {
    pub extension: SmolStr,
    pub from: String,
    pub to: String,
}

impl Rewrite {
    pub fn new(extension: impl Into<SmolStr>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn apply(&self, text: &str) -> String {
        text.replace(&self.from, &self.to)
    }
}

/// The schema location rewrites for `.xsd` and `.xml` files.
pub fn schema_location_rewrites(stamp: &str) -> Vec<Rewrite> {
    let target = format!("{SPEC_BASE_URL}/{stamp}/dds-xml");
    vec![
        Rewrite::new(
            "xsd",
            r#"schemaLocation="./dds-xml"#,
            format!(r#"schemaLocation="{target}"#),
        ),
        Rewrite::new(
            "xml",
            r#"schemaLocation="http://www.omg.org/spec/DDS-XML ./dds-xml"#,
            format!(r#"schemaLocation="http://www.omg.org/spec/DDS-XML {target}"#),
        ),
    ]
}

/// What a publish run wrote.
#[derive(Debug, Default)]
pub struct PublishSummary {
    /// Output files, in write order.
    pub written: Vec<PathBuf>,
    /// How many of them differ from their source.
    pub changed: usize,
}

/// Copy every file matching a rewrite from `input` to `output`, rewritten.
pub fn publish(
    input: &Path,
    output: &Path,
    rewrites: &[Rewrite],
) -> Result<PublishSummary, PublishError> {
    std::fs::create_dir_all(output).map_err(|e| PublishError::io(output, e))?;

    let same = match (input.canonicalize(), output.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    };
    if same {
        return Err(PublishError::SameDirectory(output.to_path_buf()));
    }

    let mut summary = PublishSummary::default();
    for rewrite in rewrites {
        for source in collect_file_paths(input, &rewrite.extension, false)? {
            let Some(name) = source.file_name() else {
                continue;
            };
            let text = std::fs::read_to_string(&source).map_err(|e| PublishError::io(&source, e))?;
            let updated = rewrite.apply(&text);
            if updated != text {
                summary.changed += 1;
            }

            let dest = output.join(name);
            std::fs::write(&dest, updated).map_err(|e| PublishError::io(&dest, e))?;
            tracing::info!("Wrote {}", dest.display());
            summary.written.push(dest);
        }
    }
    Ok(summary)
}
