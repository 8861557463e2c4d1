use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use ddsxref::CheckerConfig;
use ddsxref::NamespaceKind;
use ddsxref::project::{DEFAULT_OUTPUT_DIR, DEFAULT_STAMP};

/// CLI arguments for the ddsxref binary.
#[derive(Parser, Debug)]
#[command(
    name = "ddsxref",
    version,
    about = "Check that DDS-XML type and QoS references resolve to definitions"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report references that do not resolve to a definition.
    Check(CheckArgs),
    /// Copy schema and example files with published schema locations.
    Publish(PublishArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Directory holding the XML documents.
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Reference kind to check; repeat for several. Defaults to all kinds.
    #[arg(short, long = "kind", value_enum, ignore_case = true)]
    pub kinds: Vec<KindArg>,

    /// Also load documents from subdirectories.
    #[arg(short, long)]
    pub recursive: bool,

    /// Match elements in any namespace, or none.
    #[arg(long, conflicts_with = "namespace")]
    pub any_namespace: bool,

    /// Namespace URI elements must be bound to.
    #[arg(long)]
    pub namespace: Option<String>,

    /// Extension of the files to load.
    #[arg(long, default_value = "xml")]
    pub extension: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Load files and check kinds on a single thread.
    #[arg(long)]
    pub sequential: bool,
}

impl CheckArgs {
    pub fn to_config(&self) -> CheckerConfig {
        let mut config = CheckerConfig::default()
            .with_extension(self.extension.as_str())
            .recursive(self.recursive)
            .parallel(!self.sequential);
        if self.any_namespace {
            config = config.any_namespace();
        } else if let Some(namespace) = &self.namespace {
            config = config.with_namespace(Some(namespace.as_str()));
        }
        if !self.kinds.is_empty() {
            config = config.with_kinds(self.kinds.iter().map(|&k| NamespaceKind::from(k)));
        }
        config
    }
}

#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Directory holding the source .xsd and .xml files.
    #[arg(long, default_value = ".")]
    pub input: PathBuf,

    /// Directory the rewritten files are written to.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Release stamp used in the published schema URLs.
    #[arg(long, default_value = DEFAULT_STAMP, value_parser = parse_stamp)]
    pub stamp: String,
}

fn parse_stamp(value: &str) -> Result<String, String> {
    if value.len() == 8 && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(value.to_string())
    } else {
        Err(format!("expected YYYYMMDD, got '{value}'"))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum KindArg {
    Types,
    #[value(alias = "qos")]
    Profiles,
    #[value(alias = "snippets")]
    Fragments,
}

impl From<KindArg> for NamespaceKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Types => NamespaceKind::Types,
            KindArg::Profiles => NamespaceKind::Profiles,
            KindArg::Fragments => NamespaceKind::Fragments,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
