//! Rendering check results for people and for tools.
//!
//! [`TextReport`] prints one block per checked kind: either the kind's
//! confirmation line, or each unresolved target followed by its referencing
//! sites and any suggestions. Files that failed to load are listed first.
//! With the `json` feature, [`render_json`] emits the same content as JSON.

use std::fmt;

use crate::hir::{Finding, KindReport, NamespaceKind, Reference};
use crate::project::{FileSet, LoadFailure, Workspace};

/// Heading printed above the unresolved targets of `kind`.
pub fn missing_header(kind: NamespaceKind) -> &'static str {
    match kind {
        NamespaceKind::Types => "Missing type definitions for type_ref(s):",
        NamespaceKind::Profiles => "Missing Qos definitions for base_name(s):",
        NamespaceKind::Fragments => "Missing qos_snippet definitions for base_name(s):",
    }
}

/// Line printed when every reference of `kind` resolved.
pub fn clean_message(kind: NamespaceKind) -> &'static str {
    match kind {
        NamespaceKind::Types => "All type_ref values are defined in the loaded XML files.",
        NamespaceKind::Profiles => "All base_name references resolve to a defined qos_profile.",
        NamespaceKind::Fragments => "All base_name references resolve to a defined qos_snippet.",
    }
}

/// Plain-text report over a workspace and its check results.
pub struct TextReport<'a> {
    files: &'a FileSet,
    failures: &'a [LoadFailure],
    reports: &'a [KindReport],
}

impl<'a> TextReport<'a> {
    pub fn new(workspace: &'a Workspace, reports: &'a [KindReport]) -> Self {
        Self {
            files: workspace.files(),
            failures: workspace.failures(),
            reports,
        }
    }

    fn write_finding(&self, f: &mut fmt::Formatter<'_>, finding: &Finding) -> fmt::Result {
        writeln!(f, "  {}", finding.target)?;
        for site in &finding.sites {
            self.write_site(f, site)?;
        }
        if !finding.suggestions.is_empty() {
            let names: Vec<&str> = finding.suggestions.iter().map(|s| &**s).collect();
            writeln!(f, "    Did you mean: {}?", names.join(", "))?;
        }
        Ok(())
    }

    fn write_site(&self, f: &mut fmt::Formatter<'_>, site: &Reference) -> fmt::Result {
        write!(
            f,
            "    Referenced from: {} <{}",
            self.files.display(site.file),
            site.element
        )?;
        if let Some(name) = &site.element_name {
            write!(f, " name=\"{name}\"")?;
        }
        match site.line {
            Some(line) => writeln!(f, "> (line {line})"),
            None => writeln!(f, "> (line unknown)"),
        }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for failure in self.failures {
            writeln!(
                f,
                "Error parsing {}: {}",
                failure.path.display(),
                failure.error
            )?;
        }

        for (i, report) in self.reports.iter().enumerate() {
            if i > 0 || !self.failures.is_empty() {
                writeln!(f)?;
            }
            if report.is_clean() {
                writeln!(f, "{}", clean_message(report.kind))?;
                continue;
            }
            writeln!(f, "{}", missing_header(report.kind))?;
            for finding in &report.findings {
                self.write_finding(f, finding)?;
            }
        }
        Ok(())
    }
}

/// Render the text report to a string.
pub fn render_text(workspace: &Workspace, reports: &[KindReport]) -> String {
    TextReport::new(workspace, reports).to_string()
}

#[cfg(feature = "json")]
mod json {
    use serde::Serialize;

    use super::*;
    use crate::hir::codes;

    #[derive(Debug, Serialize)]
    struct JsonReport<'a> {
        failures: Vec<JsonFailure>,
        kinds: Vec<JsonKind<'a>>,
    }

    #[derive(Debug, Serialize)]
    struct JsonFailure {
        file: String,
        error: String,
    }

    #[derive(Debug, Serialize)]
    struct JsonKind<'a> {
        kind: &'static str,
        definitions: usize,
        references: usize,
        unresolved: usize,
        findings: Vec<JsonFinding<'a>>,
    }

    #[derive(Debug, Serialize)]
    struct JsonFinding<'a> {
        code: &'static str,
        target: &'a str,
        sites: Vec<JsonSite<'a>>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        suggestions: Vec<&'a str>,
    }

    #[derive(Debug, Serialize)]
    struct JsonSite<'a> {
        file: String,
        element: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<&'a str>,
        attribute: &'a str,
        line: Option<u32>,
    }

    /// Render failures and findings as pretty-printed JSON.
    pub fn render_json(
        workspace: &Workspace,
        reports: &[KindReport],
    ) -> Result<String, serde_json::Error> {
        let files = workspace.files();
        let report = JsonReport {
            failures: workspace
                .failures()
                .iter()
                .map(|failure| JsonFailure {
                    file: failure.path.display().to_string(),
                    error: failure.error.to_string(),
                })
                .collect(),
            kinds: reports
                .iter()
                .map(|report| JsonKind {
                    kind: report.kind.as_str(),
                    definitions: report.definitions,
                    references: report.references,
                    unresolved: report.unresolved(),
                    findings: report
                        .findings
                        .iter()
                        .map(|finding| JsonFinding {
                            code: codes::UNDEFINED_REFERENCE,
                            target: &finding.target,
                            sites: finding
                                .sites
                                .iter()
                                .map(|site| JsonSite {
                                    file: files.display(site.file),
                                    element: &site.element,
                                    name: site.element_name.as_deref(),
                                    attribute: &site.attribute,
                                    line: site.line,
                                })
                                .collect(),
                            suggestions: finding.suggestions.iter().map(|s| &**s).collect(),
                        })
                        .collect(),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&report)
    }
}

#[cfg(feature = "json")]
pub use json::render_json;
