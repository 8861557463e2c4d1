//! Grouping, ordering and suggestions of findings.

use ddsxref::NamespaceKind;
use ddsxref::hir::codes;

use crate::helpers::check_helpers::*;
use crate::helpers::fixtures::*;

#[test]
fn test_findings_grouped_by_target_and_sorted() {
    let first = dds(r#"
  <qos_library name="L">
    <qos_profile name="A" base_name="Zeta"/>
    <qos_profile name="B" base_name="Alpha"/>
  </qos_library>"#);
    let second = dds(r#"
  <qos_library name="M">
    <qos_profile name="C" base_name="Zeta"/>
  </qos_library>"#);

    let report = check_one(
        NamespaceKind::Profiles,
        &[("first.xml", &first), ("second.xml", &second)],
    );

    assert_eq!(unresolved_targets(&report), vec!["Alpha", "Zeta"]);
    assert_eq!(report.unresolved(), 3);

    let zeta = &report.findings[1];
    let sites: Vec<_> = zeta
        .sites
        .iter()
        .map(|s| (s.file.index(), s.element_name.as_deref(), s.line))
        .collect();
    assert_eq!(sites, vec![(0, Some("A"), Some(4)), (1, Some("C"), Some(4))]);
    assert_eq!(zeta.code(), codes::UNDEFINED_REFERENCE);
}

#[test]
fn test_raw_strings_group_separately() {
    let source = dds(r#"
  <qos_library name="L">
    <qos_profile name="A" base_name="Gone"/>
    <qos_profile name="B" base_name=" Gone"/>
  </qos_library>"#);

    let report = check_one(NamespaceKind::Profiles, &[("qos.xml", &source)]);
    assert_eq!(unresolved_targets(&report), vec![" Gone", "Gone"]);
}

#[test]
fn test_suggestions_share_local_name() {
    let source = dds(r#"
  <qos_library name="A"><qos_profile name="Target"/></qos_library>
  <qos_library name="B"><qos_profile name="Target"/><qos_profile name="TargetX"/></qos_library>
  <qos_library name="C"><qos_profile name="P" base_name="Elsewhere::Target"/></qos_library>"#);

    let report = check_one(NamespaceKind::Profiles, &[("qos.xml", &source)]);
    let suggestions: Vec<&str> = report.findings[0]
        .suggestions
        .iter()
        .map(|s| &**s)
        .collect();
    assert_eq!(suggestions, vec!["A::Target", "B::Target"]);
}

#[test]
fn test_no_suggestions_without_local_match() {
    let report = check_one(NamespaceKind::Types, &[("t.xml", NESTED_MODULES)]);

    assert_eq!(unresolved_targets(&report), vec!["ShapeKind"]);
    assert!(report.findings[0].suggestions.is_empty());
}

#[test]
fn test_counts() {
    let report = check_one(NamespaceKind::Types, &[("t.xml", NESTED_MODULES)]);

    // Point, Shape
    assert_eq!(report.definitions, 2);
    assert_eq!(report.references, 2);
}
