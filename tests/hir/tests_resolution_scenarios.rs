//! End-to-end resolution scenarios over parsed documents.

use ddsxref::hir::{Resolution, resolve, suggest};
use ddsxref::{FileId, NamespaceKind, parse_document};

use crate::helpers::check_helpers::*;
use crate::helpers::fixtures::*;

// =============================================================================
// FLAT LIBRARIES (QoS profiles)
// =============================================================================

#[test]
fn test_local_member_wins_over_same_named_sibling() {
    let doc = parse_document(QOS_LIBRARIES, FileId::new(0)).unwrap();
    let (table, references) = analyse(NamespaceKind::Profiles, &[doc]);

    let local = reference_to(&references, "ProfileX");
    assert_eq!(local.scope, vec!["LibA"]);
    assert!(table.contains("LibB::ProfileX"));
    assert_eq!(resolve(local, &table), Resolution::Scoped);
}

#[test]
fn test_profile_in_other_library_is_unresolved_with_suggestion() {
    let doc = parse_document(QOS_LIBRARIES, FileId::new(0)).unwrap();
    let (table, references) = analyse(NamespaceKind::Profiles, &[doc]);

    let other = reference_to(&references, "ProfileY");
    assert_eq!(resolve(other, &table), Resolution::Unresolved);
    assert_eq!(
        suggest("ProfileY", &table)
            .iter()
            .map(|s| &**s)
            .collect::<Vec<_>>(),
        vec!["LibC::ProfileY"]
    );
}

#[test]
fn test_sibling_library_member_does_not_resolve() {
    let source = dds(r#"
  <qos_library name="LibA"><qos_profile name="OnlyInA"/></qos_library>
  <qos_library name="LibB"><qos_profile name="P" base_name="OnlyInA"/></qos_library>"#);

    let report = check_one(NamespaceKind::Profiles, &[("qos.xml", &source)]);
    assert_eq!(unresolved_targets(&report), vec!["OnlyInA"]);
    assert_eq!(&*report.findings[0].suggestions[0], "LibA::OnlyInA");
}

#[test]
fn test_qualified_reference_resolves_from_any_library() {
    let source = dds(r#"
  <qos_library name="LibA"><qos_profile name="Base"/></qos_library>
  <qos_library name="LibB">
    <qos_profile name="P" base_name="LibA::Base">
      <datawriter_qos base_name="::LibA::Base"/>
    </qos_profile>
  </qos_library>"#);

    let report = check_one(NamespaceKind::Profiles, &[("qos.xml", &source)]);
    assert!(report.is_clean());
    assert_eq!(report.references, 2);
}

// =============================================================================
// NESTED MODULES (types)
// =============================================================================

#[test]
fn test_nested_module_truncation() {
    let doc = parse_document(NESTED_MODULES, FileId::new(0)).unwrap();
    let (table, references) = analyse(NamespaceKind::Types, &[doc]);

    let point = reference_to(&references, "Point");
    assert_eq!(point.scope, vec!["Outer", "Inner", "Deeper"]);
    assert!(table.contains("Outer::Inner::Point"));
    assert_eq!(resolve(point, &table), Resolution::Scoped);

    let missing = reference_to(&references, "ShapeKind");
    assert_eq!(resolve(missing, &table), Resolution::Unresolved);
}

#[test]
fn test_global_definition_reachable_from_nested_scope() {
    let source = dds(r#"
  <types>
    <struct name="Header"/>
    <module name="A">
      <module name="B">
        <struct name="Msg">
          <member name="h" type="nonBasic" nonBasicTypeName="Header"/>
        </struct>
      </module>
    </module>
  </types>"#);

    let report = check_one(NamespaceKind::Types, &[("types.xml", &source)]);
    assert!(report.is_clean(), "{:?}", report.findings);
}

#[test]
fn test_unscoped_reference_needs_global_definition() {
    let source = types(r#"
  <struct name="G"/>
  <module name="M"><struct name="OnlyInM"/></module>
  <struct name="User">
    <member name="a" type="nonBasic" nonBasicTypeName="G"/>
    <member name="b" type="nonBasic" nonBasicTypeName="OnlyInM"/>
  </struct>"#);

    let report = check_one(NamespaceKind::Types, &[("types.xml", &source)]);
    assert_eq!(unresolved_targets(&report), vec!["OnlyInM"]);
}

#[test]
fn test_qualified_round_trip_ignores_scope() {
    let doc = parse_document(NESTED_MODULES, FileId::new(0)).unwrap();
    let (table, references) = analyse(NamespaceKind::Types, &[doc]);

    let mut probe = reference_to(&references, "ShapeKind").clone();
    for name in table.qualified_names() {
        probe.target = name.as_ref().into();
        assert!(resolve(&probe, &table).is_resolved(), "{name}");
    }
}

// =============================================================================
// ACROSS FILES
// =============================================================================

#[test]
fn test_definitions_from_other_files() {
    let defs = types(r#"<module name="Common"><struct name="Time"/></module>"#);
    let uses = types(
        r#"<module name="Common"><struct name="Stamped">
             <member name="t" type="nonBasic" nonBasicTypeName="Time"/>
           </struct></module>"#,
    );

    let report = check_one(NamespaceKind::Types, &[("defs.xml", &defs), ("uses.xml", &uses)]);
    assert!(report.is_clean());
}

#[test]
fn test_system_document_all_kinds() {
    let ws = workspace_from(&[("system.xml", SYSTEM)]);
    let reports = ws.check(&ddsxref::CheckerConfig::default());

    let targets: Vec<Vec<&str>> = reports.iter().map(unresolved_targets).collect();
    assert_eq!(
        targets,
        vec![vec!["Sensors::Alarm"], vec!["Missing::Profile"], vec![]]
    );
}
