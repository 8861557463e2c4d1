//! Rendered reports over loaded workspaces.

use ddsxref::report::{TextReport, clean_message, missing_header, render_text};
use ddsxref::{CheckerConfig, NamespaceKind};

use crate::helpers::check_helpers::*;
use crate::helpers::fixtures::*;

#[test]
fn test_text_report_for_system() {
    let ws = workspace_from(&[("system.xml", SYSTEM)]);
    let reports = ws.check(&CheckerConfig::default());

    let expected = "\
Missing type definitions for type_ref(s):
  Sensors::Alarm
    Referenced from: system.xml <register_type name=\"AlarmType\"> (line 20)

Missing Qos definitions for base_name(s):
  Missing::Profile
    Referenced from: system.xml <datareader_qos> (line 14)

All base_name references resolve to a defined qos_snippet.
";
    assert_eq!(render_text(&ws, &reports), expected);
}

#[test]
fn test_parse_errors_come_first() {
    let ws = workspace_allowing_failures(&[("bad.xml", MALFORMED), ("qos.xml", QOS_LIBRARIES)]);
    let config = CheckerConfig::default().with_kinds([NamespaceKind::Profiles]);
    let reports = ws.check(&config);

    let text = TextReport::new(&ws, &reports).to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[0].starts_with("Error parsing bad.xml: XML error at line 1"));
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], missing_header(NamespaceKind::Profiles));
    assert_eq!(lines[3], "  ProfileY");
    assert_eq!(lines[5], "    Did you mean: LibC::ProfileY?");
}

#[test]
fn test_clean_messages() {
    let ws = workspace_from(&[("empty.xml", "<dds xmlns=\"http://www.omg.org/spec/DDS-XML\"/>")]);
    let reports = ws.check(&CheckerConfig::default());

    let text = render_text(&ws, &reports);
    let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(
        lines,
        vec![
            clean_message(NamespaceKind::Types),
            clean_message(NamespaceKind::Profiles),
            clean_message(NamespaceKind::Fragments),
        ]
    );
}

#[cfg(feature = "json")]
#[test]
fn test_json_report_includes_failures() {
    let ws = workspace_allowing_failures(&[("bad.xml", MALFORMED), ("system.xml", SYSTEM)]);
    let reports = ws.check(&CheckerConfig::default());

    let json = ddsxref::report::render_json(&ws, &reports).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["failures"][0]["file"], "bad.xml");
    assert_eq!(value["kinds"].as_array().unwrap().len(), 3);
    assert_eq!(value["kinds"][0]["unresolved"], 1);
    let site = &value["kinds"][0]["findings"][0]["sites"][0];
    assert_eq!(site["file"], "system.xml");
    assert_eq!(site["element"], "register_type");
    assert_eq!(site["name"], "AlarmType");
    assert_eq!(site["attribute"], "type_ref");
    assert_eq!(site["line"], 20);
    assert!(value["kinds"][2]["findings"].as_array().unwrap().is_empty());
}
