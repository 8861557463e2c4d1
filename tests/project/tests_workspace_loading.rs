//! Directory loading with real files.

use std::fs;
use std::path::{Path, PathBuf};

use rstest::rstest;
use tempfile::TempDir;

use ddsxref::project::file_loader::collect_file_paths;
use ddsxref::{CheckerConfig, LoadError, NamespaceKind, ParseError, Workspace, WorkspaceLoader};

use crate::helpers::check_helpers::*;
use crate::helpers::fixtures::*;

fn write(dir: &Path, name: &str, text: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, text).unwrap();
}

#[test]
fn test_parse_failure_does_not_stop_the_run() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "broken.xml", MALFORMED);
    write(dir.path(), "qos.xml", QOS_LIBRARIES);
    write(dir.path(), "system.xml", SYSTEM);

    let config = CheckerConfig::default();
    let ws = Workspace::load_directory(dir.path(), &config).unwrap();

    assert_eq!(ws.documents().len(), 2);
    assert_eq!(ws.failures().len(), 1);
    assert_eq!(ws.failures()[0].path, PathBuf::from("broken.xml"));
    assert!(matches!(
        ws.failures()[0].error,
        LoadError::Parse(ParseError::Xml { .. })
    ));

    let reports = ws.check(&config);
    assert_eq!(unresolved_targets(&reports[0]), vec!["Sensors::Alarm"]);
    assert_eq!(
        unresolved_targets(&reports[1]),
        vec!["Missing::Profile", "ProfileY"]
    );
}

#[test]
fn test_failed_file_contributes_nothing() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "a_defs.xml",
        &types(r#"<module name="M"><struct name="Lost"/></module><unclosed>"#),
    );
    write(
        dir.path(),
        "b_uses.xml",
        &types(r#"<typedef name="T" type="nonBasic" nonBasicTypeName="M::Lost"/>"#),
    );

    let config = CheckerConfig::default().with_kinds([NamespaceKind::Types]);
    let ws = Workspace::load_directory(dir.path(), &config).unwrap();
    let reports = ws.check(&config);

    assert_eq!(ws.failures().len(), 1);
    assert_eq!(unresolved_targets(&reports[0]), vec!["M::Lost"]);
}

#[rstest]
#[case::flat(false, &["top.xml"])]
#[case::recursive(true, &["nested/inner.xml", "top.xml"])]
fn test_discovery_depth(#[case] recursive: bool, #[case] expected: &[&str]) {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "top.xml", "<dds/>");
    write(dir.path(), "nested/inner.xml", "<dds/>");
    write(dir.path(), "schema.xsd", "<xs:schema/>");

    let config = CheckerConfig::default().recursive(recursive);
    let ws = WorkspaceLoader::new(config).load_directory(dir.path()).unwrap();

    let mut paths: Vec<String> = (0..ws.files().len() as u32)
        .filter_map(|i| ws.files().path(ddsxref::FileId::new(i)))
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .collect();
    paths.sort();
    assert_eq!(paths, expected);
}

#[test]
fn test_custom_extension() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.xml", "<dds/>");
    write(dir.path(), "b.ddsxml", "<dds/>");

    let paths = collect_file_paths(dir.path(), "ddsxml", false).unwrap();
    assert_eq!(paths, vec![dir.path().join("b.ddsxml")]);

    let config = CheckerConfig::default().with_extension(".ddsxml");
    let ws = Workspace::load_directory(dir.path(), &config).unwrap();
    assert_eq!(ws.documents().len(), 1);
}

#[test]
fn test_missing_directory_is_fatal() {
    let dir = TempDir::new().unwrap();
    let result = Workspace::load_directory(dir.path().join("absent"), &CheckerConfig::default());
    assert!(matches!(result, Err(LoadError::DirectoryNotFound(_))));
}

#[test]
fn test_empty_directory_is_clean() {
    let dir = TempDir::new().unwrap();
    let config = CheckerConfig::default();
    let ws = Workspace::load_directory(dir.path(), &config).unwrap();

    let reports = ws.check(&config);
    assert_eq!(reports.len(), 3);
    assert!(reports.iter().all(|r| r.is_clean() && r.references == 0));
}
