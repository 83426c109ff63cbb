// Copyright (c) Contributors to the buildspec project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use tempfile::TempDir;

use super::*;

#[rstest]
fn test_parse_minimal_config() {
    let yaml = r#"
api: buildspec/v0
"#;
    let config = BuildConfig::from_yaml(yaml).expect("Should parse minimal config");
    assert_eq!(config.api, ApiVersion::V0);
    assert!(config.entry_points.is_empty());
    assert_eq!(config.metadata, Metadata::default());
}

#[rstest]
fn test_missing_keys_resolve_to_defaults() {
    let yaml = r#"
api: buildspec/v0
metadata:
  author: "The Community"
"#;
    let config = BuildConfig::from_yaml(yaml).expect("Should parse config");
    let md = &config.metadata;

    assert_eq!(md.author, "The Community");
    assert_eq!(md.package_name, "package");
    assert_eq!(md.description, "");
    assert_eq!(md.author_email, "");
    assert_eq!(md.license, "unknown");
    assert_eq!(md.url, "");
    assert_eq!(md.version, "0.0.dev0");
    assert_eq!(md.minimum_runtime_version, "1.0");
    assert_eq!(md.setup_requires, "");
    assert_eq!(md.install_requires, "");
    assert_eq!(md.extra_requires, "");
    assert!(md.requirement_keys.is_empty());
}

#[rstest]
fn test_parse_full_metadata() {
    let yaml = r#"
api: buildspec/v0
metadata:
  package_name: sunkit
  description: "Solar image analysis"
  author: "The Community"
  author_email: "dev@example.org"
  license: BSD
  url: "https://example.org"
  version: "1.2.3.dev0"
  minimum_runtime_version: "3.6"
  setup_requires: "build-helpers"
  install_requires: "numpy, scipy"
  extra_requires: "net, dev"
  net_requires: "requests"
  dev_requires: "pytest, flake8"
"#;
    let config = BuildConfig::from_yaml(yaml).expect("Should parse full metadata");
    let md = &config.metadata;

    assert_eq!(md.package_name, "sunkit");
    assert_eq!(md.version, "1.2.3.dev0");
    assert_eq!(md.extra_requires, "net, dev");
    assert_eq!(md.requirement_keys.get("net_requires").map(String::as_str), Some("requests"));
    assert_eq!(
        md.requirement_keys.get("dev_requires").map(String::as_str),
        Some("pytest, flake8")
    );
}

#[rstest]
fn test_parse_entry_points_section() {
    let yaml = r#"
api: buildspec/v0
entry_points:
  - name: foo
    target: pkg.mod:main
  - name: bar
    target: pkg.other:run
"#;
    let config = BuildConfig::from_yaml(yaml).expect("Should parse entry points");
    assert_eq!(config.entry_points.len(), 2);
    assert_eq!(config.entry_points[0].name, "foo");
    assert_eq!(config.entry_points[0].target, "pkg.mod:main");
    assert_eq!(config.entry_points[1].name, "bar");
}

#[rstest]
fn test_load_twice_is_deterministic() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(crate::BUILDSPEC_FILENAME);
    std::fs::write(
        &path,
        r#"
api: buildspec/v0
metadata:
  package_name: sunkit
  extra_requires: "net"
  net_requires: "requests"
entry_points:
  - name: sunkit
    target: sunkit.cli:main
"#,
    )
    .unwrap();

    let first = BuildConfig::load(&path).expect("Should load config");
    let second = BuildConfig::load(&path).expect("Should load config again");

    assert_eq!(first.metadata, second.metadata);
    assert_eq!(first.entry_points, second.entry_points);
    assert_eq!(first.source_path, second.source_path);
}

#[rstest]
fn test_missing_file_is_not_an_error() {
    let tmp = TempDir::new().unwrap();
    let config = BuildConfig::load(tmp.path().join("no-such-file.yaml"))
        .expect("Missing file should yield defaults");

    assert_eq!(config.metadata, Metadata::default());
    assert!(config.entry_points.is_empty());
    assert!(config.source_path.is_none());
}

#[rstest]
fn test_malformed_yaml_is_config_error() {
    let yaml = r#"
api: buildspec/v0
metadata: [
  unclosed bracket
"#;
    let result = BuildConfig::from_yaml(yaml);
    match result {
        Err(crate::Error::InvalidConfig { .. }) => {}
        other => panic!("Expected InvalidConfig, got: {:?}", other.map(|c| c.api)),
    }
}

#[rstest]
fn test_source_dir_tracks_loaded_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(crate::BUILDSPEC_FILENAME);
    std::fs::write(&path, "api: buildspec/v0\n").unwrap();

    let config = BuildConfig::load(&path).expect("Should load config");
    assert_eq!(config.source_dir(), Some(tmp.path()));
}
