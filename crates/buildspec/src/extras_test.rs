// Copyright (c) Contributors to the buildspec project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;

fn requirements(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[rstest]
fn test_resolve_two_tags_with_all_union() {
    let reqs = requirements(&[("net_requires", "requests"), ("dev_requires", "pytest, flake8")]);
    let table = resolve_extras("net,dev", &reqs).expect("Should resolve extras");

    let net: Vec<&str> = table["net"].iter().map(String::as_str).collect();
    let dev: Vec<&str> = table["dev"].iter().map(String::as_str).collect();
    let all: Vec<&str> = table[ALL_EXTRA].iter().map(String::as_str).collect();

    assert_eq!(net, vec!["requests"]);
    assert_eq!(dev, vec!["flake8", "pytest"]);
    assert_eq!(all, vec!["flake8", "pytest", "requests"]);
}

#[rstest]
fn test_empty_tag_list_yields_empty_table() {
    let reqs = requirements(&[("net_requires", "requests")]);
    let table = resolve_extras("", &reqs).expect("Empty tag list is valid");

    assert!(table.is_empty());
    assert!(!table.contains_key(ALL_EXTRA), "No 'all' key for empty input");
}

#[rstest]
fn test_tags_and_requirements_are_trimmed() {
    let reqs = requirements(&[("net_requires", "  requests ,  urllib3  ")]);
    let table = resolve_extras("  net  ", &reqs).expect("Should trim tags");

    let net: Vec<&str> = table["net"].iter().map(String::as_str).collect();
    assert_eq!(net, vec!["requests", "urllib3"]);
}

#[rstest]
fn test_duplicates_across_tags_union_once() {
    let reqs = requirements(&[
        ("net_requires", "requests, shared"),
        ("dev_requires", "pytest, shared"),
    ]);
    let table = resolve_extras("net, dev", &reqs).expect("Should resolve extras");

    let all: Vec<&str> = table[ALL_EXTRA].iter().map(String::as_str).collect();
    assert_eq!(all, vec!["pytest", "requests", "shared"]);
}

#[rstest]
fn test_missing_requirement_key_is_fatal() {
    let reqs = requirements(&[("net_requires", "requests")]);
    let result = resolve_extras("net, dev", &reqs);

    match result {
        Err(crate::Error::MissingRequirementKey { tag, key }) => {
            assert_eq!(tag, "dev");
            assert_eq!(key, "dev_requires");
        }
        other => panic!("Expected MissingRequirementKey, got: {:?}", other),
    }
}

#[rstest]
fn test_serialization_is_byte_identical_across_resolutions() {
    let reqs = requirements(&[("dev_requires", "pytest, flake8"), ("net_requires", "requests")]);

    let first = resolve_extras("dev,net", &reqs).expect("Should resolve");
    let second = resolve_extras("dev,net", &reqs).expect("Should resolve again");

    let first_yaml = serde_yaml::to_string(&first).expect("Should serialize");
    let second_yaml = serde_yaml::to_string(&second).expect("Should serialize");
    assert_eq!(first_yaml, second_yaml);
}

#[rstest]
fn test_empty_requirement_entries_are_dropped() {
    let reqs = requirements(&[("net_requires", "requests,, ,urllib3")]);
    let table = resolve_extras("net", &reqs).expect("Should resolve");

    let net: Vec<&str> = table["net"].iter().map(String::as_str).collect();
    assert_eq!(net, vec!["requests", "urllib3"]);
}
