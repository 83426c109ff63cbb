// Copyright (c) Contributors to the buildspec project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;

fn ep(name: &str, target: &str) -> EntryPoint {
    EntryPoint {
        name: name.to_string(),
        target: target.to_string(),
    }
}

#[rstest]
fn test_single_entry_point() {
    let table = generate_entry_points(&[ep("foo", "pkg.mod:main")]);
    assert_eq!(table.console_scripts, vec!["foo = pkg.mod:main"]);
}

#[rstest]
fn test_absent_section_yields_empty_table() {
    let table = generate_entry_points(&[]);
    assert_eq!(table, EntryPointTable::default());
    assert!(table.console_scripts.is_empty());
}

#[rstest]
fn test_directives_keep_declaration_order() {
    let table = generate_entry_points(&[
        ep("zeta", "pkg.z:main"),
        ep("alpha", "pkg.a:main"),
        ep("mid", "pkg.m:run"),
    ]);

    assert_eq!(
        table.console_scripts,
        vec!["zeta = pkg.z:main", "alpha = pkg.a:main", "mid = pkg.m:run"]
    );
}

#[rstest]
fn test_one_directive_per_entry() {
    let entries = vec![ep("a", "m:f"), ep("b", "m:g")];
    let table = generate_entry_points(&entries);
    assert_eq!(table.console_scripts.len(), entries.len());
}
