// Copyright (c) Contributors to the buildspec project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use serial_test::serial;

use super::*;

#[rstest]
#[case("1", true)]
#[case("true", true)]
#[case("True", true)]
#[case("yes", true)]
#[case("on", true)]
#[case("0", false)]
#[case("false", false)]
#[case("", false)]
#[case("maybe", false)]
fn test_is_truthy(#[case] value: &str, #[case] expected: bool) {
    assert_eq!(is_truthy(value), expected);
}

#[rstest]
fn test_overrides_are_noop_outside_docs_build() {
    let mut context = BuildContext::default();
    context.apply_overrides();
    assert!(context.overrides.is_empty());
}

#[rstest]
#[serial]
fn test_docs_build_overrides_home_and_config_dir() {
    let mut context = BuildContext {
        docs_build: true,
        ..Default::default()
    };
    context.apply_overrides();

    assert_eq!(std::env::var("HOME").as_deref(), Ok(DOCS_HOME));
    assert_eq!(std::env::var(CONFIG_DIR_ENV).as_deref(), Ok(DOCS_HOME));
    assert_eq!(
        context.overrides,
        vec![
            EnvOverride {
                name: "HOME".to_string(),
                value: DOCS_HOME.to_string()
            },
            EnvOverride {
                name: CONFIG_DIR_ENV.to_string(),
                value: DOCS_HOME.to_string()
            },
        ]
    );
}

#[rstest]
#[serial]
fn test_from_env_reads_docs_flag_and_runtime_version() {
    // Safety: #[serial] tests are the only writers of these variables.
    unsafe {
        std::env::set_var(DOCS_BUILD_ENV, "yes");
        std::env::set_var(RUNTIME_VERSION_ENV, "3.9");
    }

    let context = BuildContext::from_env();

    unsafe {
        std::env::remove_var(DOCS_BUILD_ENV);
        std::env::remove_var(RUNTIME_VERSION_ENV);
    }

    assert!(context.docs_build);
    assert_eq!(context.running_version(), Some("3.9"));
}

#[rstest]
#[serial]
fn test_unsignalled_runtime_version_is_none() {
    unsafe { std::env::remove_var(RUNTIME_VERSION_ENV) };

    let context = BuildContext::from_env();
    assert_eq!(context.running_version(), None);
}
