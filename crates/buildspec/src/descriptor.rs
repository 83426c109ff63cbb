// Copyright (c) Contributors to the buildspec project.
// SPDX-License-Identifier: Apache-2.0

//! Final composition of metadata, version, manifest, entry points and
//! extras into one immutable build descriptor.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::BuildConfig;
use crate::entry_points::EntryPointTable;
use crate::extras::{ExtrasTable, ALL_EXTRA};
use crate::manifest::DataManifest;

#[cfg(test)]
#[path = "./descriptor_test.rs"]
mod descriptor_test;

/// Split a comma-separated requirement list into trimmed, non-empty entries.
pub fn split_requirements(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|req| !req.is_empty())
        .map(String::from)
        .collect()
}

/// The test runner recorded on the descriptor.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum TestRunner {
    /// The build layer's stock runner.
    Default,
    /// A specialized runner resolved for this package.
    Specialized(String),
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::Default
    }
}

/// What to do when resolving a specialized test runner fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Keep the default runner and continue the build.
    UseDefault,
    /// Surface the failure and abort.
    Fail,
}

/// Attempt to swap in a specialized test runner.
///
/// The substitution is non-essential: under [`FallbackPolicy::UseDefault`] a
/// failed attempt is logged and the default runner is kept. This is the only
/// place a failure is intentionally swallowed rather than surfaced.
pub fn select_test_runner(
    attempt: impl FnOnce() -> crate::Result<String>,
    policy: FallbackPolicy,
) -> crate::Result<TestRunner> {
    match attempt() {
        Ok(runner) => Ok(TestRunner::Specialized(runner)),
        Err(error) => match policy {
            FallbackPolicy::UseDefault => {
                tracing::warn!("Specialized test runner unavailable, using default: {error}");
                Ok(TestRunner::Default)
            }
            FallbackPolicy::Fail => Err(error),
        },
    }
}

/// Independently computed component outputs handed to [`assemble`].
#[derive(Debug, Clone, Default)]
pub struct AssemblyInputs {
    /// Fully resolved version string.
    pub version: String,

    /// Aggregated data manifest.
    pub manifest: DataManifest,

    /// Generated entry point directives.
    pub entry_points: EntryPointTable,

    /// Resolved extras requirement sets.
    pub extras: ExtrasTable,

    /// Installable scripts.
    pub scripts: Vec<PathBuf>,

    /// Long description read from the package README, when present.
    pub long_description: Option<String>,

    /// Selected test runner.
    pub test_runner: TestRunner,
}

/// The complete, immutable description of how to build and install the
/// package, handed read-only to the external build-invocation layer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BuildDescriptor {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub author_email: String,
    pub license: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub minimum_runtime_version: String,
    pub setup_requires: Vec<String>,
    pub install_requires: Vec<String>,
    pub tests_require: Vec<String>,
    pub extras_require: ExtrasTable,
    pub package_data: DataManifest,
    pub entry_points: EntryPointTable,
    pub scripts: Vec<PathBuf>,
    pub test_runner: TestRunner,
}

/// Compose the final build descriptor.
///
/// Pure composition over already-computed inputs; no I/O, no new discovery.
/// Fails only when a cross-field invariant is violated, such as a declared
/// requirement list that yields no parseable entries.
pub fn assemble(config: &BuildConfig, inputs: AssemblyInputs) -> crate::Result<BuildDescriptor> {
    let metadata = &config.metadata;

    let install_requires = parse_declared_requirements("install_requires", &metadata.install_requires)?;
    let setup_requires = parse_declared_requirements("setup_requires", &metadata.setup_requires)?;

    // Tests run against the union of every extras set.
    let tests_require = inputs
        .extras
        .get(ALL_EXTRA)
        .map(|all| all.iter().cloned().collect())
        .unwrap_or_default();

    Ok(BuildDescriptor {
        name: metadata.package_name.clone(),
        version: inputs.version,
        description: metadata.description.clone(),
        author: metadata.author.clone(),
        author_email: metadata.author_email.clone(),
        license: metadata.license.clone(),
        url: metadata.url.clone(),
        long_description: inputs.long_description,
        minimum_runtime_version: metadata.minimum_runtime_version.clone(),
        setup_requires,
        install_requires,
        tests_require,
        extras_require: inputs.extras,
        package_data: inputs.manifest,
        entry_points: inputs.entry_points,
        scripts: inputs.scripts,
        test_runner: inputs.test_runner,
    })
}

fn parse_declared_requirements(field: &str, raw: &str) -> crate::Result<Vec<String>> {
    let requirements = split_requirements(raw);
    if !raw.trim().is_empty() && requirements.is_empty() {
        return Err(crate::Error::Assembly {
            field: field.to_string(),
            reason: format!("declared as '{raw}' but no requirement could be parsed from it"),
        });
    }
    Ok(requirements)
}
