// Copyright (c) Contributors to the buildspec project.
// SPDX-License-Identifier: Apache-2.0

//! Version resolution: release detection, dev-suffix handling, and the
//! minimum-runtime gate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "./version_test.rs"]
mod version_test;

/// Source of the dev-suffix appended to unreleased versions.
///
/// Implementations query version-control state and must never fail: when no
/// repository metadata is available they return an empty string. The `sha`
/// flag selects a commit-hash suffix over the default revision-count form.
pub trait DevSuffixProvider {
    fn dev_suffix(&self, sha: bool) -> String;
}

/// Provider for builds outside any version-controlled tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVcs;

impl DevSuffixProvider for NoVcs {
    fn dev_suffix(&self, _sha: bool) -> String {
        String::new()
    }
}

/// A version is a release exactly when it carries no "dev" marker.
pub fn is_release(declared: &str) -> bool {
    !declared.contains("dev")
}

/// Resolve the final version string.
///
/// Release versions are returned unchanged without consulting the provider.
/// Unreleased versions get the provider's dev-suffix appended.
pub fn resolve_version(declared: &str, provider: &dyn DevSuffixProvider) -> String {
    if is_release(declared) {
        return declared.to_string();
    }
    format!("{}{}", declared, provider.dev_suffix(false))
}

/// Check the declared minimum runtime version against the running one.
///
/// Versions are compared as dot-separated integer components, shorter forms
/// padded with zeros ("3.6" < "3.10").
pub fn check_runtime_version(minimum: &str, running: &str) -> crate::Result<()> {
    let required = parse_components(minimum)?;
    let current = parse_components(running)?;

    let width = required.len().max(current.len());
    for i in 0..width {
        let req = required.get(i).copied().unwrap_or(0);
        let cur = current.get(i).copied().unwrap_or(0);
        if cur < req {
            return Err(crate::Error::UnsupportedRuntime {
                required: minimum.to_string(),
                running: running.to_string(),
            });
        }
        if cur > req {
            break;
        }
    }

    Ok(())
}

fn parse_components(version: &str) -> crate::Result<Vec<u64>> {
    version
        .split('.')
        .map(|part| {
            part.trim()
                .parse::<u64>()
                .map_err(|_| crate::Error::InvalidVersion {
                    value: version.to_string(),
                })
        })
        .collect()
}

/// Frozen record of a resolved version, written next to the descriptor so
/// later stages can read build provenance without re-running resolution.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct VersionInfo {
    /// The fully resolved version string.
    pub version: String,

    /// Whether this is a release (no "dev" marker in the declared version).
    pub release: bool,

    /// When the version was frozen.
    pub generated: DateTime<Utc>,

    /// Version of the assembler that produced this record.
    pub tool_version: String,
}

impl VersionInfo {
    /// Freeze a resolved version string together with generation metadata.
    pub fn freeze(resolved: &str) -> Self {
        Self {
            version: resolved.to_string(),
            release: is_release(resolved),
            generated: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
