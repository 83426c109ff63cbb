// Copyright (c) Contributors to the buildspec project.
// SPDX-License-Identifier: Apache-2.0

//! Git-backed dev-suffix provider.

use std::path::PathBuf;
use std::process::Command;

use buildspec::DevSuffixProvider;

#[cfg(test)]
#[path = "./git_test.rs"]
mod git_test;

/// Queries the git repository containing the configuration file.
///
/// Any failure (no git binary, not a repository, no commits) yields an empty
/// suffix; the provider contract is that it never raises.
#[derive(Debug, Clone)]
pub struct GitDevSuffix {
    root: PathBuf,
}

impl GitDevSuffix {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn run(&self, args: &[&str]) -> Option<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if stdout.is_empty() {
            None
        } else {
            Some(stdout)
        }
    }
}

impl DevSuffixProvider for GitDevSuffix {
    fn dev_suffix(&self, sha: bool) -> String {
        let result = if sha {
            self.run(&["rev-parse", "--short", "HEAD"])
                .map(|hash| format!("+g{hash}"))
        } else {
            self.run(&["rev-list", "--count", "HEAD"])
        };

        match result {
            Some(suffix) => suffix,
            None => {
                tracing::warn!(
                    "No repository metadata available in {}, using empty dev-suffix",
                    self.root.display()
                );
                String::new()
            }
        }
    }
}
