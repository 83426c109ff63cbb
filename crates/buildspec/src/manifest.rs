// Copyright (c) Contributors to the buildspec project.
// SPDX-License-Identifier: Apache-2.0

//! Data manifest aggregation: walking the package tree for generated
//! artifacts and bundled data assets.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use serde::Serialize;

#[cfg(test)]
#[path = "./manifest_test.rs"]
mod manifest_test;

/// Glob seeded into every package's manifest entry for its data directory.
pub const DATA_DIR_GLOB: &str = "data/*";

/// Options controlling data aggregation.
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Filename suffix marking build-generated intermediate sources.
    pub artifact_suffix: String,

    /// Extra glob patterns seeded after [`DATA_DIR_GLOB`].
    pub extra_globs: Vec<String>,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            artifact_suffix: ".c".to_string(),
            extra_globs: Vec::new(),
        }
    }
}

/// A subtree skipped during aggregation because it could not be read.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SkippedSubtree {
    /// Directory that failed to read.
    pub path: PathBuf,
    /// The underlying IO error, rendered for the report.
    pub reason: String,
}

/// Mapping from package identifier to the relative file patterns bundled
/// with it at install time.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DataManifest {
    /// Patterns per package: seeded globs first, then collected artifact
    /// paths in lexicographic order, deduplicated.
    pub package_data: BTreeMap<String, Vec<String>>,

    /// Subtrees skipped due to read failures. Callers log these at warning
    /// level; siblings of a skipped subtree are still aggregated.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedSubtree>,
}

impl DataManifest {
    /// Patterns recorded for a package, if any.
    pub fn patterns(&self, package: &str) -> Option<&[String]> {
        self.package_data.get(package).map(Vec::as_slice)
    }
}

/// Walk `package_root` and build the data manifest for that package.
///
/// The package entry is always present, seeded with [`DATA_DIR_GLOB`] and any
/// configured extra globs, even when the tree holds no matching files. Every
/// file whose name ends in the configured artifact suffix is recorded
/// relative to `package_root`.
///
/// Directories are tracked by canonical path so trees made cyclic through
/// symlinks terminate; a directory reachable by two paths is visited once.
/// An unreadable subtree aborts aggregation for that subtree only and is
/// recorded on the manifest.
pub fn collect_package_data(
    package_root: &Path,
    options: &CollectOptions,
) -> crate::Result<DataManifest> {
    let package = package_root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| package_root.display().to_string());

    let mut patterns = vec![DATA_DIR_GLOB.to_string()];
    for extra in &options.extra_globs {
        if !patterns.contains(extra) {
            patterns.push(extra.clone());
        }
    }

    let mut manifest = DataManifest::default();
    let mut artifacts = BTreeSet::new();

    if package_root.is_dir() {
        let mut visited = HashSet::new();
        walk_tree(
            package_root,
            package_root,
            &options.artifact_suffix,
            &mut visited,
            &mut artifacts,
            &mut manifest.skipped,
        )?;
    }

    for artifact in artifacts {
        if !patterns.contains(&artifact) {
            patterns.push(artifact);
        }
    }

    manifest.package_data.insert(package, patterns);
    Ok(manifest)
}

fn walk_tree(
    root: &Path,
    dir: &Path,
    artifact_suffix: &str,
    visited: &mut HashSet<PathBuf>,
    artifacts: &mut BTreeSet<String>,
    skipped: &mut Vec<SkippedSubtree>,
) -> crate::Result<()> {
    // Revisits through symlink aliases are skipped by canonical identity.
    if let Ok(canonical) = dunce::canonicalize(dir) {
        if !visited.insert(canonical) {
            return Ok(());
        }
    }

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) if dir == root => {
            return Err(crate::Error::Filesystem {
                path: dir.to_path_buf(),
                error,
            });
        }
        Err(error) => {
            skipped.push(SkippedSubtree {
                path: dir.to_path_buf(),
                reason: error.to_string(),
            });
            return Ok(());
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                skipped.push(SkippedSubtree {
                    path: dir.to_path_buf(),
                    reason: error.to_string(),
                });
                continue;
            }
        };

        let path = entry.path();
        if path.is_dir() {
            walk_tree(root, &path, artifact_suffix, visited, artifacts, skipped)?;
        } else if path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().ends_with(artifact_suffix))
        {
            if let Ok(relative) = path.strip_prefix(root) {
                artifacts.insert(relative.to_string_lossy().into_owned());
            }
        }
    }

    Ok(())
}

/// Collect installable scripts: every file under `scripts_dir` except those
/// named `README*`. A missing directory yields an empty list.
pub fn collect_scripts(scripts_dir: &Path) -> crate::Result<Vec<PathBuf>> {
    if !scripts_dir.is_dir() {
        return Ok(Vec::new());
    }

    let pattern = scripts_dir.join("*");
    let entries = glob::glob(&pattern.to_string_lossy()).map_err(|e| {
        crate::Error::Filesystem {
            path: scripts_dir.to_path_buf(),
            error: std::io::Error::other(e),
        }
    })?;

    let mut scripts = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(error) => {
                tracing::warn!("Skipping unreadable script entry: {error}");
                continue;
            }
        };

        let is_readme = path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().starts_with("README"));
        if path.is_file() && !is_readme {
            scripts.push(path);
        }
    }

    Ok(scripts)
}
