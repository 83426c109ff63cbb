// Copyright (c) Contributors to the buildspec project.
// SPDX-License-Identifier: Apache-2.0

//! Configuration parsing and data types for buildspec.yaml files.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::entry_points::EntryPoint;

#[cfg(test)]
#[path = "./config_test.rs"]
mod config_test;

/// API version for configuration files.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub enum ApiVersion {
    #[serde(rename = "buildspec/v0")]
    V0,
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::V0
    }
}

/// Helper for two-stage deserialization to determine API version first.
#[derive(Deserialize)]
struct ApiVersionMapping {
    #[serde(default)]
    api: ApiVersion,
}

/// The `metadata:` section, resolved to documented defaults.
///
/// Every field has a fixed default so a missing key never reads as absent.
/// Keys of the form `{tag}_requires` that back extras tags are captured in
/// [`Metadata::requirement_keys`].
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Metadata {
    /// Name of the package being described. Default: "package".
    #[serde(default = "default_package_name")]
    pub package_name: String,

    /// One-line description. Default: "".
    #[serde(default)]
    pub description: String,

    /// Author name. Default: "".
    #[serde(default)]
    pub author: String,

    /// Author contact address. Default: "".
    #[serde(default)]
    pub author_email: String,

    /// License identifier. Default: "unknown".
    #[serde(default = "default_license")]
    pub license: String,

    /// Project homepage. Default: "".
    #[serde(default)]
    pub url: String,

    /// Declared version, PEP440-compatible. Default: "0.0.dev0".
    #[serde(default = "default_version")]
    pub version: String,

    /// Minimum runtime version this package supports. Default: "1.0".
    #[serde(default = "default_minimum_runtime_version")]
    pub minimum_runtime_version: String,

    /// Comma-separated build-time requirements. Default: "".
    #[serde(default)]
    pub setup_requires: String,

    /// Comma-separated install-time requirements. Default: "".
    #[serde(default)]
    pub install_requires: String,

    /// Comma-separated list of extras tags. Default: "".
    #[serde(default)]
    pub extra_requires: String,

    /// Remaining `{tag}_requires` keys backing the extras tags.
    #[serde(flatten)]
    pub requirement_keys: BTreeMap<String, String>,
}

fn default_package_name() -> String {
    "package".to_string()
}

fn default_license() -> String {
    "unknown".to_string()
}

fn default_version() -> String {
    "0.0.dev0".to_string()
}

fn default_minimum_runtime_version() -> String {
    "1.0".to_string()
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            package_name: default_package_name(),
            description: String::new(),
            author: String::new(),
            author_email: String::new(),
            license: default_license(),
            url: String::new(),
            version: default_version(),
            minimum_runtime_version: default_minimum_runtime_version(),
            setup_requires: String::new(),
            install_requires: String::new(),
            extra_requires: String::new(),
            requirement_keys: BTreeMap::new(),
        }
    }
}

/// Main build configuration from a buildspec.yaml file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BuildConfig {
    /// API version identifier.
    #[serde(default)]
    pub api: ApiVersion,

    /// Package metadata with documented defaults.
    #[serde(default)]
    pub metadata: Metadata,

    /// Console entry points, in declaration order. May be absent.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry_points: Vec<EntryPoint>,

    /// Path to the file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl BuildConfig {
    /// Parse configuration from a YAML string.
    pub fn from_yaml<S: Into<String>>(yaml: S) -> crate::Result<Self> {
        let yaml = yaml.into();

        // Stage 1: Parse to get API version
        let value: serde_yaml::Value =
            serde_yaml::from_str(&yaml).map_err(|e| crate::Error::InvalidConfig {
                error: e,
                yaml_content: yaml.clone(),
            })?;

        let with_version: ApiVersionMapping =
            serde_yaml::from_value(value.clone()).map_err(|e| crate::Error::InvalidConfig {
                error: e,
                yaml_content: yaml.clone(),
            })?;

        // Stage 2: Deserialize based on version
        match with_version.api {
            ApiVersion::V0 => {
                serde_yaml::from_value(value).map_err(|e| crate::Error::InvalidConfig {
                    error: e,
                    yaml_content: yaml,
                })
            }
        }
    }

    /// Load configuration from a file path.
    ///
    /// A missing file is not an error: it yields a configuration where every
    /// key carries its documented default. A file that exists but cannot be
    /// read or parsed is an error.
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let yaml = match std::fs::read_to_string(path) {
            Ok(yaml) => yaml,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(error) => {
                return Err(crate::Error::ReadFailed {
                    path: path.to_path_buf(),
                    error,
                });
            }
        };

        let mut config = Self::from_yaml(yaml)?;
        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Directory containing the configuration file, when loaded from disk.
    pub fn source_dir(&self) -> Option<&std::path::Path> {
        self.source_path.as_deref().and_then(|p| p.parent())
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            api: ApiVersion::default(),
            metadata: Metadata::default(),
            entry_points: Vec::new(),
            source_path: None,
        }
    }
}
