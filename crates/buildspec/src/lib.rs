// Copyright (c) Contributors to the buildspec project.
// SPDX-License-Identifier: Apache-2.0

//! buildspec - Build Descriptor Assembler
//!
//! This crate turns declarative package metadata plus filesystem state into a
//! complete, internally consistent description of how to build and install a
//! software distribution.
//!
//! # Overview
//!
//! The pipeline reads a `buildspec.yaml` configuration file, resolves the
//! final version string (appending a VCS dev-suffix to unreleased versions),
//! walks the package tree to aggregate data assets and generated artifacts,
//! converts configured entry points into console-script directives, groups
//! optional requirements into named extras, and composes everything into one
//! immutable [`BuildDescriptor`] for the external build-invocation layer.
//!
//! # Example
//!
//! ```yaml
//! # buildspec.yaml
//! api: buildspec/v0
//!
//! metadata:
//!   package_name: sunkit
//!   description: "Solar image analysis"
//!   version: 0.1.dev0
//!   install_requires: "numpy, scipy"
//!   extra_requires: "net, dev"
//!   net_requires: "requests"
//!   dev_requires: "pytest, flake8"
//!
//! entry_points:
//!   - name: sunkit
//!     target: sunkit.cli:main
//! ```

pub mod config;
pub mod context;
pub mod descriptor;
pub mod entry_points;
pub mod error;
pub mod extras;
pub mod manifest;
pub mod version;

pub use config::{ApiVersion, BuildConfig, Metadata};
pub use context::BuildContext;
pub use descriptor::{
    assemble, select_test_runner, split_requirements, AssemblyInputs, BuildDescriptor,
    FallbackPolicy, TestRunner,
};
pub use entry_points::{generate_entry_points, EntryPoint, EntryPointTable};
pub use error::{Error, Result};
pub use extras::{resolve_extras, ExtrasTable, ALL_EXTRA};
pub use manifest::{collect_package_data, collect_scripts, CollectOptions, DataManifest};
pub use version::{
    check_runtime_version, is_release, resolve_version, DevSuffixProvider, NoVcs, VersionInfo,
};

/// Well-known filename for build configuration.
pub const BUILDSPEC_FILENAME: &str = "buildspec.yaml";

/// Well-known filename for the assembled descriptor.
pub const DESCRIPTOR_FILENAME: &str = "buildspec.descriptor.yaml";

/// Well-known filename for frozen version information.
pub const VERSION_INFO_FILENAME: &str = "buildspec.version.yaml";
