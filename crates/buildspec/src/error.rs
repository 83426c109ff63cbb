// Copyright (c) Contributors to the buildspec project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for buildspec operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience Result type with buildspec Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling a build descriptor.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Invalid YAML in the configuration file
    #[error("Invalid buildspec.yaml file: {error}")]
    #[diagnostic(
        code(buildspec::invalid_config),
        help("Check YAML syntax and ensure 'api: buildspec/v0' is present")
    )]
    InvalidConfig {
        #[source]
        error: serde_yaml::Error,
        yaml_content: String,
    },

    /// Failed to read an existing file
    #[error("Failed to read file: {path:?}")]
    #[diagnostic(code(buildspec::read_failed))]
    ReadFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// An extras tag was listed without a backing requirements key
    #[error("Extras tag '{tag}' has no '{key}' key in the metadata section")]
    #[diagnostic(
        code(buildspec::missing_requirement_key),
        help("Add '{key}: ...' to the metadata section or remove '{tag}' from extra_requires")
    )]
    MissingRequirementKey { tag: String, key: String },

    /// A directory could not be read during data aggregation
    #[error("Failed to read directory: {path:?}")]
    #[diagnostic(code(buildspec::filesystem))]
    Filesystem {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// A cross-field invariant was violated at composition time
    #[error("Cannot assemble descriptor: {field}: {reason}")]
    #[diagnostic(code(buildspec::assembly))]
    Assembly { field: String, reason: String },

    /// A version string contains a non-numeric component
    #[error("Invalid version string: '{value}'")]
    #[diagnostic(
        code(buildspec::invalid_version),
        help("Runtime version components must be dot-separated integers, e.g. '3.6'")
    )]
    InvalidVersion { value: String },

    /// The declared minimum runtime version exceeds the running environment
    #[error("This package requires runtime {required} or later (running {running})")]
    #[diagnostic(code(buildspec::unsupported_runtime))]
    UnsupportedRuntime { required: String, running: String },

    /// A requested specialized test runner could not be resolved
    #[error("Test runner unavailable: {0}")]
    #[diagnostic(
        code(buildspec::test_runner_unavailable),
        help("Install the runner or drop the request to fall back to the default")
    )]
    TestRunnerUnavailable(String),

    /// IO error passthrough
    #[error(transparent)]
    #[diagnostic(code(buildspec::io_error))]
    Io(#[from] std::io::Error),
}
