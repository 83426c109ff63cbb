// Copyright (c) Contributors to the buildspec project.
// SPDX-License-Identifier: Apache-2.0

//! The shared assembly pipeline driven by the `show`, `assemble` and
//! `check` commands.

use std::path::{Path, PathBuf};

use clap::Args;
use miette::Result;

use buildspec::{
    assemble, check_runtime_version, collect_package_data, collect_scripts, generate_entry_points,
    resolve_extras, resolve_version, select_test_runner, AssemblyInputs, BuildConfig,
    BuildContext, BuildDescriptor, CollectOptions, DevSuffixProvider, FallbackPolicy, NoVcs,
    TestRunner,
};

use crate::git::GitDevSuffix;

/// Flags shared by every pipeline-running command.
#[derive(Debug, Args)]
pub struct PipelineFlags {
    /// Path to the configuration file
    #[clap(short = 'f', long, default_value = buildspec::BUILDSPEC_FILENAME)]
    pub file: PathBuf,

    /// Package tree to aggregate (default: <config dir>/<package_name>)
    #[clap(long)]
    pub package_root: Option<PathBuf>,

    /// Filename suffix marking generated artifacts
    #[clap(long, default_value = ".c")]
    pub artifact_suffix: String,

    /// Additional data glob seeded into the manifest
    #[clap(long = "data-glob")]
    pub data_globs: Vec<String>,

    /// Do not consult version control for the dev-suffix
    #[clap(long)]
    pub no_vcs: bool,

    /// Request a specialized test runner by name
    #[clap(long)]
    pub test_runner: Option<String>,

    /// Fail instead of falling back when the test runner is unavailable
    #[clap(long)]
    pub strict_test_runner: bool,
}

/// Run the whole pipeline and return the assembled descriptor.
///
/// The runtime gate runs first, before any metadata-dependent work.
pub fn run(flags: &PipelineFlags) -> Result<BuildDescriptor> {
    let mut context = BuildContext::from_env();
    context.apply_overrides();

    let config = BuildConfig::load(&flags.file)?;

    // Runtime gate, before any metadata-dependent work
    if let Some(running) = context.running_version() {
        check_runtime_version(&config.metadata.minimum_runtime_version, running)?;
    }

    let config_dir = config
        .source_dir()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    // Version
    let version = if flags.no_vcs {
        resolve_version(&config.metadata.version, &NoVcs)
    } else {
        let git: &dyn DevSuffixProvider = &GitDevSuffix::new(config_dir.clone());
        resolve_version(&config.metadata.version, git)
    };

    // Data manifest
    let package_root = flags
        .package_root
        .clone()
        .unwrap_or_else(|| config_dir.join(&config.metadata.package_name));
    let collect_options = CollectOptions {
        artifact_suffix: flags.artifact_suffix.clone(),
        extra_globs: flags.data_globs.clone(),
    };
    let manifest = collect_package_data(&package_root, &collect_options)?;
    for skipped in &manifest.skipped {
        tracing::warn!(
            "Skipped unreadable subtree {}: {}",
            skipped.path.display(),
            skipped.reason
        );
    }

    // Entry points and extras
    let entry_points = generate_entry_points(&config.entry_points);
    let extras = resolve_extras(
        &config.metadata.extra_requires,
        &config.metadata.requirement_keys,
    )?;

    // Scripts and long description
    let scripts = collect_scripts(&config_dir.join("scripts"))?;
    let long_description = read_long_description(&config_dir)?;

    // Optional test runner substitution
    let test_runner = match &flags.test_runner {
        Some(name) => {
            let policy = if flags.strict_test_runner {
                FallbackPolicy::Fail
            } else {
                FallbackPolicy::UseDefault
            };
            select_test_runner(|| find_on_path(name), policy)?
        }
        None => TestRunner::Default,
    };

    let descriptor = assemble(
        &config,
        AssemblyInputs {
            version,
            manifest,
            entry_points,
            extras,
            scripts,
            long_description,
            test_runner,
        },
    )?;

    Ok(descriptor)
}

/// Read the package README next to the configuration file, if present.
fn read_long_description(config_dir: &Path) -> Result<Option<String>> {
    for name in ["README.md", "README.rst"] {
        let path = config_dir.join(name);
        if path.is_file() {
            let text = std::fs::read_to_string(&path).map_err(|error| {
                buildspec::Error::ReadFailed {
                    path: path.clone(),
                    error,
                }
            })?;
            return Ok(Some(text));
        }
    }
    Ok(None)
}

/// Resolve a test runner binary by searching PATH.
fn find_on_path(name: &str) -> buildspec::Result<String> {
    let path = std::env::var_os("PATH").unwrap_or_default();
    for dir in std::env::split_paths(&path) {
        if dir.join(name).is_file() {
            return Ok(name.to_string());
        }
    }
    Err(buildspec::Error::TestRunnerUnavailable(format!(
        "'{name}' not found on PATH"
    )))
}
