// Copyright (c) Contributors to the buildspec project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `buildspec check` command.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use miette::Result;

use buildspec::{check_runtime_version, resolve_extras, BuildConfig, BuildContext};

/// Validate configuration and runtime support
#[derive(Debug, Args)]
pub struct CmdCheck {
    /// Path to the configuration file
    #[clap(short = 'f', long, default_value = buildspec::BUILDSPEC_FILENAME)]
    file: PathBuf,
}

impl CmdCheck {
    pub fn run(&mut self) -> Result<i32> {
        let context = BuildContext::from_env();

        let config = BuildConfig::load(&self.file)?;

        if let Some(running) = context.running_version() {
            check_runtime_version(&config.metadata.minimum_runtime_version, running)?;
        }

        // Surface extras problems (missing {tag}_requires keys) up front
        let extras = resolve_extras(
            &config.metadata.extra_requires,
            &config.metadata.requirement_keys,
        )?;

        println!("{} {}", "OK".green().bold(), self.file.display());
        println!("  package: {}", config.metadata.package_name);
        println!("  version: {}", config.metadata.version);
        println!(
            "  runtime: {} (minimum {})",
            context.running_version().unwrap_or("unsignalled"),
            config.metadata.minimum_runtime_version
        );
        if !extras.is_empty() {
            let tags: Vec<&str> = extras.keys().map(String::as_str).collect();
            println!("  extras:  {}", tags.join(", "));
        }

        Ok(0)
    }
}
