// Copyright (c) Contributors to the buildspec project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `buildspec assemble` command.

use std::path::PathBuf;

use clap::Args;
use miette::Result;

use buildspec::VersionInfo;

use crate::pipeline;

/// Assemble and write the build descriptor
#[derive(Debug, Args)]
pub struct CmdAssemble {
    #[clap(flatten)]
    flags: pipeline::PipelineFlags,

    /// Directory to write the descriptor into (default: config directory)
    #[clap(short = 'o', long)]
    output: Option<PathBuf>,
}

impl CmdAssemble {
    pub fn run(&mut self) -> Result<i32> {
        let descriptor = pipeline::run(&self.flags)?;

        let output_dir = self.output.clone().unwrap_or_else(|| {
            self.flags
                .file
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."))
        });

        let descriptor_path = output_dir.join(buildspec::DESCRIPTOR_FILENAME);
        let descriptor_yaml = serde_yaml::to_string(&descriptor)
            .map_err(|e| miette::miette!("Failed to serialize descriptor: {}", e))?;
        std::fs::write(&descriptor_path, descriptor_yaml)
            .map_err(|e| miette::miette!("Failed to write {:?}: {}", descriptor_path, e))?;

        // Freeze build information next to the descriptor
        let info = VersionInfo::freeze(&descriptor.version);
        let info_path = output_dir.join(buildspec::VERSION_INFO_FILENAME);
        let info_yaml = serde_yaml::to_string(&info)
            .map_err(|e| miette::miette!("Failed to serialize version info: {}", e))?;
        std::fs::write(&info_path, info_yaml)
            .map_err(|e| miette::miette!("Failed to write {:?}: {}", info_path, e))?;

        println!(
            "Assembled {} {} -> {}",
            descriptor.name,
            descriptor.version,
            descriptor_path.display()
        );

        Ok(0)
    }
}
