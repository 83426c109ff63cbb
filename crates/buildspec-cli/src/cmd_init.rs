// Copyright (c) Contributors to the buildspec project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `buildspec init` command.

use clap::Args;
use miette::Result;
use std::path::PathBuf;

/// Create a new buildspec.yaml file
#[derive(Debug, Args)]
pub struct CmdInit {
    /// Directory to create file in
    #[clap(default_value = ".")]
    path: PathBuf,

    /// Package name to seed the metadata section with
    #[clap(long)]
    name: Option<String>,

    /// Template to use: minimal, standard
    #[clap(long, default_value = "standard")]
    template: String,
}

impl CmdInit {
    pub fn run(&mut self) -> Result<i32> {
        let config_path = self.path.join(buildspec::BUILDSPEC_FILENAME);

        // Check if file already exists
        if config_path.exists() {
            return Err(miette::miette!(
                "buildspec.yaml already exists at {:?}",
                config_path
            ));
        }

        let content = match self.template.as_str() {
            "minimal" => self.generate_minimal_template(),
            _ => self.generate_standard_template(),
        };

        std::fs::write(&config_path, content)
            .map_err(|e| miette::miette!("Failed to write buildspec.yaml: {}", e))?;

        println!("Created buildspec.yaml at {:?}", config_path);
        println!();
        println!("Next steps:");
        println!("  1. Edit the metadata section for your package");
        println!("  2. Run 'buildspec show' to preview the descriptor");
        println!("  3. Run 'buildspec assemble' to write it for the build layer");

        Ok(0)
    }

    fn package_name(&self) -> &str {
        self.name.as_deref().unwrap_or("package")
    }

    fn generate_minimal_template(&self) -> String {
        format!(
            "api: buildspec/v0\n\
            \n\
            metadata:\n\
            \x20\x20package_name: {}\n",
            self.package_name()
        )
    }

    fn generate_standard_template(&self) -> String {
        format!(
            "# buildspec build configuration\n\
            \n\
            api: buildspec/v0\n\
            \n\
            metadata:\n\
            \x20\x20package_name: {}\n\
            \x20\x20description: \"\"\n\
            \x20\x20author: \"\"\n\
            \x20\x20author_email: \"\"\n\
            \x20\x20license: unknown\n\
            \x20\x20url: \"\"\n\
            \n\
            \x20\x20# Versions carrying a 'dev' marker get the VCS dev-suffix appended\n\
            \x20\x20version: 0.0.dev0\n\
            \n\
            \x20\x20minimum_runtime_version: \"1.0\"\n\
            \n\
            \x20\x20# Comma-separated requirement lists\n\
            \x20\x20setup_requires: \"\"\n\
            \x20\x20install_requires: \"\"\n\
            \n\
            \x20\x20# Extras: tags listed here need a matching <tag>_requires key\n\
            \x20\x20# extra_requires: \"net, dev\"\n\
            \x20\x20# net_requires: \"requests\"\n\
            \x20\x20# dev_requires: \"pytest, flake8\"\n\
            \n\
            # Console entry points\n\
            # entry_points:\n\
            #   - name: {}\n\
            #     target: {}.cli:main\n",
            self.package_name(),
            self.package_name(),
            self.package_name(),
        )
    }
}
