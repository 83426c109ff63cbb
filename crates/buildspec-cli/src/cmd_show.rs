// Copyright (c) Contributors to the buildspec project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `buildspec show` command.

use clap::Args;
use colored::Colorize;
use miette::Result;

use buildspec::{BuildDescriptor, TestRunner};

use crate::pipeline;

/// Display the assembled build descriptor
#[derive(Debug, Args)]
pub struct CmdShow {
    #[clap(flatten)]
    flags: pipeline::PipelineFlags,

    /// Output format: table, yaml, json
    #[clap(long, default_value = "table")]
    format: String,
}

impl CmdShow {
    pub fn run(&mut self) -> Result<i32> {
        let descriptor = pipeline::run(&self.flags)?;

        match self.format.as_str() {
            "yaml" => self.show_yaml(&descriptor)?,
            "json" => self.show_json(&descriptor),
            _ => self.show_table(&descriptor),
        }

        Ok(0)
    }

    fn show_table(&self, descriptor: &BuildDescriptor) {
        println!("{}", "Package:".bold());
        println!();
        println!("  name:    {}", descriptor.name.cyan());
        println!("  version: {}", descriptor.version.green());
        if !descriptor.description.is_empty() {
            println!("  {}", descriptor.description.dimmed());
        }
        println!("  license: {}", descriptor.license);
        if !descriptor.url.is_empty() {
            println!("  url:     {}", descriptor.url.blue());
        }

        println!();
        println!("{}", "Requirements:".bold());
        println!();
        print_list("install", &descriptor.install_requires);
        print_list("setup", &descriptor.setup_requires);
        print_list("tests", &descriptor.tests_require);

        if !descriptor.extras_require.is_empty() {
            println!();
            println!("{}", "Extras:".bold());
            println!();
            for (tag, requirements) in &descriptor.extras_require {
                let joined: Vec<&str> = requirements.iter().map(String::as_str).collect();
                println!("  {}: {}", tag.cyan(), joined.join(", "));
            }
        }

        println!();
        println!("{}", "Package Data:".bold());
        println!();
        for (package, patterns) in &descriptor.package_data.package_data {
            println!("  {}:", package.cyan());
            for pattern in patterns {
                println!("    - {}", pattern.green());
            }
        }

        if !descriptor.entry_points.console_scripts.is_empty() {
            println!();
            println!("{}", "Console Scripts:".bold());
            println!();
            for (i, directive) in descriptor.entry_points.console_scripts.iter().enumerate() {
                println!("  {}. {}", i + 1, directive);
            }
        }

        if !descriptor.scripts.is_empty() {
            println!();
            println!("{}", "Scripts:".bold());
            println!();
            for script in &descriptor.scripts {
                println!("  - {}", script.display());
            }
        }

        println!();
        match &descriptor.test_runner {
            TestRunner::Default => println!("Test runner: default"),
            TestRunner::Specialized(name) => {
                println!("Test runner: {}", name.yellow());
            }
        }
    }

    fn show_yaml(&self, descriptor: &BuildDescriptor) -> Result<()> {
        let yaml = serde_yaml::to_string(descriptor)
            .map_err(|e| miette::miette!("Failed to serialize descriptor: {}", e))?;
        print!("{yaml}");
        Ok(())
    }

    fn show_json(&self, descriptor: &BuildDescriptor) {
        // Simple manual JSON output to avoid a serde_json dependency in the CLI
        println!("{{");
        println!("  \"name\": \"{}\",", descriptor.name);
        println!("  \"version\": \"{}\",", descriptor.version);
        println!(
            "  \"install_requires\": [{}],",
            quote_join(&descriptor.install_requires)
        );
        println!(
            "  \"setup_requires\": [{}],",
            quote_join(&descriptor.setup_requires)
        );
        println!(
            "  \"console_scripts\": [{}],",
            quote_join(&descriptor.entry_points.console_scripts)
        );
        println!(
            "  \"extras\": [{}],",
            quote_join(
                &descriptor
                    .extras_require
                    .keys()
                    .cloned()
                    .collect::<Vec<_>>()
            )
        );
        println!(
            "  \"packages\": [{}]",
            quote_join(
                &descriptor
                    .package_data
                    .package_data
                    .keys()
                    .cloned()
                    .collect::<Vec<_>>()
            )
        );
        println!("}}");
    }
}

fn print_list(label: &str, items: &[String]) {
    if items.is_empty() {
        println!("  {}: {}", label, "(none)".dimmed());
    } else {
        println!("  {}: {}", label, items.join(", "));
    }
}

fn quote_join(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("\"{}\"", item))
        .collect::<Vec<_>>()
        .join(", ")
}
