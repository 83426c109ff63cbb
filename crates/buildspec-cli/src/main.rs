// Copyright (c) Contributors to the buildspec project.
// SPDX-License-Identifier: Apache-2.0

//! buildspec - Build Descriptor Assembler CLI

use clap::{Parser, Subcommand};
use miette::Result;

mod cmd_assemble;
mod cmd_check;
mod cmd_init;
mod cmd_show;
mod git;
mod pipeline;

use cmd_assemble::CmdAssemble;
use cmd_check::CmdCheck;
use cmd_init::CmdInit;
use cmd_show::CmdShow;

#[derive(Parser)]
#[clap(
    name = "buildspec",
    about = "Build Descriptor Assembler",
    version,
    long_about = "Assemble declarative package metadata and filesystem state into a build descriptor"
)]
struct Opt {
    #[clap(flatten)]
    logging: Logging,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
struct Logging {
    /// Increase verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[clap(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new buildspec.yaml file
    Init(CmdInit),

    /// Display the assembled build descriptor
    Show(CmdShow),

    /// Assemble and write the build descriptor
    Assemble(CmdAssemble),

    /// Validate configuration and runtime support
    Check(CmdCheck),
}

impl Opt {
    fn run(self) -> Result<i32> {
        // Setup logging
        let log_level = match (self.logging.quiet, self.logging.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::WARN,
            (false, 1) => tracing::Level::INFO,
            (false, 2) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .init();

        // Dispatch to command
        match self.cmd {
            Command::Init(mut cmd) => cmd.run(),
            Command::Show(mut cmd) => cmd.run(),
            Command::Assemble(mut cmd) => cmd.run(),
            Command::Check(mut cmd) => cmd.run(),
        }
    }
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    let code = opt.run()?;
    std::process::exit(code);
}
