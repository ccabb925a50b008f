//! CLI for secure-url.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use secure_url_core::Mode;
use std::path::PathBuf;

use commands::{run_origin, run_resolve, run_sanitize};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "secure-url")]
#[command(about = "Resolve untrusted paths against a trusted base URL", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a path against the base and print the resulting URL.
    Resolve(ResolveArgs),

    /// Resolve a path against the base and print only its origin.
    Origin(ResolveArgs),

    /// Print the path with its leading slashes collapsed.
    Sanitize {
        /// Candidate path.
        path: String,
    },
}

/// Inputs shared by `resolve` and `origin`.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Candidate (untrusted) path or URL.
    pub path: String,

    /// Trusted base URL. Falls back to `base` from the config file.
    #[arg(long)]
    pub base: Option<String>,

    /// path, relax or insecure.
    #[arg(long, value_name = "MODE")]
    pub mode: Option<Mode>,

    /// Keep a default port written out in the input (true/false).
    #[arg(long, value_name = "BOOL")]
    pub keep_port: Option<bool>,

    /// Print every field as JSON instead of the bare value.
    #[arg(long)]
    pub json: bool,

    /// Config file to use instead of ~/.config/secure-url/config.toml.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Resolve(args) => run_resolve(&args)?,
            CliCommand::Origin(args) => run_origin(&args)?,
            CliCommand::Sanitize { path } => run_sanitize(&path),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
