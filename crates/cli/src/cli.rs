// SPDX-License-Identifier: MIT

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

/// Validates that the library build is correct.
///
/// This checks:
///  * All files in lib/ appear when compiling the complete build
///  * Runs a compiler pass over the test code to check for type errors
#[derive(Debug, Parser)]
#[command(name = "buildcheck")]
#[command(version, about, verbatim_doc_comment)]
pub struct Cli {
    /// Project source root (discovered from the working directory when omitted)
    #[arg(long, value_name = "DIR", env = "BUILDCHECK_ROOT")]
    pub root: Option<PathBuf>,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "BUILDCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
