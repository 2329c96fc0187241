// SPDX-License-Identifier: MIT

//! Compile options and the external compiler seam.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::config::CommandConfig;
use crate::error::{Error, Result};

/// An ordered list of compiler flags, constructed fresh per invocation.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    flags: Vec<String>,
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a flag, preserving insertion order.
    pub fn flag(mut self, flag: impl Into<String>) -> Self {
        self.flags.push(flag.into());
        self
    }

    pub fn as_args(&self) -> &[String] {
        &self.flags
    }
}

/// Invokes a compiler over an explicit file set.
///
/// The invocation is an opaque blocking call; the only interpreted outcome
/// is the pass/fail boolean. Whatever diagnostics the compiler prints go
/// straight to the user.
pub trait Compiler {
    fn compile(&self, files: &BTreeSet<PathBuf>, options: &CompileOptions) -> Result<bool>;
}

/// Compiler that shells out to the configured external command.
///
/// The command is run with the option flags followed by the file paths.
#[derive(Debug)]
pub struct CommandCompiler {
    command: Vec<String>,
}

impl CommandCompiler {
    pub fn from_config(config: &CommandConfig) -> Result<Self> {
        if config.command.is_empty() {
            return Err(Error::Config {
                message: "compiler.command is not configured".to_string(),
                path: None,
            });
        }
        Ok(Self {
            command: config.command.clone(),
        })
    }
}

impl Compiler for CommandCompiler {
    fn compile(&self, files: &BTreeSet<PathBuf>, options: &CompileOptions) -> Result<bool> {
        tracing::debug!(
            "compiling {} files via {:?} with {:?}",
            files.len(),
            self.command,
            options.as_args()
        );

        let status = Command::new(&self.command[0])
            .args(&self.command[1..])
            .args(options.as_args())
            .args(files.iter())
            .stdin(Stdio::null())
            .status()
            .map_err(|e| Error::Compiler(format!("failed to run {}: {}", self.command[0], e)))?;

        Ok(status.success())
    }
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;
