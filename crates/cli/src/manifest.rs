// SPDX-License-Identifier: MIT

//! Build configuration and the external manifest-resolver seam.
//!
//! Manifest parsing and dependency resolution live in the external build
//! system. This module only defines the resolved shape (an included-file
//! set) and a thin command wrapper that asks the external tool to resolve
//! a list of group references.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::CommandConfig;
use crate::error::{Error, Result};

/// A resolved build configuration: the set of included file paths.
#[derive(Debug, Default, Clone)]
pub struct BuildConfig {
    /// Included files, comparable against filesystem enumeration results.
    pub include: BTreeSet<PathBuf>,
}

impl BuildConfig {
    /// Build a configuration directly from an explicit file set,
    /// bypassing manifest resolution.
    pub fn from_files(include: BTreeSet<PathBuf>) -> Self {
        Self { include }
    }

    /// Files present in `files` but absent from this configuration.
    pub fn missing_from(&self, files: &BTreeSet<PathBuf>) -> Vec<PathBuf> {
        files.difference(&self.include).cloned().collect()
    }
}

/// Resolves manifest group references into a [`BuildConfig`].
pub trait ManifestResolver {
    /// Resolve `groups` (e.g. `"+@complete"`) against `base`.
    fn resolve(&self, groups: &[&str], base: &Path) -> Result<BuildConfig>;
}

/// Resolver that shells out to the configured external build tool.
///
/// Contract: the command is run from `base` with the group tokens appended
/// to its arguments. On success its stdout is the resolved include list,
/// one path per line; relative paths are taken relative to `base`. Stderr
/// passes through to the user.
#[derive(Debug)]
pub struct CommandResolver {
    command: Vec<String>,
}

impl CommandResolver {
    pub fn from_config(config: &CommandConfig) -> Result<Self> {
        if config.command.is_empty() {
            return Err(Error::Config {
                message: "resolver.command is not configured".to_string(),
                path: None,
            });
        }
        Ok(Self {
            command: config.command.clone(),
        })
    }
}

impl ManifestResolver for CommandResolver {
    fn resolve(&self, groups: &[&str], base: &Path) -> Result<BuildConfig> {
        tracing::debug!("resolving {:?} via {:?}", groups, self.command);

        let output = Command::new(&self.command[0])
            .args(&self.command[1..])
            .args(groups)
            .current_dir(base)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| Error::Manifest(format!("failed to run {}: {}", self.command[0], e)))?;

        if !output.status.success() {
            return Err(Error::Manifest(format!(
                "{} exited with {}",
                self.command[0], output.status
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let include = stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                let line = line.strip_prefix("./").unwrap_or(line);
                let path = Path::new(line);
                if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    base.join(path)
                }
            })
            .collect();

        Ok(BuildConfig { include })
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
