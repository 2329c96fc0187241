//! Configuration parsing and validation.
//!
//! Handles buildcheck.toml parsing with version validation. The config names
//! the project directories the checks enumerate and the external resolver
//! and compiler commands the checks delegate to.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Project layout configuration.
    #[serde(default)]
    pub project: ProjectConfig,

    /// External manifest resolver command.
    #[serde(default)]
    pub resolver: CommandConfig,

    /// External compiler command.
    #[serde(default)]
    pub compiler: CommandConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            project: ProjectConfig::default(),
            resolver: CommandConfig::default(),
            compiler: CommandConfig::default(),
        }
    }
}

/// Project-level configuration: where the sources live.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Project name.
    pub name: Option<String>,

    /// Filename pattern for source files (default: "*.js").
    #[serde(default = "ProjectConfig::default_source_pattern")]
    pub source_pattern: String,

    /// Library sources, relative to the source root (default: "lib").
    #[serde(default = "ProjectConfig::default_lib_dir")]
    pub lib_dir: String,

    /// Type-declaration sources (default: "externs").
    #[serde(default = "ProjectConfig::default_externs_dir")]
    pub externs_dir: String,

    /// Test sources (default: "test").
    #[serde(default = "ProjectConfig::default_test_dir")]
    pub test_dir: String,

    /// Third-party compatibility layer (default: "third_party/closure").
    #[serde(default = "ProjectConfig::default_closure_dir")]
    pub closure_dir: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: None,
            source_pattern: Self::default_source_pattern(),
            lib_dir: Self::default_lib_dir(),
            externs_dir: Self::default_externs_dir(),
            test_dir: Self::default_test_dir(),
            closure_dir: Self::default_closure_dir(),
        }
    }
}

impl ProjectConfig {
    fn default_source_pattern() -> String {
        "*.js".to_string()
    }

    fn default_lib_dir() -> String {
        "lib".to_string()
    }

    fn default_externs_dir() -> String {
        "externs".to_string()
    }

    fn default_test_dir() -> String {
        "test".to_string()
    }

    fn default_closure_dir() -> String {
        "third_party/closure".to_string()
    }
}

/// An external command line: program followed by its fixed arguments.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CommandConfig {
    /// Command and arguments, e.g. `["python3", "build/resolve.py"]`.
    #[serde(default)]
    pub command: Vec<String>,
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    // First check version
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    // Parse full config
    toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
