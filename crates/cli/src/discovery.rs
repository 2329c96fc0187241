//! Config and source-root discovery.
//!
//! Walks from the starting directory up to the git root looking for
//! buildcheck.toml. The directory holding the config is the project source
//! root; diagnostics print paths relative to it.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Config file name searched for during discovery.
pub const CONFIG_FILE_NAME: &str = "buildcheck.toml";

/// Find buildcheck.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "BUILDCHECK_CONFIG")
/// 2. Discovery from the starting directory up to git root
/// 3. None (use defaults)
pub fn resolve_config(explicit: Option<&Path>, start_dir: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            if path.exists() {
                Ok(Some(path.to_path_buf()))
            } else {
                Err(Error::Config {
                    message: format!("config file not found: {}", path.display()),
                    path: Some(path.to_path_buf()),
                })
            }
        }
        None => Ok(find_config(start_dir)),
    }
}

/// Locate the project source root for `start_dir`.
///
/// The directory containing buildcheck.toml wins; otherwise the first
/// ancestor containing `.git`; otherwise `start_dir` itself.
pub fn find_root(start_dir: &Path) -> PathBuf {
    if let Some(config) = find_config(start_dir)
        && let Some(dir) = config.parent()
    {
        return dir.to_path_buf();
    }

    let mut current = start_dir.to_path_buf();
    loop {
        if current.join(".git").exists() {
            return current;
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return start_dir.to_path_buf(),
        }
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
