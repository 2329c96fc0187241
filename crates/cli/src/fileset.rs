// SPDX-License-Identifier: MIT

//! Recursive source-file enumeration.
//!
//! Uses the `ignore` crate walker with a `globset` filename pattern. Unlike
//! a typical lint walk, the standard filters are disabled: the completeness
//! check has to see every file that exists on disk, gitignored or not.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use ignore::WalkBuilder;

use crate::error::{Error, Result};

/// Enumerates source files under a directory.
///
/// Injected into the checks so tests can supply fixed file sets without
/// touching the real filesystem.
pub trait SourceEnumerator {
    /// Return every matching file under `dir`, recursively.
    ///
    /// A nonexistent directory enumerates to the empty set. Results are
    /// absolute when `dir` is absolute; there are never duplicates.
    fn enumerate(&self, dir: &Path) -> Result<BTreeSet<PathBuf>>;
}

/// Production enumerator walking the real filesystem.
#[derive(Debug, Clone)]
pub struct WalkEnumerator {
    matcher: GlobMatcher,
}

impl WalkEnumerator {
    /// Create an enumerator matching file names against `pattern` (e.g. "*.js").
    pub fn new(pattern: &str) -> Result<Self> {
        let matcher = Glob::new(pattern)
            .map_err(|e| Error::Pattern(e.to_string()))?
            .compile_matcher();
        Ok(Self { matcher })
    }
}

impl SourceEnumerator for WalkEnumerator {
    fn enumerate(&self, dir: &Path) -> Result<BTreeSet<PathBuf>> {
        let mut files = BTreeSet::new();

        if !dir.is_dir() {
            tracing::debug!("{} does not exist, enumerating nothing", dir.display());
            return Ok(files);
        }

        let walker = WalkBuilder::new(dir)
            .standard_filters(false)
            .follow_links(true)
            .build();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!("walk error under {}: {}", dir.display(), err);
                    continue;
                }
            };

            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }

            if self.matcher.is_match(Path::new(entry.file_name())) {
                files.insert(entry.into_path());
            }
        }

        Ok(files)
    }
}

/// Express `path` relative to `base`, ascending with `..` components when
/// `path` lies outside `base`. Paths on different filesystem roots come
/// back unchanged.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix(base) {
        return stripped.to_path_buf();
    }
    match base.parent() {
        Some(parent) => Path::new("..").join(relative_to(path, parent)),
        None => path.to_path_buf(),
    }
}

/// Union the enumerations of several directories under `root`.
pub fn union_of<E: SourceEnumerator>(
    sources: &E,
    root: &Path,
    dirs: &[&str],
) -> Result<BTreeSet<PathBuf>> {
    let mut files = BTreeSet::new();
    for dir in dirs {
        files.extend(sources.enumerate(&root.join(dir))?);
    }
    Ok(files)
}

#[cfg(test)]
#[path = "fileset_tests.rs"]
mod tests;
