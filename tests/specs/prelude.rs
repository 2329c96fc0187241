//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use std::process::Command;

/// Returns a Command configured to run the buildcheck binary
pub fn buildcheck_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("buildcheck"));
    // Keep the ambient environment from steering discovery
    cmd.env_remove("BUILDCHECK_ROOT");
    cmd.env_remove("BUILDCHECK_CONFIG");
    cmd.env_remove("BUILDCHECK_LOG");
    cmd
}

/// Temporary test project directory with helper methods.
///
/// Reduces boilerplate by:
/// - Auto-creating parent directories
/// - Adding `version = 1` prefix to config
/// - Panicking on errors (we're in tests)
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create an empty project with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Create a project wired to fake resolver and compiler scripts.
    ///
    /// `resolved` is the include list the resolver prints (one path per
    /// line, relative to the project root); `compiler_body` is the shell
    /// body run as the compiler.
    pub fn with_build(resolved: &[&str], compiler_body: &str) -> Self {
        let project = Self::empty();
        let mut listing = String::new();
        for path in resolved {
            listing.push_str(path);
            listing.push('\n');
        }
        project.file("build/resolved.txt", &listing);
        project.file("build/resolve.sh", "cat build/resolved.txt\n");
        project.file("build/compile.sh", compiler_body);
        project.config(&format!(
            r#"
[resolver]
command = ["sh", "{root}/build/resolve.sh"]

[compiler]
command = ["sh", "{root}/build/compile.sh"]
"#,
            root = project.path().display()
        ));
        project
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write buildcheck.toml (auto-prefixes with `version = 1` if not present)
    pub fn config(&self, content: &str) {
        let content = if content.contains("version") {
            content.to_string()
        } else {
            format!("version = 1\n{}", content)
        };
        std::fs::write(self.dir.path().join("buildcheck.toml"), content).unwrap();
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }
}
