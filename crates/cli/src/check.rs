//! Check result types for output formatting.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;

/// Context passed to all checks during execution.
pub struct CheckContext<'a> {
    /// Project source root.
    pub root: &'a Path,
    /// Parsed configuration.
    pub config: &'a Config,
}

/// A single validation check.
///
/// Object-safe to allow dynamic dispatch via `Box<dyn Check>`.
pub trait Check {
    /// Unique identifier for this check (e.g., "complete", "tests").
    fn name(&self) -> &'static str;

    /// Human-readable description for help output.
    fn description(&self) -> &'static str;

    /// Run the check and return a result.
    ///
    /// Collaborator failures are folded into a failed result rather than
    /// propagated, so the caller always gets something reportable.
    fn run(&self, ctx: &CheckContext) -> CheckResult;
}

/// A single violation within a check.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    /// File path, relative to the source root.
    pub file: PathBuf,

    /// What is wrong with it.
    pub message: String,
}

impl Violation {
    pub fn new(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            message: message.into(),
        }
    }
}

/// Result of running a single check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Check identifier.
    pub name: String,

    /// Whether this check passed.
    pub passed: bool,

    /// Error message when the check could not produce a verdict
    /// (e.g. manifest resolution failed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// List of violations (omitted if empty).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl CheckResult {
    /// Create a passing check result.
    pub fn passed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            error: None,
            violations: Vec::new(),
        }
    }

    /// Create a failing check result with violations.
    pub fn failed(name: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            error: None,
            violations,
        }
    }

    /// Create a failing check result carrying an error message.
    pub fn error(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            error: Some(error.into()),
            violations: Vec::new(),
        }
    }
}

/// Aggregated results from a run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutput {
    /// ISO 8601 timestamp.
    pub timestamp: String,

    /// Whether every executed check passed.
    pub passed: bool,

    /// Results for each executed check. A failed completeness check
    /// short-circuits the run, so later checks may be absent.
    pub checks: Vec<CheckResult>,
}

impl CheckOutput {
    /// Create output from check results.
    pub fn new(timestamp: String, checks: Vec<CheckResult>) -> Self {
        let passed = checks.iter().all(|c| c.passed);
        Self {
            timestamp,
            passed,
            checks,
        }
    }

    /// Count total violations across all checks.
    pub fn total_violations(&self) -> usize {
        self.checks.iter().map(|c| c.violations.len()).sum()
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
