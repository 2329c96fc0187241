use std::path::PathBuf;

/// Buildcheck error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest resolution failed
    #[error("error resolving build manifest: {0}")]
    Manifest(String),

    /// Compiler could not be invoked
    #[error("compiler invocation failed: {0}")]
    Compiler(String),

    /// Invalid source filename pattern
    #[error("invalid source pattern: {0}")]
    Pattern(String),
}

/// Result type using buildcheck Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes per CLI contract: zero on full success, one on any failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Both checks passed
    Success = 0,
    /// A check failed, or the run could not complete
    CheckFailed = 1,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
