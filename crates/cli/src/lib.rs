pub mod check;
pub mod checks;
pub mod cli;
pub mod compiler;
pub mod config;
pub mod discovery;
pub mod error;
pub mod fileset;
pub mod manifest;
pub mod output;

pub use check::{Check, CheckContext, CheckOutput, CheckResult, Violation};
pub use cli::{Cli, OutputFormat};
pub use compiler::{CommandCompiler, CompileOptions, Compiler};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use fileset::{SourceEnumerator, WalkEnumerator};
pub use manifest::{BuildConfig, CommandResolver, ManifestResolver};
