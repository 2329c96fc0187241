// SPDX-License-Identifier: MIT

//! Buildcheck CLI entry point.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use buildcheck::cli::Cli;
use buildcheck::error::ExitCode;

mod cmd_check;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("BUILDCHECK_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match Cli::try_parse() {
        Ok(cli) => match cmd_check::run(&cli) {
            Ok(code) => code,
            Err(e) => {
                eprintln!("buildcheck: {e:#}");
                ExitCode::CheckFailed
            }
        },
        Err(err) => handle_parse_error(err),
    };

    std::process::exit(exit_code as i32);
}

/// Map clap parse outcomes onto the 0/1 exit contract: help and version
/// print and succeed, anything else prints a diagnostic plus usage and
/// fails with exit code 1 (clap's own error path would exit 2).
fn handle_parse_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::Success
        }
        _ => {
            match unknown_arg(&err) {
                Some(arg) => eprintln!("Unknown option {arg}"),
                None => eprint!("{err}"),
            }
            let help = Cli::command().render_help();
            eprint!("{help}");
            ExitCode::CheckFailed
        }
    }
}

/// Extract the offending argument from an unknown-argument error.
fn unknown_arg(err: &clap::Error) -> Option<String> {
    if err.kind() != ErrorKind::UnknownArgument {
        return None;
    }
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => Some(arg.clone()),
        _ => None,
    }
}
