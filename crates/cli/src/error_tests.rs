#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn config_error_display() {
    let err = Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(PathBuf::from("buildcheck.toml")),
    };
    assert_eq!(
        err.to_string(),
        "config error: missing required field: version"
    );
}

#[test]
fn io_error_display_includes_path() {
    let err = Error::Io {
        path: PathBuf::from("lib/a.js"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert!(err.to_string().starts_with("io error: lib/a.js"));
}

#[test]
fn manifest_error_display() {
    let err = Error::Manifest("resolver exited with exit status: 3".to_string());
    assert!(err.to_string().contains("error resolving build manifest"));
}

#[test]
fn compiler_error_display() {
    let err = Error::Compiler("failed to run closure: not found".to_string());
    assert!(err.to_string().contains("compiler invocation failed"));
}

#[test]
fn pattern_error_display() {
    let err = Error::Pattern("unclosed character class".to_string());
    assert!(err.to_string().contains("invalid source pattern"));
}

#[test]
fn exit_codes_match_cli_contract() {
    assert_eq!(ExitCode::Success as i32, 0);
    assert_eq!(ExitCode::CheckFailed as i32, 1);
}
