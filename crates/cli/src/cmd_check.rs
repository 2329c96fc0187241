// SPDX-License-Identifier: MIT

//! Check command implementation: wires the production collaborators and
//! runs the checks in strict order.

use chrono::Utc;

use buildcheck::check::{Check, CheckContext, CheckOutput};
use buildcheck::checks::{complete::CompleteCheck, test_compile::TestCompileCheck};
use buildcheck::cli::{Cli, OutputFormat};
use buildcheck::compiler::CommandCompiler;
use buildcheck::config::{self, Config};
use buildcheck::discovery;
use buildcheck::error::ExitCode;
use buildcheck::fileset::WalkEnumerator;
use buildcheck::manifest::CommandResolver;
use buildcheck::output;

pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    // Determine the source root
    let root = match &cli.root {
        Some(path) => {
            if path.is_absolute() {
                path.clone()
            } else {
                cwd.join(path)
            }
        }
        None => discovery::find_root(&cwd),
    };
    let root = std::fs::canonicalize(&root).unwrap_or(root);
    tracing::debug!("source root: {}", root.display());

    // Resolve and load config
    let config = match discovery::resolve_config(cli.config.as_deref(), &root)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load(&path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };

    let sources = WalkEnumerator::new(&config.project.source_pattern)?;
    let ctx = CheckContext {
        root: &root,
        config: &config,
    };

    let mut results = Vec::new();
    let mut stderr = std::io::stderr();

    let complete = CompleteCheck::new(
        CommandResolver::from_config(&config.resolver)?,
        sources.clone(),
    );
    tracing::debug!("running {} check", complete.name());
    let result = complete.run(&ctx);
    let completeness_passed = result.passed;
    if !completeness_passed {
        output::write_failure(&mut stderr, &result)?;
    }
    results.push(result);

    // Strict order with short-circuit: a failed completeness check makes
    // the test compile meaningless, so its compiler is neither validated
    // nor invoked.
    if completeness_passed {
        let tests = TestCompileCheck::new(CommandCompiler::from_config(&config.compiler)?, sources);
        tracing::debug!("running {} check", tests.name());
        let result = tests.run(&ctx);
        if !result.passed {
            output::write_failure(&mut stderr, &result)?;
        }
        results.push(result);
    }

    let run_output = CheckOutput::new(Utc::now().to_rfc3339(), results);
    if matches!(cli.output, OutputFormat::Json) {
        output::write_json(&mut std::io::stdout(), &run_output)?;
    }

    Ok(if run_output.passed {
        ExitCode::Success
    } else {
        ExitCode::CheckFailed
    })
}
