// SPDX-License-Identifier: MIT

//! Test-compile check: runs an extra compile pass over the test code to
//! check for type errors. The file set is assembled explicitly (library,
//! externs, tests, and the third-party closure layer) and handed to the
//! compiler in checks-only mode; the compiler's verdict is the check's
//! verdict.

use crate::check::{Check, CheckContext, CheckResult};
use crate::compiler::{CompileOptions, Compiler};
use crate::fileset::{self, SourceEnumerator};
use crate::manifest::BuildConfig;

pub const NAME: &str = "tests";

pub struct TestCompileCheck<C, E> {
    compiler: C,
    sources: E,
}

impl<C: Compiler, E: SourceEnumerator> TestCompileCheck<C, E> {
    pub fn new(compiler: C, sources: E) -> Self {
        Self { compiler, sources }
    }
}

impl<C: Compiler, E: SourceEnumerator> Check for TestCompileCheck<C, E> {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Test code passes a checks-only compile"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        let project = &ctx.config.project;
        let dirs = [
            project.lib_dir.as_str(),
            project.externs_dir.as_str(),
            project.test_dir.as_str(),
            project.closure_dir.as_str(),
        ];
        let files = match fileset::union_of(&self.sources, ctx.root, &dirs) {
            Ok(files) => files,
            Err(e) => return CheckResult::error(NAME, e.to_string()),
        };
        let build = BuildConfig::from_files(files);

        // Ignore missing goog.require since the whole library is already
        // in the file set.
        let options = CompileOptions::new()
            .flag("--jscomp_off=missingRequire")
            .flag("--checks-only")
            .flag("-O")
            .flag("SIMPLE");

        match self.compiler.compile(&build.include, &options) {
            Ok(true) => CheckResult::passed(NAME),
            Ok(false) => CheckResult::error(NAME, "Compile pass over the test code failed"),
            Err(e) => CheckResult::error(NAME, e.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "test_compile_tests.rs"]
mod tests;
