// SPDX-License-Identifier: MIT

//! Completeness check: the "complete" build must reference every file
//! under the library directory, so that every file is included in at
//! least one build type.

use crate::check::{Check, CheckContext, CheckResult, Violation};
use crate::fileset::{self, SourceEnumerator};
use crate::manifest::ManifestResolver;

pub const NAME: &str = "complete";

/// Group reference for the complete build.
pub const COMPLETE_GROUP: &str = "+@complete";

/// Group reference for the foundational core files. The build entry point
/// always adds core on its own, but we inspect the resolved set directly,
/// so it has to be requested here for the comparison to be meaningful.
pub const CORE_GROUP: &str = "+@core";

pub struct CompleteCheck<R, E> {
    resolver: R,
    sources: E,
}

impl<R: ManifestResolver, E: SourceEnumerator> CompleteCheck<R, E> {
    pub fn new(resolver: R, sources: E) -> Self {
        Self { resolver, sources }
    }
}

impl<R: ManifestResolver, E: SourceEnumerator> Check for CompleteCheck<R, E> {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Every file under lib/ appears in the complete build"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        let build = match self
            .resolver
            .resolve(&[COMPLETE_GROUP, CORE_GROUP], ctx.root)
        {
            Ok(build) => build,
            Err(e) => {
                return CheckResult::error(NAME, format!("Error parsing complete build: {e}"));
            }
        };

        let lib_dir = ctx.root.join(&ctx.config.project.lib_dir);
        let files = match self.sources.enumerate(&lib_dir) {
            Ok(files) => files,
            Err(e) => return CheckResult::error(NAME, e.to_string()),
        };

        let missing = build.missing_from(&files);
        if missing.is_empty() {
            return CheckResult::passed(NAME);
        }

        let violations = missing
            .iter()
            .map(|path| {
                let rel = fileset::relative_to(path, ctx.root);
                Violation::new(rel, "not included in the complete build")
            })
            .collect();
        CheckResult::failed(NAME, violations)
    }
}

#[cfg(test)]
#[path = "complete_tests.rs"]
mod tests;
