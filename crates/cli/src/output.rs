//! Output formatting for check results.
//!
//! Text mode reports failures to the error stream, matching the historical
//! script output: an error line, or a header plus one indented relative
//! path per missing file. Success prints nothing. JSON mode serializes the
//! whole [`CheckOutput`] to stdout.

use std::io::{self, Write};

use crate::check::{CheckOutput, CheckResult};

/// Write a failed check's diagnostics in text form.
///
/// No-op for passing results.
pub fn write_failure<W: Write>(w: &mut W, result: &CheckResult) -> io::Result<()> {
    if result.passed {
        return Ok(());
    }

    if let Some(error) = &result.error {
        writeln!(w, "{error}")?;
    }

    if !result.violations.is_empty() {
        writeln!(w, "There are files missing from the complete build:")?;
        for violation in &result.violations {
            writeln!(w, "  {}", violation.file.display())?;
        }
    }

    Ok(())
}

/// Write the aggregated results as pretty-printed JSON.
pub fn write_json<W: Write>(w: &mut W, output: &CheckOutput) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, output)?;
    writeln!(w)
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
