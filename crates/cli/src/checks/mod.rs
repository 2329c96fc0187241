//! The two validation checks, in execution order:
//! - complete: every file under lib/ is included in the complete build
//! - tests: an extra checks-only compile pass over the test code

pub mod complete;
pub mod test_compile;

/// All check names in canonical execution order.
pub const CHECK_NAMES: &[&str] = &[complete::NAME, test_compile::NAME];

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
