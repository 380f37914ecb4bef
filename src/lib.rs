pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exemptions;
pub mod linter;
pub mod output;
pub mod rules;
pub mod session;

pub use error::{DocGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_STYLE_VIOLATION: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
