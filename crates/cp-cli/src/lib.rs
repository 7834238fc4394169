//! cp-cli library
//!
//! Command definitions and the runner behind the `chatpro` binary, exported
//! so integration tests can drive commands without spawning a process.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
