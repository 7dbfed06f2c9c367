//! Command-line front end for the todolists read model
//!
//! Exposes the `tdl` subcommands and their output formatting so they can
//! be driven from integration tests.

pub mod commands;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
