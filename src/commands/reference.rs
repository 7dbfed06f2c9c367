//! Reference data commands
//!
//! `tdl levels` and `tdl colours` print the fixed enumerations that
//! accompany every todos result.

use crate::error::CliResult;
use crate::output::{format_colours, format_priority_levels};
use clap::Args;
use todolists_db::reference;

/// Show the priority levels
#[derive(Debug, Args)]
pub struct LevelsCommand {
    /// Print the levels as JSON
    #[arg(long)]
    pub json: bool,
}

impl LevelsCommand {
    /// Execute the levels command.
    pub fn execute(&self) -> CliResult<String> {
        let levels = reference::priority_levels();
        if self.json {
            Ok(serde_json::to_string_pretty(&levels)?)
        } else {
            Ok(format_priority_levels(&levels))
        }
    }
}

/// Show the colour palette
#[derive(Debug, Args)]
pub struct ColoursCommand {
    /// Print the palette as JSON
    #[arg(long)]
    pub json: bool,
}

impl ColoursCommand {
    /// Execute the colours command.
    pub fn execute(&self) -> CliResult<String> {
        let colours = reference::colours();
        if self.json {
            Ok(serde_json::to_string_pretty(&colours)?)
        } else {
            Ok(format_colours(&colours))
        }
    }
}
