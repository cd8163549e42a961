//! CLI command implementations for Breedplan.

pub(crate) mod plan;
pub(crate) mod species;

mod output;

use breedplan::{ConfigError, GraphError, NotationError, SpeciesError};
use clap::ValueEnum;
use std::error::Error;
use std::fmt;

/// Output format for the `plan` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum PlanFormat {
    /// Human-readable breeding steps.
    Text,
    /// Graphviz DOT of the best path to the target.
    Dot,
    /// Graphviz DOT of the whole graph.
    DotGraph,
    /// Machine-readable JSON summary.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<SpeciesError> for CliError {
    fn from(e: SpeciesError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<NotationError> for CliError {
    fn from(e: NotationError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<GraphError> for CliError {
    fn from(e: GraphError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(e.to_string())
    }
}
