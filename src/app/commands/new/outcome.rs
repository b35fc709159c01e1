use clap::ValueEnum;

use crate::domain::ProjectSpec;

/// Result of the `new` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewOutcome {
    /// The configuration was finalized and handed to the generator.
    Generated(ProjectSpec),
    /// The user backed out at the review step.
    Cancelled,
}

/// Output format for the finalized configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Toml,
}
