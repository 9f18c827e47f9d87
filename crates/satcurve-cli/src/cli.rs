//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use satcurve_core::settings::ModelSelection;

use crate::commands::{GenerateArgs, InspectArgs};

/// Satcurve - saturation curve chart generator
#[derive(Parser)]
#[command(name = "satcurve")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the acquisition and CPA charts as standalone HTML files
    Generate(GenerateArgs),

    /// Parse a table and show the segments that would be plotted
    Inspect(InspectArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Model selection options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ModelChoice {
    /// Logarithmic fits only (saturating view)
    #[default]
    Log,
    /// Linear fits only
    Linear,
    /// Both model families
    Both,
}

impl From<ModelChoice> for ModelSelection {
    fn from(choice: ModelChoice) -> Self {
        match choice {
            ModelChoice::Log => ModelSelection::Logarithmic,
            ModelChoice::Linear => ModelSelection::Linear,
            ModelChoice::Both => ModelSelection::Both,
        }
    }
}
