use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use business::domain::vision::value_objects::{AnalysisMode, GridLayout};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Read license plates from the image
    Plates,
    /// Split the image into a grid of parking spots
    Grid,
}

/// Analyze a parking-lot image with Azure Computer Vision
#[derive(Debug, Parser)]
#[command(name = "vision-cli", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze one image and print the results as JSON
    Analyze(AnalyzeArgs),
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Image file to analyze
    pub image: PathBuf,

    /// What to extract from the image
    #[arg(long, value_enum, default_value = "plates")]
    pub mode: ModeArg,

    /// Grid rows (overrides VISION_GRID_ROWS)
    #[arg(long)]
    pub rows: Option<i32>,

    /// Grid columns (overrides VISION_GRID_COLUMNS)
    #[arg(long)]
    pub columns: Option<i32>,

    /// Abort the whole analysis after this many seconds
    #[arg(long, env = "VISION_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl AnalyzeArgs {
    /// Resolves the analysis mode, letting flags override the configured layout.
    pub fn analysis_mode(&self, configured: GridLayout) -> AnalysisMode {
        match self.mode {
            ModeArg::Plates => AnalysisMode::Plates,
            ModeArg::Grid => AnalysisMode::Grid(GridLayout {
                rows: self.rows.unwrap_or(configured.rows),
                columns: self.columns.unwrap_or(configured.columns),
            }),
        }
    }
}
