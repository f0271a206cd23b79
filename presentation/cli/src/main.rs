use clap::Parser;
use dotenvy::dotenv;

mod cli;
mod config;
mod setup;

use cli::{Cli, Commands};
use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, runner::Runner};

/// Vision CLI Entry Point
///
/// Loads configuration, wires the analysis use case to the Azure adapter and
/// analyzes a single image.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables (RUST_LOG included)
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 3. Parse arguments and load configuration
    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 5. Run the requested command
    match cli.command {
        Commands::Analyze(args) => Runner::run(args, config, container).await,
    }
}
