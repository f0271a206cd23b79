use std::time::Duration;

use anyhow::Context;
use tokio_util::sync::CancellationToken;

use business::domain::vision::use_cases::analyze::{AnalyzeImageParams, AnalyzeImageUseCase};

use crate::{cli::AnalyzeArgs, config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Runner;

impl Runner {
    /// Runs one analysis and prints the result list as JSON on stdout.
    pub async fn run(args: AnalyzeArgs, config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let image = tokio::fs::read(&args.image)
            .await
            .with_context(|| format!("Failed to read image {}", args.image.display()))?;

        let cancellation = CancellationToken::new();
        let on_interrupt = cancellation.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("Interrupted, cancelling analysis");
                on_interrupt.cancel();
            }
        });

        let params = AnalyzeImageParams {
            image,
            mode: args.analysis_mode(config.grid),
            cancellation: cancellation.clone(),
        };
        let analysis = container.analyze_image_use_case.execute(params);

        let output = match args.timeout_secs {
            Some(secs) => match tokio::time::timeout(Duration::from_secs(secs), analysis).await {
                Ok(result) => result?,
                Err(_) => {
                    cancellation.cancel();
                    anyhow::bail!("Analysis did not finish within {} seconds", secs);
                }
            },
            None => analysis.await?,
        };

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}
