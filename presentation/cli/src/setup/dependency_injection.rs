use std::sync::Arc;

use azure_vision::client::AzureVisionClient;
use azure_vision::gateway::VisionGatewayAzure;
use logger::TracingLogger;

use business::application::vision::analyze::AnalyzeImageUseCaseImpl;
use business::application::vision::scheduler::TokioScheduler;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub analyze_image_use_case: Arc<AnalyzeImageUseCaseImpl>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger::default());

        // Infrastructure adapters
        let vision_client = AzureVisionClient::new(
            config.vision.endpoint.clone(),
            config.vision.api_key.clone(),
            config.vision.http_timeout,
        );
        let gateway = Arc::new(VisionGatewayAzure::new(vision_client));

        let analyze_image_use_case = Arc::new(AnalyzeImageUseCaseImpl {
            gateway,
            scheduler: Arc::new(TokioScheduler),
            logger,
            policy: config.polling,
        });

        Self {
            analyze_image_use_case,
        }
    }
}
