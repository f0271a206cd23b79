use std::time::Duration;

use super::env;

/// Configuration for Azure Computer Vision access.
pub struct VisionConfig {
    pub endpoint: String,
    pub api_key: String,
    pub http_timeout: Duration,
}

impl VisionConfig {
    /// Environment variables:
    /// - AZURE_VISION_ENDPOINT: resource endpoint, e.g. "https://<name>.cognitiveservices.azure.com"
    /// - AZURE_VISION_KEY: subscription key
    /// - VISION_HTTP_TIMEOUT_SECS: per-request timeout (default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            endpoint: env::required("AZURE_VISION_ENDPOINT")?,
            api_key: env::required("AZURE_VISION_KEY")?,
            http_timeout: Duration::from_secs(env::parsed_or("VISION_HTTP_TIMEOUT_SECS", 30)?),
        })
    }
}
