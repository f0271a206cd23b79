use std::time::Duration;

use reqwest::Client;

/// Header carrying the Cognitive Services subscription key.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
/// Header of a 202 response pointing at the pending result.
pub const OPERATION_LOCATION_HEADER: &str = "Operation-Location";

/// Shared Azure Computer Vision HTTP client configuration.
pub struct AzureVisionClient {
    pub client: Client,
    pub api_key: String,
    pub endpoint: String,
}

impl AzureVisionClient {
    pub fn new(endpoint: String, api_key: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the asynchronous Read (OCR) endpoint URL.
    pub fn read_analyze_url(&self) -> String {
        format!("{}/vision/v3.2/read/analyze", self.endpoint)
    }

    /// Returns the synchronous image analysis endpoint URL.
    pub fn image_analyze_url(&self) -> String {
        format!("{}/vision/v3.2/analyze?visualFeatures=Objects", self.endpoint)
    }
}
