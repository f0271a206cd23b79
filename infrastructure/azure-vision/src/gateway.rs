use async_trait::async_trait;
use reqwest::Response;

use business::domain::vision::errors::{AnalysisError, AnalysisPhase};
use business::domain::vision::model::{AnalysisDocument, SubmitOutcome};
use business::domain::vision::services::VisionGateway;
use business::domain::vision::value_objects::{AnalysisMode, OperationHandle};

use crate::client::{AzureVisionClient, OPERATION_LOCATION_HEADER, SUBSCRIPTION_KEY_HEADER};
use crate::response::{RawResponse, interpret_poll, interpret_submit};

pub struct VisionGatewayAzure {
    client: AzureVisionClient,
}

impl VisionGatewayAzure {
    pub fn new(client: AzureVisionClient) -> Self {
        Self { client }
    }

    fn submit_url(&self, mode: AnalysisMode) -> String {
        match mode {
            AnalysisMode::Plates => self.client.read_analyze_url(),
            AnalysisMode::Grid(_) => self.client.image_analyze_url(),
        }
    }

    async fn read_raw(response: Response, phase: AnalysisPhase) -> Result<RawResponse, AnalysisError> {
        let status = response.status().as_u16();
        let operation_location = response
            .headers()
            .get(OPERATION_LOCATION_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::network(phase, e.to_string()))?;

        Ok(RawResponse {
            status,
            operation_location,
            body,
        })
    }
}

#[async_trait]
impl VisionGateway for VisionGatewayAzure {
    async fn submit(
        &self,
        mode: AnalysisMode,
        image: &[u8],
    ) -> Result<SubmitOutcome, AnalysisError> {
        let url = self.submit_url(mode);
        tracing::debug!(%url, bytes = image.len(), "Submitting image to Azure Computer Vision");

        let response = self
            .client
            .client
            .post(&url)
            .header("Content-Type", "application/octet-stream")
            .header(SUBSCRIPTION_KEY_HEADER, &self.client.api_key)
            .body(image.to_vec())
            .send()
            .await
            .map_err(|e| AnalysisError::network(AnalysisPhase::Submit, e.to_string()))?;

        let raw = Self::read_raw(response, AnalysisPhase::Submit).await?;
        tracing::debug!(status = raw.status, "Azure answered image submission");

        interpret_submit(raw)
    }

    async fn fetch(&self, handle: &OperationHandle) -> Result<AnalysisDocument, AnalysisError> {
        let response = self
            .client
            .client
            .get(handle.as_str())
            .header(SUBSCRIPTION_KEY_HEADER, &self.client.api_key)
            .send()
            .await
            .map_err(|e| AnalysisError::network(AnalysisPhase::Poll, e.to_string()))?;

        let raw = Self::read_raw(response, AnalysisPhase::Poll).await?;
        tracing::debug!(status = raw.status, operation = %handle, "Polled Azure analysis");

        interpret_poll(raw)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use business::domain::vision::value_objects::{AnalysisStatus, GridLayout};
    use wiremock::matchers::{body_bytes, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const KEY: &str = "test-key";
    const IMAGE: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];

    fn gateway(endpoint: &str) -> VisionGatewayAzure {
        VisionGatewayAzure::new(AzureVisionClient::new(
            endpoint.to_string(),
            KEY.to_string(),
            Duration::from_secs(2),
        ))
    }

    #[test]
    fn should_pick_submit_path_by_mode() {
        let gateway = gateway("https://vision.example.com");

        assert!(gateway.submit_url(AnalysisMode::Plates).ends_with("/read/analyze"));
        assert!(
            gateway
                .submit_url(AnalysisMode::Grid(GridLayout::default()))
                .contains("/analyze?visualFeatures=")
        );
    }

    #[tokio::test]
    async fn should_post_raw_image_with_key_and_follow_operation_location() {
        let server = MockServer::start().await;
        let location = format!("{}/vision/v3.2/read/analyzeResults/1f2e", server.uri());
        Mock::given(method("POST"))
            .and(path("/vision/v3.2/read/analyze"))
            .and(header(SUBSCRIPTION_KEY_HEADER, KEY))
            .and(header("Content-Type", "application/octet-stream"))
            .and(body_bytes(IMAGE.to_vec()))
            .respond_with(
                ResponseTemplate::new(202).insert_header(OPERATION_LOCATION_HEADER, location.as_str()),
            )
            .expect(1)
            .mount(&server)
            .await;

        let outcome = gateway(&server.uri())
            .submit(AnalysisMode::Plates, IMAGE)
            .await
            .unwrap();

        match outcome {
            SubmitOutcome::Pending(handle) => assert_eq!(handle.as_str(), location),
            other => panic!("expected pending outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_return_inline_document_for_grid_submission() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/vision/v3.2/analyze"))
            .and(query_param("visualFeatures", "Objects"))
            .and(header(SUBSCRIPTION_KEY_HEADER, KEY))
            .and(header("Content-Type", "application/octet-stream"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"objects":[],"metadata":{"width":700,"height":200,"format":"Jpeg"}}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = gateway(&server.uri())
            .submit(AnalysisMode::Grid(GridLayout::default()), IMAGE)
            .await
            .unwrap();

        let SubmitOutcome::Completed(document) = outcome else {
            panic!("expected completed outcome");
        };
        assert_eq!(document.status, AnalysisStatus::Succeeded);
        assert!(document.metadata.is_some());
    }

    #[tokio::test]
    async fn should_fail_with_protocol_error_when_accepted_without_location() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/vision/v3.2/read/analyze"))
            .respond_with(ResponseTemplate::new(202))
            .mount(&server)
            .await;

        let result = gateway(&server.uri()).submit(AnalysisMode::Plates, IMAGE).await;

        assert!(matches!(
            result,
            Err(AnalysisError::Protocol {
                phase: AnalysisPhase::Submit,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn should_poll_with_subscription_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/vision/v3.2/read/analyzeResults/1f2e"))
            .and(header(SUBSCRIPTION_KEY_HEADER, KEY))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"status":"succeeded","analyzeResult":{"readResults":[{"lines":[
                    {"text":"AB 12345","boundingBox":[1,2,3,4,5,6,7,8]}
                ]}]}}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;
        let handle = OperationHandle::parse(&format!(
            "{}/vision/v3.2/read/analyzeResults/1f2e",
            server.uri()
        ))
        .unwrap();

        let document = gateway(&server.uri()).fetch(&handle).await.unwrap();

        assert_eq!(document.status, AnalysisStatus::Succeeded);
        let pages = document.read_results.unwrap();
        assert_eq!(pages[0].lines[0].text, "AB 12345");
    }

    #[tokio::test]
    async fn should_surface_poll_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/vision/v3.2/read/analyzeResults/1f2e"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Access denied"))
            .mount(&server)
            .await;
        let handle = OperationHandle::parse(&format!(
            "{}/vision/v3.2/read/analyzeResults/1f2e",
            server.uri()
        ))
        .unwrap();

        let error = gateway(&server.uri()).fetch(&handle).await.unwrap_err();

        assert!(matches!(
            error,
            AnalysisError::Transport {
                phase: AnalysisPhase::Poll,
                status: 401,
                ..
            }
        ));
        assert_eq!(error.diagnostic(), Some("Access denied"));
    }

    #[tokio::test]
    async fn should_report_network_error_when_service_is_unreachable() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let gateway = gateway(&format!("http://127.0.0.1:{}", port));

        let result = gateway.submit(AnalysisMode::Plates, IMAGE).await;

        assert!(matches!(
            result,
            Err(AnalysisError::Network {
                phase: AnalysisPhase::Submit,
                ..
            })
        ));
    }
}
