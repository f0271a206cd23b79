use business::domain::vision::errors::{AnalysisError, AnalysisPhase};
use business::domain::vision::model::{AnalysisDocument, SubmitOutcome};
use business::domain::vision::value_objects::OperationHandle;

use crate::dto::AnalysisResponseDto;

/// The parts of an HTTP response the submit/poll protocol looks at.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub operation_location: Option<String>,
    pub body: String,
}

/// Classifies the answer to a submitted image.
///
/// The status code alone decides: 200 carries the finished document, 202
/// points at a pending one. The body is never inspected to guess which.
pub fn interpret_submit(response: RawResponse) -> Result<SubmitOutcome, AnalysisError> {
    match response.status {
        200 => decode(&response.body, AnalysisPhase::Submit, true).map(SubmitOutcome::Completed),
        202 => {
            let location = response.operation_location.ok_or_else(|| {
                AnalysisError::protocol(
                    AnalysisPhase::Submit,
                    "accepted response without Operation-Location header",
                )
            })?;
            OperationHandle::parse(&location).map(SubmitOutcome::Pending)
        }
        status => Err(AnalysisError::transport(
            AnalysisPhase::Submit,
            status,
            response.body,
        )),
    }
}

/// Decodes one poll of a pending analysis. Anything but 200 aborts polling.
pub fn interpret_poll(response: RawResponse) -> Result<AnalysisDocument, AnalysisError> {
    match response.status {
        200 => decode(&response.body, AnalysisPhase::Poll, false),
        status => Err(AnalysisError::transport(
            AnalysisPhase::Poll,
            status,
            response.body,
        )),
    }
}

fn decode(
    body: &str,
    phase: AnalysisPhase,
    completed_inline: bool,
) -> Result<AnalysisDocument, AnalysisError> {
    let dto: AnalysisResponseDto = serde_json::from_str(body).map_err(|e| {
        AnalysisError::protocol_with_body(
            phase,
            format!("undecodable analysis document: {}", e),
            body,
        )
    })?;
    dto.into_document(completed_inline)
        .map_err(|reason| AnalysisError::protocol_with_body(phase, reason, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::vision::value_objects::AnalysisStatus;

    fn response(status: u16, location: Option<&str>, body: &str) -> RawResponse {
        RawResponse {
            status,
            operation_location: location.map(str::to_string),
            body: body.to_string(),
        }
    }

    #[test]
    fn should_return_handle_for_accepted_response() {
        let outcome = interpret_submit(response(
            202,
            Some("https://vision.example.com/vision/v3.2/read/analyzeResults/1f2e"),
            "",
        ))
        .unwrap();

        match outcome {
            SubmitOutcome::Pending(handle) => assert_eq!(
                handle.as_str(),
                "https://vision.example.com/vision/v3.2/read/analyzeResults/1f2e"
            ),
            other => panic!("expected pending outcome, got {:?}", other),
        }
    }

    #[test]
    fn should_fail_with_protocol_error_when_location_is_missing() {
        let result = interpret_submit(response(202, None, ""));

        assert!(matches!(
            result,
            Err(AnalysisError::Protocol {
                phase: AnalysisPhase::Submit,
                ..
            })
        ));
    }

    #[test]
    fn should_fail_with_protocol_error_when_location_is_blank() {
        let result = interpret_submit(response(202, Some("  "), ""));
        assert!(matches!(result, Err(AnalysisError::Protocol { .. })));
    }

    #[test]
    fn should_return_inline_document_for_ok_response() {
        let outcome = interpret_submit(response(
            200,
            None,
            r#"{"metadata":{"width":700,"height":200}}"#,
        ))
        .unwrap();

        let SubmitOutcome::Completed(document) = outcome else {
            panic!("expected completed outcome");
        };
        assert_eq!(document.status, AnalysisStatus::Succeeded);
        assert!(document.metadata.is_some());
    }

    #[test]
    fn should_not_treat_location_string_body_as_document() {
        let result = interpret_submit(response(
            200,
            None,
            "https://vision.example.com/vision/v3.2/read/analyzeResults/1f2e",
        ));
        assert!(matches!(result, Err(AnalysisError::Protocol { .. })));
    }

    #[test]
    fn should_keep_undecodable_submit_body_as_diagnostic() {
        let body = "https://vision.example.com/vision/v3.2/read/analyzeResults/1f2e";

        let error = interpret_submit(response(200, None, body)).unwrap_err();

        assert_eq!(error.phase(), AnalysisPhase::Submit);
        assert_eq!(error.diagnostic(), Some(body));
    }

    #[test]
    fn should_keep_polled_body_without_status_as_diagnostic() {
        let body = r#"{"analyzeResult":null}"#;

        let error = interpret_poll(response(200, None, body)).unwrap_err();

        assert!(matches!(
            error,
            AnalysisError::Protocol {
                phase: AnalysisPhase::Poll,
                ..
            }
        ));
        assert_eq!(error.diagnostic(), Some(body));
    }

    #[test]
    fn should_capture_body_of_rejected_submit() {
        let body = r#"{"error":{"code":"InvalidImageSize","message":"Image must be at least 50 pixels"}}"#;

        let error = interpret_submit(response(400, None, body)).unwrap_err();

        assert!(matches!(error, AnalysisError::Transport { status: 400, .. }));
        assert_eq!(error.phase(), AnalysisPhase::Submit);
        assert_eq!(error.diagnostic(), Some(body));
    }

    #[test]
    fn should_treat_created_status_as_transport_error() {
        let result = interpret_submit(response(201, None, "{}"));
        assert!(matches!(result, Err(AnalysisError::Transport { status: 201, .. })));
    }

    #[test]
    fn should_decode_polled_document() {
        let document = interpret_poll(response(200, None, r#"{"status":"notStarted"}"#)).unwrap();
        assert_eq!(document.status, AnalysisStatus::NotStarted);
    }

    #[test]
    fn should_fail_poll_on_non_ok_status() {
        let error = interpret_poll(response(429, None, "Rate limit is exceeded")).unwrap_err();

        assert!(matches!(
            error,
            AnalysisError::Transport {
                phase: AnalysisPhase::Poll,
                status: 429,
                ..
            }
        ));
        assert_eq!(error.diagnostic(), Some("Rate limit is exceeded"));
    }

    #[test]
    fn should_fail_poll_on_malformed_json() {
        let result = interpret_poll(response(200, None, "<html>gateway</html>"));
        assert!(matches!(
            result,
            Err(AnalysisError::Protocol {
                phase: AnalysisPhase::Poll,
                ..
            })
        ));
    }
}
