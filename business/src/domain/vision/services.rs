use std::time::Duration;

use async_trait::async_trait;

use super::errors::AnalysisError;
use super::model::{AnalysisDocument, SubmitOutcome};
use super::value_objects::{AnalysisMode, OperationHandle};

/// Service port for a submit-then-poll vision API.
///
/// Implementations own the endpoint and credential. Neither method retries:
/// `submit` issues exactly one request, `fetch` exactly one poll.
#[async_trait]
pub trait VisionGateway: Send + Sync {
    /// Sends the image and reports whether the result is ready or must be polled.
    async fn submit(&self, mode: AnalysisMode, image: &[u8])
    -> Result<SubmitOutcome, AnalysisError>;

    /// Fetches the current state of a pending analysis.
    async fn fetch(&self, handle: &OperationHandle) -> Result<AnalysisDocument, AnalysisError>;
}

/// Port for waiting between polls, so tests can substitute a fake clock.
#[async_trait]
pub trait Scheduler: Send + Sync {
    async fn sleep(&self, delay: Duration);
}
