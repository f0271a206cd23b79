use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::vision::errors::AnalysisError;
use crate::domain::vision::model::AnalysisOutput;
use crate::domain::vision::value_objects::AnalysisMode;

pub struct AnalyzeImageParams {
    pub image: Vec<u8>,
    pub mode: AnalysisMode,
    /// Cancelling the token aborts the call, including any wait between polls.
    pub cancellation: CancellationToken,
}

#[async_trait]
pub trait AnalyzeImageUseCase: Send + Sync {
    async fn execute(&self, params: AnalyzeImageParams) -> Result<AnalysisOutput, AnalysisError>;
}
