use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::vision::poll::ResultPoller;
use crate::domain::logger::Logger;
use crate::domain::vision::errors::{AnalysisError, AnalysisPhase};
use crate::domain::vision::grid::map_grid;
use crate::domain::vision::model::{
    AnalysisDocument, AnalysisOutput, ParkingSpot, SubmitOutcome,
};
use crate::domain::vision::plates::extract_plates;
use crate::domain::vision::polling::PollingPolicy;
use crate::domain::vision::services::{Scheduler, VisionGateway};
use crate::domain::vision::use_cases::analyze::{AnalyzeImageParams, AnalyzeImageUseCase};
use crate::domain::vision::value_objects::{AnalysisMode, GridLayout};

pub struct AnalyzeImageUseCaseImpl {
    pub gateway: Arc<dyn VisionGateway>,
    pub scheduler: Arc<dyn Scheduler>,
    pub logger: Arc<dyn Logger>,
    pub policy: PollingPolicy,
}

impl AnalyzeImageUseCaseImpl {
    async fn run(
        &self,
        analysis_id: Uuid,
        params: &AnalyzeImageParams,
    ) -> Result<AnalysisOutput, AnalysisError> {
        if params.image.is_empty() {
            return Err(AnalysisError::validation(
                AnalysisPhase::Submit,
                "image is empty",
            ));
        }
        if let AnalysisMode::Grid(layout) = params.mode {
            GridLayout::new(layout.rows, layout.columns)?;
        }

        self.logger.info(&format!(
            "[{}] Submitting {} byte image for {} analysis",
            analysis_id,
            params.image.len(),
            params.mode
        ));

        if params.cancellation.is_cancelled() {
            return Err(AnalysisError::Cancelled {
                phase: AnalysisPhase::Submit,
            });
        }
        let outcome = tokio::select! {
            biased;
            _ = params.cancellation.cancelled() => {
                return Err(AnalysisError::Cancelled { phase: AnalysisPhase::Submit });
            }
            submitted = self.gateway.submit(params.mode, &params.image) => submitted?,
        };

        let document = match outcome {
            SubmitOutcome::Completed(document) => {
                self.logger
                    .debug(&format!("[{}] Analysis completed synchronously", analysis_id));
                document
            }
            SubmitOutcome::Pending(handle) => {
                self.logger
                    .debug(&format!("[{}] Polling {}", analysis_id, handle));
                self.poller().poll(&handle, &params.cancellation).await?
            }
        };

        if !document.status.is_succeeded() {
            self.logger.warn(&format!(
                "[{}] Analysis finished with status {}, no results extracted",
                analysis_id, document.status
            ));
        }

        match params.mode {
            AnalysisMode::Plates => Ok(AnalysisOutput::Plates(extract_plates(&document))),
            AnalysisMode::Grid(layout) => {
                Ok(AnalysisOutput::Spots(self.map_spots(analysis_id, &document, layout)?))
            }
        }
    }

    fn poller(&self) -> ResultPoller<'_> {
        ResultPoller {
            gateway: self.gateway.as_ref(),
            scheduler: self.scheduler.as_ref(),
            logger: self.logger.as_ref(),
            policy: self.policy,
        }
    }

    fn map_spots(
        &self,
        analysis_id: Uuid,
        document: &AnalysisDocument,
        layout: GridLayout,
    ) -> Result<Vec<ParkingSpot>, AnalysisError> {
        if !document.status.is_succeeded() {
            return Ok(Vec::new());
        }
        let Some(metadata) = document.metadata else {
            self.logger.warn(&format!(
                "[{}] Succeeded analysis carried no image metadata",
                analysis_id
            ));
            return Ok(Vec::new());
        };
        map_grid(metadata.width, metadata.height, layout.rows, layout.columns)
    }
}

#[async_trait]
impl AnalyzeImageUseCase for AnalyzeImageUseCaseImpl {
    async fn execute(&self, params: AnalyzeImageParams) -> Result<AnalysisOutput, AnalysisError> {
        let analysis_id = Uuid::new_v4();

        match self.run(analysis_id, &params).await {
            Ok(output) => {
                self.logger.info(&format!(
                    "[{}] Analysis done: {} results",
                    analysis_id,
                    output.len()
                ));
                Ok(output)
            }
            Err(error) => {
                self.logger.error(&format!(
                    "[{}] Analysis failed during {}: {}{}",
                    analysis_id,
                    error.phase(),
                    error,
                    error
                        .diagnostic()
                        .map(|text| format!(" ({})", text))
                        .unwrap_or_default()
                ));
                Err(error)
            }
        }
    }
}
