use tokio_util::sync::CancellationToken;

use crate::domain::logger::Logger;
use crate::domain::vision::errors::{AnalysisError, AnalysisPhase};
use crate::domain::vision::model::AnalysisDocument;
use crate::domain::vision::polling::PollingPolicy;
use crate::domain::vision::services::{Scheduler, VisionGateway};
use crate::domain::vision::value_objects::OperationHandle;

/// Polls a pending analysis until it reaches a terminal status.
///
/// Every fetch and every wait races the cancellation token, so a cancelled
/// caller never sits out the rest of a backoff delay.
pub struct ResultPoller<'a> {
    pub gateway: &'a dyn VisionGateway,
    pub scheduler: &'a dyn Scheduler,
    pub logger: &'a dyn Logger,
    pub policy: PollingPolicy,
}

impl ResultPoller<'_> {
    pub async fn poll(
        &self,
        handle: &OperationHandle,
        cancellation: &CancellationToken,
    ) -> Result<AnalysisDocument, AnalysisError> {
        let max_attempts = self.policy.max_attempts;
        let mut delay = self.policy.initial_delay.min(self.policy.max_delay);

        for attempt in 1..=max_attempts {
            if cancellation.is_cancelled() {
                return Err(cancelled());
            }
            let document = tokio::select! {
                biased;
                _ = cancellation.cancelled() => return Err(cancelled()),
                fetched = self.gateway.fetch(handle) => fetched?,
            };

            if !document.status.is_pending() {
                self.logger.debug(&format!(
                    "Analysis reached status {} on attempt {}/{}",
                    document.status, attempt, max_attempts
                ));
                return Ok(document);
            }

            if attempt == max_attempts {
                break;
            }

            self.logger.debug(&format!(
                "Analysis still {} on attempt {}/{}, retrying in {} ms",
                document.status,
                attempt,
                max_attempts,
                delay.as_millis()
            ));

            tokio::select! {
                biased;
                _ = cancellation.cancelled() => return Err(cancelled()),
                _ = self.scheduler.sleep(delay) => {}
            }
            delay = self.policy.next_delay(delay);
        }

        self.logger.warn(&format!(
            "Analysis still pending after {} attempts",
            max_attempts
        ));
        Err(AnalysisError::PollExhausted {
            attempts: max_attempts,
        })
    }
}

fn cancelled() -> AnalysisError {
    AnalysisError::Cancelled {
        phase: AnalysisPhase::Poll,
    }
}
