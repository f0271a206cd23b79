use std::time::Duration;

use async_trait::async_trait;

use crate::domain::vision::services::Scheduler;

/// Waits on the tokio timer.
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn sleep(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}
