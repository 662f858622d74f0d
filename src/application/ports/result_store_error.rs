use crate::domain::JobKey;

#[derive(Debug, thiserror::Error)]
pub enum ResultStoreError {
    #[error("result already recorded for job {0}")]
    AlreadyCompleted(JobKey),
}
