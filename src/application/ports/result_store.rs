use crate::domain::{JobKey, JobResult};

use super::ResultStoreError;

/// Completed job outcomes keyed by job key. A missing entry means the job is still running.
pub trait ResultStore: Send + Sync {
    /// Records the final result for `key`. Rejects a second write for the same key.
    fn put(&self, key: JobKey, result: JobResult) -> Result<(), ResultStoreError>;

    fn get(&self, key: &JobKey) -> Option<JobResult>;
}
