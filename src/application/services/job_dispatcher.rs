use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;

use crate::application::ports::{
    KeyGenerationError, KeyGenerator, ResultStore, TranscriptionClient,
};
use crate::domain::{FileUpload, JobKey, PollOutcome};

use super::transcription_worker::{TranscriptionMessage, TranscriptionWorker};

/// Accepts uploads, hands them to the transcription worker and answers polls.
pub struct JobDispatcher {
    key_generator: Arc<dyn KeyGenerator>,
    result_store: Arc<dyn ResultStore>,
    sender: mpsc::Sender<TranscriptionMessage>,
}

impl JobDispatcher {
    pub fn new(
        key_generator: Arc<dyn KeyGenerator>,
        result_store: Arc<dyn ResultStore>,
        sender: mpsc::Sender<TranscriptionMessage>,
    ) -> Self {
        Self {
            key_generator,
            result_store,
            sender,
        }
    }

    /// Builds a dispatcher together with its worker and spawns the worker on the
    /// current runtime. The worker stops once every dispatcher clone is dropped.
    pub fn start(
        key_generator: Arc<dyn KeyGenerator>,
        result_store: Arc<dyn ResultStore>,
        transcription_client: Arc<dyn TranscriptionClient>,
        queue_capacity: usize,
        max_concurrent_jobs: usize,
    ) -> (Self, JoinHandle<()>) {
        let (sender, receiver) = mpsc::channel(queue_capacity.max(1));
        let worker = TranscriptionWorker::new(
            receiver,
            transcription_client,
            Arc::clone(&result_store),
            max_concurrent_jobs,
        );
        let handle = tokio::spawn(worker.run());

        (Self::new(key_generator, result_store, sender), handle)
    }

    /// Queues `upload` for transcription and returns its key without waiting for the result.
    pub fn submit(&self, upload: Option<FileUpload>) -> Result<JobKey, DispatchError> {
        let upload = upload
            .filter(|u| !u.is_empty())
            .ok_or(DispatchError::MissingFile)?;

        let key = self.key_generator.generate(&upload.extension())?;
        let filename = upload.filename.clone();
        let size_bytes = upload.size_bytes();

        self.sender
            .try_send(TranscriptionMessage {
                key: key.clone(),
                upload,
            })
            .map_err(|e| match e {
                TrySendError::Full(_) => DispatchError::QueueFull,
                TrySendError::Closed(_) => DispatchError::WorkerUnavailable,
            })?;

        tracing::info!(
            job_key = %key,
            filename = %filename,
            bytes = size_bytes,
            "Transcription job enqueued"
        );

        Ok(key)
    }

    pub fn poll(&self, key: &JobKey) -> PollOutcome {
        self.result_store.get(key).into()
    }

    /// Free slots left in the transcription queue.
    pub fn queue_capacity(&self) -> usize {
        self.sender.capacity()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("no file uploaded")]
    MissingFile,
    #[error("could not generate job key: {0}")]
    KeyGeneration(#[from] KeyGenerationError),
    #[error("transcription queue is full")]
    QueueFull,
    #[error("transcription worker is unavailable")]
    WorkerUnavailable,
}
