use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::{Semaphore, mpsc};
use tokio::task::{JoinError, JoinSet};
use tracing::Instrument;

use crate::application::ports::{ResultStore, TranscriptionClient, TranscriptionError};
use crate::domain::{FileUpload, JobKey, JobResult};

const INTERNAL_FAILURE_MESSAGE: &str = "Transcription failed: internal error while processing the file";

#[derive(Debug)]
pub struct TranscriptionMessage {
    pub key: JobKey,
    pub upload: FileUpload,
}

/// Drains the transcription queue, running each job as its own task.
///
/// At most `max_concurrent_jobs` calls to the transcription service are in flight.
/// While all slots are taken the queue is not read, so submissions back up into the
/// bounded channel and are eventually rejected by the dispatcher.
pub struct TranscriptionWorker {
    receiver: mpsc::Receiver<TranscriptionMessage>,
    transcription_client: Arc<dyn TranscriptionClient>,
    result_store: Arc<dyn ResultStore>,
    concurrency: Arc<Semaphore>,
    max_concurrent_jobs: usize,
}

impl TranscriptionWorker {
    pub fn new(
        receiver: mpsc::Receiver<TranscriptionMessage>,
        transcription_client: Arc<dyn TranscriptionClient>,
        result_store: Arc<dyn ResultStore>,
        max_concurrent_jobs: usize,
    ) -> Self {
        let max_concurrent_jobs = max_concurrent_jobs.max(1);
        Self {
            receiver,
            transcription_client,
            result_store,
            concurrency: Arc::new(Semaphore::new(max_concurrent_jobs)),
            max_concurrent_jobs,
        }
    }

    pub async fn run(mut self) {
        tracing::info!(
            max_concurrent_jobs = self.max_concurrent_jobs,
            "Transcription worker started"
        );

        let mut in_flight = JoinSet::new();

        while let Some(msg) = self.receiver.recv().await {
            // The semaphore is never closed, so a permit is always granted.
            let permit = Arc::clone(&self.concurrency).acquire_owned().await.ok();

            let span = tracing::info_span!(
                "transcription_job",
                job_key = %msg.key,
                filename = %msg.upload.filename,
                bytes = msg.upload.size_bytes(),
            );
            let client = Arc::clone(&self.transcription_client);
            let store = Arc::clone(&self.result_store);

            in_flight.spawn(
                async move {
                    let _permit = permit;
                    process_job(client.as_ref(), store.as_ref(), msg).await;
                }
                .instrument(span),
            );

            while let Some(joined) = in_flight.try_join_next() {
                log_join_error(joined);
            }
        }

        tracing::info!(
            in_flight = in_flight.len(),
            "Transcription queue closed, draining in-flight jobs"
        );
        while let Some(joined) = in_flight.join_next().await {
            log_join_error(joined);
        }
        tracing::info!("Transcription worker stopped");
    }
}

async fn process_job(
    client: &dyn TranscriptionClient,
    store: &dyn ResultStore,
    msg: TranscriptionMessage,
) {
    let TranscriptionMessage { key, upload } = msg;

    tracing::debug!("Sending file to transcription service");

    let outcome = AssertUnwindSafe(client.transcribe(upload.data.clone(), &upload.filename))
        .catch_unwind()
        .await;

    let result = match outcome {
        Ok(Ok(transcript)) => {
            tracing::info!(
                chars = transcript.text.len(),
                segments = transcript.segments.len(),
                "Transcription completed"
            );
            JobResult::Success(transcript)
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, detail = %e.detail(), "Transcription failed");
            JobResult::Failure(failure_message(&e))
        }
        Err(panic) => {
            tracing::error!(panic = %panic_message(&*panic), "Transcription task panicked");
            JobResult::Failure(INTERNAL_FAILURE_MESSAGE.to_string())
        }
    };

    if let Err(e) = store.put(key, result) {
        tracing::error!(error = %e, "Refusing to overwrite recorded job result");
    }
}

pub fn failure_message(error: &TranscriptionError) -> String {
    format!("Transcription failed: {}", error)
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn log_join_error(joined: Result<(), JoinError>) {
    if let Err(e) = joined {
        tracing::error!(error = %e, "Transcription task did not complete");
    }
}
