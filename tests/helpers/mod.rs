use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use bytes::Bytes;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use bscribe::application::ports::{
    KeyGenerationError, KeyGenerator, ResultStore, TranscriptionClient, TranscriptionError,
};
use bscribe::application::services::JobDispatcher;
use bscribe::domain::{JobKey, JobResult, PollOutcome, Transcript};
use bscribe::infrastructure::keys::OsKeyGenerator;
use bscribe::infrastructure::store::InMemoryResultStore;

pub const POLL_TIMEOUT: Duration = Duration::from_secs(5);

pub const VERBOSE_TRANSCRIPT: &str = r#"{
    "task": "transcribe",
    "language": "english",
    "duration": 2.5,
    "text": " Hello from the test server.",
    "segments": [
        {"id": 0, "start": 0.0, "end": 1.2, "text": " Hello from", "tokens": [50364, 2425]},
        {"id": 1, "start": 1.2, "end": 2.5, "text": " the test server.", "no_speech_prob": 0.01}
    ]
}"#;

/// Starts an inference server answering with `status` and `body` after `delay`.
/// Requests with an empty `file` or a missing `response-format` field get a 422.
pub async fn start_mock_whisper_server(
    status: u16,
    body: &'static str,
    delay: Duration,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/inference",
        post(move |mut multipart: Multipart| async move {
            let mut has_file = false;
            let mut response_format = None;
            while let Ok(Some(field)) = multipart.next_field().await {
                let name = field.name().map(str::to_string);
                match name.as_deref() {
                    Some("file") => has_file = field.bytes().await.is_ok_and(|b| !b.is_empty()),
                    Some("response-format") => response_format = field.text().await.ok(),
                    _ => {}
                }
            }

            if !has_file || response_format.as_deref() != Some("verbose_json") {
                return (StatusCode::UNPROCESSABLE_ENTITY, "missing form fields").into_response();
            }

            tokio::time::sleep(delay).await;
            let status = StatusCode::from_u16(status).unwrap();
            (status, body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub struct FailingKeyGenerator;

impl KeyGenerator for FailingKeyGenerator {
    fn generate(&self, _extension_hint: &str) -> Result<JobKey, KeyGenerationError> {
        Err(KeyGenerationError::EntropyUnavailable(
            "random source closed".to_string(),
        ))
    }
}

/// Transcribes to `"<filename>:<contents>"`; files named `fail.*` get a service error.
pub struct EchoTranscriptionClient {
    delay: Duration,
    calls: AtomicUsize,
}

impl EchoTranscriptionClient {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TranscriptionClient for EchoTranscriptionClient {
    async fn transcribe(
        &self,
        file_data: Bytes,
        filename: &str,
    ) -> Result<Transcript, TranscriptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;

        if filename.starts_with("fail.") {
            return Err(TranscriptionError::ServiceError {
                status: 500,
                body: "model crashed".to_string(),
            });
        }

        Ok(Transcript::new(format!(
            "{}:{}",
            filename,
            String::from_utf8_lossy(&file_data)
        )))
    }
}

pub struct PanickingTranscriptionClient;

#[async_trait::async_trait]
impl TranscriptionClient for PanickingTranscriptionClient {
    async fn transcribe(
        &self,
        _file_data: Bytes,
        _filename: &str,
    ) -> Result<Transcript, TranscriptionError> {
        panic!("decoder exploded")
    }
}

pub fn start_dispatcher(
    client: Arc<dyn TranscriptionClient>,
    queue_capacity: usize,
    max_concurrent_jobs: usize,
) -> (JobDispatcher, Arc<InMemoryResultStore>) {
    let store = Arc::new(InMemoryResultStore::new());
    let result_store: Arc<dyn ResultStore> = store.clone();
    let (dispatcher, _worker) = JobDispatcher::start(
        Arc::new(OsKeyGenerator::new()),
        result_store,
        client,
        queue_capacity,
        max_concurrent_jobs,
    );
    (dispatcher, store)
}

/// Polls until the job is ready, failing the test after `POLL_TIMEOUT`.
pub async fn wait_for_result(dispatcher: &JobDispatcher, key: &JobKey) -> JobResult {
    tokio::time::timeout(POLL_TIMEOUT, async {
        loop {
            if let PollOutcome::Ready(result) = dispatcher.poll(key) {
                return result;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("job did not complete in time")
}
