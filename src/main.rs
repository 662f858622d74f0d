use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use bscribe::application::ports::{KeyGenerator, ResultStore};
use bscribe::application::services::JobDispatcher;
use bscribe::infrastructure::keys::OsKeyGenerator;
use bscribe::infrastructure::observability::{TracingConfig, init_tracing};
use bscribe::infrastructure::store::{InMemoryResultStore, spawn_eviction_task};
use bscribe::infrastructure::transcription::TranscriptionClientFactory;
use bscribe::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment.as_str()),
        settings.server.port,
    );

    let transcription_client =
        TranscriptionClientFactory::create(&settings.transcription, &settings.scaffold)?;

    let result_store = Arc::new(InMemoryResultStore::with_ttl(settings.jobs.result_ttl()));
    if result_store.ttl().is_some() {
        spawn_eviction_task(Arc::clone(&result_store), settings.jobs.eviction_interval());
    }

    let key_generator: Arc<dyn KeyGenerator> = Arc::new(OsKeyGenerator::new());
    let store: Arc<dyn ResultStore> = result_store;

    let (dispatcher, worker) = JobDispatcher::start(
        key_generator,
        store,
        transcription_client,
        settings.jobs.queue_capacity,
        settings.jobs.max_concurrent_jobs,
    );

    let state = AppState::new(Arc::new(dispatcher), settings.server.max_upload_bytes());
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!(
        %addr,
        queue_capacity = settings.jobs.queue_capacity,
        max_concurrent_jobs = settings.jobs.max_concurrent_jobs,
        result_ttl_secs = settings.jobs.result_ttl_secs,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router (and with it the last dispatcher) is gone; let queued jobs finish.
    tracing::info!("Waiting for in-flight transcription jobs");
    worker.await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
