use std::sync::Arc;

use crate::application::services::JobDispatcher;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<JobDispatcher>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(dispatcher: Arc<JobDispatcher>, max_upload_bytes: usize) -> Self {
        Self {
            dispatcher,
            max_upload_bytes,
        }
    }
}
