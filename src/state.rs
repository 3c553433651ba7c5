//! Shared application state for all routes.

use crate::service::Executor;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn Executor>,
}

impl AppState {
    pub fn new<E: Executor + 'static>(db: E) -> Self {
        AppState { db: Arc::new(db) }
    }
}
