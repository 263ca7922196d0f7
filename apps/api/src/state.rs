use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::documents::DocumentGenerator;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owner of every job, application and the settings record.
    pub store: Arc<Store>,
    /// Pluggable document generator. Default: MockDocumentGenerator.
    pub documents: Arc<dyn DocumentGenerator>,
    pub config: Config,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(store: Store, documents: Arc<dyn DocumentGenerator>, config: Config) -> Self {
        AppState {
            store: Arc::new(store),
            documents,
            config,
            started_at: Instant::now(),
        }
    }
}
