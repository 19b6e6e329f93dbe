use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::ObjectStorage;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: qoupl_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Object storage backend for media uploads.
    pub storage: Arc<dyn ObjectStorage>,
}
