use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;

use crate::config::Config;
use crate::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Record store behind a trait so tests run against the in-memory
    /// implementation.
    pub store: Arc<dyn ProfileStore>,
    pub s3: S3Client,
    pub config: Config,
}
