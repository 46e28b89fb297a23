use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::notify::Notifier;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Fire-and-forget notification boundary. Default: TracingNotifier.
    /// Handlers spawn calls onto it and never await delivery outcome.
    pub notifier: Arc<dyn Notifier>,
}
