//! Notification boundary — pluggable, trait-based sink for "something was
//! added" events.
//!
//! The real delivery channel (email digests) lives outside this service. The
//! core fires these calls from `tokio::spawn` and ignores the outcome; a
//! failed notification never fails the request that triggered it.
//!
//! `AppState` holds an `Arc<dyn Notifier>`, swapped at startup.

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

#[async_trait]
pub trait Notifier: Send + Sync {
    /// A single task was added to a user's roadmap.
    async fn task_added(&self, user_id: Uuid, task_name: &str);

    /// A whole static roadmap was imported into a user's roadmap.
    async fn roadmap_imported(&self, user_id: Uuid, roadmap_name: &str, task_count: usize);
}

/// Default notifier: structured log lines only.
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn task_added(&self, user_id: Uuid, task_name: &str) {
        info!(%user_id, task_name, "task added to user roadmap");
    }

    async fn roadmap_imported(&self, user_id: Uuid, roadmap_name: &str, task_count: usize) {
        info!(%user_id, roadmap_name, task_count, "roadmap imported into user roadmap");
    }
}
