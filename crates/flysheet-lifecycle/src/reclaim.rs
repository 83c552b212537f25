use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;

use crate::manager::Lifecycle;

/// Spawn the background reclamation task.
///
/// Sweeps the store every `period`, independent of request traffic, so
/// lapsed artifacts are reclaimed even through idle stretches. The task
/// runs until aborted or the runtime shuts down; there is nothing to
/// drain on shutdown.
pub fn spawn_reclamation(lifecycle: Arc<Lifecycle>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        tracing::info!(period_secs = period.as_secs(), "reclamation timer started");
        loop {
            // The first tick completes immediately; a sweep of a fresh
            // store is a no-op.
            ticker.tick().await;
            lifecycle.run_reclamation(Utc::now());
        }
    })
}
