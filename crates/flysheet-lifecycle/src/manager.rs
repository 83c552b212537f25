use std::sync::Arc;

use chrono::{DateTime, Utc};

use flysheet_render::DocumentRenderer;
use flysheet_store::ArtifactStore;
use flysheet_types::ArtifactId;

use crate::error::LifecycleResult;

/// What a successful creation hands back: the minted identifier and the
/// instant the artifact stops being served.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreateReceipt {
    pub id: ArtifactId,
    pub expires_at: DateTime<Utc>,
}

/// The artifact lifecycle manager.
///
/// Owns the request-facing contract over an [`ArtifactStore`] and a
/// [`DocumentRenderer`]. Creation renders the payload, persists the bytes,
/// and registers the expiry before the identifier is handed out; a failure
/// anywhere aborts the whole operation with no partial state. Retrieval
/// checks freshness against the current instant on every access.
pub struct Lifecycle {
    store: Arc<ArtifactStore>,
    renderer: Arc<dyn DocumentRenderer>,
}

impl Lifecycle {
    pub fn new(store: Arc<ArtifactStore>, renderer: Arc<dyn DocumentRenderer>) -> Self {
        Self { store, renderer }
    }

    /// The underlying store.
    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    /// MIME type of the documents this lifecycle serves.
    pub fn content_type(&self) -> &'static str {
        self.renderer.content_type()
    }

    /// Render `text` and store the result as a new artifact.
    ///
    /// Completing the put triggers an opportunistic sweep, so cleanup cost
    /// rides on creation traffic; the background timer covers idle periods.
    pub fn create(&self, text: &str) -> LifecycleResult<CreateReceipt> {
        self.create_at(text, Utc::now())
    }

    /// Fetch the bytes of `id` if it exists and has not lapsed.
    pub fn fetch(&self, id: &ArtifactId) -> LifecycleResult<Vec<u8>> {
        self.fetch_at(id, Utc::now())
    }

    /// Remove every artifact expired at `now`, returning the count.
    pub fn run_reclamation(&self, now: DateTime<Utc>) -> usize {
        self.store.sweep(now)
    }

    fn create_at(&self, text: &str, now: DateTime<Utc>) -> LifecycleResult<CreateReceipt> {
        let bytes = self.renderer.render(text)?;
        let (id, expires_at) = self.store.put(&bytes, now)?;
        tracing::debug!(artifact = %id, %expires_at, size = bytes.len(), "artifact created");
        self.store.sweep(now);
        Ok(CreateReceipt { id, expires_at })
    }

    fn fetch_at(&self, id: &ArtifactId, now: DateTime<Utc>) -> LifecycleResult<Vec<u8>> {
        Ok(self.store.get(id, now)?)
    }
}

impl std::fmt::Debug for Lifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lifecycle")
            .field("store", &self.store)
            .finish()
    }
}
