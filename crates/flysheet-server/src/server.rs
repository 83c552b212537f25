use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use flysheet_lifecycle::{spawn_reclamation, Lifecycle};
use flysheet_render::PdfRenderer;
use flysheet_store::{ArtifactStore, BlobStore, FsBlobStore, InMemoryBlobStore};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Flysheet artifact server.
pub struct FlysheetServer {
    config: ServerConfig,
}

impl FlysheetServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Wire up the lifecycle stack from the config: blob backend, store,
    /// renderer.
    pub fn build_lifecycle(&self) -> ServerResult<Arc<Lifecycle>> {
        let blobs: Arc<dyn BlobStore> = match &self.config.storage_root {
            Some(root) => Arc::new(FsBlobStore::new(root)?),
            None => Arc::new(InMemoryBlobStore::new()),
        };
        let store = Arc::new(ArtifactStore::new(blobs, self.config.ttl()));
        Ok(Arc::new(Lifecycle::new(store, Arc::new(PdfRenderer::new()))))
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> ServerResult<Router> {
        let lifecycle = self.build_lifecycle()?;
        Ok(build_router(AppState {
            lifecycle,
            public_url: self.config.public_url(),
        }))
    }

    /// Start serving requests, with the background reclamation timer
    /// running alongside.
    pub async fn serve(self) -> ServerResult<()> {
        let lifecycle = self.build_lifecycle()?;
        let reclaimer = spawn_reclamation(Arc::clone(&lifecycle), self.config.reclaim_interval());

        let app = build_router(AppState {
            lifecycle,
            public_url: self.config.public_url(),
        });
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            ttl_secs = self.config.ttl_secs,
            "flysheet server listening on {}",
            self.config.bind_addr
        );

        let result = axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()));
        reclaimer.abort();
        result
    }
}
