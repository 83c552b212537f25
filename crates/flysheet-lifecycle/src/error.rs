use thiserror::Error;

use flysheet_render::RenderError;
use flysheet_store::StoreError;

/// Errors from lifecycle operations.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// The rendering collaborator failed; no artifact was created.
    #[error("render failed: {0}")]
    Render(#[from] RenderError),

    /// Error from the artifact store.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl LifecycleError {
    /// Returns `true` for the normal absence outcomes of a fetch
    /// (`NotFound`, `Expired`, `Corrupted`).
    pub fn is_absence(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_absence())
    }
}

/// Result alias for lifecycle operations.
pub type LifecycleResult<T> = Result<T, LifecycleError>;
