use std::sync::Arc;

use flysheet_lifecycle::Lifecycle;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// The artifact lifecycle manager.
    pub lifecycle: Arc<Lifecycle>,
    /// Base URL embedded in returned artifact links.
    pub public_url: String,
}
