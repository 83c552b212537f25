use crate::error::RenderResult;

/// Renders a text payload into document bytes.
///
/// Implementations must be deterministic: the same input always produces
/// the same bytes. A render failure produces no bytes at all — callers
/// never see a partially rendered document.
pub trait DocumentRenderer: Send + Sync {
    /// Render `text` into a complete document.
    fn render(&self, text: &str) -> RenderResult<Vec<u8>>;

    /// MIME type of the documents this renderer produces.
    fn content_type(&self) -> &'static str;
}
