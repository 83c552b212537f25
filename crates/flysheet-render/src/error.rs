use thiserror::Error;

/// Errors produced while rendering a document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The payload exceeds the renderer's size cap.
    #[error("text payload too large: {actual} bytes (limit {max})")]
    Oversize { max: usize, actual: usize },
}

/// Result alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
