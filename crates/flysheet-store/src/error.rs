use flysheet_types::ArtifactId;

/// Errors from artifact store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No metadata entry exists for the identifier.
    #[error("artifact not found: {0}")]
    NotFound(ArtifactId),

    /// The artifact's validity window has lapsed.
    #[error("artifact expired: {0}")]
    Expired(ArtifactId),

    /// Metadata was present but the backing bytes are physically missing.
    /// The stale entry has been removed.
    #[error("artifact corrupted: {0}")]
    Corrupted(ArtifactId),

    /// I/O error from the underlying blob backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Returns `true` for the three absence outcomes of a fetch
    /// (`NotFound`, `Expired`, `Corrupted`), as opposed to a backend
    /// failure.
    pub fn is_absence(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::Expired(_) | Self::Corrupted(_)
        )
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absence_classification() {
        let id = ArtifactId::nil();
        assert!(StoreError::NotFound(id).is_absence());
        assert!(StoreError::Expired(id).is_absence());
        assert!(StoreError::Corrupted(id).is_absence());
        assert!(!StoreError::Io(std::io::Error::other("disk on fire")).is_absence());
    }
}
