use flysheet_types::ArtifactId;

use crate::error::StoreResult;

/// Raw byte storage keyed solely by artifact id.
///
/// All implementations must satisfy these invariants:
/// - Bytes are addressed by `ArtifactId` and nothing else; no other
///   component may reach an artifact's bytes by another key.
/// - Each id is written at most once, so concurrent writes never target
///   the same location.
/// - A read of an id that was never written (or already deleted) returns
///   `Ok(None)`; `Err` is reserved for genuine backend failures.
/// - All I/O errors are propagated, never silently ignored.
pub trait BlobStore: Send + Sync {
    /// Persist `bytes` under `id` and return a descriptor of the backing
    /// location (a path, a memory key) for diagnostics.
    ///
    /// Callers treat a failed write as aborting the whole creation: no
    /// metadata may reference a blob that was not durably written.
    fn write(&self, id: &ArtifactId, bytes: &[u8]) -> StoreResult<String>;

    /// Read the bytes stored under `id`.
    ///
    /// Returns `Ok(None)` if no blob exists for the id.
    fn read(&self, id: &ArtifactId) -> StoreResult<Option<Vec<u8>>>;

    /// Delete the blob stored under `id`. Returns `true` if it existed.
    fn delete(&self, id: &ArtifactId) -> StoreResult<bool>;
}
