use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};

use flysheet_types::ArtifactId;

use crate::error::{StoreError, StoreResult};
use crate::record::ArtifactRecord;
use crate::traits::BlobStore;

/// The artifact registry: expiring metadata over a blob backend.
///
/// `ArtifactStore` owns the id-to-record map (the single shared mutable
/// resource, guarded by one `RwLock`) and a [`BlobStore`] for the bytes.
/// It is an explicitly owned object passed by reference to its callers,
/// never ambient process state.
///
/// All operations take `now` explicitly: expiry is a pure function of the
/// stored `expires_at` against the supplied instant, so a fetch racing a
/// sweep for the same lapsed artifact yields `Expired` regardless of which
/// completes first.
pub struct ArtifactStore {
    records: RwLock<HashMap<ArtifactId, ArtifactRecord>>,
    blobs: Arc<dyn BlobStore>,
    ttl: Duration,
}

impl ArtifactStore {
    /// Create a store over `blobs` where every artifact lives for `ttl`.
    pub fn new(blobs: Arc<dyn BlobStore>, ttl: Duration) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            blobs,
            ttl,
        }
    }

    /// The configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of live metadata entries.
    pub fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no artifacts are registered.
    pub fn is_empty(&self) -> bool {
        self.records.read().expect("lock poisoned").is_empty()
    }

    /// Store `bytes` under a freshly minted id, valid until `now + ttl`.
    ///
    /// Bytes are written before the metadata entry becomes visible, so no
    /// caller can observe an id without its expiry, and a failed write
    /// leaves no trace in the registry.
    pub fn put(
        &self,
        bytes: &[u8],
        now: DateTime<Utc>,
    ) -> StoreResult<(ArtifactId, DateTime<Utc>)> {
        let id = ArtifactId::mint();
        let location = self.blobs.write(&id, bytes)?;

        let expires_at = now + self.ttl;
        let record = ArtifactRecord {
            id,
            location,
            created_at: now,
            expires_at,
            size: bytes.len() as u64,
        };

        let mut records = self.records.write().expect("lock poisoned");
        records.insert(id, record);
        Ok((id, expires_at))
    }

    /// Fetch the bytes stored under `id`, as of `now`.
    ///
    /// Fails with [`StoreError::NotFound`] for an unknown id,
    /// [`StoreError::Expired`] once the validity window has lapsed (the
    /// entry and its bytes are reclaimed on sight), and
    /// [`StoreError::Corrupted`] when metadata is present but the bytes
    /// have gone missing underneath it (the stale entry is removed).
    pub fn get(&self, id: &ArtifactId, now: DateTime<Utc>) -> StoreResult<Vec<u8>> {
        let record = {
            let records = self.records.read().expect("lock poisoned");
            match records.get(id) {
                Some(record) => record.clone(),
                None => return Err(StoreError::NotFound(*id)),
            }
        };

        if record.is_expired(now) {
            self.remove(id);
            return Err(StoreError::Expired(*id));
        }

        match self.blobs.read(id)? {
            Some(bytes) => Ok(bytes),
            None => {
                // If the metadata entry is already gone, a concurrent sweep
                // reclaimed the artifact between our lookup and the blob
                // read. Only a still-present entry means state drifted
                // underneath us.
                if !self.remove(id) {
                    return Err(StoreError::Expired(*id));
                }
                tracing::warn!(
                    artifact = %id,
                    location = %record.location,
                    "blob missing for live metadata entry, removing stale record"
                );
                Err(StoreError::Corrupted(*id))
            }
        }
    }

    /// Remove every artifact whose expiry has passed at `now`, returning
    /// the number reclaimed.
    ///
    /// The scan-and-remove runs under the write lock, so entries created
    /// mid-sweep are never visited by the same pass. Blob deletion happens
    /// after the lock is released and is best-effort: one undeletable blob
    /// neither blocks its metadata removal nor aborts the rest of the pass.
    /// Idempotent for a fixed `now`.
    pub fn sweep(&self, now: DateTime<Utc>) -> usize {
        let expired: Vec<ArtifactRecord> = {
            let mut records = self.records.write().expect("lock poisoned");
            let ids: Vec<ArtifactId> = records
                .values()
                .filter(|record| record.is_expired(now))
                .map(|record| record.id)
                .collect();
            ids.iter().filter_map(|id| records.remove(id)).collect()
        };

        for record in &expired {
            if let Err(e) = self.blobs.delete(&record.id) {
                tracing::warn!(
                    artifact = %record.id,
                    location = %record.location,
                    error = %e,
                    "failed to delete blob during sweep, leaving stale bytes"
                );
            }
        }

        if !expired.is_empty() {
            tracing::debug!(removed = expired.len(), "sweep reclaimed expired artifacts");
        }
        expired.len()
    }

    /// Remove one entry: metadata first, then its blob best-effort.
    fn remove(&self, id: &ArtifactId) -> bool {
        let removed = {
            let mut records = self.records.write().expect("lock poisoned");
            records.remove(id)
        };
        match removed {
            Some(record) => {
                if let Err(e) = self.blobs.delete(id) {
                    tracing::warn!(
                        artifact = %id,
                        location = %record.location,
                        error = %e,
                        "failed to delete blob, leaving stale bytes"
                    );
                }
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for ArtifactStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactStore")
            .field("record_count", &self.len())
            .field("ttl", &self.ttl)
            .finish()
    }
}
