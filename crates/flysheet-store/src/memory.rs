use std::collections::HashMap;
use std::sync::RwLock;

use flysheet_types::ArtifactId;

use crate::error::StoreResult;
use crate::traits::BlobStore;

/// In-memory, HashMap-based blob store.
///
/// Intended for tests and embedding. All blobs are held in memory behind a
/// `RwLock` for safe concurrent access. Bytes are cloned on read.
pub struct InMemoryBlobStore {
    blobs: RwLock<HashMap<ArtifactId, Vec<u8>>>,
}

impl InMemoryBlobStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            blobs: RwLock::new(HashMap::new()),
        }
    }

    /// Number of blobs currently stored.
    pub fn len(&self) -> usize {
        self.blobs.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.blobs.read().expect("lock poisoned").is_empty()
    }

    /// Total bytes across all stored blobs.
    pub fn total_bytes(&self) -> u64 {
        self.blobs
            .read()
            .expect("lock poisoned")
            .values()
            .map(|b| b.len() as u64)
            .sum()
    }

    /// Remove all blobs from the store.
    pub fn clear(&self) {
        self.blobs.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobStore for InMemoryBlobStore {
    fn write(&self, id: &ArtifactId, bytes: &[u8]) -> StoreResult<String> {
        let mut blobs = self.blobs.write().expect("lock poisoned");
        blobs.insert(*id, bytes.to_vec());
        Ok(format!("mem:{id}"))
    }

    fn read(&self, id: &ArtifactId) -> StoreResult<Option<Vec<u8>>> {
        let blobs = self.blobs.read().expect("lock poisoned");
        Ok(blobs.get(id).cloned())
    }

    fn delete(&self, id: &ArtifactId) -> StoreResult<bool> {
        let mut blobs = self.blobs.write().expect("lock poisoned");
        Ok(blobs.remove(id).is_some())
    }
}

impl std::fmt::Debug for InMemoryBlobStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryBlobStore")
            .field("blob_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_and_read() {
        let store = InMemoryBlobStore::new();
        let id = ArtifactId::mint();
        let location = store.write(&id, b"hello world").unwrap();
        assert_eq!(location, format!("mem:{id}"));

        let bytes = store.read(&id).unwrap().expect("should exist");
        assert_eq!(bytes, b"hello world");
    }

    #[test]
    fn read_missing_returns_none() {
        let store = InMemoryBlobStore::new();
        assert!(store.read(&ArtifactId::mint()).unwrap().is_none());
    }

    #[test]
    fn delete_present_blob() {
        let store = InMemoryBlobStore::new();
        let id = ArtifactId::mint();
        store.write(&id, b"to-delete").unwrap();

        assert!(store.delete(&id).unwrap()); // was present
        assert!(store.read(&id).unwrap().is_none()); // now gone
        assert!(!store.delete(&id).unwrap()); // second delete = false
    }

    #[test]
    fn delete_missing_blob() {
        let store = InMemoryBlobStore::new();
        assert!(!store.delete(&ArtifactId::mint()).unwrap());
    }

    #[test]
    fn len_and_is_empty() {
        let store = InMemoryBlobStore::new();
        assert!(store.is_empty());

        store.write(&ArtifactId::mint(), b"a").unwrap();
        assert!(!store.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn total_bytes() {
        let store = InMemoryBlobStore::new();
        store.write(&ArtifactId::mint(), b"12345").unwrap();
        store.write(&ArtifactId::mint(), b"123456789").unwrap();
        assert_eq!(store.total_bytes(), 14);
    }

    #[test]
    fn clear_removes_all() {
        let store = InMemoryBlobStore::new();
        store.write(&ArtifactId::mint(), b"a").unwrap();
        store.write(&ArtifactId::mint(), b"b").unwrap();
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn distinct_ids_do_not_collide() {
        let store = InMemoryBlobStore::new();
        let a = ArtifactId::mint();
        let b = ArtifactId::mint();
        store.write(&a, b"aaa").unwrap();
        store.write(&b, b"bbb").unwrap();
        assert_eq!(store.read(&a).unwrap().unwrap(), b"aaa");
        assert_eq!(store.read(&b).unwrap().unwrap(), b"bbb");
    }

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryBlobStore::new());
        let id = ArtifactId::mint();
        store.write(&id, b"shared data").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let bytes = store.read(&id).unwrap().unwrap();
                    assert_eq!(bytes, b"shared data");
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    #[test]
    fn debug_format() {
        let store = InMemoryBlobStore::new();
        store.write(&ArtifactId::mint(), b"x").unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryBlobStore"));
        assert!(debug.contains("blob_count"));
    }
}
