//! Filesystem blob store: one file per artifact under a store root.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use flysheet_types::ArtifactId;

use crate::error::StoreResult;
use crate::traits::BlobStore;

const BLOB_EXTENSION: &str = "pdf";

/// Filesystem-backed blob store.
///
/// Each artifact's bytes live at `<root>/<id>.pdf`, addressed solely by the
/// artifact id. The root directory is created on construction. Absent files
/// map to `Ok(None)` / `false`; every other I/O error is propagated.
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    /// Create a store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The store's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn blob_path(&self, id: &ArtifactId) -> PathBuf {
        self.root.join(format!("{id}.{BLOB_EXTENSION}"))
    }
}

impl BlobStore for FsBlobStore {
    fn write(&self, id: &ArtifactId, bytes: &[u8]) -> StoreResult<String> {
        let path = self.blob_path(id);
        fs::write(&path, bytes)?;
        Ok(path.display().to_string())
    }

    fn read(&self, id: &ArtifactId) -> StoreResult<Option<Vec<u8>>> {
        match fs::read(self.blob_path(id)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn delete(&self, id: &ArtifactId) -> StoreResult<bool> {
        match fs::remove_file(self.blob_path(id)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

impl std::fmt::Debug for FsBlobStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FsBlobStore")
            .field("root", &self.root)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, FsBlobStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FsBlobStore::new(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn write_and_read_roundtrip() {
        let (_dir, store) = store();
        let id = ArtifactId::mint();
        let location = store.write(&id, b"%PDF-fake").unwrap();
        assert!(location.ends_with(&format!("{id}.pdf")));

        let bytes = store.read(&id).unwrap().expect("should exist");
        assert_eq!(bytes, b"%PDF-fake");
    }

    #[test]
    fn read_missing_returns_none() {
        let (_dir, store) = store();
        assert!(store.read(&ArtifactId::mint()).unwrap().is_none());
    }

    #[test]
    fn delete_present_and_missing() {
        let (_dir, store) = store();
        let id = ArtifactId::mint();
        store.write(&id, b"bytes").unwrap();

        assert!(store.delete(&id).unwrap());
        assert!(store.read(&id).unwrap().is_none());
        assert!(!store.delete(&id).unwrap());
    }

    #[test]
    fn blob_file_is_named_by_id() {
        let (dir, store) = store();
        let id = ArtifactId::mint();
        store.write(&id, b"named").unwrap();
        assert!(dir.path().join(format!("{id}.pdf")).exists());
    }

    #[test]
    fn new_creates_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FsBlobStore::new(&nested).unwrap();
        assert_eq!(store.root(), nested.as_path());
        assert!(nested.is_dir());
    }

    #[test]
    fn out_of_band_removal_reads_as_absent() {
        let (dir, store) = store();
        let id = ArtifactId::mint();
        store.write(&id, b"doomed").unwrap();

        fs::remove_file(dir.path().join(format!("{id}.pdf"))).unwrap();
        assert!(store.read(&id).unwrap().is_none());
    }
}
