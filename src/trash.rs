//! Soft-delete staging area.
//!
//! A single scratch directory receives soft-deleted entries keyed by
//! basename. At most one entry per basename exists at a time; a new soft
//! delete of the same name evicts the previous entry first.

use crate::{fs, resolve};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct TrashStore {
    root: PathBuf,
}

impl TrashStore {
    /// Opens the store at `root`, destroying any prior contents.
    pub fn open(root: PathBuf) -> crate::Result<Self> {
        if root.exists() {
            fs::remove_dir_all(&root)?;
        }
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path a soft-deleted entry named `basename` occupies.
    pub fn entry_path(&self, basename: &str) -> PathBuf {
        self.root.join(basename)
    }

    /// Permanently deletes the entry for `basename`, if one exists.
    pub fn evict_if_present(&self, basename: &str) -> crate::Result<()> {
        let entry = self.entry_path(basename);
        if entry.exists() {
            fs::remove_entry(&entry)?;
        }
        Ok(())
    }

    /// Copies `source` into the store under `basename` and returns the
    /// resulting path. Directories are copied recursively. The store
    /// directory is recreated if it was deleted externally mid-session.
    pub fn accept(&self, source: &Path, basename: &str) -> crate::Result<PathBuf> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        let entry = self.entry_path(basename);
        if source.is_dir() {
            fs::copy_tree(source, &entry)?;
        } else {
            resolve::require_file(source)?;
            fs::copy_file(source, &entry)?;
        }
        Ok(entry)
    }

    /// Removes the store directory entirely. Called at session end.
    pub fn teardown(&self) -> crate::Result<()> {
        if self.root.exists() {
            fs::remove_dir_all(&self.root)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;

    #[test]
    fn open_clears_prior_contents() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("trash");
        stdfs::create_dir(&root).unwrap();
        stdfs::write(root.join("stale"), "old").unwrap();

        let store = TrashStore::open(root.clone()).unwrap();
        assert!(store.root().exists());
        assert!(!root.join("stale").exists());
    }

    #[test]
    fn accept_copies_instead_of_moving() {
        let dir = tempfile::tempdir().unwrap();
        let store = TrashStore::open(dir.path().join("trash")).unwrap();
        let source = dir.path().join("keep.txt");
        stdfs::write(&source, "payload").unwrap();

        let entry = store.accept(&source, "keep.txt").unwrap();
        assert!(source.exists());
        assert_eq!(stdfs::read_to_string(entry).unwrap(), "payload");
    }

    #[test]
    fn eviction_replaces_same_basename() {
        let dir = tempfile::tempdir().unwrap();
        let store = TrashStore::open(dir.path().join("trash")).unwrap();
        let first = dir.path().join("name");
        stdfs::write(&first, "first").unwrap();
        store.accept(&first, "name").unwrap();

        store.evict_if_present("name").unwrap();
        let second = dir.path().join("other");
        stdfs::write(&second, "second").unwrap();
        let entry = store.accept(&second, "name").unwrap();
        assert_eq!(stdfs::read_to_string(entry).unwrap(), "second");
    }

    #[test]
    fn eviction_of_absent_entry_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let store = TrashStore::open(dir.path().join("trash")).unwrap();
        assert!(store.evict_if_present("ghost").is_ok());
    }

    #[test]
    fn accept_recreates_an_externally_deleted_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = TrashStore::open(dir.path().join("trash")).unwrap();
        stdfs::remove_dir_all(store.root()).unwrap();

        let source = dir.path().join("file.txt");
        stdfs::write(&source, "x").unwrap();
        let entry = store.accept(&source, "file.txt").unwrap();
        assert!(entry.exists());
    }
}
