//! Error-mapped filesystem operations.
//!
//! Every wrapper ties the failing path to the returned error so messages at
//! the REPL name the entry the user asked about, not an anonymous I/O error.

use crate::errors::ShellError;
use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};

pub fn metadata(path: &Path) -> crate::Result<Metadata> {
    fs::metadata(path).map_err(|err| ShellError::io(path, err))
}

pub fn create_dir(path: &Path) -> crate::Result<()> {
    fs::create_dir(path).map_err(|err| ShellError::io(path, err))
}

pub fn create_dir_all(path: &Path) -> crate::Result<()> {
    fs::create_dir_all(path).map_err(|err| ShellError::io(path, err))
}

pub fn read_to_string(path: &Path) -> crate::Result<String> {
    fs::read_to_string(path).map_err(|err| ShellError::io(path, err))
}

pub fn create_file(path: &Path) -> crate::Result<()> {
    fs::File::create(path)
        .map(|_| ())
        .map_err(|err| ShellError::io(path, err))
}

pub fn remove_file(path: &Path) -> crate::Result<()> {
    fs::remove_file(path).map_err(|err| ShellError::io(path, err))
}

pub fn remove_dir_all(path: &Path) -> crate::Result<()> {
    fs::remove_dir_all(path).map_err(|err| ShellError::io(path, err))
}

pub fn rename(from: &Path, to: &Path) -> crate::Result<()> {
    fs::rename(from, to).map_err(|err| ShellError::io(from, err))
}

pub fn copy_file(from: &Path, to: &Path) -> crate::Result<()> {
    fs::copy(from, to)
        .map(|_| ())
        .map_err(|err| ShellError::io(from, err))
}

/// Lists directory children as concrete paths.
pub fn list_dir(path: &Path) -> crate::Result<Vec<PathBuf>> {
    let entries = fs::read_dir(path).map_err(|err| ShellError::io(path, err))?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| ShellError::io(path, err))?;
        paths.push(entry.path());
    }
    Ok(paths)
}

/// Recursively copies `from` into `to`, merging into `to` if it exists.
pub fn copy_tree(from: &Path, to: &Path) -> crate::Result<()> {
    create_dir_all(to)?;
    for child in list_dir(from)? {
        let name = child
            .file_name()
            .ok_or_else(|| ShellError::not_found(child.display().to_string()))?;
        let target = to.join(name);
        if child.is_dir() {
            copy_tree(&child, &target)?;
        } else {
            copy_file(&child, &target)?;
        }
    }
    Ok(())
}

/// Removes a file or a whole directory tree, whichever `path` names.
pub fn remove_entry(path: &Path) -> crate::Result<()> {
    if path.is_dir() {
        remove_dir_all(path)
    } else {
        remove_file(path)
    }
}
