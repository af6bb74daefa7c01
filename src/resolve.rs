//! Path resolution and validation.
//!
//! Turns user-supplied strings into absolute, existence-checked paths.
//! Existence is checked at resolution time, never cached; callers resolve
//! immediately before touching the filesystem.

use crate::errors::ShellError;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Expands a leading `~` to the user's home directory.
pub fn expand_home(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

/// Resolves `raw` to an absolute path of an existing entry.
pub fn normalize(cwd: &Path, raw: &str) -> crate::Result<PathBuf> {
    let expanded = expand_home(raw);
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        cwd.join(expanded)
    };
    if absolute.exists() {
        Ok(absolute)
    } else {
        Err(ShellError::not_found(absolute.display().to_string()))
    }
}

/// Fails unless the existing entry at `path` is a directory.
pub fn require_directory(path: &Path) -> crate::Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(ShellError::NotADirectory(path.to_path_buf()))
    }
}

/// Fails unless the existing entry at `path` is a regular file.
pub fn require_file(path: &Path) -> crate::Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ShellError::NotAFile(path.to_path_buf()))
    }
}

/// Last path component of a user-supplied path string.
pub fn basename(raw: &str) -> String {
    Path::new(raw)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Computes the absolute target at which a new entry named `basename`
/// should be created, following the destination hint `hint`.
///
/// An existing directory hint yields `hint/basename`; a hint naming nothing
/// becomes the target itself, provided its parent is an existing directory.
/// A computed target that already exists is an error: nothing is ever
/// silently overwritten. An empty `basename` is the creation form used by
/// `touch` and `mkdir`, where the hint names the entry to create.
pub fn resolve_destination(cwd: &Path, basename: &str, hint: &str) -> crate::Result<PathBuf> {
    let trimmed = hint.trim_end_matches(MAIN_SEPARATOR);
    let absolute = if trimmed.is_empty() {
        // "" after stripping separators: "/" keeps naming the root,
        // anything else collapses to the working directory.
        if hint.starts_with(MAIN_SEPARATOR) {
            PathBuf::from(MAIN_SEPARATOR.to_string())
        } else {
            cwd.to_path_buf()
        }
    } else if trimmed == "." {
        cwd.to_path_buf()
    } else {
        let expanded = expand_home(trimmed);
        if expanded.is_absolute() {
            expanded
        } else {
            cwd.join(expanded)
        }
    };

    let target = if absolute.exists() {
        if absolute.is_dir() && !basename.is_empty() {
            absolute.join(basename)
        } else {
            // Existing non-directory hints, and directory hints in the
            // creation form, are the target themselves and collide below.
            absolute
        }
    } else {
        let parent = absolute
            .parent()
            .ok_or_else(|| ShellError::not_found(hint.to_string()))?;
        if !parent.exists() {
            return Err(ShellError::not_found(parent.display().to_string()));
        }
        require_directory(parent)?;
        absolute
    };

    if target.exists() {
        return Err(ShellError::AlreadyExists(target));
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn normalize_returns_absolute_existing_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        let resolved = normalize(dir.path(), "a.txt").unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.exists());
        assert_eq!(resolved, dir.path().join("a.txt"));
    }

    #[test]
    fn normalize_fails_for_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        let err = normalize(dir.path(), "missing").unwrap_err();
        assert!(matches!(err, ShellError::PathNotFound(_)));
    }

    #[test]
    fn destination_in_existing_directory_appends_basename() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let target = resolve_destination(dir.path(), "f.txt", "sub").unwrap();
        assert_eq!(target, dir.path().join("sub").join("f.txt"));
    }

    #[test]
    fn trailing_separators_are_insignificant() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let target = resolve_destination(dir.path(), "f.txt", "sub///").unwrap();
        assert_eq!(target, dir.path().join("sub").join("f.txt"));
    }

    #[test]
    fn dot_and_empty_hints_mean_the_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            resolve_destination(dir.path(), "f.txt", ".").unwrap(),
            dir.path().join("f.txt")
        );
        assert_eq!(
            resolve_destination(dir.path(), "f.txt", "").unwrap(),
            dir.path().join("f.txt")
        );
    }

    #[test]
    fn fresh_hint_becomes_the_target() {
        let dir = tempfile::tempdir().unwrap();
        let target = resolve_destination(dir.path(), "old-name", "renamed.txt").unwrap();
        assert_eq!(target, dir.path().join("renamed.txt"));
    }

    #[test]
    fn fresh_hint_requires_an_existing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_destination(dir.path(), "f", "no-such-dir/f").unwrap_err();
        assert!(matches!(err, ShellError::PathNotFound(_)));

        fs::write(dir.path().join("plain"), "x").unwrap();
        let err = resolve_destination(dir.path(), "f", "plain/f").unwrap_err();
        assert!(matches!(err, ShellError::NotADirectory(_)));
    }

    #[test]
    fn existing_target_is_never_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("taken.txt"), "x").unwrap();

        let err = resolve_destination(dir.path(), "taken.txt", ".").unwrap_err();
        assert!(matches!(err, ShellError::AlreadyExists(_)));

        let err = resolve_destination(dir.path(), "", "taken.txt").unwrap_err();
        assert!(matches!(err, ShellError::AlreadyExists(_)));
    }
}
