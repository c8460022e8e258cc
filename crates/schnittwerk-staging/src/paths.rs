// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-aware cache paths and unique file-name generation.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use uuid::Uuid;

use schnittwerk_core::error::{Result, SchnittwerkError};

static CACHE_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Return the platform cache root for this process.
///
/// Resolved once on first use and constant for the process lifetime.
/// Resolution order: `XDG_CACHE_HOME`, then `$HOME/.cache`, then the system
/// temp directory.
pub fn cache_dir() -> PathBuf {
    CACHE_DIR.get_or_init(cache_dir_fallback).clone()
}

fn cache_dir_fallback() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg);
        }
    }
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return PathBuf::from(home).join(".cache");
        }
    }
    // Last resort
    std::env::temp_dir()
}

/// Ensure `path` refers to an existing directory, creating it and any missing
/// parents if absent.
///
/// Returns `Ok(true)` when the directory exists after the call, whether it was
/// newly created or pre-existing. Fails with `DirectoryCreation` when creation
/// is impossible — permission denied, or a regular file already occupies the
/// path. Behaviour when another process deletes the target mid-call is
/// whatever the underlying filesystem reports; no arbitration is attempted.
pub fn ensure_dir_exists(path: &Path) -> Result<bool> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => return Ok(true),
        Ok(_) => {
            return Err(SchnittwerkError::DirectoryCreation {
                path: path.display().to_string(),
                reason: "a file already occupies this path".into(),
            });
        }
        Err(_) => {}
    }

    std::fs::create_dir_all(path).map_err(|err| SchnittwerkError::DirectoryCreation {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;
    tracing::debug!(path = %path.display(), "staging directory created");
    Ok(true)
}

/// Build a fresh unique path inside `directory` with the given extension
/// (without the dot).
///
/// Pure path construction — the filesystem is not touched and `directory` is
/// not validated. Uniqueness is best-effort via a random UUID: practically
/// collision-free within one process's generated-file namespace, but not
/// guaranteed across processes.
pub fn generate_path(directory: &Path, extension: &str) -> PathBuf {
    directory.join(format!("{}.{}", Uuid::new_v4(), extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ensure_creates_nested_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("a").join("b").join("c");
        assert!(ensure_dir_exists(&target).unwrap());
        assert!(target.is_dir());
    }

    #[test]
    fn ensure_is_idempotent_on_existing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(ensure_dir_exists(tmp.path()).unwrap());
        assert!(ensure_dir_exists(tmp.path()).unwrap());
    }

    #[test]
    fn ensure_fails_when_a_file_occupies_the_path() {
        let tmp = tempfile::tempdir().unwrap();
        let occupied = tmp.path().join("not_a_dir");
        std::fs::write(&occupied, b"plain file").unwrap();

        let err = ensure_dir_exists(&occupied).unwrap_err();
        assert!(matches!(err, SchnittwerkError::DirectoryCreation { .. }));
        // The file must survive the failed call untouched.
        assert_eq!(std::fs::read(&occupied).unwrap(), b"plain file");
    }

    #[test]
    fn generated_path_has_directory_prefix_and_extension() {
        let dir = Path::new("/some/cache/dir");
        let path = generate_path(dir, "jpg");
        assert!(path.starts_with(dir));
        assert_eq!(path.extension().unwrap(), "jpg");
    }

    #[test]
    fn generated_paths_are_unique_over_many_calls() {
        let dir = Path::new("/cache");
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(generate_path(dir, "png")));
        }
    }

    #[test]
    fn generate_does_not_touch_the_filesystem() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("never_created");
        let path = generate_path(&missing, "jpg");
        assert!(!missing.exists());
        assert!(!path.exists());
    }

    #[test]
    fn cache_dir_is_nonempty_and_stable() {
        let first = cache_dir();
        assert!(!first.as_os_str().is_empty());
        assert_eq!(cache_dir(), first);
    }
}
