// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Staging area — a provisioned directory holding prefixed, uniquely named
// image files.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use schnittwerk_core::error::Result;

use crate::paths;

/// A directory for staged images plus the filename prefix that marks files as
/// ours.
///
/// The prefix keeps cleanup honest: `clean` only ever deletes files this
/// component generated, even when the area shares a directory with other
/// cache users.
#[derive(Debug, Clone)]
pub struct StagingArea {
    root: PathBuf,
    prefix: String,
}

impl StagingArea {
    /// Staging area rooted at an explicit directory.
    pub fn new(root: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            prefix: prefix.into(),
        }
    }

    /// Staging area under the platform cache root, in `subdir`.
    pub fn in_cache(subdir: &str, prefix: impl Into<String>) -> Self {
        Self::new(paths::cache_dir().join(subdir), prefix)
    }

    /// The directory staged files land in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Provision the root directory, creating missing parents.
    pub fn ensure(&self) -> Result<()> {
        paths::ensure_dir_exists(&self.root)?;
        Ok(())
    }

    /// A fresh unique path inside the area: `<root>/<prefix><uuid>.<extension>`.
    ///
    /// Pure path construction; nothing is created on disk.
    pub fn stage_path(&self, extension: &str) -> PathBuf {
        self.root
            .join(format!("{}{}.{}", self.prefix, Uuid::new_v4(), extension))
    }

    /// Delete leftover staged files (those carrying this area's prefix).
    ///
    /// Run at start-up to reclaim space after a crash left staged images
    /// behind. Returns the number of files removed. A missing root directory
    /// counts as nothing to clean.
    pub fn clean(&self) -> Result<usize> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(_) => return Ok(0),
        };

        let mut removed = 0;
        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if !name.starts_with(&self.prefix) {
                continue;
            }
            match std::fs::remove_file(entry.path()) {
                Ok(()) => removed += 1,
                Err(err) => {
                    tracing::warn!(
                        path = %entry.path().display(),
                        error = %err,
                        "could not remove stale staged file"
                    );
                }
            }
        }
        if removed > 0 {
            tracing::debug!(removed, root = %self.root.display(), "staging area cleaned");
        }
        Ok(removed)
    }
}
