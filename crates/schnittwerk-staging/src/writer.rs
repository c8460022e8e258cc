// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Atomic whole-blob writes for staged images.

use std::io::Write;
use std::path::{Path, PathBuf};

use schnittwerk_core::error::{Result, SchnittwerkError};

/// Write all bytes of `blob` to `path`, replacing any existing file.
///
/// The write is atomic from the caller's perspective: bytes go to a temporary
/// file in the target's parent directory which is then renamed into place, so
/// observers see either the old content or the new content, never a partial
/// file. The parent directory must already exist (`ensure_dir_exists` is the
/// caller's job). Echoes `path` back on success.
///
/// Concurrent writers to the same path race; the rename that lands last wins.
pub fn write_image(blob: &[u8], path: &Path) -> Result<PathBuf> {
    let staged_write_err = |reason: String| SchnittwerkError::StagedWrite {
        path: path.display().to_string(),
        reason,
    };

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| staged_write_err("path has no parent directory".into()))?;
    if !parent.is_dir() {
        return Err(staged_write_err(format!(
            "parent directory {} does not exist",
            parent.display()
        )));
    }

    let mut tmp = tempfile::NamedTempFile::new_in(parent)
        .map_err(|err| staged_write_err(err.to_string()))?;
    tmp.write_all(blob)
        .map_err(|err| staged_write_err(err.to_string()))?;
    tmp.flush()
        .map_err(|err| staged_write_err(err.to_string()))?;
    tmp.persist(path)
        .map_err(|err| staged_write_err(err.error.to_string()))?;

    tracing::debug!(path = %path.display(), bytes = blob.len(), "image staged");
    Ok(path.to_path_buf())
}
