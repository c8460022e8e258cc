// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// schnittwerk-editor — Image cropping for Schnittwerk.
//
// Provides source resolution (paths, file:// and data: URIs), clamped region
// cropping with display-size fitting, JPEG/PNG/WebP encoding, and the
// `ImageEditor` facade that stages results in the cache directory.

pub mod codec;
pub mod crop;
pub mod editor;
pub mod source;

// Re-export the primary entry points so callers can use `schnittwerk_editor::ImageEditor`.
pub use editor::ImageEditor;
pub use source::ImageSource;
