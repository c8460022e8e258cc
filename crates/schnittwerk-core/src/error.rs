// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Schnittwerk.

use thiserror::Error;

/// Top-level error type for all Schnittwerk operations.
#[derive(Debug, Error)]
pub enum SchnittwerkError {
    // -- Editor errors --
    #[error("image decoding failed: {0}")]
    Decode(String),

    #[error("image encoding failed: {0}")]
    Encode(String),

    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid crop region: {0}")]
    InvalidCrop(String),

    #[error("quality must be between 0 and 1, got {0}")]
    InvalidQuality(f32),

    #[error("invalid image source: {0}")]
    InvalidSource(String),

    // -- Staging errors --
    #[error("could not create directory {path}: {reason}")]
    DirectoryCreation { path: String, reason: String },

    #[error("could not write staged file {path}: {reason}")]
    StagedWrite { path: String, reason: String },

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SchnittwerkError>;
