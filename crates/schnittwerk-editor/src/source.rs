// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image source resolution — plain paths, file:// URIs, and data: URIs.

use std::path::PathBuf;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use schnittwerk_core::error::{Result, SchnittwerkError};
use schnittwerk_core::types::OutputFormat;

/// Where the bytes of a source image come from.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// A file on the local filesystem.
    File(PathBuf),
    /// Bytes carried inline by a `data:` URI.
    Data {
        /// MIME type declared in the URI header, if any.
        mime: Option<String>,
        bytes: Vec<u8>,
    },
}

impl ImageSource {
    /// Resolve a source string to its backing location.
    ///
    /// Accepts plain filesystem paths, `file://` URIs, and base64 `data:`
    /// URIs. Remote URLs are rejected — downloading is the caller's job.
    pub fn parse(uri: &str) -> Result<Self> {
        if uri.is_empty() {
            return Err(SchnittwerkError::InvalidSource(
                "empty source string".into(),
            ));
        }
        if let Some(rest) = uri.strip_prefix("data:") {
            return parse_data_uri(rest);
        }
        if uri.starts_with("http://") || uri.starts_with("https://") {
            return Err(SchnittwerkError::InvalidSource(
                "remote image URLs are not supported; download the image first".into(),
            ));
        }
        if let Some(path) = uri.strip_prefix("file://") {
            return Ok(Self::File(PathBuf::from(path)));
        }
        Ok(Self::File(PathBuf::from(uri)))
    }

    /// Read the full image bytes.
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            Self::File(path) => Ok(std::fs::read(path)?),
            Self::Data { bytes, .. } => Ok(bytes.clone()),
        }
    }

    /// Output format declared by the source itself (data-URI MIME header).
    pub fn declared_format(&self) -> Option<OutputFormat> {
        match self {
            Self::File(_) => None,
            Self::Data { mime, .. } => mime.as_deref().and_then(OutputFormat::from_mime),
        }
    }
}

/// Parse the remainder of a `data:` URI: `[<mediatype>][;base64],<data>`.
fn parse_data_uri(rest: &str) -> Result<ImageSource> {
    let (header, payload) = rest.split_once(',').ok_or_else(|| {
        SchnittwerkError::InvalidSource("data URI has no comma separator".into())
    })?;

    if !header.ends_with(";base64") {
        return Err(SchnittwerkError::InvalidSource(
            "only base64 data URIs are supported".into(),
        ));
    }

    let mime = header.trim_end_matches(";base64");
    let mime = (!mime.is_empty()).then(|| mime.to_string());

    let bytes = BASE64
        .decode(payload.as_bytes())
        .map_err(|err| SchnittwerkError::InvalidSource(format!("bad base64 payload: {err}")))?;

    Ok(ImageSource::Data { mime, bytes })
}
