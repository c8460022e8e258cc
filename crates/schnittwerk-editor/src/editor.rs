// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The ImageEditor facade — validate, decode, crop, encode, stage.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::{info, instrument, warn};

use schnittwerk_core::config::EditorConfig;
use schnittwerk_core::error::{Result, SchnittwerkError};
use schnittwerk_core::types::{CropData, CroppedImage};
use schnittwerk_staging::{StagingArea, write_image};

use crate::{codec, crop, source::ImageSource};

/// Single entry point for crop requests.
///
/// Owns the staging area cropped images land in. Results point at files in
/// that area; callers delete them when done. Construction sweeps leftovers
/// from earlier runs unless the config says otherwise.
pub struct ImageEditor {
    config: EditorConfig,
    staging: StagingArea,
}

impl ImageEditor {
    /// Editor with default configuration, staging under the platform cache
    /// directory.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// Editor staging under `<cache root>/<config.cache_subdir>`.
    pub fn with_config(config: EditorConfig) -> Self {
        let staging = StagingArea::in_cache(&config.cache_subdir, config.staging_prefix.clone());
        Self::with_staging(config, staging)
    }

    /// Editor with an explicit staging area (e.g. a caller-chosen output
    /// directory).
    pub fn with_staging(config: EditorConfig, staging: StagingArea) -> Self {
        if config.clean_on_start {
            if let Err(err) = staging.clean() {
                warn!(error = %err, "stale staged file cleanup failed");
            }
        }
        Self { config, staging }
    }

    /// The staging area results are written into.
    pub fn staging(&self) -> &StagingArea {
        &self.staging
    }

    /// Crop the image identified by `source` and stage the result.
    ///
    /// `source` may be a filesystem path, a `file://` URI, or a base64
    /// `data:` URI. The staged file's path, `file://` URI, dimensions, byte
    /// size, and MIME type come back in the result; the file itself stays in
    /// the staging area until the caller removes it.
    #[instrument(skip_all, fields(mode = ?data.resize_mode))]
    pub fn crop_image(&self, source: &str, data: &CropData) -> Result<CroppedImage> {
        let quality = data.quality.unwrap_or(self.config.default_quality);
        if !(0.0..=1.0).contains(&quality) {
            return Err(SchnittwerkError::InvalidQuality(quality));
        }

        let src = ImageSource::parse(source)?;
        let bytes = src.read()?;
        let (img, sniffed) = codec::decode(&bytes)?;
        let format = codec::select_format(data.format, sniffed.or(src.declared_format()));

        let cropped = crop::apply(&img, data)?;
        let encoded = codec::encode(&cropped, format, quality)?;

        self.staging.ensure()?;
        let path = write_image(&encoded, &self.staging.stage_path(format.extension()))?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!(
            path = %path.display(),
            width = cropped.width(),
            height = cropped.height(),
            bytes = encoded.len(),
            mime = format.mime_type(),
            "image cropped"
        );

        Ok(CroppedImage {
            uri: format!("file://{}", path.display()),
            name,
            width: cropped.width(),
            height: cropped.height(),
            size: encoded.len() as u64,
            mime: format.mime_type().to_string(),
            base64: data.include_base64.then(|| BASE64.encode(&encoded)),
            path,
        })
    }
}

impl Default for ImageEditor {
    fn default() -> Self {
        Self::new()
    }
}
