// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Decode and encode staged image formats.

use image::{DynamicImage, ImageFormat};

use schnittwerk_core::error::{Result, SchnittwerkError};
use schnittwerk_core::types::OutputFormat;

/// Decode encoded image bytes, also reporting the sniffed source format when
/// it is one the editor can write back.
///
/// Detection is content-based (magic bytes), matching what the bytes actually
/// are rather than what a file name claims.
pub fn decode(bytes: &[u8]) -> Result<(DynamicImage, Option<OutputFormat>)> {
    let sniffed = image::guess_format(bytes).ok().and_then(writable_format);
    let img = image::load_from_memory(bytes)
        .map_err(|err| SchnittwerkError::Decode(err.to_string()))?;
    Ok((img, sniffed))
}

/// Pick the output format: the caller's explicit choice, else the source's
/// own format, else JPEG.
pub fn select_format(
    requested: Option<OutputFormat>,
    source: Option<OutputFormat>,
) -> OutputFormat {
    requested.or(source).unwrap_or(OutputFormat::Jpeg)
}

/// Encode `img` in the given format.
///
/// `quality` (0.0–1.0) applies to JPEG only; PNG is always lossless and the
/// `image` crate's WebP encoder is lossless-only.
pub fn encode(img: &DynamicImage, format: OutputFormat, quality: f32) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    match format {
        OutputFormat::Jpeg => {
            let rgb = img.to_rgb8();
            let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(
                &mut buffer,
                jpeg_quality(quality),
            );
            rgb.write_with_encoder(encoder)
                .map_err(|err| SchnittwerkError::Encode(format!("JPEG encoding failed: {err}")))?;
        }
        OutputFormat::Png => {
            let mut cursor = std::io::Cursor::new(&mut buffer);
            img.write_to(&mut cursor, ImageFormat::Png)
                .map_err(|err| SchnittwerkError::Encode(format!("PNG encoding failed: {err}")))?;
        }
        OutputFormat::WebP => {
            // The WebP encoder accepts RGB8/RGBA8 input only.
            let rgba = DynamicImage::ImageRgba8(img.to_rgba8());
            let mut cursor = std::io::Cursor::new(&mut buffer);
            rgba.write_to(&mut cursor, ImageFormat::WebP)
                .map_err(|err| SchnittwerkError::Encode(format!("WebP encoding failed: {err}")))?;
        }
    }
    Ok(buffer)
}

/// Map the `image` crate's detected format to an encoding the editor writes.
fn writable_format(format: ImageFormat) -> Option<OutputFormat> {
    match format {
        ImageFormat::Jpeg => Some(OutputFormat::Jpeg),
        ImageFormat::Png => Some(OutputFormat::Png),
        ImageFormat::WebP => Some(OutputFormat::WebP),
        _ => None,
    }
}

/// Convert a 0.0–1.0 quality to the encoder's 1–100 scale.
fn jpeg_quality(quality: f32) -> u8 {
    ((quality * 100.0).round() as u8).clamp(1, 100)
}
