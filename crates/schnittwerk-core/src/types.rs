// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Schnittwerk image editor.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-left corner of the crop rectangle, in source-image pixel coordinates.
///
/// Accepted as floating point (callers often forward values straight from
/// touch/gesture handlers) and rounded to whole pixels when the crop runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropOffset {
    pub x: f64,
    pub y: f64,
}

/// Width and height of a rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropSize {
    pub width: f64,
    pub height: f64,
}

/// How the cropped region is fitted when a display size is requested.
///
/// Has no effect unless `CropData::display_size` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    /// Scale to fit within the display size, preserving aspect ratio.
    Contain,
    /// Shrink the crop rectangle about its centre to the display aspect
    /// ratio, then scale to exactly the display size.
    #[default]
    Cover,
    /// Scale to exactly the display size, ignoring aspect ratio.
    Stretch,
    /// Like `Contain`, but never upscale beyond the cropped region's own size.
    Center,
}

impl std::str::FromStr for ResizeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "contain" => Ok(Self::Contain),
            "cover" => Ok(Self::Cover),
            "stretch" => Ok(Self::Stretch),
            "center" => Ok(Self::Center),
            other => Err(format!("unknown resize mode: {other}")),
        }
    }
}

/// Output image encodings the editor can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
}

impl OutputFormat {
    /// MIME type string reported in crop results.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::WebP => "image/webp",
        }
    }

    /// File extension (without the dot) used for staged files.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::WebP => "webp",
        }
    }

    /// Infer output format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "webp" => Some(Self::WebP),
            _ => None,
        }
    }

    /// Infer output format from a MIME type (e.g. from a data URI header).
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/webp" => Some(Self::WebP),
            _ => None,
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "webp" => Ok(Self::WebP),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Parameters for a single crop operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropData {
    /// Top-left corner of the crop rectangle in the source image.
    pub offset: CropOffset,
    /// Size of the crop rectangle in the source image.
    pub size: CropSize,
    /// Optional size to scale the cropped image to.
    #[serde(default)]
    pub display_size: Option<CropSize>,
    /// Fit strategy when `display_size` is given.
    #[serde(default)]
    pub resize_mode: ResizeMode,
    /// JPEG compression quality, 0.0–1.0. Falls back to the editor's
    /// configured default when absent.
    #[serde(default)]
    pub quality: Option<f32>,
    /// Output encoding. When absent the source format is kept, with JPEG as
    /// the fallback for formats the editor cannot write.
    #[serde(default)]
    pub format: Option<OutputFormat>,
    /// Include the encoded output as a base64 string in the result.
    #[serde(default)]
    pub include_base64: bool,
}

impl CropData {
    /// Crop the given rectangle with default quality, format, and fitting.
    pub fn new(offset: CropOffset, size: CropSize) -> Self {
        Self {
            offset,
            size,
            display_size: None,
            resize_mode: ResizeMode::default(),
            quality: None,
            format: None,
            include_base64: false,
        }
    }
}

/// Result of a successful crop: the staged output file plus its metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CroppedImage {
    /// Filesystem path of the staged image.
    pub path: PathBuf,
    /// `file://` URI for the staged image.
    pub uri: String,
    /// File name component of `path`.
    pub name: String,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Encoded size in bytes.
    pub size: u64,
    /// MIME type of the output (e.g. "image/jpeg").
    #[serde(rename = "type")]
    pub mime: String,
    /// Base64 of the encoded bytes, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_mime_round_trip() {
        for format in [OutputFormat::Jpeg, OutputFormat::Png, OutputFormat::WebP] {
            assert_eq!(OutputFormat::from_mime(format.mime_type()), Some(format));
        }
    }

    #[test]
    fn output_format_from_extension_aliases() {
        assert_eq!(OutputFormat::from_extension("jpeg"), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::from_extension("JPG"), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::from_extension("tiff"), None);
    }

    #[test]
    fn resize_mode_defaults_to_cover() {
        assert_eq!(ResizeMode::default(), ResizeMode::Cover);
    }

    #[test]
    fn crop_data_deserializes_with_defaults() {
        let json = r#"{"offset":{"x":10,"y":20},"size":{"width":100,"height":50}}"#;
        let data: CropData = serde_json::from_str(json).unwrap();
        assert_eq!(data.offset.x, 10.0);
        assert_eq!(data.size.height, 50.0);
        assert!(data.display_size.is_none());
        assert_eq!(data.resize_mode, ResizeMode::Cover);
        assert!(data.quality.is_none());
        assert!(data.format.is_none());
        assert!(!data.include_base64);
    }

    #[test]
    fn cropped_image_serializes_mime_as_type() {
        let result = CroppedImage {
            path: PathBuf::from("/tmp/out.jpg"),
            uri: "file:///tmp/out.jpg".into(),
            name: "out.jpg".into(),
            width: 10,
            height: 20,
            size: 1234,
            mime: "image/jpeg".into(),
            base64: None,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""type":"image/jpeg""#));
        assert!(!json.contains("base64"));
    }
}
