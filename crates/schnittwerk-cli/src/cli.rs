// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// CLI argument parsing with clap.

use std::path::PathBuf;

use clap::Parser;

use schnittwerk_core::types::{CropData, CropOffset, CropSize, OutputFormat, ResizeMode};

/// Crop an image and stage the result in the cache directory.
#[derive(Parser, Debug)]
#[command(name = "schnittwerk", version, about)]
pub struct Cli {
    /// Source image: a filesystem path, file:// URI, or base64 data: URI.
    pub source: String,

    /// Left edge of the crop rectangle, in source pixels.
    #[arg(short, long)]
    pub x: f64,

    /// Top edge of the crop rectangle, in source pixels.
    #[arg(short, long)]
    pub y: f64,

    /// Width of the crop rectangle, in source pixels.
    #[arg(short = 'W', long)]
    pub width: f64,

    /// Height of the crop rectangle, in source pixels.
    #[arg(short = 'H', long)]
    pub height: f64,

    /// Width to scale the output to (needs --display-height).
    #[arg(long, requires = "display_height")]
    pub display_width: Option<f64>,

    /// Height to scale the output to (needs --display-width).
    #[arg(long, requires = "display_width")]
    pub display_height: Option<f64>,

    /// Fit strategy for the display size: contain, cover, stretch, center.
    #[arg(short, long, default_value = "cover")]
    pub resize_mode: ResizeMode,

    /// Output format: jpeg, png, webp. Defaults to the source's own format.
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// JPEG quality from 0 to 1.
    #[arg(short, long)]
    pub quality: Option<f32>,

    /// Include the encoded image as base64 in the JSON result.
    #[arg(long)]
    pub base64: bool,

    /// Stage the result in this directory instead of the cache directory.
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Assemble the crop parameters from the parsed flags.
    pub fn crop_data(&self) -> CropData {
        let mut data = CropData::new(
            CropOffset { x: self.x, y: self.y },
            CropSize { width: self.width, height: self.height },
        );
        if let (Some(width), Some(height)) = (self.display_width, self.display_height) {
            data.display_size = Some(CropSize { width, height });
        }
        data.resize_mode = self.resize_mode;
        data.format = self.format;
        data.quality = self.quality;
        data.include_base64 = self.base64;
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_invocation_parses() {
        let cli = Cli::parse_from([
            "schnittwerk", "photo.jpg", "-x", "10", "-y", "20", "-W", "300", "-H", "200",
        ]);
        let data = cli.crop_data();
        assert_eq!(data.offset.x, 10.0);
        assert_eq!(data.size.width, 300.0);
        assert!(data.display_size.is_none());
        assert_eq!(data.resize_mode, ResizeMode::Cover);
        assert!(data.quality.is_none());
    }

    #[test]
    fn display_size_and_mode_parse_together() {
        let cli = Cli::parse_from([
            "schnittwerk", "photo.jpg", "-x", "0", "-y", "0", "-W", "100", "-H", "100",
            "--display-width", "50", "--display-height", "40",
            "--resize-mode", "contain", "--format", "png",
        ]);
        let data = cli.crop_data();
        let display = data.display_size.unwrap();
        assert_eq!((display.width, display.height), (50.0, 40.0));
        assert_eq!(data.resize_mode, ResizeMode::Contain);
        assert_eq!(data.format, Some(OutputFormat::Png));
    }

    #[test]
    fn display_width_alone_is_rejected() {
        let result = Cli::try_parse_from([
            "schnittwerk", "photo.jpg", "-x", "0", "-y", "0", "-W", "100", "-H", "100",
            "--display-width", "50",
        ]);
        assert!(result.is_err());
    }
}
