// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Crop geometry — region clamping and display-size fitting.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

use schnittwerk_core::error::{Result, SchnittwerkError};
use schnittwerk_core::types::{CropData, CropOffset, CropSize, ResizeMode};

/// An integer pixel rectangle inside a source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Crop `img` according to `data`, applying display-size fitting when
/// requested.
pub fn apply(img: &DynamicImage, data: &CropData) -> Result<DynamicImage> {
    let rect = resolve_rect(img.width(), img.height(), data.offset, data.size)?;

    let Some(display) = data.display_size else {
        debug!(?rect, "plain region crop");
        return Ok(img.crop_imm(rect.x, rect.y, rect.width, rect.height));
    };

    let (target_w, target_h) = round_display(display)?;
    debug!(?rect, target_w, target_h, mode = ?data.resize_mode, "crop with display fitting");

    let out = match data.resize_mode {
        ResizeMode::Stretch => img
            .crop_imm(rect.x, rect.y, rect.width, rect.height)
            .resize_exact(target_w, target_h, FilterType::Lanczos3),
        ResizeMode::Contain => img
            .crop_imm(rect.x, rect.y, rect.width, rect.height)
            .resize(target_w, target_h, FilterType::Lanczos3),
        ResizeMode::Center => {
            let cropped = img.crop_imm(rect.x, rect.y, rect.width, rect.height);
            // Never upscale: a region already smaller than the display is
            // returned as-is.
            if cropped.width() <= target_w && cropped.height() <= target_h {
                cropped
            } else {
                cropped.resize(target_w, target_h, FilterType::Lanczos3)
            }
        }
        ResizeMode::Cover => {
            let adjusted = cover_rect(rect, target_w, target_h);
            img.crop_imm(adjusted.x, adjusted.y, adjusted.width, adjusted.height)
                .resize_exact(target_w, target_h, FilterType::Lanczos3)
        }
    };
    Ok(out)
}

/// Round and validate the crop rectangle against the image bounds.
///
/// The rectangle is clamped to the image; a rectangle that lies entirely
/// outside the image or rounds to zero pixels is an error.
pub(crate) fn resolve_rect(
    img_w: u32,
    img_h: u32,
    offset: CropOffset,
    size: CropSize,
) -> Result<Rect> {
    if !offset.x.is_finite() || !offset.y.is_finite() {
        return Err(SchnittwerkError::InvalidCrop("offset is not finite".into()));
    }
    if !(size.width.is_finite() && size.width > 0.0)
        || !(size.height.is_finite() && size.height > 0.0)
    {
        return Err(SchnittwerkError::InvalidCrop(
            "crop size must be positive".into(),
        ));
    }
    if offset.x >= f64::from(img_w) || offset.y >= f64::from(img_h) {
        return Err(SchnittwerkError::InvalidCrop(format!(
            "offset ({}, {}) lies outside the {}x{} image",
            offset.x, offset.y, img_w, img_h
        )));
    }

    let left = offset.x.round().max(0.0);
    let top = offset.y.round().max(0.0);
    let right = (offset.x + size.width).round().min(f64::from(img_w));
    let bottom = (offset.y + size.height).round().min(f64::from(img_h));

    let width = (right - left).max(0.0) as u32;
    let height = (bottom - top).max(0.0) as u32;
    if width == 0 || height == 0 {
        return Err(SchnittwerkError::InvalidCrop(
            "crop rectangle covers no pixels".into(),
        ));
    }

    Ok(Rect {
        x: left as u32,
        y: top as u32,
        width,
        height,
    })
}

/// Shrink `rect` about its centre to the aspect ratio of the target size.
///
/// The adjusted rectangle, scaled to exactly `target_w` x `target_h`, shows
/// the centre of the requested region with no distortion.
pub(crate) fn cover_rect(rect: Rect, target_w: u32, target_h: u32) -> Rect {
    let w = f64::from(rect.width);
    let h = f64::from(rect.height);
    let crop_ratio = w / h;
    let target_ratio = f64::from(target_w) / f64::from(target_h);

    let (new_w, new_h, new_x, new_y) = if crop_ratio > target_ratio {
        let new_w = h * target_ratio;
        (new_w, h, f64::from(rect.x) + (w - new_w) / 2.0, f64::from(rect.y))
    } else {
        let new_h = w / target_ratio;
        (w, new_h, f64::from(rect.x), f64::from(rect.y) + (h - new_h) / 2.0)
    };

    Rect {
        x: new_x.round() as u32,
        y: new_y.round() as u32,
        width: (new_w.round() as u32).max(1),
        height: (new_h.round() as u32).max(1),
    }
}

fn round_display(display: CropSize) -> Result<(u32, u32)> {
    let w = display.width.round();
    let h = display.height.round();
    if !(w.is_finite() && w >= 1.0) || !(h.is_finite() && h >= 1.0) {
        return Err(SchnittwerkError::InvalidCrop(
            "display size must be positive".into(),
        ));
    }
    Ok((w as u32, h as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn offset(x: f64, y: f64) -> CropOffset {
        CropOffset { x, y }
    }

    fn size(width: f64, height: f64) -> CropSize {
        CropSize { width, height }
    }

    fn test_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, _| {
            image::Rgba([(x % 256) as u8, 0, 0, 255])
        }))
    }

    #[test]
    fn rect_inside_bounds_is_unchanged() {
        let rect = resolve_rect(100, 80, offset(10.0, 20.0), size(30.0, 40.0)).unwrap();
        assert_eq!(rect, Rect { x: 10, y: 20, width: 30, height: 40 });
    }

    #[test]
    fn rect_is_clamped_to_image_edges() {
        let rect = resolve_rect(100, 80, offset(90.0, 70.0), size(50.0, 50.0)).unwrap();
        assert_eq!(rect, Rect { x: 90, y: 70, width: 10, height: 10 });
    }

    #[test]
    fn negative_offset_is_clamped_to_zero() {
        let rect = resolve_rect(100, 80, offset(-10.0, -5.0), size(30.0, 30.0)).unwrap();
        assert_eq!(rect, Rect { x: 0, y: 0, width: 20, height: 25 });
    }

    #[test]
    fn offset_outside_image_is_rejected() {
        let err = resolve_rect(100, 80, offset(100.0, 0.0), size(10.0, 10.0)).unwrap_err();
        assert!(matches!(err, SchnittwerkError::InvalidCrop(_)));
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = resolve_rect(100, 80, offset(0.0, 0.0), size(0.0, 10.0)).unwrap_err();
        assert!(matches!(err, SchnittwerkError::InvalidCrop(_)));
    }

    #[test]
    fn fractional_inputs_round_to_pixels() {
        let rect = resolve_rect(100, 80, offset(9.6, 10.4), size(20.2, 19.8)).unwrap();
        assert_eq!(rect, Rect { x: 10, y: 10, width: 20, height: 20 });
    }

    #[test]
    fn cover_rect_trims_a_wide_region_horizontally() {
        let rect = Rect { x: 0, y: 0, width: 100, height: 50 };
        assert_eq!(
            cover_rect(rect, 50, 50),
            Rect { x: 25, y: 0, width: 50, height: 50 }
        );
    }

    #[test]
    fn cover_rect_trims_a_tall_region_vertically() {
        let rect = Rect { x: 10, y: 0, width: 50, height: 100 };
        assert_eq!(
            cover_rect(rect, 50, 50),
            Rect { x: 10, y: 25, width: 50, height: 50 }
        );
    }

    #[test]
    fn plain_crop_has_region_dimensions() {
        let img = test_image(100, 80);
        let data = CropData::new(offset(10.0, 10.0), size(40.0, 30.0));
        let out = apply(&img, &data).unwrap();
        assert_eq!((out.width(), out.height()), (40, 30));
    }

    #[test]
    fn stretch_matches_display_exactly() {
        let img = test_image(100, 80);
        let mut data = CropData::new(offset(0.0, 0.0), size(100.0, 80.0));
        data.display_size = Some(size(37.0, 53.0));
        data.resize_mode = ResizeMode::Stretch;
        let out = apply(&img, &data).unwrap();
        assert_eq!((out.width(), out.height()), (37, 53));
    }

    #[test]
    fn cover_matches_display_exactly() {
        let img = test_image(100, 80);
        let mut data = CropData::new(offset(0.0, 0.0), size(100.0, 50.0));
        data.display_size = Some(size(40.0, 40.0));
        data.resize_mode = ResizeMode::Cover;
        let out = apply(&img, &data).unwrap();
        assert_eq!((out.width(), out.height()), (40, 40));
    }

    #[test]
    fn contain_preserves_aspect_within_display() {
        let img = test_image(100, 80);
        let mut data = CropData::new(offset(0.0, 0.0), size(100.0, 50.0));
        data.display_size = Some(size(40.0, 40.0));
        data.resize_mode = ResizeMode::Contain;
        let out = apply(&img, &data).unwrap();
        // 100x50 into 40x40 keeps the 2:1 ratio.
        assert_eq!((out.width(), out.height()), (40, 20));
    }

    #[test]
    fn center_never_upscales() {
        let img = test_image(100, 80);
        let mut data = CropData::new(offset(0.0, 0.0), size(20.0, 10.0));
        data.display_size = Some(size(200.0, 200.0));
        data.resize_mode = ResizeMode::Center;
        let out = apply(&img, &data).unwrap();
        assert_eq!((out.width(), out.height()), (20, 10));
    }

    #[test]
    fn center_downscales_like_contain() {
        let img = test_image(100, 80);
        let mut data = CropData::new(offset(0.0, 0.0), size(100.0, 50.0));
        data.display_size = Some(size(40.0, 40.0));
        data.resize_mode = ResizeMode::Center;
        let out = apply(&img, &data).unwrap();
        assert_eq!((out.width(), out.height()), (40, 20));
    }
}
