// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media file loading.
//!
//! This module decodes project thumbnails into RGBA pixels suitable for
//! uploading as egui textures.

use anyhow::{Context, Result};
use std::path::Path;

/// Longest edge of a decoded thumbnail, in pixels.
pub const THUMBNAIL_MAX_EDGE: u32 = 640;

/// A decoded image ready for `egui::ColorImage::from_rgba_unmultiplied`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl LoadedImage {
    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }
}

/// Load an image file, shrinking it so neither edge exceeds `max_edge`.
pub fn load_image(path: &Path, max_edge: u32) -> Result<LoadedImage> {
    let img = image::open(path).with_context(|| format!("decoding {}", path.display()))?;
    let img = if img.width() > max_edge || img.height() > max_edge {
        img.thumbnail(max_edge, max_edge)
    } else {
        img
    };
    let rgba = img.to_rgba8();

    Ok(LoadedImage {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_and_shrink() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        image::RgbaImage::from_pixel(800, 400, image::Rgba([37, 99, 235, 255]))
            .save(&path)
            .unwrap();

        let loaded = load_image(&path, 200).unwrap();
        assert_eq!((loaded.width, loaded.height), (200, 100));
        assert_eq!(loaded.pixels.len(), 200 * 100 * 4);
        assert_eq!(&loaded.pixels[..4], &[37, 99, 235, 255]);
    }

    #[test]
    fn test_small_images_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.png");
        image::RgbaImage::new(16, 9).save(&path).unwrap();

        let loaded = load_image(&path, THUMBNAIL_MAX_EDGE).unwrap();
        assert_eq!(loaded.size(), [16, 9]);
    }

    #[test]
    fn test_missing_file() {
        let err = load_image(Path::new("/nonexistent/thumb.png"), 64).unwrap_err();
        assert!(err.to_string().contains("thumb.png"));
    }
}
