use std::path::Path;

use anyhow::Context as _;
use image::{ImageFormat, Rgb, RgbImage, imageops};

use crate::foundation::error::TracksheetResult;
use crate::foundation::geometry::PxSize;

/// A mutable RGB8 raster with a fixed background color.
///
/// A canvas is owned exclusively by the builder that created it until it is
/// pasted into a parent, after which the child is discarded.
#[derive(Clone, Debug)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a canvas of `size` filled with `background`. A zero dimension
    /// is valid and produces an empty canvas.
    pub fn new(size: PxSize, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(size.w, size.h, background),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Dimensions in pixels.
    pub fn size(&self) -> PxSize {
        PxSize::new(self.image.width(), self.image.height())
    }

    /// Paste a raster with its top-left corner at `(x, y)`; parts outside
    /// the canvas are clipped.
    pub fn paste_image(&mut self, image: &RgbImage, x: i64, y: i64) {
        imageops::overlay(&mut self.image, image, x, y);
    }

    /// Paste another canvas at `(x, y)`.
    pub fn paste(&mut self, other: &Canvas, x: i64, y: i64) {
        self.paste_image(&other.image, x, y);
    }

    /// Fill an axis-aligned rectangle, clipped to the canvas bounds.
    pub fn fill_rect(&mut self, x: i64, y: i64, size: PxSize, color: Rgb<u8>) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + i64::from(size.w)).min(i64::from(self.image.width()));
        let y1 = (y + i64::from(size.h)).min(i64::from(self.image.height()));
        for yy in y0..y1 {
            for xx in x0..x1 {
                self.image.put_pixel(xx as u32, yy as u32, color);
            }
        }
    }

    /// Borrow the underlying raster.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub(crate) fn image_mut(&mut self) -> &mut RgbImage {
        &mut self.image
    }

    /// Consume the canvas, returning the raster.
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Encode as an RGB8 PNG at `path`, overwriting any existing file.
    pub fn save_png(&self, path: &Path) -> TracksheetResult<()> {
        self.image
            .save_with_format(path, ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
