use anyhow::Context as _;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

use crate::foundation::error::TracksheetResult;
use crate::foundation::geometry::PxSize;

/// Fallback artwork compiled into the binary, used for tracks without an
/// embedded cover.
pub const PLACEHOLDER_ARTWORK: &[u8] = include_bytes!("../../resources/no_artwork.png");

/// Decode encoded artwork bytes and resize them to `size` with Lanczos3.
pub fn decode_artwork(bytes: &[u8], size: PxSize) -> TracksheetResult<RgbImage> {
    let image = image::load_from_memory(bytes).context("decode artwork bytes")?;
    Ok(imageops::resize(
        &image.to_rgb8(),
        size.w,
        size.h,
        FilterType::Lanczos3,
    ))
}

/// Decode the embedded placeholder artwork at `size`.
pub fn placeholder_artwork(size: PxSize) -> TracksheetResult<RgbImage> {
    decode_artwork(PLACEHOLDER_ARTWORK, size)
}

/// Per-channel arithmetic mean over all pixels, truncated to 0-255.
///
/// An empty image yields black; callers never pass one since artwork is
/// always resized to a fixed non-zero size first.
pub fn mean_color(image: &RgbImage) -> Rgb<u8> {
    let pixel_count = u64::from(image.width()) * u64::from(image.height());
    if pixel_count == 0 {
        return Rgb([0, 0, 0]);
    }
    let mut sums = [0u64; 3];
    for pixel in image.pixels() {
        for (sum, channel) in sums.iter_mut().zip(pixel.0) {
            *sum += u64::from(channel);
        }
    }
    Rgb([
        (sums[0] / pixel_count) as u8,
        (sums[1] / pixel_count) as u8,
        (sums[2] / pixel_count) as u8,
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/assets/artwork.rs"]
mod tests;
