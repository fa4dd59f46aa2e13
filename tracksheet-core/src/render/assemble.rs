use std::path::{Path, PathBuf};

use image::Rgb;

use crate::foundation::error::TracksheetResult;
use crate::foundation::geometry::PxSize;
use crate::render::canvas::Canvas;

/// Stack the header (horizontally centered, integer-truncated offset) above
/// the track list.
///
/// The final width is the track list's width and the final height the sum of
/// both heights. Both inputs are consumed; the result owns the only copy.
pub fn assemble(header: Canvas, track_list: Canvas, background: Rgb<u8>) -> Canvas {
    let size = PxSize::new(track_list.width(), header.height() + track_list.height());
    let mut canvas = Canvas::new(size, background);
    let header_x = (i64::from(size.w) - i64::from(header.width())) / 2;
    canvas.paste(&header, header_x, 0);
    canvas.paste(&track_list, 0, i64::from(header.height()));
    canvas
}

/// Persist the assembled canvas as `file_name` inside `music_dir`,
/// overwriting any existing file of that name without warning.
pub fn write_summary(
    canvas: &Canvas,
    music_dir: &Path,
    file_name: &str,
) -> TracksheetResult<PathBuf> {
    let path = music_dir.join(file_name);
    canvas.save_png(&path)?;
    tracing::info!(
        path = %path.display(),
        width = canvas.width(),
        height = canvas.height(),
        "wrote summary image"
    );
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/render/assemble.rs"]
mod tests;
