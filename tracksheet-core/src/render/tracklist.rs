use std::path::Path;

use crate::assets::artwork;
use crate::assets::fonts::SummaryFont;
use crate::foundation::error::TracksheetResult;
use crate::foundation::geometry::{LayoutConstants, PxSize};
use crate::layout::wrap::{self, CONTINUATION_PREFIX};
use crate::metadata::scan::scan_music_dir;
use crate::metadata::tags::TrackTags;
use crate::render::canvas::Canvas;
use crate::render::text;

/// Renders one fixed-size row per matched track and stacks them vertically
/// into one tall canvas.
pub struct TrackListBuilder<'a> {
    constants: &'a LayoutConstants,
    font: &'a SummaryFont,
}

impl<'a> TrackListBuilder<'a> {
    /// Create a builder borrowing the shared layout configuration and font.
    pub fn new(constants: &'a LayoutConstants, font: &'a SummaryFont) -> Self {
        Self { constants, font }
    }

    /// Render every matching file in `music_dir`, one row per file, in
    /// filesystem enumeration order.
    ///
    /// The aggregate canvas is always `row_width` wide and exactly
    /// `row_height * N` tall; zero matches produce a valid empty canvas. The
    /// first unreadable file aborts the whole build.
    pub fn build(&self, music_dir: &Path) -> TracksheetResult<Canvas> {
        let c = self.constants;
        let files = scan_music_dir(music_dir, &c.audio_extension)?;
        let row = c.row_size();
        let mut canvas = Canvas::new(
            PxSize::new(row.w, row.h * files.len() as u32),
            c.background,
        );

        for (index, file) in files.iter().enumerate() {
            let tags = TrackTags::read(file)?;
            tracing::debug!(file = %file.display(), title = %tags.title, "rendering track row");
            let row_canvas = self.build_row(&tags)?;
            canvas.paste(&row_canvas, 0, i64::from(row.h) * index as i64);
        }
        Ok(canvas)
    }

    /// Render a single track row: artwork, mean-color bar, title line, and
    /// the (possibly wrapped) artist/album line.
    pub fn build_row(&self, tags: &TrackTags) -> TracksheetResult<Canvas> {
        let c = self.constants;
        let mut row = Canvas::new(c.row_size(), c.background);

        let artwork = match &tags.artwork {
            Some(bytes) => artwork::decode_artwork(bytes, c.artwork_size)?,
            None => artwork::placeholder_artwork(c.artwork_size)?,
        };
        row.paste_image(
            &artwork,
            i64::from(c.artwork_margin.x),
            i64::from(c.artwork_margin.y),
        );

        let bar_color = artwork::mean_color(&artwork);
        row.fill_rect(
            i64::from(c.artwork_size.w + 2 * c.artwork_margin.x),
            i64::from(c.artwork_margin.y),
            c.bar_size,
            bar_color,
        );

        let text_x = i64::from(c.artwork_size.w + 3 * c.artwork_margin.x + c.bar_size.w);
        let title_size = self.font.measure(&tags.title, c.title_font_px);
        text::draw_text(
            &mut row,
            self.font,
            c.title_font_px,
            text_x,
            i64::from(2 * c.artwork_margin.y),
            c.text_color,
            &tags.title,
        );

        let detail = format!("{CONTINUATION_PREFIX}{} / {}", tags.artist, tags.album);
        let detail = wrap::wrap_midpoint(self.font, c.detail_font_px, &detail, c.text_area_max_width);
        text::draw_text(
            &mut row,
            self.font,
            c.detail_font_px,
            text_x,
            i64::from(4 * c.artwork_margin.y + title_size.h),
            c.text_color,
            &detail,
        );

        Ok(row)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/tracklist.rs"]
mod tests;
