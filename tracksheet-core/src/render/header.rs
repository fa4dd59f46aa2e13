use std::path::Path;

use image::imageops::{self, FilterType};

use crate::assets::fonts::SummaryFont;
use crate::foundation::error::{TracksheetError, TracksheetResult};
use crate::foundation::geometry::{LayoutConstants, PxSize};
use crate::render::canvas::Canvas;
use crate::render::text;

/// Lays out the avatar and "@username" label into one fixed-height strip.
pub struct HeaderBuilder<'a> {
    constants: &'a LayoutConstants,
    font: &'a SummaryFont,
}

impl<'a> HeaderBuilder<'a> {
    /// Create a builder borrowing the shared layout configuration and font.
    pub fn new(constants: &'a LayoutConstants, font: &'a SummaryFont) -> Self {
        Self { constants, font }
    }

    /// Pixel width reserved for the label.
    ///
    /// Measured from the reserve sample, so the header width is the same for
    /// every username; labels wider than this bound overflow visually rather
    /// than growing the strip.
    pub fn username_max_width(&self) -> u32 {
        self.font
            .measure(
                &self.constants.header_reserve_sample(),
                self.constants.header_font_px,
            )
            .w
    }

    /// Render the header strip.
    ///
    /// An unreadable icon is a [`TracksheetError::Resource`]; it propagates
    /// and aborts the run.
    pub fn build(&self, username: &str, icon_path: &Path) -> TracksheetResult<Canvas> {
        let c = self.constants;
        let size = PxSize::new(c.header_width(self.username_max_width()), c.header_height());
        let mut canvas = Canvas::new(size, c.background);

        let icon = image::open(icon_path).map_err(|err| {
            TracksheetError::resource(format!(
                "icon '{}' is unreadable: {err}",
                icon_path.display()
            ))
        })?;
        let icon = imageops::resize(
            &icon.to_rgb8(),
            c.icon_size.w,
            c.icon_size.h,
            FilterType::Lanczos3,
        );
        canvas.paste_image(&icon, i64::from(c.icon_margin.x), i64::from(c.icon_margin.y));

        let label = format!("@{username}");
        let label_size = self.font.measure(&label, c.header_font_px);
        let label_x = i64::from(c.icon_size.w + 2 * c.icon_margin.x);
        let label_y = i64::from(c.icon_margin.y) + i64::from(c.icon_size.h) / 2
            - i64::from(label_size.h) / 2;
        text::draw_text(
            &mut canvas,
            self.font,
            c.header_font_px,
            label_x,
            label_y,
            c.text_color,
            &label,
        );

        tracing::debug!(username, width = canvas.width(), "rendered header strip");
        Ok(canvas)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/header.rs"]
mod tests;
