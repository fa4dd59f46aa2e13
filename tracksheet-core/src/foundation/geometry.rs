use image::Rgb;

use crate::foundation::error::{TracksheetError, TracksheetResult};

/// Integer pixel dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PxSize {
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

impl PxSize {
    /// Construct a size from width and height.
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
}

/// Horizontal/vertical padding applied around a pasted element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PxMargin {
    /// Horizontal padding in pixels.
    pub x: u32,
    /// Vertical padding in pixels.
    pub y: u32,
}

/// Immutable per-run layout configuration, shared read-only by both builders.
///
/// Every fixed dimension and padding of the output lives here; derived
/// geometry (row size, header strip size) is exposed as methods so the
/// arithmetic has a single source of truth.
#[derive(Clone, Debug)]
pub struct LayoutConstants {
    /// Rendered avatar size in the header.
    pub icon_size: PxSize,
    /// Padding around the avatar.
    pub icon_margin: PxMargin,
    /// Rendered album artwork size per row.
    pub artwork_size: PxSize,
    /// Padding around the artwork; also spaces the bar and text columns.
    pub artwork_margin: PxMargin,
    /// Mean-color swatch bar size.
    pub bar_size: PxSize,
    /// Maximum pixel width of a row's text column before wrapping.
    pub text_area_max_width: u32,
    /// Pixel size of the header label.
    pub header_font_px: f32,
    /// Pixel size of a row's title line.
    pub title_font_px: f32,
    /// Pixel size of a row's artist/album line.
    pub detail_font_px: f32,
    /// Widest expected username character; bounds the header label area.
    pub header_reserve_char: char,
    /// How many reserve characters the header label area must fit.
    pub header_reserve_len: usize,
    /// Canvas background color.
    pub background: Rgb<u8>,
    /// Text and label color.
    pub text_color: Rgb<u8>,
    /// Preferred font family names, tried in order before generic fallbacks.
    pub font_families: Vec<String>,
    /// Audio file extension matched during the directory scan (no dot).
    pub audio_extension: String,
    /// File name of the rendered summary, written into the music directory.
    pub output_file_name: String,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            icon_size: PxSize::new(256, 256),
            icon_margin: PxMargin { x: 25, y: 25 },
            artwork_size: PxSize::new(384, 384),
            artwork_margin: PxMargin { x: 25, y: 25 },
            bar_size: PxSize::new(25, 384),
            text_area_max_width: 1024 * 3,
            header_font_px: 64.0,
            title_font_px: 104.0,
            detail_font_px: 72.0,
            header_reserve_char: 'W',
            header_reserve_len: 15,
            background: Rgb([255, 255, 255]),
            text_color: Rgb([0, 0, 0]),
            font_families: vec![
                "Meiryo".to_string(),
                "Noto Sans CJK JP".to_string(),
                "DejaVu Sans".to_string(),
            ],
            audio_extension: "m4a".to_string(),
            output_file_name: "summary.png".to_string(),
        }
    }
}

impl LayoutConstants {
    /// Fixed size of one track row, identical for every track.
    ///
    /// Width spans artwork, bar, and text column with their paddings; height
    /// is the artwork plus its vertical padding. Content never resizes a row.
    pub fn row_size(&self) -> PxSize {
        PxSize::new(
            self.artwork_size.w
                + 4 * self.artwork_margin.x
                + self.bar_size.w
                + self.text_area_max_width,
            self.artwork_size.h + 2 * self.artwork_margin.y,
        )
    }

    /// Fixed height of the header strip.
    pub fn header_height(&self) -> u32 {
        self.icon_size.h + 2 * self.icon_margin.y
    }

    /// Header strip width for a measured `username_max_width` label bound.
    pub fn header_width(&self, username_max_width: u32) -> u32 {
        self.icon_size.w + 3 * self.icon_margin.x + username_max_width
    }

    /// The label used to bound the header width: "@" followed by
    /// `header_reserve_len` copies of the widest expected character.
    pub fn header_reserve_sample(&self) -> String {
        let mut sample = String::with_capacity(1 + self.header_reserve_len);
        sample.push('@');
        for _ in 0..self.header_reserve_len {
            sample.push(self.header_reserve_char);
        }
        sample
    }

    /// Reject configurations that cannot produce a well-formed layout.
    pub fn validate(&self) -> TracksheetResult<()> {
        if self.icon_size.w == 0 || self.icon_size.h == 0 {
            return Err(TracksheetError::validation("icon size must be > 0"));
        }
        if self.artwork_size.w == 0 || self.artwork_size.h == 0 {
            return Err(TracksheetError::validation("artwork size must be > 0"));
        }
        if self.bar_size.w == 0 || self.bar_size.h == 0 {
            return Err(TracksheetError::validation("bar size must be > 0"));
        }
        if self.text_area_max_width == 0 {
            return Err(TracksheetError::validation("text area width must be > 0"));
        }
        if self.header_font_px <= 0.0 || self.title_font_px <= 0.0 || self.detail_font_px <= 0.0 {
            return Err(TracksheetError::validation("font sizes must be > 0"));
        }
        if self.header_reserve_len == 0 {
            return Err(TracksheetError::validation("header reserve length must be > 0"));
        }
        if self.audio_extension.is_empty() {
            return Err(TracksheetError::validation("audio extension must be non-empty"));
        }
        if self.output_file_name.is_empty() {
            return Err(TracksheetError::validation("output file name must be non-empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geometry.rs"]
mod tests;
