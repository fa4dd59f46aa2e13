use ab_glyph::{Font as _, FontVec, GlyphId, PxScale, ScaleFont as _};
use anyhow::Context as _;

use crate::foundation::error::{TracksheetError, TracksheetResult};
use crate::foundation::geometry::{LayoutConstants, PxSize};

/// A resolved font face used for all text measurement and drawing.
///
/// Measurement and drawing share the same advance/kerning accumulation, so a
/// measured width always matches what ends up painted.
pub struct SummaryFont {
    font: FontVec,
    family: String,
}

impl SummaryFont {
    /// Resolve a face from the system font search path.
    ///
    /// The preferred families in [`LayoutConstants::font_families`] are tried
    /// by name first, then the generic sans-serif family, then any face at
    /// all. A host with no usable face is a [`TracksheetError::Resource`].
    pub fn locate(constants: &LayoutConstants) -> TracksheetResult<Self> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        Self::from_database(&db, &constants.font_families)
    }

    /// Resolve a face from an already-populated font database.
    pub fn from_database(db: &fontdb::Database, preferred: &[String]) -> TracksheetResult<Self> {
        let face_id = select_face(db, preferred)
            .ok_or_else(|| TracksheetError::resource("no usable font face on this system"))?;
        let family = db
            .face(face_id)
            .and_then(|info| info.families.first().map(|(name, _)| name.clone()))
            .unwrap_or_default();
        let (source, index) = db
            .face_source(face_id)
            .ok_or_else(|| TracksheetError::resource("selected font face has no source"))?;
        let bytes = match source {
            fontdb::Source::Binary(data) => data.as_ref().as_ref().to_vec(),
            fontdb::Source::File(path) | fontdb::Source::SharedFile(path, _) => {
                std::fs::read(&path)
                    .with_context(|| format!("read font file '{}'", path.display()))?
            }
        };
        let font = FontVec::try_from_vec_and_index(bytes, index).map_err(|_| {
            TracksheetError::resource(format!("font face '{family}' could not be parsed"))
        })?;
        tracing::debug!(family = %family, "resolved summary font");
        Ok(Self { font, family })
    }

    /// Primary family name of the resolved face.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Measure the rendered size of a single line of `text` at `px`.
    ///
    /// Width is the kerned advance sum, height is ascent minus descent; both
    /// are ceiled to whole pixels.
    pub fn measure(&self, text: &str, px: f32) -> PxSize {
        let scaled = self.font.as_scaled(PxScale::from(px));
        let mut width = 0.0f32;
        let mut prev: Option<GlyphId> = None;
        for ch in text.chars() {
            let glyph = scaled.scaled_glyph(ch);
            if let Some(prev_id) = prev {
                width += scaled.kern(prev_id, glyph.id);
            }
            width += scaled.h_advance(glyph.id);
            prev = Some(glyph.id);
        }
        let height = scaled.ascent() - scaled.descent();
        PxSize::new(width.ceil() as u32, height.ceil() as u32)
    }

    /// Vertical advance between consecutive text lines at `px`.
    pub fn line_height(&self, px: f32) -> u32 {
        let scaled = self.font.as_scaled(PxScale::from(px));
        (scaled.ascent() - scaled.descent() + scaled.line_gap()).ceil() as u32
    }

    pub(crate) fn inner(&self) -> &FontVec {
        &self.font
    }
}

impl std::fmt::Debug for SummaryFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummaryFont")
            .field("family", &self.family)
            .finish()
    }
}

fn select_face(db: &fontdb::Database, preferred: &[String]) -> Option<fontdb::ID> {
    let mut families: Vec<fontdb::Family<'_>> = preferred
        .iter()
        .map(|name| fontdb::Family::Name(name.as_str()))
        .collect();
    families.push(fontdb::Family::SansSerif);
    let query = fontdb::Query {
        families: &families,
        ..fontdb::Query::default()
    };
    db.query(&query)
        .or_else(|| db.faces().into_iter().next().map(|info| info.id))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
