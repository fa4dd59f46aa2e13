use ab_glyph::{Font as _, GlyphId, PxScale, ScaleFont as _, point};
use image::Rgb;

use crate::assets::fonts::SummaryFont;
use crate::render::canvas::Canvas;

/// Draw `text` with its top-left corner at `(x, y)`.
///
/// Lines are separated by `\n` and advance by the font's line height. Glyphs
/// falling outside the canvas are clipped, not an error; the header relies on
/// this for over-long usernames.
pub fn draw_text(
    canvas: &mut Canvas,
    font: &SummaryFont,
    px: f32,
    x: i64,
    y: i64,
    color: Rgb<u8>,
    text: &str,
) {
    let line_height = i64::from(font.line_height(px));
    for (index, line) in text.split('\n').enumerate() {
        draw_line(canvas, font, px, x, y + line_height * index as i64, color, line);
    }
}

fn draw_line(
    canvas: &mut Canvas,
    font: &SummaryFont,
    px: f32,
    x: i64,
    y: i64,
    color: Rgb<u8>,
    line: &str,
) {
    let scaled = font.inner().as_scaled(PxScale::from(px));
    let mut caret = x as f32;
    let baseline = y as f32 + scaled.ascent();
    let mut prev: Option<GlyphId> = None;

    for ch in line.chars() {
        let mut glyph = scaled.scaled_glyph(ch);
        if let Some(prev_id) = prev {
            caret += scaled.kern(prev_id, glyph.id);
        }
        glyph.position = point(caret, baseline);
        caret += scaled.h_advance(glyph.id);
        prev = Some(glyph.id);

        let Some(outlined) = font.inner().outline_glyph(glyph) else {
            continue;
        };
        let bounds = outlined.px_bounds();
        let image = canvas.image_mut();
        let (width, height) = (i64::from(image.width()), i64::from(image.height()));
        outlined.draw(|gx, gy, coverage| {
            let px_x = bounds.min.x as i64 + i64::from(gx);
            let px_y = bounds.min.y as i64 + i64::from(gy);
            if px_x < 0 || px_y < 0 || px_x >= width || px_y >= height {
                return;
            }
            let pixel = image.get_pixel_mut(px_x as u32, px_y as u32);
            for (channel, target) in pixel.0.iter_mut().zip(color.0) {
                let blended =
                    f32::from(*channel) + (f32::from(target) - f32::from(*channel)) * coverage;
                *channel = blended.round().clamp(0.0, 255.0) as u8;
            }
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
