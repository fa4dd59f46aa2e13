use crate::assets::fonts::SummaryFont;

/// Leading character of the detail line and of its continuation after a
/// wrap: a full-width space (U+3000).
pub const CONTINUATION_PREFIX: char = '\u{3000}';

/// Wrap `text` once at its midpoint character index when it measures wider
/// than `max_width` at `px`.
///
/// The split point is half the Unicode scalar count, not a word boundary,
/// and at most one split is ever made; text that would need more still
/// overflows. This naive policy is intentional and must stay as-is.
pub fn wrap_midpoint(font: &SummaryFont, px: f32, text: &str, max_width: u32) -> String {
    if font.measure(text, px).w <= max_width {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    let mid = chars.len() / 2;
    let head: String = chars[..mid].iter().collect();
    let tail: String = chars[mid..].iter().collect();
    format!("{head}\n{CONTINUATION_PREFIX}{tail}")
}

#[cfg(test)]
#[path = "../../tests/unit/layout/wrap.rs"]
mod tests;
