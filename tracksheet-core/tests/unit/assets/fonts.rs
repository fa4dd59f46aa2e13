use super::*;

fn font() -> SummaryFont {
    SummaryFont::locate(&LayoutConstants::default()).expect("a system font face")
}

#[test]
fn locate_falls_back_when_preferred_family_is_missing() {
    let mut constants = LayoutConstants::default();
    constants.font_families = vec!["definitely-not-an-installed-family".to_string()];
    SummaryFont::locate(&constants).expect("generic fallback face");
}

#[test]
fn measure_is_monotonic_in_text_length() {
    let font = font();
    let short = font.measure("@W", 64.0);
    let long = font.measure("@WWWW", 64.0);
    assert!(long.w > short.w);
}

#[test]
fn measure_height_tracks_font_size() {
    let font = font();
    let small = font.measure("sample", 72.0);
    let large = font.measure("sample", 104.0);
    assert!(small.h > 0);
    assert!(large.h > small.h);
}

#[test]
fn line_height_covers_glyph_height() {
    let font = font();
    assert!(font.line_height(72.0) >= font.measure("x", 72.0).h);
}

#[test]
fn empty_text_measures_zero_width() {
    let font = font();
    assert_eq!(font.measure("", 64.0).w, 0);
}
