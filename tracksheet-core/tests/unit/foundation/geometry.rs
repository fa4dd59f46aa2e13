use super::*;

#[test]
fn default_constants_validate() {
    LayoutConstants::default().validate().unwrap();
}

#[test]
fn row_size_matches_fixed_geometry() {
    let c = LayoutConstants::default();
    // 384 + 4*25 + 25 + 3072 wide, 384 + 2*25 tall
    assert_eq!(c.row_size(), PxSize::new(3581, 434));
}

#[test]
fn header_height_is_icon_plus_margins() {
    let c = LayoutConstants::default();
    assert_eq!(c.header_height(), 306);
}

#[test]
fn header_width_adds_reserved_label_area() {
    let c = LayoutConstants::default();
    assert_eq!(c.header_width(950), 256 + 3 * 25 + 950);
}

#[test]
fn reserve_sample_is_at_sign_plus_wide_chars() {
    let c = LayoutConstants::default();
    let sample = c.header_reserve_sample();
    assert_eq!(sample, "@WWWWWWWWWWWWWWW");
    assert_eq!(sample.chars().count(), 1 + c.header_reserve_len);
}

#[test]
fn validate_rejects_zero_artwork() {
    let mut c = LayoutConstants::default();
    c.artwork_size = PxSize::new(0, 384);
    assert!(matches!(
        c.validate(),
        Err(TracksheetError::Validation(_))
    ));
}

#[test]
fn validate_rejects_zero_bar() {
    let mut c = LayoutConstants::default();
    c.bar_size = PxSize::new(25, 0);
    assert!(c.validate().is_err());
}

#[test]
fn validate_rejects_nonpositive_font_size() {
    let mut c = LayoutConstants::default();
    c.title_font_px = 0.0;
    assert!(c.validate().is_err());
}

#[test]
fn validate_rejects_empty_extension() {
    let mut c = LayoutConstants::default();
    c.audio_extension.clear();
    assert!(c.validate().is_err());
}
