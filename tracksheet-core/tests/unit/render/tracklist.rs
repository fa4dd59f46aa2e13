use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use tempfile::tempdir;

use super::*;

fn font() -> SummaryFont {
    SummaryFont::locate(&LayoutConstants::default()).expect("a system font face")
}

fn solid_png(color: Rgb<u8>) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, color))
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

fn tags_with_artwork(artwork: Option<Vec<u8>>) -> TrackTags {
    TrackTags {
        title: "Polar Sunrise".to_string(),
        artist: "The Test Ensemble".to_string(),
        album: "Fixture Sessions".to_string(),
        artwork,
    }
}

#[test]
fn empty_directory_builds_a_zero_height_canvas() {
    let constants = LayoutConstants::default();
    let font = font();
    let dir = tempdir().unwrap();

    let canvas = TrackListBuilder::new(&constants, &font)
        .build(dir.path())
        .unwrap();
    assert_eq!(canvas.width(), constants.row_size().w);
    assert_eq!(canvas.height(), 0);
}

#[test]
fn corrupt_audio_file_aborts_the_build() {
    let constants = LayoutConstants::default();
    let font = font();
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("broken.m4a"), b"not an mp4 container").unwrap();

    assert!(TrackListBuilder::new(&constants, &font).build(dir.path()).is_err());
}

#[test]
fn row_size_is_fixed_regardless_of_content() {
    let constants = LayoutConstants::default();
    let font = font();
    let builder = TrackListBuilder::new(&constants, &font);

    let short = builder.build_row(&tags_with_artwork(None)).unwrap();
    let long = builder
        .build_row(&TrackTags {
            title: "An Extremely Long Title ".repeat(8),
            artist: "An Artist With A Very Long Name".repeat(6),
            album: "And An Album Name To Match".repeat(6),
            artwork: None,
        })
        .unwrap();

    assert_eq!(short.size(), constants.row_size());
    assert_eq!(long.size(), constants.row_size());
}

#[test]
fn bar_takes_the_mean_color_of_solid_artwork() {
    let constants = LayoutConstants::default();
    let font = font();
    let builder = TrackListBuilder::new(&constants, &font);

    let row = builder
        .build_row(&tags_with_artwork(Some(solid_png(Rgb([200, 50, 10])))))
        .unwrap();

    let bar_x = constants.artwork_size.w + 2 * constants.artwork_margin.x + constants.bar_size.w / 2;
    let bar_y = constants.artwork_margin.y + constants.bar_size.h / 2;
    assert_eq!(*row.image().get_pixel(bar_x, bar_y), Rgb([200, 50, 10]));
}

#[test]
fn missing_artwork_renders_the_placeholder() {
    let constants = LayoutConstants::default();
    let font = font();
    let builder = TrackListBuilder::new(&constants, &font);

    let row = builder.build_row(&tags_with_artwork(None)).unwrap();

    let x = constants.artwork_margin.x + constants.artwork_size.w / 2;
    let y = constants.artwork_margin.y + constants.artwork_size.h / 2;
    // the bundled placeholder is a solid light gray
    assert_eq!(*row.image().get_pixel(x, y), Rgb([221, 221, 221]));
}

#[test]
fn rows_are_stacked_at_fixed_offsets() {
    let constants = LayoutConstants::default();
    let font = font();
    let dir = tempdir().unwrap();

    // two files that only need tag parsing, not audio decoding
    let minimal = minimal_m4a();
    std::fs::write(dir.path().join("a.m4a"), &minimal).unwrap();
    std::fs::write(dir.path().join("b.m4a"), &minimal).unwrap();

    let canvas = TrackListBuilder::new(&constants, &font)
        .build(dir.path())
        .unwrap();
    let row = constants.row_size();
    assert_eq!(canvas.width(), row.w);
    assert_eq!(canvas.height(), 2 * row.h);
}

/// Smallest MP4 stream lofty will read tags from: `ftyp` plus a `moov`
/// containing an empty `udta`/`meta`/`ilst` chain.
fn minimal_m4a() -> Vec<u8> {
    fn atom(tag: &[u8; 4], payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(8 + payload.len());
        out.extend_from_slice(&(8 + payload.len() as u32).to_be_bytes());
        out.extend_from_slice(tag);
        out.extend_from_slice(payload);
        out
    }

    let ftyp = atom(b"ftyp", &{
        let mut p = Vec::new();
        p.extend_from_slice(b"M4A ");
        p.extend_from_slice(&0x200u32.to_be_bytes());
        p.extend_from_slice(b"M4A mp42isom");
        p
    });
    let hdlr = atom(b"hdlr", &{
        let mut p = vec![0u8; 8];
        p.extend_from_slice(b"mdir");
        p.extend_from_slice(b"appl");
        p.extend_from_slice(&[0u8; 9]);
        p
    });
    let ilst = atom(b"ilst", &[]);
    let meta = atom(b"meta", &{
        let mut p = vec![0u8; 4];
        p.extend_from_slice(&hdlr);
        p.extend_from_slice(&ilst);
        p
    });
    let udta = atom(b"udta", &meta);
    let moov = atom(b"moov", &udta);

    let mut out = ftyp;
    out.extend_from_slice(&moov);
    out
}
