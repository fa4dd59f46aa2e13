use std::io::Write as _;
use std::path::Path;

use lofty::picture::{MimeType, Picture, PictureType};
use lofty::tag::TagType;
use tempfile::NamedTempFile;

use super::*;

fn picture(pic_type: PictureType, data: Vec<u8>) -> Picture {
    Picture::new_unchecked(pic_type, Some(MimeType::Png), None, data)
}

#[test]
fn from_tag_none_applies_all_defaults() {
    let tags = TrackTags::from_tag(None);
    assert_eq!(tags.title, NO_TITLE);
    assert_eq!(tags.artist, NO_ARTIST);
    assert_eq!(tags.album, NO_ALBUM);
    assert!(tags.artwork.is_none());
}

#[test]
fn from_tag_reads_all_fields() {
    let mut tag = Tag::new(TagType::Mp4Ilst);
    tag.set_title("Polar Sunrise".to_string());
    tag.set_artist("The Test Ensemble".to_string());
    tag.set_album("Fixture Sessions".to_string());

    let tags = TrackTags::from_tag(Some(&tag));
    assert_eq!(tags.title, "Polar Sunrise");
    assert_eq!(tags.artist, "The Test Ensemble");
    assert_eq!(tags.album, "Fixture Sessions");
}

#[test]
fn from_tag_partial_fields_keep_other_defaults() {
    let mut tag = Tag::new(TagType::Mp4Ilst);
    tag.set_artist("Lone Artist".to_string());

    let tags = TrackTags::from_tag(Some(&tag));
    assert_eq!(tags.title, NO_TITLE);
    assert_eq!(tags.artist, "Lone Artist");
    assert_eq!(tags.album, NO_ALBUM);
}

#[test]
fn artwork_prefers_front_cover() {
    let mut tag = Tag::new(TagType::Mp4Ilst);
    tag.push_picture(picture(PictureType::Other, vec![1]));
    tag.push_picture(picture(PictureType::CoverFront, vec![2]));

    let tags = TrackTags::from_tag(Some(&tag));
    assert_eq!(tags.artwork, Some(vec![2]));
}

#[test]
fn artwork_falls_back_to_first_picture() {
    let mut tag = Tag::new(TagType::Mp4Ilst);
    tag.push_picture(picture(PictureType::Other, vec![7]));

    let tags = TrackTags::from_tag(Some(&tag));
    assert_eq!(tags.artwork, Some(vec![7]));
}

#[test]
fn read_rejects_non_audio_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "this is not an audio container").unwrap();

    assert!(TrackTags::read(file.path()).is_err());
}

#[test]
fn read_rejects_missing_file() {
    assert!(TrackTags::read(Path::new("no_such_file.m4a")).is_err());
}
