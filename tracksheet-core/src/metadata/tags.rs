use std::path::Path;

use anyhow::Context as _;
use lofty::config::ParseOptions;
use lofty::file::TaggedFileExt;
use lofty::picture::PictureType;
use lofty::probe::Probe;
use lofty::tag::{Accessor, Tag};

use crate::foundation::error::TracksheetResult;

/// Title used when a track carries no title tag.
pub const NO_TITLE: &str = "no title";
/// Artist used when a track carries no artist tag.
pub const NO_ARTIST: &str = "no artist";
/// Album used when a track carries no album tag.
pub const NO_ALBUM: &str = "no album";

/// One audio file's extracted attributes, with literal defaults applied for
/// absent fields. Created per file, consumed by one row render, discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackTags {
    /// Track title.
    pub title: String,
    /// Track artist.
    pub artist: String,
    /// Album name.
    pub album: String,
    /// Raw encoded cover bytes; `None` renders the placeholder artwork.
    pub artwork: Option<Vec<u8>>,
}

impl TrackTags {
    /// Read the container-native tags of one audio file.
    ///
    /// An unreadable or structurally corrupt file is an error; the caller
    /// aborts the whole run rather than skipping the file.
    pub fn read(path: &Path) -> TracksheetResult<Self> {
        let tagged_file = Probe::open(path)
            .with_context(|| format!("open audio file '{}'", path.display()))?
            .options(ParseOptions::new().read_properties(false))
            .read()
            .with_context(|| format!("read tags from '{}'", path.display()))?;

        let tag = tagged_file.primary_tag().or_else(|| tagged_file.first_tag());
        Ok(Self::from_tag(tag))
    }

    /// Build track attributes from an already-parsed tag.
    ///
    /// Missing fields become their literal defaults; the artwork is the
    /// front-cover picture when present, otherwise the first picture.
    pub fn from_tag(tag: Option<&Tag>) -> Self {
        let title = tag
            .and_then(|t| t.title().map(|s| s.to_string()))
            .unwrap_or_else(|| NO_TITLE.to_string());
        let artist = tag
            .and_then(|t| t.artist().map(|s| s.to_string()))
            .unwrap_or_else(|| NO_ARTIST.to_string());
        let album = tag
            .and_then(|t| t.album().map(|s| s.to_string()))
            .unwrap_or_else(|| NO_ALBUM.to_string());
        let artwork = tag.and_then(front_cover);

        Self {
            title,
            artist,
            album,
            artwork,
        }
    }
}

fn front_cover(tag: &Tag) -> Option<Vec<u8>> {
    let pictures = tag.pictures();
    pictures
        .iter()
        .find(|picture| picture.pic_type() == PictureType::CoverFront)
        .or_else(|| pictures.first())
        .map(|picture| picture.data().to_vec())
}

#[cfg(test)]
#[path = "../../tests/unit/metadata/tags.rs"]
mod tests;
