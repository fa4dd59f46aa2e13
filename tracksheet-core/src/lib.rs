//! Tracksheet renders a one-image summary of a music library.
//!
//! The output is a header strip (avatar + "@username") stacked above one
//! fixed-size row per track (album artwork, a mean-color swatch bar, title,
//! artist/album). All geometry is derived deterministically from font metrics
//! and the paddings in [`LayoutConstants`].
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: locate a system font face ([`SummaryFont`]) and the layout
//!    configuration ([`LayoutConstants`]).
//! 2. **Build**: [`HeaderBuilder`] and [`TrackListBuilder`] each produce an
//!    exclusively-owned [`Canvas`].
//! 3. **Assemble**: [`assemble`] centers the header over the track list and
//!    concatenates them vertically.
//! 4. **Persist**: [`write_summary`] encodes the result as an RGB8 PNG inside
//!    the music directory, overwriting any previous output.
//!
//! The pipeline is single-threaded and fail-fast: any missing resource,
//! unreadable audio file, or decode failure propagates out and aborts the
//! run before (or instead of) writing `summary.png`.
#![forbid(unsafe_code)]

mod assets;
mod foundation;
mod layout;
mod metadata;
mod render;

pub use assets::artwork::{PLACEHOLDER_ARTWORK, decode_artwork, mean_color, placeholder_artwork};
pub use assets::fonts::SummaryFont;
pub use foundation::error::{TracksheetError, TracksheetResult};
pub use foundation::geometry::{LayoutConstants, PxMargin, PxSize};
pub use layout::wrap::{CONTINUATION_PREFIX, wrap_midpoint};
pub use metadata::scan::scan_music_dir;
pub use metadata::tags::{NO_ALBUM, NO_ARTIST, NO_TITLE, TrackTags};
pub use render::assemble::{assemble, write_summary};
pub use render::canvas::Canvas;
pub use render::header::HeaderBuilder;
pub use render::text::draw_text;
pub use render::tracklist::TrackListBuilder;
