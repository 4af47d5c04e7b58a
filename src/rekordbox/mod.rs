//! Rekordbox library parsing
//!
//! Parses a Rekordbox XML collection export to extract track metadata
//! and the nested playlist folder tree.

mod collection;
mod playlists;
mod model;

pub use collection::parse_collection;
pub use playlists::parse_playlist_tree;

use crate::model::Library;
use anyhow::Result;
use std::path::Path;
use thiserror::Error;

/// Structural problems in the library XML that abort the conversion
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("library XML has no COLLECTION section")]
    MissingCollection,

    #[error("library XML has no playlist root node under PLAYLISTS")]
    MissingPlaylistRoot,

    #[error("missing required attribute {0}")]
    MissingAttribute(&'static str),

    #[error("playlist {playlist:?} references unknown track {key:?}")]
    UnknownTrackRef { playlist: String, key: String },
}

/// Parse a complete Rekordbox library from its XML export
///
/// # Arguments
/// * `path` - Path to the library XML (File > Export Collection in xml format)
///
/// # Returns
/// A unified Library containing the track catalog and the playlist tree
pub fn parse_library(path: &Path) -> Result<Library> {
    log::info!("Parsing Rekordbox collection from {:?}", path);
    let tracks = collection::parse_collection(path)?;

    log::info!("Parsing Rekordbox playlist tree from {:?}", path);
    let root = playlists::parse_playlist_tree(path)?;

    let library = Library::new(tracks, root);

    log::info!(
        "Loaded library: {} tracks, {} playlists",
        library.track_count(),
        library.playlist_count()
    );

    Ok(library)
}
