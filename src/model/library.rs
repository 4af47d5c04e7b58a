use super::{PlaylistNode, Track};
use std::collections::HashMap;

/// Complete music library: the track catalog plus the playlist tree
#[derive(Debug, Clone)]
pub struct Library {
    /// All tracks indexed by their ID
    tracks: HashMap<String, Track>,

    /// Root folder of the playlist tree
    root: PlaylistNode,
}

impl Library {
    /// Create a library from a loaded catalog and playlist tree root
    pub fn new(tracks: HashMap<String, Track>, root: PlaylistNode) -> Self {
        Self { tracks, root }
    }

    /// Get a track by ID
    pub fn get_track(&self, id: &str) -> Option<&Track> {
        self.tracks.get(id)
    }

    /// Root node of the playlist tree
    pub fn root(&self) -> &PlaylistNode {
        &self.root
    }

    /// Total number of tracks
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Total number of leaf playlists in the tree
    pub fn playlist_count(&self) -> usize {
        self.root.leaf_count()
    }
}
