use serde::{Deserialize, Serialize};

/// A node in the playlist tree
///
/// Folders are containers holding other nodes; playlists are leaves
/// holding an ordered list of track references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PlaylistNode {
    /// Container node (Type "0" in the source XML)
    Folder {
        name: String,
        children: Vec<PlaylistNode>,
    },

    /// Leaf node referencing tracks by their catalog key
    Playlist {
        name: String,
        track_keys: Vec<String>,
    },
}

impl PlaylistNode {
    /// Create an empty folder node
    pub fn folder(name: impl Into<String>) -> Self {
        Self::Folder {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Create an empty playlist node
    pub fn playlist(name: impl Into<String>) -> Self {
        Self::Playlist {
            name: name.into(),
            track_keys: Vec::new(),
        }
    }

    /// Node name, regardless of variant
    pub fn name(&self) -> &str {
        match self {
            Self::Folder { name, .. } => name,
            Self::Playlist { name, .. } => name,
        }
    }

    /// Number of leaf playlists in this subtree (counting the node itself)
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Playlist { .. } => 1,
            Self::Folder { children, .. } => children.iter().map(PlaylistNode::leaf_count).sum(),
        }
    }
}
