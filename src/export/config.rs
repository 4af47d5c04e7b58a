//! Export configuration

use std::path::PathBuf;

/// Synthetic container Rekordbox creates when importing foreign
/// libraries; never worth exporting.
pub const IMPORTED_PLAYLISTS_FOLDER: &str = "Imported Playlists";

/// Configuration for the export process
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory the .m3u8 files are written into
    pub output_dir: PathBuf,

    /// Specific playlist names to export (None = export all)
    pub playlist_filter: Option<Vec<String>>,

    /// Node names skipped entirely during traversal, subtrees included
    pub excluded_nodes: Vec<String>,
}

impl ExportConfig {
    /// Create a new export configuration
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            playlist_filter: None,
            excluded_nodes: vec![IMPORTED_PLAYLISTS_FOLDER.to_string()],
        }
    }

    /// Set specific playlists to export
    pub fn with_playlists(mut self, playlists: Vec<String>) -> Self {
        self.playlist_filter = Some(playlists);
        self
    }

    /// Replace the list of node names excluded from traversal
    pub fn with_excluded_nodes(mut self, names: Vec<String>) -> Self {
        self.excluded_nodes = names;
        self
    }
}
