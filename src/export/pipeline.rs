//! Main export pipeline orchestration

use super::config::ExportConfig;
use super::m3u;
use crate::model::{Library, PlaylistNode};
use crate::rekordbox::LibraryError;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Walks the playlist tree and writes one .m3u8 file per leaf playlist
pub struct ExportPipeline {
    config: ExportConfig,
}

impl ExportPipeline {
    /// Create a new export pipeline
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Run the complete export process
    ///
    /// Returns the paths of the playlist files written.
    pub fn export(&self, library: &Library) -> Result<Vec<PathBuf>> {
        log::info!("Starting m3u8 export");
        log::info!("Target: {:?}", self.config.output_dir);

        let mut written = Vec::new();

        // The designated root folder itself never contributes to the
        // name prefix; traversal starts at its children.
        match library.root() {
            PlaylistNode::Folder { children, .. } => {
                self.walk(children, "", library, &mut written)?;
            }
            PlaylistNode::Playlist { name, .. } => {
                log::warn!("Playlist root {:?} is not a folder, nothing to export", name);
            }
        }

        log::info!("Export complete: {} file(s) written", written.len());
        Ok(written)
    }

    /// Visit a folder's children in document order, carrying the
    /// accumulated folder-name prefix by value per call frame
    fn walk(
        &self,
        nodes: &[PlaylistNode],
        prefix: &str,
        library: &Library,
        written: &mut Vec<PathBuf>,
    ) -> Result<()> {
        for node in nodes {
            if self.config.excluded_nodes.iter().any(|n| n == node.name()) {
                log::debug!("Skipping excluded node: {}", node.name());
                continue;
            }

            match node {
                PlaylistNode::Folder { name, children } => {
                    let child_prefix = if prefix.is_empty() {
                        name.clone()
                    } else {
                        format!("{}{}{}", prefix, m3u::PREFIX_SEPARATOR, name)
                    };
                    self.walk(children, &child_prefix, library, written)?;
                }
                PlaylistNode::Playlist { name, track_keys } => {
                    if let Some(ref filter) = self.config.playlist_filter {
                        if !filter.iter().any(|f| f == name) {
                            log::debug!("Skipping filtered-out playlist: {}", name);
                            continue;
                        }
                    }

                    if let Some(path) = self.convert_playlist(name, track_keys, prefix, library)? {
                        written.push(path);
                    }
                }
            }
        }

        Ok(())
    }

    /// Emit a single leaf playlist
    ///
    /// Returns Ok(None) when the playlist has no entries and no file
    /// was written. An unresolvable track reference is fatal.
    fn convert_playlist(
        &self,
        name: &str,
        track_keys: &[String],
        prefix: &str,
        library: &Library,
    ) -> Result<Option<PathBuf>> {
        let mut entries = Vec::with_capacity(track_keys.len());
        for key in track_keys {
            let track = library
                .get_track(key)
                .ok_or_else(|| LibraryError::UnknownTrackRef {
                    playlist: name.to_string(),
                    key: key.clone(),
                })?;
            entries.push(m3u::format_entry(track));
        }

        let body = match m3u::build_body(&entries) {
            Some(body) => body,
            None => {
                log::debug!("Skipping empty playlist: {}", name);
                return Ok(None);
            }
        };

        let path = self
            .config
            .output_dir
            .join(m3u::output_filename(prefix, name));

        fs::write(&path, body)
            .with_context(|| format!("Failed to write playlist file {:?}", path))?;

        log::info!("Wrote {:?} ({} tracks)", path, entries.len());
        Ok(Some(path))
    }
}
