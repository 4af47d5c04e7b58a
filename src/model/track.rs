use serde::{Deserialize, Serialize};

/// Represents a single music track with the metadata needed for export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Unique identifier for this track (Rekordbox TrackID)
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Track duration in seconds, kept as the raw attribute string
    /// since it is only ever re-emitted verbatim into the info line
    pub total_time: String,

    /// Location of the audio file (URI or path), emitted unchanged
    pub location: String,
}
