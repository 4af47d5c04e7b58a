//! Internal Rekordbox data structures for XML parsing

use super::LibraryError;
use crate::model::Track;

/// Attribute set of a collection `<TRACK>` element, as read from the XML
#[derive(Debug, Clone, Default)]
pub struct CollectionEntry {
    pub track_id: Option<String>,
    pub name: Option<String>,
    pub artist: Option<String>,
    pub total_time: Option<String>,
    pub location: Option<String>,
}

impl CollectionEntry {
    /// Convert to the unified Track model, requiring the full attribute set
    pub fn into_track(self) -> Result<Track, LibraryError> {
        Ok(Track {
            id: self
                .track_id
                .ok_or(LibraryError::MissingAttribute("TrackID"))?,
            title: self.name.ok_or(LibraryError::MissingAttribute("Name"))?,
            artist: self.artist.ok_or(LibraryError::MissingAttribute("Artist"))?,
            total_time: self
                .total_time
                .ok_or(LibraryError::MissingAttribute("TotalTime"))?,
            location: self
                .location
                .ok_or(LibraryError::MissingAttribute("Location"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_entry() -> CollectionEntry {
        CollectionEntry {
            track_id: Some("42".to_string()),
            name: Some("Strobe".to_string()),
            artist: Some("deadmau5".to_string()),
            total_time: Some("634".to_string()),
            location: Some("file://localhost/Users/dj/Music/strobe.mp3".to_string()),
        }
    }

    #[test]
    fn test_full_entry_converts() {
        let track = full_entry().into_track().unwrap();
        assert_eq!(track.id, "42");
        assert_eq!(track.title, "Strobe");
        assert_eq!(track.total_time, "634");
    }

    #[test]
    fn test_missing_attribute_is_fatal() {
        let mut entry = full_entry();
        entry.artist = None;

        let err = entry.into_track().unwrap_err();
        assert!(matches!(err, LibraryError::MissingAttribute("Artist")));
    }
}
