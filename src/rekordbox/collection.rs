//! Rekordbox collection parser (the `<COLLECTION>` section)

use super::model::CollectionEntry;
use super::LibraryError;
use crate::model::Track;
use anyhow::{Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse the `<COLLECTION>` section and build the track catalog
///
/// Every `<TRACK>` element must carry TrackID, Name, Artist, TotalTime
/// and Location; a missing attribute aborts the conversion.
pub fn parse_collection(path: &Path) -> Result<HashMap<String, Track>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open Rekordbox library: {:?}", path))?;

    let mut reader = Reader::from_reader(BufReader::new(file));
    reader.config_mut().trim_text(true);

    let mut tracks = HashMap::new();
    let mut in_collection = false;
    let mut collection_found = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"COLLECTION" => {
                    in_collection = true;
                    collection_found = true;
                }
                b"TRACK" if in_collection => {
                    insert_track(&mut tracks, &e, reader.buffer_position())?;
                }
                _ => {}
            },

            Ok(Event::Empty(e)) => match e.name().as_ref() {
                // A childless collection is present, just empty
                b"COLLECTION" => collection_found = true,
                b"TRACK" if in_collection => {
                    insert_track(&mut tracks, &e, reader.buffer_position())?;
                }
                _ => {}
            },

            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"COLLECTION" {
                    // Single collection section; the playlist tree has its own pass
                    break;
                }
            }

            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("XML parsing error at position {}", reader.buffer_position())
                });
            }
            _ => {}
        }

        buf.clear();
    }

    if !collection_found {
        return Err(LibraryError::MissingCollection.into());
    }

    log::info!("Parsed {} tracks from collection", tracks.len());
    Ok(tracks)
}

/// Read one `<TRACK>` element's attributes and add it to the catalog
fn insert_track(
    tracks: &mut HashMap<String, Track>,
    element: &BytesStart,
    position: u64,
) -> Result<()> {
    let mut entry = CollectionEntry::default();

    for attr in element.attributes() {
        let attr = attr
            .with_context(|| format!("Malformed TRACK attribute at position {}", position))?;
        let value = attr
            .unescape_value()
            .with_context(|| format!("Malformed TRACK attribute value at position {}", position))?
            .into_owned();

        match attr.key.as_ref() {
            b"TrackID" => entry.track_id = Some(value),
            b"Name" => entry.name = Some(value),
            b"Artist" => entry.artist = Some(value),
            b"TotalTime" => entry.total_time = Some(value),
            b"Location" => entry.location = Some(value),
            _ => {}
        }
    }

    let track = entry
        .into_track()
        .with_context(|| format!("Invalid TRACK element at position {}", position))?;

    tracks.insert(track.id.clone(), track);
    Ok(())
}
