//! Rekordbox playlist tree parser (the `<PLAYLISTS>` section)
//!
//! Playlist nodes nest arbitrarily: folders (Type "0") contain further
//! `<NODE>` elements, any other Type is a leaf playlist whose `<TRACK>`
//! children reference collection tracks by Key.

use super::LibraryError;
use crate::model::PlaylistNode;
use anyhow::{Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse the playlist tree, rooted at the first `<NODE>` under `<PLAYLISTS>`
pub fn parse_playlist_tree(path: &Path) -> Result<PlaylistNode> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open Rekordbox library: {:?}", path))?;

    let mut reader = Reader::from_reader(BufReader::new(file));
    reader.config_mut().trim_text(true);

    let mut in_playlists = false;
    let mut stack: Vec<PlaylistNode> = Vec::new();
    let mut root: Option<PlaylistNode> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"PLAYLISTS" => in_playlists = true,
                b"NODE" if in_playlists && root.is_none() => {
                    stack.push(node_from_attributes(&e, reader.buffer_position())?);
                }
                b"TRACK" if in_playlists && root.is_none() => {
                    push_track_key(&mut stack, &e, reader.buffer_position())?;
                }
                _ => {}
            },

            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"NODE" if in_playlists && root.is_none() => {
                    let node = node_from_attributes(&e, reader.buffer_position())?;
                    attach(&mut stack, &mut root, node);
                }
                b"TRACK" if in_playlists && root.is_none() => {
                    push_track_key(&mut stack, &e, reader.buffer_position())?;
                }
                _ => {}
            },

            Ok(Event::End(e)) => match e.name().as_ref() {
                b"NODE" if in_playlists && root.is_none() => {
                    if let Some(node) = stack.pop() {
                        attach(&mut stack, &mut root, node);
                    }
                }
                b"PLAYLISTS" => in_playlists = false,
                _ => {}
            },

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

    root.ok_or_else(|| LibraryError::MissingPlaylistRoot.into())
}

/// Attach a completed node to the enclosing folder, or make it the tree root
fn attach(stack: &mut Vec<PlaylistNode>, root: &mut Option<PlaylistNode>, node: PlaylistNode) {
    match stack.last_mut() {
        Some(PlaylistNode::Folder { children, .. }) => children.push(node),
        Some(PlaylistNode::Playlist { name, .. }) => {
            log::warn!("Ignoring NODE nested inside playlist {:?}", name);
        }
        None => *root = Some(node),
    }
}

/// Build an empty node from a `<NODE>` element's Name and Type attributes
fn node_from_attributes(element: &BytesStart, position: u64) -> Result<PlaylistNode> {
    let mut name = None;
    let mut node_type = None;

    for attr in element.attributes() {
        let attr =
            attr.with_context(|| format!("Malformed NODE attribute at position {}", position))?;
        let value = attr
            .unescape_value()
            .with_context(|| format!("Malformed NODE attribute value at position {}", position))?
            .into_owned();

        match attr.key.as_ref() {
            b"Name" => name = Some(value),
            b"Type" => node_type = Some(value),
            _ => {}
        }
    }

    let name = name
        .ok_or(LibraryError::MissingAttribute("Name"))
        .with_context(|| format!("Invalid NODE element at position {}", position))?;
    let node_type = node_type
        .ok_or(LibraryError::MissingAttribute("Type"))
        .with_context(|| format!("Invalid NODE element at position {}", position))?;

    // Type "0" marks a folder; anything else is a leaf playlist
    if node_type == "0" {
        Ok(PlaylistNode::folder(name))
    } else {
        Ok(PlaylistNode::playlist(name))
    }
}

/// Record a `<TRACK Key="..."/>` reference on the playlist being parsed
fn push_track_key(
    stack: &mut Vec<PlaylistNode>,
    element: &BytesStart,
    position: u64,
) -> Result<()> {
    let mut key = None;

    for attr in element.attributes() {
        let attr =
            attr.with_context(|| format!("Malformed TRACK attribute at position {}", position))?;
        if attr.key.as_ref() == b"Key" {
            key = Some(
                attr.unescape_value()
                    .with_context(|| {
                        format!("Malformed TRACK attribute value at position {}", position)
                    })?
                    .into_owned(),
            );
        }
    }

    let key = key
        .ok_or(LibraryError::MissingAttribute("Key"))
        .with_context(|| format!("Invalid TRACK reference at position {}", position))?;

    match stack.last_mut() {
        Some(PlaylistNode::Playlist { track_keys, .. }) => track_keys.push(key),
        _ => log::warn!(
            "Ignoring TRACK reference outside a playlist node at position {}",
            position
        ),
    }

    Ok(())
}
