//! Unified data model for music library representation
//!
//! This module defines data structures that are independent of
//! both input (Rekordbox XML) and output (m3u8) formats.

mod track;
mod playlist;
mod library;

pub use track::Track;
pub use playlist::PlaylistNode;
pub use library::Library;
