//! Rekordbox Exporter - Rekordbox library to m3u8 playlists
//!
//! This library converts a Rekordbox XML collection export into plain
//! .m3u8 playlist files, one per leaf playlist, with folder names
//! folded into the output filenames.

pub mod export;
pub mod model;
pub mod rekordbox;

pub use export::config::ExportConfig;
pub use export::pipeline::ExportPipeline;
