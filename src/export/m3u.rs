//! M3U8 formatting and output file naming

use crate::model::Track;

/// Format header token opening every non-empty playlist file
pub const M3U_HEADER: &str = "#EXTM3U";

/// Extension of emitted playlist files
pub const M3U_EXTENSION: &str = ".m3u8";

/// Separator joining folder names into the filename prefix
pub const PREFIX_SEPARATOR: &str = " - ";

/// Format a single playlist entry: an EXTINF info line followed by the
/// track location, exactly as stored in the library.
pub fn format_entry(track: &Track) -> String {
    format!(
        "#EXTINF:{},{} - {}\n{}",
        track.total_time, track.artist, track.title, track.location
    )
}

/// Assemble the file body from formatted entries
///
/// The header is joined onto the first entry's info line; entries are
/// separated by single line breaks. Returns None when there are no
/// entries, in which case no file should be written at all.
pub fn build_body(entries: &[String]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }
    Some(format!("{}\n{}", M3U_HEADER, entries.join("\n")))
}

/// Derive the output filename for a playlist, folding the folder prefix in
///
/// Source names may legitimately contain '/' which must not create
/// spurious sub-paths, so slashes are substituted before the name is
/// used on disk.
pub fn output_filename(prefix: &str, playlist_name: &str) -> String {
    let name = playlist_name.replace('/', "-");
    if prefix.is_empty() {
        format!("{}{}", name, M3U_EXTENSION)
    } else {
        format!(
            "{}{}{}{}",
            prefix.replace('/', "&"),
            PREFIX_SEPARATOR,
            name,
            M3U_EXTENSION
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> Track {
        Track {
            id: "7".to_string(),
            title: "One More Time".to_string(),
            artist: "Daft Punk".to_string(),
            total_time: "320".to_string(),
            location: "file://localhost/Users/dj/Music/omt.mp3".to_string(),
        }
    }

    #[test]
    fn test_format_entry() {
        assert_eq!(
            format_entry(&track()),
            "#EXTINF:320,Daft Punk - One More Time\nfile://localhost/Users/dj/Music/omt.mp3"
        );
    }

    #[test]
    fn test_build_body_empty() {
        assert_eq!(build_body(&[]), None);
    }

    #[test]
    fn test_build_body_header_on_first_line() {
        let entries = vec!["#EXTINF:1,a - b\nloc1".to_string(), "#EXTINF:2,c - d\nloc2".to_string()];
        let body = build_body(&entries).unwrap();
        assert!(body.starts_with("#EXTM3U\n#EXTINF:1,"));
        assert_eq!(body.lines().count(), 5);
    }

    #[test]
    fn test_output_filename_without_prefix() {
        assert_eq!(output_filename("", "Warmup"), "Warmup.m3u8");
    }

    #[test]
    fn test_output_filename_with_prefix() {
        assert_eq!(
            output_filename("Gigs - 2020", "Warmup"),
            "Gigs - 2020 - Warmup.m3u8"
        );
    }

    #[test]
    fn test_output_filename_substitutes_slashes() {
        // '/' becomes '&' in the prefix but '-' in the playlist name
        assert_eq!(
            output_filename("DJ Set/2020", "Rock/Pop"),
            "DJ Set&2020 - Rock-Pop.m3u8"
        );
        assert!(!output_filename("DJ Set/2020", "Rock/Pop").contains('/'));
    }
}
