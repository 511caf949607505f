//! Document boundary: shape validation for uploaded song logs.
//!
//! Everything here runs before the aggregation core sees any data. A valid
//! log document is a JSON array of song-entry objects; the "official"
//! tournament export is a JSON object and is rejected here with a typed
//! error instead of being sniffed loosely downstream.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::DocumentError;
use crate::models::SongEntry;

/// Parse one uploaded document into a song log, validating its shape.
///
/// Shape faults (not an array, or array elements that are not song
/// entries) are [`DocumentError::NotSongLog`]; only malformed JSON itself
/// surfaces as [`DocumentError::Json`].
pub fn parse_song_log(text: &str) -> Result<Vec<SongEntry>, DocumentError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if !value.is_array() {
        return Err(DocumentError::NotSongLog);
    }
    let songs: Vec<SongEntry> =
        serde_json::from_value(value).map_err(|_| DocumentError::NotSongLog)?;
    debug!(songs = songs.len(), "parsed song log");
    Ok(songs)
}

/// Read and parse a song-log document from disk.
pub fn read_song_log(path: impl AsRef<Path>) -> Result<Vec<SongEntry>, DocumentError> {
    parse_song_log(&fs::read_to_string(path)?)
}

/// Player names for team resolution, in the order the log lists them.
///
/// Taken from the first song's answer records; every song in a well-formed
/// log carries the same player set.
pub fn player_names(songs: &[SongEntry]) -> Vec<String> {
    songs
        .first()
        .map(|song| song.players.iter().map(|ans| ans.name.clone()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = r#"[
        {
            "name": "Sparkle",
            "artist": "RADWIMPS",
            "anime": { "english": "Your Name.", "romaji": "Kimi no Na wa." },
            "songNumber": 0,
            "difficulty": 55.1,
            "type": "Insert Song",
            "players": [
                { "name": "Alice", "correct": true },
                { "name": "Carol", "correct": false }
            ],
            "fromList": [ { "name": "Alice" } ]
        }
    ]"#;

    #[test]
    fn parses_song_log_array() {
        let songs = parse_song_log(LOG).unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].song_name, "Sparkle");
        assert_eq!(songs[0].from_list[0].name, "Alice");
    }

    #[test]
    fn rejects_official_object_export() {
        let err = parse_song_log(r#"{ "roomName": "finals" }"#).unwrap_err();
        assert!(matches!(err, DocumentError::NotSongLog));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_song_log("[{").unwrap_err();
        assert!(matches!(err, DocumentError::Json(_)));
    }

    #[test]
    fn rejects_array_of_wrong_objects() {
        let err = parse_song_log(r#"[ { "foo": 1 } ]"#).unwrap_err();
        assert!(matches!(err, DocumentError::NotSongLog));
    }

    #[test]
    fn player_names_come_from_first_song() {
        let songs = parse_song_log(LOG).unwrap();
        assert_eq!(player_names(&songs), vec!["Alice".to_string(), "Carol".to_string()]);
        assert!(player_names(&[]).is_empty());
    }
}
