use serde::{Deserialize, Serialize};

/// One answered trivia round from an uploaded answer log.
///
/// Field names follow the wire format of the log documents, hence the serde
/// renames: `songNumber`, `fromList`, and the free-text `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongEntry {
    /// Song title.
    #[serde(rename = "name")]
    pub song_name: String,
    pub artist: String,
    pub anime: AnimeTitle,
    /// Position of the song within the match. Strictly sequential within a
    /// game; any gap marks a game boundary.
    #[serde(rename = "songNumber")]
    pub song_number: u32,
    pub difficulty: f64,
    /// Free-text song type, e.g. "Opening 2", "Ending 1", "Insert Song".
    #[serde(rename = "type")]
    pub type_text: String,
    /// Per-player answer records for this round.
    pub players: Vec<PlayerAnswer>,
    /// Pre-match rig list: players who had pre-selected this song.
    #[serde(rename = "fromList")]
    pub from_list: Vec<RigEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeTitle {
    pub english: String,
    pub romaji: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerAnswer {
    /// Player name as it appears in the log.
    pub name: String,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigEntry {
    /// Player name as it appears in the log.
    pub name: String,
}

/// Song category derived from the free-text type field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SongCategory {
    Opening,
    Ending,
    Insert,
}

impl SongCategory {
    /// Derive the category from a free-text type string by prefix match.
    ///
    /// Anything that is neither an opening nor an ending (including the bare
    /// "song" marker some logs carry) counts as an insert.
    pub fn from_type_text(text: &str) -> Self {
        if text.starts_with("Opening") {
            SongCategory::Opening
        } else if text.starts_with("Ending") {
            SongCategory::Ending
        } else {
            SongCategory::Insert
        }
    }
}

impl SongEntry {
    pub fn category(&self) -> SongCategory {
        SongCategory::from_type_text(&self.type_text)
    }

    /// Answer record for the given player, if the log has one for this song.
    ///
    /// Matched case-insensitively: the caller passes canonical roster
    /// spellings, which may differ in case from what the log carries.
    pub fn answer_for(&self, player: &str) -> Option<&PlayerAnswer> {
        let needle = player.to_lowercase();
        self.players.iter().find(|ans| ans.name.to_lowercase() == needle)
    }
}
