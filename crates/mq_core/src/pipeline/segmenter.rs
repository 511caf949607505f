//! Game segmentation: splitting an ordered answer log into contiguous games.

use crate::models::SongEntry;

/// Split a chronologically ordered song log into games.
///
/// Each game is a maximal run of entries whose `song_number` advances by
/// exactly one. Any other step (gap, repeat, or backwards jump) closes the
/// current game and opens the next. The first entry always opens a game, at
/// whatever index the log starts at; a trailing partial run still closes as
/// its own game. Empty input yields no games.
pub fn segment_games(songs: &[SongEntry]) -> Vec<&[SongEntry]> {
    let mut games: Vec<&[SongEntry]> = Vec::new();
    if songs.is_empty() {
        return games;
    }
    let mut start = 0;
    for idx in 1..songs.len() {
        let expected = songs[idx - 1].song_number.checked_add(1);
        if Some(songs[idx].song_number) != expected {
            games.push(&songs[start..idx]);
            start = idx;
        }
    }
    games.push(&songs[start..]);
    games
}
