//! # mq_core - Music-Quiz Tournament Match Statistics
//!
//! Turns chronological answer logs from a music-identification tournament
//! into per-game, per-team performance statistics for display.
//!
//! The pipeline is a synchronous, single-pass computation over
//! fully-materialized input:
//! raw log → resolved teams → segmented games → per-game stats → point
//! totals. Each run is a pure function of the supplied documents and roster;
//! nothing is held across invocations.

pub mod document;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod roster;

pub use document::{parse_song_log, player_names, read_song_log};
pub use error::{DocumentError, PipelineError, ResolveError, RosterError, Warning};
pub use models::{
    AnimeTitle, Game, GameMetadata, PlayerAnswer, RigEntry, SongCategory, SongEntry, Team,
    TeamGameStats,
};
pub use pipeline::{build_match_report, resolve_teams, DocumentFailure, MatchReport, ResolvedTeams};
pub use roster::{Roster, RosterTeam};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn log_entry(number: u32, type_text: &str, alice: bool, carol: bool) -> serde_json::Value {
        json!({
            "name": format!("song {number}"),
            "artist": "artist",
            "anime": { "english": "anime", "romaji": "anime" },
            "songNumber": number,
            "difficulty": 42.5,
            "type": type_text,
            "players": [
                { "name": "Alice", "correct": alice },
                { "name": "Carol", "correct": carol }
            ],
            "fromList": []
        })
    }

    #[test]
    fn end_to_end_from_json_documents() {
        let roster = Roster::from_json_str(
            r#"{
                "teams": [
                    { "name": "A", "seed": 3, "players": ["Alice"] },
                    { "name": "B", "seed": 7, "players": ["Carol"] }
                ]
            }"#,
        )
        .unwrap();

        let doc = json!([
            log_entry(0, "Opening 1", true, false),
            log_entry(1, "Ending 1", true, true),
            log_entry(2, "Insert Song", false, false),
            // New game after the gap.
            log_entry(4, "Opening 2", false, true)
        ]);
        let songs = parse_song_log(&doc.to_string()).unwrap();

        let resolved = resolve_teams(&player_names(&songs), &roster);
        assert!(resolved.errors.is_empty());

        let report = build_match_report(&[songs], &resolved.teams).unwrap();
        assert_eq!(report.games.len(), 2);
        assert_eq!(report.scores, [2, 2]);
        // A takes game one 2-1, B takes game two 1-0.
        assert_eq!(report.games[0].teams[0].pts_gain, 1.0);
        assert_eq!(report.games[1].teams[1].pts_gain, 1.0);
        assert_eq!(report.points, [1.0, 1.0]);
        assert_eq!(report.warnings, vec![Warning::AmbiguousOutcome]);
    }
}
