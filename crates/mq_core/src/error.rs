use serde::Serialize;
use thiserror::Error;

/// Failures at the document boundary, before anything reaches the
/// aggregation core.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed as JSON but is not an array of song entries.
    /// Covers the "official" tournament export, which is a JSON object.
    #[error("document is not a song-log array")]
    NotSongLog,
}

/// Failures loading or validating a roster configuration.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A player may belong to exactly one roster team.
    #[error("player \"{player}\" is listed on both \"{team_a}\" and \"{team_b}\"")]
    DuplicatePlayer {
        player: String,
        team_a: String,
        team_b: String,
    },

    #[error("roster team \"{team}\" has no players")]
    EmptyTeam { team: String },
}

/// Non-fatal problems found while resolving log player names into teams.
/// Collected and reported in batch; resolution continues past each one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("player \"{0}\" is not on any roster team")]
    UnknownPlayer(String),
}

/// Fatal faults while aggregating one document's games.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The document carries no answer record for a resolved team's
    /// representative player. The document does not match the expected
    /// shape, so it is surfaced rather than silently skipped.
    #[error("no answer record for player \"{player}\" on song {song_number}")]
    MissingAnswerRecord { player: String, song_number: u32 },

    /// The match report needs exactly two resolved teams.
    #[error("expected exactly 2 teams, found {found}")]
    TeamCount { found: usize },

    /// A resolved team ended up with no players present in the log.
    #[error("team \"{team}\" has no players present in the log")]
    EmptyTeam { team: String },
}

/// Non-error conditions worth surfacing alongside a finished report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Warning {
    /// Aggregate match points and aggregate raw scores both tied, so the
    /// score-based tie-break cannot separate the teams. Points stay equal.
    AmbiguousOutcome,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::AmbiguousOutcome => {
                write!(f, "points and raw scores are both tied; leaving points equal")
            }
        }
    }
}
