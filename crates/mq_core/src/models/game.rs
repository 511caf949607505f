use serde::{Deserialize, Serialize};

/// Per-game song counts, independent of which team answered what.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GameMetadata {
    /// Openings played this game.
    pub ops: u32,
    /// Endings played this game.
    pub eds: u32,
    /// Inserts played this game.
    pub ins: u32,
    /// Mean difficulty across all the game's songs. `None` only for a game
    /// with no songs, which the segmenter never produces.
    pub avg_difficulty: Option<f64>,
}

/// Per-team, per-game performance counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TeamGameStats {
    /// Songs answered correctly.
    pub score: u32,
    /// Songs from the team's own pre-match rig list that were played.
    pub rig: u32,
    /// Correct answers on songs NOT from the team's own rig list.
    pub sniped: u32,
    /// Rig-list songs played but answered incorrectly.
    pub rig_missed: u32,
    /// Correct answers on openings.
    pub ops_hit: u32,
    /// Correct answers on endings.
    pub eds_hit: u32,
    /// Correct answers on inserts.
    pub ins_hit: u32,
    /// Sum of difficulty ratings over correctly-answered songs.
    pub total_difficulty_sum: f64,
    /// Match points earned this game: 1 win, 0.5 tie, 0 loss.
    pub pts_gain: f64,
}

impl TeamGameStats {
    /// Mean difficulty of the team's correct answers, or `None` when the
    /// team scored nothing (the report leaves that cell blank).
    pub fn avg_correct_difficulty(&self) -> Option<f64> {
        if self.score == 0 {
            None
        } else {
            Some(self.total_difficulty_sum / self.score as f64)
        }
    }
}

/// One contiguous run of songs scored for exactly two teams.
///
/// `teams` is positionally aligned with the resolved team list the pipeline
/// was given: index 0 is team 0's stats, index 1 team 1's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub metadata: GameMetadata,
    pub teams: [TeamGameStats; 2],
}
