//! Stat accumulation for one segmented game.

use crate::error::PipelineError;
use crate::models::{Game, GameMetadata, SongCategory, SongEntry, Team, TeamGameStats};
use crate::pipeline::points;

/// Score one game's songs for the two teams, in team order.
///
/// A team's `correct` on a song is its first (representative) player's
/// answer record; a song with no record for that player is a data-integrity
/// fault and fails the whole call. A team is "on rig" for a song when any of
/// its players appears in the song's pre-match rig list. Both lookups match
/// case-insensitively, the same normalization resolution uses.
pub fn accumulate_game(songs: &[SongEntry], teams: &[Team; 2]) -> Result<Game, PipelineError> {
    let mut metadata = GameMetadata::default();
    let mut stats = [TeamGameStats::default(), TeamGameStats::default()];
    let mut difficulty_total = 0.0;

    for song in songs {
        let category = song.category();
        match category {
            SongCategory::Opening => metadata.ops += 1,
            SongCategory::Ending => metadata.eds += 1,
            SongCategory::Insert => metadata.ins += 1,
        }
        difficulty_total += song.difficulty;

        for (team, team_stats) in teams.iter().zip(stats.iter_mut()) {
            let representative =
                team.players
                    .first()
                    .ok_or_else(|| PipelineError::EmptyTeam { team: team.name.clone() })?;
            let correct = song
                .answer_for(representative)
                .ok_or_else(|| PipelineError::MissingAnswerRecord {
                    player: representative.clone(),
                    song_number: song.song_number,
                })?
                .correct;
            let on_rig = song.from_list.iter().any(|entry| {
                let rigger = entry.name.to_lowercase();
                team.players.iter().any(|p| p.to_lowercase() == rigger)
            });

            if correct {
                team_stats.score += 1;
                team_stats.total_difficulty_sum += song.difficulty;
                match category {
                    SongCategory::Opening => team_stats.ops_hit += 1,
                    SongCategory::Ending => team_stats.eds_hit += 1,
                    SongCategory::Insert => team_stats.ins_hit += 1,
                }
            }
            if on_rig {
                team_stats.rig += 1;
                if !correct {
                    team_stats.rig_missed += 1;
                }
            } else if correct {
                team_stats.sniped += 1;
            }
        }
    }

    if !songs.is_empty() {
        metadata.avg_difficulty = Some(difficulty_total / songs.len() as f64);
    }

    let (pts_a, pts_b) = points::pts_gain(stats[0].score, stats[1].score);
    stats[0].pts_gain = pts_a;
    stats[1].pts_gain = pts_b;

    Ok(Game { metadata, teams: stats })
}
