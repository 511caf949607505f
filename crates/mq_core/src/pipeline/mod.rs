//! The match statistics aggregation pipeline.
//!
//! Data flows one way: raw log → resolved teams → segmented games →
//! per-game stats → point totals. Every stage is a pure function of its
//! inputs; re-running on the same log and roster rebuilds the same report.

pub mod accumulator;
pub mod points;
pub mod resolver;
pub mod segmenter;


use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{PipelineError, Warning};
use crate::models::{Game, SongEntry, Team};

pub use resolver::{resolve_teams, ResolvedTeams};

/// Margin applied to the aggregate point totals when they tie but the
/// aggregate raw scores do not.
const TIE_BREAK_MARGIN: f64 = 0.1;

/// A document that failed aggregation. Its games are excluded from the
/// report; the remaining documents are processed independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentFailure {
    /// Index of the document in the order it was supplied.
    pub document_index: usize,
    pub error: String,
}

/// The finished match report handed to the display layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    /// The two teams, in the order all per-team values are indexed.
    pub teams: Vec<Team>,
    /// Games in upload order, concatenated across documents.
    pub games: Vec<Game>,
    /// Aggregate match points per team, tie-break applied.
    pub points: [f64; 2],
    /// Aggregate raw score per team across all games.
    pub scores: [u64; 2],
    /// True when the score-based tie-break moved the point totals apart.
    pub tie_broken: bool,
    pub warnings: Vec<Warning>,
    pub document_failures: Vec<DocumentFailure>,
}

/// Run the full pipeline over one or more parsed documents.
///
/// Each document is segmented and scored on its own; a document that fails
/// (missing answer record) is dropped whole and recorded in
/// `document_failures` while the others continue. Needing exactly two teams
/// is the one hard requirement.
///
/// Point totals tie-break: equal aggregate points fall back to aggregate raw
/// score, nudging the totals apart by ±0.1; if the scores tie as well the
/// points stay equal and a [`Warning::AmbiguousOutcome`] is surfaced. The
/// rule compares exactly two teams; nothing is defined or attempted beyond
/// that.
pub fn build_match_report(
    documents: &[Vec<SongEntry>],
    teams: &[Team],
) -> Result<MatchReport, PipelineError> {
    let team_pair: &[Team; 2] = teams
        .try_into()
        .map_err(|_| PipelineError::TeamCount { found: teams.len() })?;

    let mut games: Vec<Game> = Vec::new();
    let mut document_failures: Vec<DocumentFailure> = Vec::new();
    for (document_index, songs) in documents.iter().enumerate() {
        let mut document_games: Vec<Game> = Vec::new();
        let mut failed = false;
        for segment in segmenter::segment_games(songs) {
            match accumulator::accumulate_game(segment, team_pair) {
                Ok(game) => document_games.push(game),
                Err(error) => {
                    warn!(document_index, %error, "dropping document");
                    document_failures.push(DocumentFailure {
                        document_index,
                        error: error.to_string(),
                    });
                    failed = true;
                    break;
                }
            }
        }
        if !failed {
            games.extend(document_games);
        }
    }

    let mut points = [0.0f64; 2];
    let mut scores = [0u64; 2];
    for game in &games {
        for side in 0..2 {
            points[side] += game.teams[side].pts_gain;
            scores[side] += u64::from(game.teams[side].score);
        }
    }

    let mut tie_broken = false;
    let mut warnings: Vec<Warning> = Vec::new();
    if !games.is_empty() && points[0] == points[1] {
        match scores[0].cmp(&scores[1]) {
            std::cmp::Ordering::Greater => {
                points[0] += TIE_BREAK_MARGIN;
                points[1] -= TIE_BREAK_MARGIN;
                tie_broken = true;
            }
            std::cmp::Ordering::Less => {
                points[0] -= TIE_BREAK_MARGIN;
                points[1] += TIE_BREAK_MARGIN;
                tie_broken = true;
            }
            std::cmp::Ordering::Equal => {
                warn!("points and raw scores both tied");
                warnings.push(Warning::AmbiguousOutcome);
            }
        }
    }

    debug!(
        games = games.len(),
        failed_documents = document_failures.len(),
        "built match report"
    );

    Ok(MatchReport {
        teams: teams.to_vec(),
        games,
        points,
        scores,
        tie_broken,
        warnings,
        document_failures,
    })
}
