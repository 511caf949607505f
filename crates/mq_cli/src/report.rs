//! Plain-text rendering of a finished match report.

use std::fmt::Write;

use mq_core::{MatchReport, TeamGameStats};

fn fmt_avg(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "-".to_string(),
    }
}

fn team_line(stats: &TeamGameStats) -> String {
    format!(
        "rig {}, sniped {}, rig missed {}, hits OP {} / ED {} / IN {}, avg correct diff {}",
        stats.rig,
        stats.sniped,
        stats.rig_missed,
        stats.ops_hit,
        stats.eds_hit,
        stats.ins_hit,
        fmt_avg(stats.avg_correct_difficulty()),
    )
}

/// Render the report as the terminal table shown to the user.
pub fn render_report(report: &MatchReport, bracket: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(bracket) = bracket {
        let _ = writeln!(out, "{bracket}");
    }
    let (a, b) = (&report.teams[0], &report.teams[1]);
    let _ = writeln!(out, "{} (seed {}) vs {} (seed {})", a.name, a.seed, b.name, b.seed);
    let _ = writeln!(out);

    for (idx, game) in report.games.iter().enumerate() {
        let meta = &game.metadata;
        let _ = writeln!(
            out,
            "Game {}: {}-{}  (OP {} / ED {} / IN {}, avg diff {})",
            idx + 1,
            game.teams[0].score,
            game.teams[1].score,
            meta.ops,
            meta.eds,
            meta.ins,
            fmt_avg(meta.avg_difficulty),
        );
        let _ = writeln!(out, "  {}: {}", a.name, team_line(&game.teams[0]));
        let _ = writeln!(out, "  {}: {}", b.name, team_line(&game.teams[1]));
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Totals: points {:.1}-{:.1}, score {}-{}{}",
        report.points[0],
        report.points[1],
        report.scores[0],
        report.scores[1],
        if report.tie_broken { "  (score tie-break applied)" } else { "" },
    );
    for warning in &report.warnings {
        let _ = writeln!(out, "Warning: {warning}");
    }
    for failure in &report.document_failures {
        let _ = writeln!(
            out,
            "Warning: document {} dropped: {}",
            failure.document_index + 1,
            failure.error
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mq_core::{Game, GameMetadata, Team};

    fn report() -> MatchReport {
        let game = Game {
            metadata: GameMetadata { ops: 6, eds: 7, ins: 7, avg_difficulty: Some(24.4) },
            teams: [
                TeamGameStats {
                    score: 10,
                    rig: 10,
                    sniped: 4,
                    ops_hit: 5,
                    eds_hit: 2,
                    ins_hit: 3,
                    total_difficulty_sum: 273.0,
                    ..Default::default()
                },
                TeamGameStats {
                    score: 13,
                    rig: 15,
                    rig_missed: 3,
                    sniped: 1,
                    ops_hit: 6,
                    eds_hit: 6,
                    ins_hit: 1,
                    total_difficulty_sum: 321.1,
                    pts_gain: 1.0,
                    ..Default::default()
                },
            ],
        };
        MatchReport {
            teams: vec![
                Team { name: "HOW'S IT GOING?".into(), seed: 12, players: vec!["Alice".into()] },
                Team { name: "Shake the DiCE".into(), seed: 14, players: vec!["Carol".into()] },
            ],
            games: vec![game],
            points: [0.0, 1.0],
            scores: [10, 13],
            tie_broken: false,
            warnings: vec![],
            document_failures: vec![],
        }
    }

    #[test]
    fn renders_header_games_and_totals() {
        let text = render_report(&report(), Some("Losers Bracket 1"));
        assert!(text.starts_with("Losers Bracket 1\n"));
        assert!(text.contains("HOW'S IT GOING? (seed 12) vs Shake the DiCE (seed 14)"));
        assert!(text.contains("Game 1: 10-13  (OP 6 / ED 7 / IN 7, avg diff 24.4)"));
        assert!(text.contains("avg correct diff 27.3"));
        assert!(text.contains("Totals: points 0.0-1.0, score 10-13"));
    }

    #[test]
    fn zero_score_average_renders_as_dash() {
        let mut r = report();
        r.games[0].teams[0].score = 0;
        let text = render_report(&r, None);
        assert!(text.contains("avg correct diff -"));
    }

    #[test]
    fn tie_break_is_called_out() {
        let mut r = report();
        r.tie_broken = true;
        let text = render_report(&r, None);
        assert!(text.contains("(score tie-break applied)"));
    }
}
