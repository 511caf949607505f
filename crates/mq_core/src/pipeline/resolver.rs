//! Team resolution: mapping the flat player names of an answer log onto
//! roster teams.

use tracing::{debug, warn};

use crate::error::ResolveError;
use crate::models::Team;
use crate::roster::Roster;

/// Outcome of team resolution: the teams that could be built plus every
/// name that could not be placed. Unknown names never abort resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTeams {
    /// Resolved teams, ordered by ascending DE seed.
    pub teams: Vec<Team>,
    pub errors: Vec<ResolveError>,
}

/// Resolve log player names into roster teams.
///
/// Works through the unresolved names front to back: the first name's roster
/// team is instantiated with every roster member present
/// (case-insensitively) in the supplied names, and all of that team's names
/// leave the unresolved set at once. A name with no roster entry is recorded
/// as [`ResolveError::UnknownPlayer`] and dropped on its own. The loop ends
/// when the unresolved set is empty.
pub fn resolve_teams(player_names: &[String], roster: &Roster) -> ResolvedTeams {
    let mut unresolved: Vec<String> = player_names.to_vec();
    let mut teams: Vec<Team> = Vec::new();
    let mut errors: Vec<ResolveError> = Vec::new();

    while !unresolved.is_empty() {
        let first = unresolved[0].clone();
        match roster.team_of(&first) {
            Some(entry) => {
                // Keep canonical roster spellings, restricted to players the
                // log actually has.
                let present: Vec<String> = entry
                    .players
                    .iter()
                    .filter(|canonical| {
                        player_names
                            .iter()
                            .any(|name| name.to_lowercase() == canonical.to_lowercase())
                    })
                    .cloned()
                    .collect();
                unresolved.retain(|name| {
                    !entry
                        .players
                        .iter()
                        .any(|canonical| canonical.to_lowercase() == name.to_lowercase())
                });
                debug!(team = %entry.name, players = present.len(), "resolved team");
                teams.push(Team {
                    name: entry.name.clone(),
                    seed: entry.seed,
                    players: present,
                });
            }
            None => {
                warn!(player = %first, "player not found in roster");
                errors.push(ResolveError::UnknownPlayer(first));
                unresolved.remove(0);
            }
        }
    }

    // Lower seed number = higher rank; the report lists teams in that order.
    teams.sort_by_key(|team| team.seed);
    ResolvedTeams { teams, errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::RosterTeam;

    fn roster() -> Roster {
        Roster {
            teams: vec![
                RosterTeam {
                    name: "Shake the DiCE".into(),
                    seed: 14,
                    players: vec!["Carol".into(), "Dave".into()],
                },
                RosterTeam {
                    name: "HOW'S IT GOING?".into(),
                    seed: 12,
                    players: vec!["Alice".into(), "Bob".into()],
                },
            ],
        }
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_both_teams_seed_ordered() {
        let resolved = resolve_teams(&names(&["Carol", "Dave", "Alice", "Bob"]), &roster());
        assert!(resolved.errors.is_empty());
        assert_eq!(resolved.teams.len(), 2);
        // Seed 12 sorts ahead of seed 14 regardless of log order.
        assert_eq!(resolved.teams[0].name, "HOW'S IT GOING?");
        assert_eq!(resolved.teams[1].name, "Shake the DiCE");
    }

    #[test]
    fn normalizes_case_to_roster_spelling() {
        let resolved = resolve_teams(&names(&["alice", "BOB"]), &roster());
        assert_eq!(resolved.teams.len(), 1);
        assert_eq!(resolved.teams[0].players, vec!["Alice".to_string(), "Bob".to_string()]);
    }

    #[test]
    fn partial_team_keeps_only_present_players() {
        let resolved = resolve_teams(&names(&["Dave"]), &roster());
        assert_eq!(resolved.teams.len(), 1);
        assert_eq!(resolved.teams[0].players, vec!["Dave".to_string()]);
    }

    #[test]
    fn unknown_player_reported_and_skipped() {
        let resolved = resolve_teams(&names(&["Mallory", "Alice", "Bob", "Carol"]), &roster());
        assert_eq!(
            resolved.errors,
            vec![ResolveError::UnknownPlayer("Mallory".into())]
        );
        assert_eq!(resolved.teams.len(), 2);
    }

    #[test]
    fn empty_input_resolves_nothing() {
        let resolved = resolve_teams(&[], &roster());
        assert!(resolved.teams.is_empty());
        assert!(resolved.errors.is_empty());
    }
}
