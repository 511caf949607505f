//! Tournament roster configuration.
//!
//! The roster is the static player → team → seed mapping the team resolver
//! works against. It is loaded once, validated, and passed into the pipeline
//! explicitly; nothing in this crate reads it from ambient state. Test
//! fixtures just build a [`Roster`] value by hand.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// One team's roster entry: canonical name, external DE seed, and the
/// canonical spellings of its players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterTeam {
    pub name: String,
    pub seed: u32,
    pub players: Vec<String>,
}

/// The full static roster for a tournament.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub teams: Vec<RosterTeam>,
}

impl Roster {
    /// Parse and validate a roster from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, RosterError> {
        let roster: Roster = serde_json::from_str(text)?;
        roster.validate()?;
        Ok(roster)
    }

    /// Load and validate a roster from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Every team must have at least one player, and no player may appear
    /// (case-insensitively) on two teams.
    fn validate(&self) -> Result<(), RosterError> {
        let mut seen: Vec<(String, &str)> = Vec::new();
        for team in &self.teams {
            if team.players.is_empty() {
                return Err(RosterError::EmptyTeam { team: team.name.clone() });
            }
            for player in &team.players {
                let key = player.to_lowercase();
                if let Some((_, other)) = seen.iter().find(|(k, _)| *k == key) {
                    return Err(RosterError::DuplicatePlayer {
                        player: player.clone(),
                        team_a: (*other).to_string(),
                        team_b: team.name.clone(),
                    });
                }
                seen.push((key, team.name.as_str()));
            }
        }
        Ok(())
    }

    /// The roster team a player belongs to, matched case-insensitively
    /// against canonical spellings.
    pub fn team_of(&self, player: &str) -> Option<&RosterTeam> {
        let needle = player.to_lowercase();
        self.teams
            .iter()
            .find(|team| team.players.iter().any(|p| p.to_lowercase() == needle))
    }
}
