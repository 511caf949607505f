use serde::{Deserialize, Serialize};

/// A resolved tournament team as it participates in a match.
///
/// `players` holds canonical roster spellings, in roster order, restricted to
/// the players actually present in the answer log. The first entry is the
/// team's representative answer: team scoring reads that player's record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    /// External double-elimination bracket seed. Lower = higher rank.
    /// Independent of anything that happens in the match.
    pub seed: u32,
    pub players: Vec<String>,
}
