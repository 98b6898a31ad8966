use serde::{Deserialize, Serialize};
use std::fmt;

use super::player::PlayerId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Entrant {
    Player { id: PlayerId, name: String },
    Team { name: String, players: [PlayerId; 2] },
}

impl Entrant {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Entrant::Player { name, .. } | Entrant::Team { name, .. } => name,
        }
    }
}

/// One row of a leaderboard. Totals cover recorded holes only and are `None`
/// when nothing has been recorded yet.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Standing {
    /// 1-based, shared by tied entrants.
    pub position: usize,
    pub tied: bool,
    pub entrant: Entrant,
    pub gross: Option<i32>,
    pub net: Option<i32>,
    pub points: Option<i32>,
    pub holes_played: u8,
    /// Team handicap shown for scramble teams.
    pub handicap: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchRecord {
    pub won: u8,
    pub lost: u8,
    pub halved: u8,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HoleOutcome {
    WonByA,
    WonByB,
    Halved,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MatchStatus {
    /// Team name in the lead, `None` when all square.
    pub leader: Option<String>,
    pub up: u8,
    pub holes_remaining: u8,
    pub dormie: bool,
    pub closed_out: bool,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.leader {
            None if self.holes_remaining == 0 => write!(f, "Match halved"),
            None => write!(f, "All square"),
            Some(team) if self.closed_out && self.holes_remaining == 0 => {
                write!(f, "{team} wins {} UP", self.up)
            }
            Some(team) if self.closed_out => {
                write!(f, "{team} wins {}&{}", self.up, self.holes_remaining)
            }
            Some(team) if self.dormie => write!(f, "{team} dormie {}", self.up),
            Some(team) => write!(
                f,
                "{team} {} UP with {} to play",
                self.up, self.holes_remaining
            ),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MatchResult {
    pub team_a: String,
    pub team_b: String,
    /// Record from team A's side; team B's is the mirror image.
    pub record_a: MatchRecord,
    pub record_b: MatchRecord,
    /// Decided holes in hole order.
    pub holes: Vec<(u8, HoleOutcome)>,
    pub status: MatchStatus,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoundResult {
    Standings { standings: Vec<Standing> },
    Match { result: MatchResult },
}

impl RoundResult {
    #[must_use]
    pub fn standings(&self) -> Option<&[Standing]> {
        match self {
            RoundResult::Standings { standings } => Some(standings),
            RoundResult::Match { .. } => None,
        }
    }

    #[must_use]
    pub fn match_result(&self) -> Option<&MatchResult> {
        match self {
            RoundResult::Standings { .. } => None,
            RoundResult::Match { result } => Some(result),
        }
    }
}
