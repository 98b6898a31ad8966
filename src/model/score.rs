use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::player::PlayerId;

/// Gross strokes entered for one hole of one game, keyed by player.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct HoleScore {
    pub game_id: i64,
    pub hole: u8,
    #[serde(default)]
    pub strokes: BTreeMap<PlayerId, i32>,
}

impl HoleScore {
    #[must_use]
    pub fn new(game_id: i64, hole: u8) -> Self {
        Self {
            game_id,
            hole,
            strokes: BTreeMap::new(),
        }
    }

    /// Gross score, only when a positive value was entered. Zero means "not entered".
    #[must_use]
    pub fn gross(&self, player: PlayerId) -> Option<i32> {
        self.strokes.get(&player).copied().filter(|s| *s > 0)
    }

    pub fn set(&mut self, player: PlayerId, strokes: i32) {
        if strokes > 0 {
            self.strokes.insert(player, strokes);
        } else {
            self.strokes.remove(&player);
        }
    }

    #[must_use]
    pub fn with(mut self, player: PlayerId, strokes: i32) -> Self {
        self.set(player, strokes);
        self
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreDisplay {
    Condor,
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogey,
    QuadrupleBogey,
    Other,
}

impl ScoreDisplay {
    /// Label for a score relative to par, `score - par`.
    #[must_use]
    pub fn from_i32(i: i32) -> Self {
        match i {
            i32::MIN..=-4 => ScoreDisplay::Condor,
            -3 => ScoreDisplay::Albatross,
            -2 => ScoreDisplay::Eagle,
            -1 => ScoreDisplay::Birdie,
            0 => ScoreDisplay::Par,
            1 => ScoreDisplay::Bogey,
            2 => ScoreDisplay::DoubleBogey,
            3 => ScoreDisplay::TripleBogey,
            4 => ScoreDisplay::QuadrupleBogey,
            _ => ScoreDisplay::Other,
        }
    }
}

impl From<i32> for ScoreDisplay {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}
