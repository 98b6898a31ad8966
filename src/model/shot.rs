use serde::{Deserialize, Serialize};

use super::player::PlayerId;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShotKey {
    pub player: PlayerId,
    pub hole: u8,
    pub shot: u8,
}

impl ShotKey {
    #[must_use]
    pub fn new(player: PlayerId, hole: u8, shot: u8) -> Self {
        Self { player, hole, shot }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Club {
    Driver,
    Wood(u8),
    Hybrid(u8),
    Iron(u8),
    PitchingWedge,
    GapWedge,
    SandWedge,
    LobWedge,
    Putter,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShotResult {
    Fairway,
    Green,
    Rough,
    Bunker,
    Hazard,
    OutOfBounds,
    Left,
    Right,
    Short,
    Long,
    Holed,
}

/// Where a putt finished relative to the hole. A long putt ran past it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PuttBias {
    #[default]
    Exact,
    Long,
    Short,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Shot {
    pub game_id: i64,
    pub key: ShotKey,
    /// Yards to the hole after this shot. For putts this is derived from `putt_feet`.
    pub remaining_yards: Option<i32>,
    #[serde(default)]
    pub putt: bool,
    #[serde(default)]
    pub putt_feet: Option<i32>,
    #[serde(default)]
    pub bias: PuttBias,
    #[serde(default)]
    pub club: Option<Club>,
    #[serde(default)]
    pub result: Option<ShotResult>,
    /// Derived by the shot chain; never entered directly.
    #[serde(default)]
    pub carry: Option<i32>,
}

/// Feet to yards, rounded to the nearest yard.
#[must_use]
pub fn feet_to_yards(feet: i32) -> i32 {
    (f64::from(feet) / 3.0).round() as i32
}

impl Shot {
    #[must_use]
    pub fn full(game_id: i64, key: ShotKey, remaining_yards: i32) -> Self {
        Self {
            game_id,
            key,
            remaining_yards: Some(remaining_yards),
            putt: false,
            putt_feet: None,
            bias: PuttBias::Exact,
            club: None,
            result: None,
            carry: None,
        }
    }

    #[must_use]
    pub fn putt(game_id: i64, key: ShotKey, feet: i32, bias: PuttBias) -> Self {
        Self {
            game_id,
            key,
            remaining_yards: Some(feet_to_yards(feet)),
            putt: true,
            putt_feet: Some(feet),
            bias,
            club: Some(Club::Putter),
            result: None,
            carry: None,
        }
    }

    #[must_use]
    pub fn with_club(mut self, club: Club) -> Self {
        self.club = Some(club);
        self
    }

    /// Remaining distance as seen by the previous shot. A long putt counts as
    /// negative: the earlier shot ran past the hole by that much.
    #[must_use]
    pub fn effective_remaining(&self) -> Option<i32> {
        let yards = self.remaining_yards?;
        if self.putt && self.bias == PuttBias::Long {
            Some(-yards)
        } else {
            Some(yards)
        }
    }

    pub(crate) fn sync_putt_distance(&mut self) {
        if self.putt {
            if let Some(feet) = self.putt_feet {
                self.remaining_yards = Some(feet_to_yards(feet));
            }
        }
    }
}

/// Fields the user can change after a shot is entered.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ShotEdit {
    pub remaining_yards: Option<i32>,
    pub putt: Option<bool>,
    pub putt_feet: Option<i32>,
    pub bias: Option<PuttBias>,
    pub club: Option<Club>,
    pub result: Option<ShotResult>,
}

impl ShotEdit {
    pub(crate) fn apply(&self, shot: &mut Shot) {
        if let Some(yards) = self.remaining_yards {
            shot.remaining_yards = Some(yards);
        }
        if let Some(putt) = self.putt {
            shot.putt = putt;
        }
        if let Some(feet) = self.putt_feet {
            shot.putt_feet = Some(feet);
        }
        if let Some(bias) = self.bias {
            shot.bias = bias;
        }
        if let Some(club) = self.club {
            shot.club = Some(club);
        }
        if let Some(result) = self.result {
            shot.result = Some(result);
        }
        shot.sync_putt_distance();
    }
}
