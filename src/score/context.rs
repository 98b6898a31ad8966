use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::allocation::{course_handicap, strokes_for_index};
use super::net::net_score;
use super::stableford::stableford_points;
use crate::config::ScoringConfig;
use crate::error::CoreError;
use crate::model::{
    Course, Game, GameFormat, HOLES_PER_ROUND, HoleScore, Player, PlayerId, Roster, RoundResult,
    ScoreDisplay,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HoleResult {
    pub hole: u8,
    pub par: Option<i32>,
    pub strokes_received: i32,
    pub gross: Option<i32>,
    pub net: Option<i32>,
    pub points: Option<i32>,
    pub display: Option<ScoreDisplay>,
}

/// Sums over recorded holes. `None` when no hole in the range has a value.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub gross: Option<i32>,
    pub net: Option<i32>,
    pub points: Option<i32>,
}

fn add(total: Option<i32>, value: Option<i32>) -> Option<i32> {
    match (total, value) {
        (Some(t), Some(v)) => Some(t.saturating_add(v)),
        (None, v) => v,
        (t, None) => t,
    }
}

impl Totals {
    fn from_holes<'a>(holes: impl Iterator<Item = &'a HoleResult>) -> Self {
        holes.fold(Self::default(), |acc, h| Self {
            gross: add(acc.gross, h.gross),
            net: add(acc.net, h.net),
            points: add(acc.points, h.points),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerCard {
    pub player: PlayerId,
    pub name: String,
    pub course_handicap: i32,
    pub holes: Vec<HoleResult>,
    pub out: Totals,
    #[serde(rename = "in")]
    pub inward: Totals,
    pub total: Totals,
    /// Holes with a gross score, the "thru" figure.
    pub holes_played: u8,
}

/// Everything the scoring pipeline needs for one game, indexed for lookup.
pub struct RoundContext<'a> {
    game: &'a Game,
    course: Option<&'a Course>,
    players: AHashMap<PlayerId, &'a Player>,
    scores: AHashMap<u8, &'a HoleScore>,
    config: &'a ScoringConfig,
}

impl<'a> RoundContext<'a> {
    #[must_use]
    pub fn new(
        game: &'a Game,
        course: Option<&'a Course>,
        roster: &'a Roster,
        scores: &'a [HoleScore],
        config: &'a ScoringConfig,
    ) -> Self {
        let players: AHashMap<PlayerId, &Player> = game
            .players
            .iter()
            .filter_map(|id| roster.get(*id).map(|p| (*id, p)))
            .collect();
        if players.len() != game.players.len() {
            log::warn!(
                "game {} lists {} players but only {} are on the roster",
                game.id,
                game.players.len(),
                players.len()
            );
        }

        let mut by_hole: AHashMap<u8, &HoleScore> = AHashMap::new();
        for score in scores.iter().filter(|s| s.game_id == game.id) {
            if !(1..=HOLES_PER_ROUND).contains(&score.hole) {
                log::warn!("ignoring score for hole {} in game {}", score.hole, game.id);
                continue;
            }
            if let Some(stray) = score.strokes.keys().find(|id| !game.players.contains(id)) {
                log::warn!(
                    "hole {} of game {} has a score for player {stray} who is not playing",
                    score.hole,
                    game.id
                );
            }
            if by_hole.insert(score.hole, score).is_some() {
                log::warn!(
                    "game {} has more than one score record for hole {}, keeping the last",
                    game.id,
                    score.hole
                );
            }
        }

        Self {
            game,
            course,
            players,
            scores: by_hole,
            config,
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        self.game
    }

    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        self.config
    }

    #[must_use]
    pub fn holes(&self) -> RangeInclusive<u8> {
        1..=HOLES_PER_ROUND
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id).copied()
    }

    #[must_use]
    pub fn player_name(&self, id: PlayerId) -> String {
        self.player(id)
            .map_or_else(|| format!("Player {id}"), |p| p.name.clone())
    }

    /// The current user, if the config names one who is playing in this game.
    #[must_use]
    pub fn current_user(&self) -> Option<&Player> {
        self.config.current_user.and_then(|id| self.player(id))
    }

    /// Handicap index, zero when the player is unknown.
    #[must_use]
    pub fn handicap(&self, id: PlayerId) -> f64 {
        self.player(id).map_or(0.0, |p| p.handicap)
    }

    #[must_use]
    pub fn par(&self, hole: u8) -> Option<i32> {
        self.course.and_then(|c| c.par(hole))
    }

    #[must_use]
    pub fn rank(&self, hole: u8) -> Option<u8> {
        self.course.and_then(|c| c.rank(hole))
    }

    #[must_use]
    pub fn strokes_received(&self, id: PlayerId, hole: u8) -> i32 {
        strokes_for_index(self.handicap(id), self.rank(hole))
    }

    #[must_use]
    pub fn gross(&self, id: PlayerId, hole: u8) -> Option<i32> {
        self.scores.get(&hole).and_then(|s| s.gross(id))
    }

    #[must_use]
    pub fn net(&self, id: PlayerId, hole: u8) -> Option<i32> {
        net_score(self.gross(id, hole), self.strokes_received(id, hole))
    }

    #[must_use]
    pub fn points(&self, id: PlayerId, hole: u8) -> Option<i32> {
        let par = self.par(hole)?;
        stableford_points(self.net(id, hole), par, &self.config.stableford)
    }

    #[must_use]
    pub fn hole_result(&self, id: PlayerId, hole: u8) -> HoleResult {
        let par = self.par(hole);
        let net = self.net(id, hole);
        HoleResult {
            hole,
            par,
            strokes_received: self.strokes_received(id, hole),
            gross: self.gross(id, hole),
            net,
            points: par.and_then(|p| stableford_points(net, p, &self.config.stableford)),
            display: net.zip(par).map(|(n, p)| ScoreDisplay::from(n - p)),
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if the player is not part of this game.
    pub fn scorecard(&self, id: PlayerId) -> Result<PlayerCard, CoreError> {
        if !self.game.players.contains(&id) {
            return Err(CoreError::UnknownPlayer(id));
        }
        let holes: Vec<HoleResult> = self.holes().map(|h| self.hole_result(id, h)).collect();
        let holes_played = holes.iter().filter(|h| h.gross.is_some()).count() as u8;

        Ok(PlayerCard {
            player: id,
            name: self.player_name(id),
            course_handicap: course_handicap(self.handicap(id)),
            out: Totals::from_holes(holes.iter().filter(|h| h.hole <= 9)),
            inward: Totals::from_holes(holes.iter().filter(|h| h.hole > 9)),
            total: Totals::from_holes(holes.iter()),
            holes,
            holes_played,
        })
    }

    /// Standings for the game's format.
    #[must_use]
    pub fn standings(&self) -> RoundResult {
        log::debug!(
            "building {} standings for game {}",
            self.game.format.kind(),
            self.game.id
        );
        match &self.game.format {
            GameFormat::Stroke => RoundResult::Standings {
                standings: super::formats::stroke_play(self),
            },
            GameFormat::Stableford => RoundResult::Standings {
                standings: super::formats::stableford(self),
            },
            GameFormat::TeamStableford { teams } => RoundResult::Standings {
                standings: super::formats::team_stableford(self, teams),
            },
            GameFormat::BestBallStroke { teams } => RoundResult::Standings {
                standings: super::formats::best_ball_stroke(self, teams),
            },
            GameFormat::BestBallMatch { teams } => RoundResult::Match {
                result: super::formats::best_ball_match(self, teams),
            },
            GameFormat::Scramble { teams } => RoundResult::Standings {
                standings: super::formats::scramble(self, teams),
            },
        }
    }
}
