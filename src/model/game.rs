use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::course::Course;
use super::player::{PlayerId, Roster};
use crate::error::CoreError;

/// Format as chosen on the setup screen, before team shape is checked.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    Stroke,
    Stableford,
    TeamStableford,
    BestBallStroke,
    BestBallMatch,
    Scramble,
}

impl FormatKind {
    #[must_use]
    pub fn is_team_format(self) -> bool {
        !matches!(self, FormatKind::Stroke | FormatKind::Stableford)
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FormatKind::Stroke => "Stroke Play",
            FormatKind::Stableford => "Stableford",
            FormatKind::TeamStableford => "Team Stableford",
            FormatKind::BestBallStroke => "Best Ball",
            FormatKind::BestBallMatch => "Best Ball Match Play",
            FormatKind::Scramble => "Scramble",
        };
        write!(f, "{s}")
    }
}

/// Two players in roster order. The first member is where scramble scores are stored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Team {
    pub name: String,
    pub players: [PlayerId; 2],
}

impl Team {
    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.contains(&id)
    }

    #[must_use]
    pub fn first(&self) -> PlayerId {
        self.players[0]
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TeamPair {
    pub a: Team,
    pub b: Team,
}

impl TeamPair {
    #[must_use]
    pub fn teams(&self) -> [&Team; 2] {
        [&self.a, &self.b]
    }

    /// Checks the raw assignment (exactly two teams of two, every member on the game
    /// roster, nobody on both teams) and orders each team's members by roster position.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the assignment does not have that shape.
    pub fn resolve(
        teams: &BTreeMap<String, BTreeSet<PlayerId>>,
        roster: &[PlayerId],
    ) -> Result<Self, CoreError> {
        if teams.len() != 2 {
            return Err(CoreError::InvalidTeams(format!(
                "expected 2 teams, got {}",
                teams.len()
            )));
        }

        let mut resolved = Vec::with_capacity(2);
        for (name, members) in teams {
            if members.len() != 2 {
                return Err(CoreError::InvalidTeams(format!(
                    "team {name} has {} players, expected 2",
                    members.len()
                )));
            }
            if let Some(missing) = members.iter().find(|id| !roster.contains(id)) {
                return Err(CoreError::UnknownPlayer(*missing));
            }
            let mut ordered: Vec<PlayerId> = members.iter().copied().collect();
            ordered.sort_by_key(|id| roster.iter().position(|r| r == id));
            resolved.push(Team {
                name: name.clone(),
                players: [ordered[0], ordered[1]],
            });
        }

        let b = resolved.pop().ok_or("missing second team")?;
        let a = resolved.pop().ok_or("missing first team")?;
        if a.players.iter().any(|id| b.contains(*id)) {
            return Err(CoreError::InvalidTeams(format!(
                "a player is on both {} and {}",
                a.name, b.name
            )));
        }

        // keep the team holding the earliest roster player first
        let pos = |t: &Team| roster.iter().position(|r| *r == t.first());
        if pos(&b) < pos(&a) {
            Ok(Self { a: b, b: a })
        } else {
            Ok(Self { a, b })
        }
    }
}

/// Format resolved at game setup. Team formats carry a validated `TeamPair`,
/// so the aggregators never see a malformed team layout.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameFormat {
    Stroke,
    Stableford,
    TeamStableford { teams: TeamPair },
    BestBallStroke { teams: TeamPair },
    BestBallMatch { teams: TeamPair },
    Scramble { teams: TeamPair },
}

impl GameFormat {
    /// # Errors
    ///
    /// Will return `Err` if a team format is chosen without a valid two-by-two team
    /// assignment.
    pub fn resolve(
        kind: FormatKind,
        teams: Option<&BTreeMap<String, BTreeSet<PlayerId>>>,
        roster: &[PlayerId],
    ) -> Result<Self, CoreError> {
        let pair = || -> Result<TeamPair, CoreError> {
            let teams = teams.ok_or_else(|| {
                CoreError::InvalidTeams(format!("{kind} needs team assignments"))
            })?;
            TeamPair::resolve(teams, roster)
        };

        Ok(match kind {
            FormatKind::Stroke => GameFormat::Stroke,
            FormatKind::Stableford => GameFormat::Stableford,
            FormatKind::TeamStableford => GameFormat::TeamStableford { teams: pair()? },
            FormatKind::BestBallStroke => GameFormat::BestBallStroke { teams: pair()? },
            FormatKind::BestBallMatch => GameFormat::BestBallMatch { teams: pair()? },
            FormatKind::Scramble => GameFormat::Scramble { teams: pair()? },
        })
    }

    #[must_use]
    pub fn kind(&self) -> FormatKind {
        match self {
            GameFormat::Stroke => FormatKind::Stroke,
            GameFormat::Stableford => FormatKind::Stableford,
            GameFormat::TeamStableford { .. } => FormatKind::TeamStableford,
            GameFormat::BestBallStroke { .. } => FormatKind::BestBallStroke,
            GameFormat::BestBallMatch { .. } => FormatKind::BestBallMatch,
            GameFormat::Scramble { .. } => FormatKind::Scramble,
        }
    }

    #[must_use]
    pub fn teams(&self) -> Option<&TeamPair> {
        match self {
            GameFormat::Stroke | GameFormat::Stableford => None,
            GameFormat::TeamStableford { teams }
            | GameFormat::BestBallStroke { teams }
            | GameFormat::BestBallMatch { teams }
            | GameFormat::Scramble { teams } => Some(teams),
        }
    }
}

/// What the setup screen collects before a `Game` exists.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GameSetup {
    pub id: i64,
    pub course_id: Option<i64>,
    pub players: Vec<PlayerId>,
    pub tee_color: Option<String>,
    pub format: FormatKind,
    #[serde(default)]
    pub teams: Option<BTreeMap<String, BTreeSet<PlayerId>>>,
    #[serde(default)]
    pub tracked_players: BTreeSet<PlayerId>,
    pub created: NaiveDate,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Game {
    pub id: i64,
    pub course_id: Option<i64>,
    pub players: Vec<PlayerId>,
    pub tee_color: Option<String>,
    pub format: GameFormat,
    pub tracked_players: BTreeSet<PlayerId>,
    pub completed: bool,
    pub created: NaiveDate,
}

impl Game {
    /// # Errors
    ///
    /// Will return `Err` if the team assignment does not fit the chosen format, or if
    /// a tracked player is not playing in the game.
    pub fn new(setup: GameSetup) -> Result<Self, CoreError> {
        let format = GameFormat::resolve(setup.format, setup.teams.as_ref(), &setup.players)?;
        if let Some(id) = setup
            .tracked_players
            .iter()
            .find(|id| !setup.players.contains(id))
        {
            return Err(CoreError::UnknownPlayer(*id));
        }
        Ok(Self {
            id: setup.id,
            course_id: setup.course_id,
            players: setup.players,
            tee_color: setup.tee_color,
            format,
            tracked_players: setup.tracked_players,
            completed: false,
            created: setup.created,
        })
    }

    #[must_use]
    pub fn is_tracked(&self, player: PlayerId) -> bool {
        self.tracked_players.contains(&player)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.completed
    }

    pub fn complete(&mut self) {
        self.completed = true;
    }

    /// The explicit tee selection, else the current user's preferred tee, else the
    /// first player (in game order) whose preferred tee the course offers, else the
    /// first tee listed on the course.
    #[must_use]
    pub fn tee_in_effect(&self, course: Option<&Course>, roster: &Roster) -> Option<String> {
        if let Some(tee) = &self.tee_color {
            return Some(tee.clone());
        }
        let course = course?;
        let offered = |tee: &Option<String>| tee.as_ref().filter(|t| course.offers_tee(t)).cloned();

        if let Some(tee) = roster
            .current_user()
            .filter(|p| self.players.contains(&p.id))
            .and_then(|p| offered(&p.preferred_tee))
        {
            return Some(tee);
        }
        self.players
            .iter()
            .filter_map(|id| roster.get(*id))
            .find_map(|p| offered(&p.preferred_tee))
            .or_else(|| course.tee_colors().into_iter().next())
    }
}
