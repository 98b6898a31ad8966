use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub type PlayerId = i64;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Handicap index. Zero or negative for scratch and plus handicaps.
    pub handicap: f64,
    #[serde(default)]
    pub current_user: bool,
    #[serde(default)]
    pub preferred_tee: Option<String>,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, handicap: f64) -> Self {
        Self {
            id,
            name: name.into(),
            handicap,
            current_user: false,
            preferred_tee: None,
        }
    }

    #[must_use]
    pub fn with_tee(mut self, tee: impl Into<String>) -> Self {
        self.preferred_tee = Some(tee.into());
        self
    }
}

/// Ordered set of players known to the app. Holds the "current user" flag
/// so that at most one player carries it.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Builds a roster, keeping only the first current-user flag found.
    #[must_use]
    pub fn new(players: Vec<Player>) -> Self {
        let mut roster = Self { players };
        if let Some(id) = roster.players.iter().find(|p| p.current_user).map(|p| p.id) {
            for p in &mut roster.players {
                p.current_user = p.id == id;
            }
        }
        roster
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.current_user)
    }

    /// # Errors
    ///
    /// Will return `Err` if no player with `id` is on the roster.
    pub fn set_current_user(&mut self, id: PlayerId) -> Result<(), CoreError> {
        if self.get(id).is_none() {
            return Err(CoreError::UnknownPlayer(id));
        }
        for p in &mut self.players {
            p.current_user = p.id == id;
        }
        Ok(())
    }

    pub fn clear_current_user(&mut self) {
        for p in &mut self.players {
            p.current_user = false;
        }
    }
}
