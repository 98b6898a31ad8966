use thiserror::Error;

use crate::model::PlayerId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("invalid teams: {0}")]
    InvalidTeams(String),
    #[error("invalid course: {0}")]
    InvalidCourse(String),
    #[error("invalid shot: {0}")]
    InvalidShot(String),
    #[error("shot {shot} on hole {hole} already recorded for player {player}")]
    DuplicateShot { player: PlayerId, hole: u8, shot: u8 },
    #[error("no shot {shot} on hole {hole} for player {player}")]
    ShotNotFound { player: PlayerId, hole: u8, shot: u8 },
    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),
    #[error("config error: {0}")]
    Config(String),
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<String> for CoreError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for CoreError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}
