//! Scoring core for a recreational golf scorecard: handicap stroke allocation,
//! net scores, Stableford points, standings for each game format, and the shot
//! chain that infers how far each tracked shot carried.
//!
//! Everything here is synchronous and in-memory. Persistence, sync and the UI live
//! outside the crate and hand in already-loaded records.

pub mod config;
pub mod error;
pub mod model;
pub mod score;
pub mod shots;

pub use config::{ScoringConfig, StablefordTable};
pub use error::CoreError;
pub use score::RoundContext;
pub use shots::ShotChain;
