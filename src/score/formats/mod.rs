pub mod individual;
pub mod match_play;
pub mod scramble;
pub mod team;

pub use individual::*;
pub use match_play::*;
pub use scramble::*;
pub use team::{
    best_ball_hole, best_ball_net, best_ball_stroke, team_stableford, team_stableford_hole,
};
