pub mod course;
pub mod game;
pub mod player;
pub mod score;
pub mod shot;
pub mod standing;

pub use course::*;
pub use game::*;
pub use player::*;
pub use score::*;
pub use shot::*;
pub use standing::*;
