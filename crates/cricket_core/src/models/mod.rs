//! Data types consumed and produced by the simulation engine.

pub mod field;
pub mod player;
pub mod result;
pub mod team;

pub use field::{Field, FieldSize};
pub use player::Player;
pub use result::{MatchDecision, MatchResult, MatchSide, TournamentResult};
pub use team::Team;
