use serde::{Deserialize, Serialize};

use super::{Player, Team};
use crate::engine::scoreboard::Scoreboard;

/// Which side of a fixture won it, in the order the teams were passed in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchSide {
    TeamA,
    TeamB,
}

impl MatchSide {
    pub fn other(self) -> Self {
        match self {
            MatchSide::TeamA => MatchSide::TeamB,
            MatchSide::TeamB => MatchSide::TeamA,
        }
    }
}

/// How the winner was separated from the loser.
///
/// `Runs` is the ordinary case. The remaining variants record which rung of
/// the tie ladder settled a level match: one-over eliminators first, then
/// fewer wickets lost across the main innings, then a seeded coin toss.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchDecision {
    Runs,
    SuperOver,
    FewerWickets,
    CoinToss,
}

/// Outcome of a single fixture. Scores are the main-innings scoreboards
/// even when a tie ladder decided the match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub winner: MatchSide,
    pub winner_name: String,
    pub winner_score: Scoreboard,
    pub loser_score: Scoreboard,
    pub decided_by: MatchDecision,
}

/// Outcome of a whole tournament. The captain is absent only for the
/// degenerate case of a champion with an empty roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResult {
    pub champion: Team,
    pub captain: Option<Player>,
}
