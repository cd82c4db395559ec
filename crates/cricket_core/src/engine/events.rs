//! Structured events emitted while a simulation runs.
//!
//! The engine never prints. Everything a commentator, log pipeline or UI
//! could want is published as a [`SimEvent`] to whatever [`NarrationSink`]
//! the caller supplies. Delivery is fire-and-forget: sinks cannot fail and
//! cannot push back on the simulation.

use serde::{Deserialize, Serialize};

use super::outcome::DeliveryOutcome;
use super::scoreboard::Scoreboard;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    GameStarted {
        team_a: String,
        team_b: String,
        captain_a: Option<String>,
        captain_b: Option<String>,
        overs: u32,
    },
    InningsStarted {
        team: String,
    },
    BallPlayed {
        /// Overs already completed when the ball was bowled.
        over: u32,
        /// Ball number within the current over, starting at 1.
        ball: u32,
        batsman: String,
        bowler: String,
        outcome: DeliveryOutcome,
    },
    WicketFallen {
        batsman: String,
        wickets: u8,
        /// The incoming batsman, or `None` when the side is all out.
        new_batsman: Option<String>,
    },
    OverCompleted {
        over: u32,
    },
    InningsEnded {
        team: String,
        score: Scoreboard,
    },
    MatchWon {
        team: String,
        winner_score: Scoreboard,
        loser_score: Scoreboard,
    },
    TournamentWon {
        team: String,
        captain: Option<String>,
    },
}

/// Observer for simulation events.
pub trait NarrationSink {
    fn publish(&mut self, event: SimEvent);
}

/// Discards every event. The default when nobody is listening.
#[derive(Debug, Default)]
pub struct NullSink;

impl NarrationSink for NullSink {
    fn publish(&mut self, _event: SimEvent) {}
}

/// Buffers every event in order. Used by tests to assert on the stream.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<SimEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NarrationSink for RecordingSink {
    fn publish(&mut self, event: SimEvent) {
        self.events.push(event);
    }
}
