//! Delivery outcome resolution.
//!
//! The resolver is the only place the engine turns skill ratings into
//! chance. Each delivery draws two independent uniform values, scales them
//! by the batsman's batting, the bowler's bowling and the pitch, and the
//! stronger side takes the ball. Outcomes are tagged values, never strings,
//! so control flow downstream matches on the variant and narration is a
//! pure projection of it.
//!
//! The resolver also owns the innings [`Scoreboard`]. A fresh board is
//! installed at every innings boundary by the innings driver.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::config::SimConfig;
use super::scoreboard::Scoreboard;
use crate::models::{Field, Player};

/// Result of a single delivery: a dismissal, or runs off the bat.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryOutcome {
    Dismissed,
    Runs(u8),
}

impl DeliveryOutcome {
    pub fn is_dismissal(&self) -> bool {
        matches!(self, DeliveryOutcome::Dismissed)
    }

    /// Runs credited by this outcome (0 for a dismissal).
    pub fn runs(&self) -> u32 {
        match self {
            DeliveryOutcome::Dismissed => 0,
            DeliveryOutcome::Runs(n) => u32::from(*n),
        }
    }
}

impl fmt::Display for DeliveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DeliveryOutcome::Dismissed => write!(f, "OUT"),
            DeliveryOutcome::Runs(0) => write!(f, "no run"),
            DeliveryOutcome::Runs(1) => write!(f, "1 run"),
            DeliveryOutcome::Runs(n) => write!(f, "{} runs", n),
        }
    }
}

/// Resolves ball-by-ball outcomes and keeps the innings scoreboard.
#[derive(Debug, Clone)]
pub struct OutcomeResolver {
    field: Field,
    no_ball_chance: f32,
    wide_chance: f32,
    lbw_threshold: f32,
    catch_threshold: f32,
    scoreboard: Scoreboard,
}

impl OutcomeResolver {
    pub fn new(field: Field, config: &SimConfig) -> Self {
        Self {
            field,
            no_ball_chance: config.no_ball_chance,
            wide_chance: config.wide_chance,
            lbw_threshold: config.lbw_threshold,
            catch_threshold: config.catch_threshold,
            scoreboard: Scoreboard::new(),
        }
    }

    /// Resolves one delivery between a batsman and a bowler.
    ///
    /// Draws exactly two uniform values, batting side first, so a seeded
    /// generator replays the same innings ball for ball.
    pub fn resolve_delivery(
        &self,
        batsman: &Player,
        bowler: &Player,
        rng: &mut impl Rng,
    ) -> DeliveryOutcome {
        let batting_strength = batsman.batting * self.field.pitch_conditions * rng.gen::<f32>();
        let bowling_strength = bowler.bowling * self.field.pitch_conditions * rng.gen::<f32>();
        if bowling_strength >= batting_strength {
            DeliveryOutcome::Dismissed
        } else {
            DeliveryOutcome::Runs(rng.gen_range(0..=6))
        }
    }

    /// Leg-before-wicket appeal. Deterministic: no randomness is consumed.
    pub fn lbw_check(&self, batsman: &Player, bowler: &Player) -> bool {
        let chance = batsman.running * bowler.bowling * self.field.pitch_conditions;
        chance > self.lbw_threshold
    }

    /// Catch appeal against a named fielder. Deterministic.
    pub fn catch_check(&self, batsman: &Player, fielder: &Player) -> bool {
        let chance = batsman.batting * fielder.fielding * self.field.pitch_conditions;
        chance > self.catch_threshold
    }

    pub fn no_ball_check(&self, rng: &mut impl Rng) -> bool {
        rng.gen::<f32>() < self.no_ball_chance
    }

    pub fn wide_ball_check(&self, rng: &mut impl Rng) -> bool {
        rng.gen::<f32>() < self.wide_chance
    }

    pub fn add_runs(&mut self, runs: u32) {
        self.scoreboard.add_runs(runs);
    }

    pub fn add_wicket(&mut self) {
        self.scoreboard.add_wicket();
    }

    pub fn add_over(&mut self) {
        self.scoreboard.add_over();
    }

    /// Snapshot of the current innings tally.
    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn reset_scoreboard(&mut self) {
        self.scoreboard.reset();
    }
}
