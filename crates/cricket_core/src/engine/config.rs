//! Simulation tuning parameters.
//!
//! Every probability threshold the engine consults lives here rather than
//! as a hard-coded constant, so tests and front-ends can tune an individual
//! knob without touching engine code.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// What to do when both sides finish their innings level on runs.
///
/// `SuperOver` plays up to `max_super_overs` one-over eliminators before
/// falling back to fewer wickets lost and finally a seeded coin toss.
/// `FewerWickets` skips the eliminators and goes straight to the fallback
/// ladder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TiePolicy {
    SuperOver,
    FewerWickets,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimConfig {
    /// Innings length in overs. Must be at least 1.
    pub total_overs: u32,
    /// Deliveries per over before the bowler rotates.
    pub balls_per_over: u32,
    pub no_ball_chance: f32,
    pub wide_chance: f32,
    pub lbw_threshold: f32,
    pub catch_threshold: f32,
    pub tie_policy: TiePolicy,
    pub max_super_overs: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_overs: 5,
            balls_per_over: 6,
            no_ball_chance: 0.1,
            wide_chance: 0.1,
            lbw_threshold: 0.7,
            catch_threshold: 0.8,
            tie_policy: TiePolicy::SuperOver,
            max_super_overs: 3,
        }
    }
}

impl SimConfig {
    /// Twenty-over format with the default probability constants.
    pub fn twenty20() -> Self {
        Self { total_overs: 20, ..Self::default() }
    }

    pub fn validate(&self) -> Result<()> {
        if self.total_overs == 0 {
            return Err(SimError::InvalidConfig("total_overs must be at least 1".to_string()));
        }
        if self.balls_per_over == 0 {
            return Err(SimError::InvalidConfig("balls_per_over must be at least 1".to_string()));
        }
        let chances = [("no_ball_chance", self.no_ball_chance), ("wide_chance", self.wide_chance)];
        for (name, value) in chances {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SimError::InvalidConfig(format!("{} must be within 0.0..=1.0, got {}", name, value)));
            }
        }
        let thresholds = [("lbw_threshold", self.lbw_threshold), ("catch_threshold", self.catch_threshold)];
        for (name, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::InvalidConfig(format!("{} must be finite and non-negative, got {}", name, value)));
            }
        }
        Ok(())
    }
}
