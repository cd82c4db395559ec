use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Player;
use crate::error::{Result, SimError};

/// A squad plus its match-scoped derived state.
///
/// The roster itself is read-only during play. `captain`, `batting_order`
/// and `bowlers` are views derived from the roster: the captain is picked
/// afresh for every match, the batting order is consumed front to back once
/// per innings, and the bowler list is re-sorted by bowling skill before an
/// innings starts. The derived lists hold roster indices, never copies of
/// the players.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub players: Vec<Player>,
    #[serde(skip)]
    captain: Option<usize>,
    #[serde(skip)]
    batting_order: VecDeque<usize>,
    #[serde(skip)]
    bowlers: Vec<usize>,
}

impl Team {
    pub fn new(name: impl Into<String>, players: Vec<Player>) -> Result<Self> {
        for player in &players {
            player.validate()?;
        }
        Ok(Self {
            name: name.into(),
            players,
            captain: None,
            batting_order: VecDeque::new(),
            bowlers: Vec::new(),
        })
    }

    pub fn captain(&self) -> Option<&Player> {
        self.captain.map(|idx| &self.players[idx])
    }

    /// Match setup: pick a captain uniformly at random and rebuild the
    /// derived order lists. Runs once per match, never once per tournament,
    /// so a team carries no stale state into its next fixture.
    pub fn prepare_for_match(&mut self, rng: &mut impl Rng) {
        self.captain = if self.players.is_empty() {
            None
        } else {
            Some(rng.gen_range(0..self.players.len()))
        };
        self.reset_batting_order();
        self.derive_bowlers();
    }

    /// Restores the full roster as the batting order, in roster order.
    pub fn reset_batting_order(&mut self) {
        self.batting_order = (0..self.players.len()).collect();
    }

    /// Rebuilds the bowler rotation, strongest bowling skill first.
    /// The sort is stable, so equal skills keep roster order.
    pub fn derive_bowlers(&mut self) {
        let mut indices: Vec<usize> = (0..self.players.len()).collect();
        indices.sort_by(|&a, &b| {
            self.players[b]
                .bowling
                .partial_cmp(&self.players[a].bowling)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        self.bowlers = indices;
    }

    /// Sends in the next batsman, or `None` once the order is exhausted.
    pub fn next_batter(&mut self) -> Option<usize> {
        self.batting_order.pop_front()
    }

    pub fn batters_remaining(&self) -> usize {
        self.batting_order.len()
    }

    /// Picks a bowler uniformly at random from the derived rotation.
    /// An empty rotation is a configuration fault, not a playable state.
    pub fn choose_bowler(&self, rng: &mut impl Rng) -> Result<usize> {
        if self.bowlers.is_empty() {
            return Err(SimError::NoBowlersAvailable { team: self.name.clone() });
        }
        Ok(self.bowlers[rng.gen_range(0..self.bowlers.len())])
    }
}
