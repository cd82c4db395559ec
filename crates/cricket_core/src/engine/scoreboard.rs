use std::fmt;

use serde::{Deserialize, Serialize};

/// Running tally for one innings: runs scored, wickets fallen and overs
/// completed. A fresh value is installed at every innings boundary.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scoreboard {
    pub runs: u32,
    pub wickets: u8,
    pub overs_completed: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_runs(&mut self, runs: u32) {
        self.runs += runs;
    }

    pub fn add_wicket(&mut self) {
        self.wickets = self.wickets.saturating_add(1);
    }

    pub fn add_over(&mut self) {
        self.overs_completed += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{} ({} ov)", self.runs, self.wickets, self.overs_completed)
    }
}
