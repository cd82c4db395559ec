use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Immutable skill profile of one squad member.
///
/// Every rating is a fraction in `0.0..=1.0`. Ratings are validated once at
/// construction; a `Player` is never mutated after that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub name: String,
    pub bowling: f32,
    pub batting: f32,
    pub fielding: f32,
    pub running: f32,
    pub experience: f32,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        bowling: f32,
        batting: f32,
        fielding: f32,
        running: f32,
        experience: f32,
    ) -> Result<Self> {
        let player = Self { name: name.into(), bowling, batting, fielding, running, experience };
        player.validate()?;
        Ok(player)
    }

    /// Checks every rating is finite and within `0.0..=1.0`.
    pub fn validate(&self) -> Result<()> {
        let ratings = [
            ("bowling", self.bowling),
            ("batting", self.batting),
            ("fielding", self.fielding),
            ("running", self.running),
            ("experience", self.experience),
        ];
        for (skill, value) in ratings {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SimError::InvalidSkill { player: self.name.clone(), skill, value });
            }
        }
        Ok(())
    }
}
