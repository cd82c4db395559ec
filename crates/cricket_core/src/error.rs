use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    InvalidSkill { player: String, skill: &'static str, value: f32 },
    InvalidFieldParameter { parameter: &'static str, value: f32 },
    InvalidConfig(String),
    NoBowlersAvailable { team: String },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimError::InvalidSkill { player, skill, value } => {
                write!(f, "Invalid {} skill for {}: {} (must be within 0.0..=1.0)", skill, player, value)
            }
            SimError::InvalidFieldParameter { parameter, value } => {
                write!(f, "Invalid field parameter {}: {} (must be within 0.0..=1.0)", parameter, value)
            }
            SimError::InvalidConfig(msg) => {
                write!(f, "Invalid configuration: {}", msg)
            }
            SimError::NoBowlersAvailable { team } => {
                write!(f, "No bowlers available: team {} has an empty bowler list", team)
            }
        }
    }
}

impl std::error::Error for SimError {}

pub type Result<T> = std::result::Result<T, SimError>;
