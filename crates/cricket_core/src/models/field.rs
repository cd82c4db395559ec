use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldSize {
    Small,
    Medium,
    Large,
}

/// Ground conditions shared by every match of a tournament.
///
/// `pitch_conditions` scales both batting and bowling strength on each
/// delivery; `fan_ratio` and `home_advantage` describe the venue and are
/// carried for consumers such as narration front-ends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Field {
    pub size: FieldSize,
    pub fan_ratio: f32,
    pub pitch_conditions: f32,
    pub home_advantage: f32,
}

impl Field {
    pub fn new(size: FieldSize, fan_ratio: f32, pitch_conditions: f32, home_advantage: f32) -> Result<Self> {
        let field = Self { size, fan_ratio, pitch_conditions, home_advantage };
        field.validate()?;
        Ok(field)
    }

    pub fn validate(&self) -> Result<()> {
        let parameters = [
            ("fan_ratio", self.fan_ratio),
            ("pitch_conditions", self.pitch_conditions),
            ("home_advantage", self.home_advantage),
        ];
        for (parameter, value) in parameters {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SimError::InvalidFieldParameter { parameter, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_field() {
        assert!(Field::new(FieldSize::Large, 0.7, 0.8, 0.9).is_ok());
    }

    #[test]
    fn test_out_of_range_parameter_rejected() {
        let err = Field::new(FieldSize::Small, 0.7, 1.5, 0.9).unwrap_err();
        assert_eq!(err, SimError::InvalidFieldParameter { parameter: "pitch_conditions", value: 1.5 });
    }

    #[test]
    fn test_non_finite_parameter_rejected() {
        assert!(Field::new(FieldSize::Medium, f32::NAN, 0.8, 0.9).is_err());
    }
}
