use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConcentrationParseError;

/// Mass of active ingredient per volume of liquid formulation, normalized to
/// milligrams per milliliters.
///
/// Invariant: both components are strictly positive, enforced by every
/// constructor. Volume conversion divides by the mass component, so a zero
/// ratio can never reach the converter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationRatio {
    mass_mg: f64,
    volume_ml: f64,
}

impl ConcentrationRatio {
    pub fn new(mass_mg: f64, volume_ml: f64) -> Result<Self, ConcentrationParseError> {
        if !(mass_mg.is_finite() && mass_mg > 0.0) {
            return Err(ConcentrationParseError::NonPositive { component: "mass" });
        }
        if !(volume_ml.is_finite() && volume_ml > 0.0) {
            return Err(ConcentrationParseError::NonPositive {
                component: "volume",
            });
        }
        Ok(Self { mass_mg, volume_ml })
    }

    pub fn mass_mg(&self) -> f64 {
        self.mass_mg
    }

    pub fn volume_ml(&self) -> f64 {
        self.volume_ml
    }

    /// Milliliters of formulation carrying one milligram of active ingredient.
    pub fn ml_per_mg(&self) -> f64 {
        self.volume_ml / self.mass_mg
    }
}

impl fmt::Display for ConcentrationRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mg / {} ml", self.mass_mg, self.volume_ml)
    }
}

impl FromStr for ConcentrationRatio {
    type Err = ConcentrationParseError;

    /// Parse a concentration string such as "160 mg / 5 ml".
    ///
    /// Exactly two components separated by '/', each a positive number
    /// followed by a recognized mass unit (mg, g, mcg) and volume unit
    /// (ml, l, cc) respectively. Other masses and volumes normalize to
    /// mg and ml.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ConcentrationParseError::Empty);
        }
        let mut parts = trimmed.split('/');
        let (mass_part, volume_part) = match (parts.next(), parts.next(), parts.next()) {
            (Some(mass), Some(volume), None) => (mass, volume),
            _ => return Err(ConcentrationParseError::MissingSeparator),
        };

        let (mass_value, mass_unit) = split_component(mass_part)?;
        let mass_mg = mass_value
            * match mass_unit.as_str() {
                "mg" => 1.0,
                "g" => 1000.0,
                "mcg" => 0.001,
                _ => return Err(ConcentrationParseError::UnknownMassUnit(mass_unit)),
            };

        let (volume_value, volume_unit) = split_component(volume_part)?;
        let volume_ml = volume_value
            * match volume_unit.as_str() {
                "ml" | "cc" => 1.0,
                "l" => 1000.0,
                _ => return Err(ConcentrationParseError::UnknownVolumeUnit(volume_unit)),
            };

        Self::new(mass_mg, volume_ml)
    }
}

/// Split one component ("160 mg") into its numeric value and unit word.
fn split_component(part: &str) -> Result<(f64, String), ConcentrationParseError> {
    let trimmed = part.trim();
    let split_at = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split_at);
    let value: f64 = number
        .parse()
        .map_err(|_| ConcentrationParseError::MalformedComponent(trimmed.to_string()))?;
    let unit = unit.trim().to_lowercase();
    if unit.is_empty() {
        return Err(ConcentrationParseError::MalformedComponent(
            trimmed.to_string(),
        ));
    }
    Ok((value, unit))
}
