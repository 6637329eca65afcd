use serde::{Deserialize, Serialize};

use crate::DoseError;

/// Mass dose for one administration, in milligrams.
///
/// Invariant: `min > 0` and `min <= max` when a max is present. A range
/// whose bounds coincide collapses to a single value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoseRange {
    min: f64,
    max: Option<f64>,
}

impl DoseRange {
    pub fn new(min: f64, max: Option<f64>) -> Result<Self, DoseError> {
        validate_range(min, max, "dose")?;
        Ok(Self {
            max: max.filter(|m| *m > min),
            min,
        })
    }

    pub fn single(value: f64) -> Result<Self, DoseError> {
        Self::new(value, None)
    }

    pub fn min_mg(&self) -> f64 {
        self.min
    }

    pub fn max_mg(&self) -> Option<f64> {
        self.max
    }

    pub fn is_single(&self) -> bool {
        self.max.is_none()
    }
}

/// Liquid volume for one administration, in milliliters, derived from a
/// [`DoseRange`] and a concentration ratio. Same ordering invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeRange {
    min: f64,
    max: Option<f64>,
}

impl VolumeRange {
    pub fn new(min: f64, max: Option<f64>) -> Result<Self, DoseError> {
        validate_range(min, max, "volume")?;
        Ok(Self {
            max: max.filter(|m| *m > min),
            min,
        })
    }

    pub fn min_ml(&self) -> f64 {
        self.min
    }

    pub fn max_ml(&self) -> Option<f64> {
        self.max
    }

    pub fn is_single(&self) -> bool {
        self.max.is_none()
    }
}

fn validate_range(min: f64, max: Option<f64>, quantity: &'static str) -> Result<(), DoseError> {
    let ordered = min.is_finite() && min > 0.0;
    let ordered = ordered
        && match max {
            Some(max) => max.is_finite() && max >= min,
            None => true,
        };
    if ordered {
        Ok(())
    } else {
        Err(DoseError::InvalidRange { quantity })
    }
}
