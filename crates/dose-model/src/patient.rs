use serde::{Deserialize, Serialize};

use crate::{DoseError, DrugId, IndicationId};

/// Patient weight as an explicit sum type rather than a nullable number.
///
/// Age-table guidelines dose without a weight, so absence is a first-class
/// state that the calculator and formatter must handle explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "kg", rename_all = "snake_case")]
pub enum PatientWeight {
    Known(f64),
    Unknown,
}

impl PatientWeight {
    /// Construct a known weight; rejects non-positive and non-finite values.
    pub fn known(kg: f64) -> Result<Self, DoseError> {
        if kg.is_finite() && kg > 0.0 {
            Ok(Self::Known(kg))
        } else {
            Err(DoseError::InvalidInput { field: "weight" })
        }
    }

    pub fn kilograms(&self) -> Option<f64> {
        match self {
            Self::Known(kg) => Some(*kg),
            Self::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

/// The raw inputs of one calculation request, as selected by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientInput {
    pub weight: PatientWeight,
    pub drug: DrugId,
    pub indication: IndicationId,
    /// Selected formulation concentration, verbatim (e.g. "160 mg / 5 ml").
    pub concentration: String,
}
