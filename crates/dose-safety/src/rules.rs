use serde::{Deserialize, Serialize};

use dose_model::{PatientInput, PatientWeight};

/// Predicate forms a warning rule can take.
///
/// Rules are data: the catalog attaches them per drug, and the resolver
/// interprets them generically, so adding a drug never adds code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WarningPredicate {
    /// Matches when the patient weighs less than the threshold, or when the
    /// weight is unknown and the threshold cannot be verified.
    WeightBelow { threshold_kg: f64 },
}

impl WarningPredicate {
    /// Whether evaluating this predicate requires a known weight.
    pub fn needs_weight(&self) -> bool {
        matches!(self, Self::WeightBelow { .. })
    }

    pub fn matches(&self, input: &PatientInput) -> bool {
        match self {
            Self::WeightBelow { threshold_kg } => match input.weight {
                PatientWeight::Known(kg) => kg < *threshold_kg,
                PatientWeight::Unknown => true,
            },
        }
    }
}

/// One safety rule: a predicate and the message shown when it matches.
///
/// The predicate is flattened so a rule reads as one record in catalog
/// files: `{ kind = "weight_below", threshold_kg = 6.0, message = "..." }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningRule {
    #[serde(flatten)]
    pub predicate: WarningPredicate,
    pub message: String,
}
