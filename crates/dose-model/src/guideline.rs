use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DrugId, IndicationId};

/// Classification of a dosing guideline.
///
/// Weight-based guidelines specify milligrams per kilogram, either per
/// administration or per full day; age-table guidelines dose by age bracket
/// and never enter the numeric pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DosingBasis {
    PerDose,
    PerDay,
    AgeTable,
}

impl DosingBasis {
    /// Returns true if dosing proceeds numerically from a patient weight.
    pub fn is_weight_based(&self) -> bool {
        matches!(self, Self::PerDose | Self::PerDay)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerDose => "per dose",
            Self::PerDay => "per day",
            Self::AgeTable => "age table",
        }
    }
}

impl fmt::Display for DosingBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dose-per-kilogram bounds extracted from a guideline (mg/kg).
///
/// Invariant: `min > 0` and `min <= max` when a max is present. Enforced at
/// interpretation time, so consumers may rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerKgBounds {
    pub min: f64,
    pub max: Option<f64>,
}

impl PerKgBounds {
    pub fn is_range(&self) -> bool {
        self.max.is_some_and(|max| max > self.min)
    }
}

/// Interval between successive administrations, in hours, possibly a range
/// ("every 4 to 6 hours" keeps both bounds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyBounds {
    /// Shortest interval in hours.
    pub min_hours: f64,
    /// Longest interval in hours, when the guideline gives a range.
    pub max_hours: Option<f64>,
}

impl FrequencyBounds {
    /// Administrations per day implied by the shortest interval.
    ///
    /// A frequency range always divides by the higher-frequency bound (the
    /// shorter interval), the conservative administration count. Intervals
    /// longer than a day clamp to one dose per day.
    pub fn doses_per_day(&self) -> u32 {
        let doses = (24.0 / self.min_hours).floor() as u32;
        doses.max(1)
    }
}

/// A dosing guideline interpreted for a (drug, indication) pair.
///
/// `per_kg` and `frequency` are populated for weight-based guidelines;
/// age-table guidelines carry only the verbatim text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidelineRecord {
    pub drug: DrugId,
    pub indication: IndicationId,
    /// Raw guideline text as stored in the catalog.
    pub text: String,
    pub basis: DosingBasis,
    pub per_kg: Option<PerKgBounds>,
    pub frequency: Option<FrequencyBounds>,
}
