use serde::{Deserialize, Serialize};

use crate::{PatientInput, WarningResult};

/// Immutable snapshot of one completed calculation, owned by the caller.
///
/// Dose, volume and frequency are display strings already formatted for the
/// requested locale; each is absent when the corresponding stage did not
/// produce a number (age-table guideline, or a recorded failure). `errors`
/// collects non-fatal problems, e.g. a concentration that failed to parse
/// while the dose itself was computable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub inputs: PatientInput,
    pub dose: Option<String>,
    pub volume: Option<String>,
    pub frequency: Option<String>,
    /// Guideline text passed through for display, verbatim.
    pub notes: String,
    pub warning: WarningResult,
    pub errors: Vec<String>,
}

impl CalculationResult {
    /// True when any numeric stage failed non-fatally.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
