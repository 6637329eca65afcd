use thiserror::Error;

/// Errors surfaced by the dosing engine.
///
/// Parse failures carry the specific malformed input; invalid-input failures
/// name the missing or non-positive field. No variant is produced for a drug
/// lacking a safety rule set: that case resolves conservatively inside the
/// warning resolver instead of failing the calculation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DoseError {
    #[error("guideline parse error: {0}")]
    Guideline(#[from] GuidelineParseError),
    #[error("concentration parse error: {0}")]
    Concentration(#[from] ConcentrationParseError),
    #[error("invalid input: {field} is missing or not positive")]
    InvalidInput { field: &'static str },
    #[error("computed {quantity} range is not positive and ordered")]
    InvalidRange { quantity: &'static str },
    #[error("empty {kind} identifier")]
    EmptyId { kind: &'static str },
    #[error("unknown drug: {0}")]
    UnknownDrug(String),
    #[error("unknown indication {indication} for drug {drug}")]
    UnknownIndication { drug: String, indication: String },
}

pub type Result<T> = std::result::Result<T, DoseError>;

/// Reasons a guideline text fails interpretation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GuidelineParseError {
    #[error("guideline text is empty")]
    Empty,
    #[error("no dose-per-kg values found before a mass unit")]
    MissingDoseTokens,
    #[error("dose-per-kg value must be positive, found {0}")]
    NonPositiveDose(f64),
    #[error("dose-per-kg bounds out of order: {min} > {max}")]
    UnorderedDoseBounds { min: f64, max: f64 },
    #[error("frequency interval must be positive, found {0}")]
    NonPositiveFrequency(f64),
    #[error("frequency bounds out of order: {min} > {max}")]
    UnorderedFrequencyBounds { min: f64, max: f64 },
}

/// Reasons a concentration string fails decomposition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConcentrationParseError {
    #[error("concentration string is empty")]
    Empty,
    #[error("expected a mass/volume pair separated by '/'")]
    MissingSeparator,
    #[error("expected a number with a unit, found {0:?}")]
    MalformedComponent(String),
    #[error("unrecognized mass unit: {0:?}")]
    UnknownMassUnit(String),
    #[error("unrecognized volume unit: {0:?}")]
    UnknownVolumeUnit(String),
    #[error("concentration {component} must be strictly positive")]
    NonPositive { component: &'static str },
}
