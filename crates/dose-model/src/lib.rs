pub mod concentration;
pub mod dose;
pub mod error;
pub mod guideline;
pub mod ids;
pub mod patient;
pub mod result;
pub mod warning;

pub use concentration::ConcentrationRatio;
pub use dose::{DoseRange, VolumeRange};
pub use error::{ConcentrationParseError, DoseError, GuidelineParseError, Result};
pub use guideline::{DosingBasis, FrequencyBounds, GuidelineRecord, PerKgBounds};
pub use ids::{DrugId, IndicationId};
pub use patient::{PatientInput, PatientWeight};
pub use result::CalculationResult;
pub use warning::WarningResult;
