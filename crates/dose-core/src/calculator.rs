//! Mass-dose calculation from weight and interpreted guideline parameters.

use dose_model::{DoseError, DoseRange, DosingBasis, GuidelineRecord, PatientWeight, Result};

/// Compute the per-administration mass-dose range for a weight-based
/// guideline.
///
/// Per-dose guidelines scale the per-kg bounds by the weight directly.
/// Per-day guidelines first compute the daily totals, then divide by the
/// administration count implied by the frequency (the shortest interval of
/// a range; see [`dose_model::FrequencyBounds::doses_per_day`]), pairing
/// numerator and denominator consistently for both bounds.
///
/// Fails naming the missing field: an unknown or non-positive weight, an
/// age-table guideline (which carries no per-kg bounds), or a per-day
/// guideline without a frequency. Nothing is defaulted.
pub fn compute_dose(weight: PatientWeight, record: &GuidelineRecord) -> Result<DoseRange> {
    let per_kg = record
        .per_kg
        .ok_or(DoseError::InvalidInput {
            field: "dose-per-kg bounds",
        })?;
    let kilograms = weight
        .kilograms()
        .filter(|kg| *kg > 0.0)
        .ok_or(DoseError::InvalidInput { field: "weight" })?;

    match record.basis {
        DosingBasis::PerDose => DoseRange::new(
            kilograms * per_kg.min,
            per_kg.max.map(|max| kilograms * max),
        ),
        DosingBasis::PerDay => {
            let frequency = record.frequency.ok_or(DoseError::InvalidInput {
                field: "frequency",
            })?;
            let doses_per_day = f64::from(frequency.doses_per_day());
            let daily_min = kilograms * per_kg.min;
            let daily_max = per_kg.max.map(|max| kilograms * max);
            DoseRange::new(
                daily_min / doses_per_day,
                daily_max.map(|max| max / doses_per_day),
            )
        }
        DosingBasis::AgeTable => Err(DoseError::InvalidInput {
            field: "dose-per-kg bounds",
        }),
    }
}
