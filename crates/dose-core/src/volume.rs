//! Dose-to-volume conversion through a concentration ratio.

use dose_model::{ConcentrationRatio, DoseRange, Result, VolumeRange};

/// Convert a mass-dose range to the liquid volume carrying it, applying the
/// ratio independently to each bound. Total for every valid dose range and
/// concentration (the ratio's components are strictly positive by
/// construction).
pub fn convert(dose: &DoseRange, concentration: &ConcentrationRatio) -> Result<VolumeRange> {
    let ml_per_mg = concentration.ml_per_mg();
    VolumeRange::new(
        dose.min_mg() * ml_per_mg,
        dose.max_mg().map(|max| max * ml_per_mg),
    )
}
