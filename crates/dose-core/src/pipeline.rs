//! The calculation pipeline: catalog lookup, guideline interpretation,
//! warning resolution, dose and volume computation, formatting.
//!
//! One request flows through the stages synchronously; every stage is a
//! pure function over the request and the catalog, so a pipeline may be
//! shared freely across calls.

use tracing::{debug, info_span, warn};

use dose_catalog::DrugLibrary;
use dose_format::{Locale, format_dose, format_frequency, format_volume};
use dose_model::{
    CalculationResult, ConcentrationRatio, DoseError, DrugId, IndicationId, PatientInput,
    PatientWeight, Result,
};
use dose_safety::WarningResolver;

use crate::calculator::compute_dose;
use crate::volume::convert;

/// One calculation request as selected by the caller.
///
/// Indication and concentration fall back to the catalog defaults (first
/// listed) when unselected, mirroring the picklist behavior of the form
/// that feeds this engine.
#[derive(Debug, Clone)]
pub struct CalculationRequest {
    pub drug: DrugId,
    pub indication: Option<IndicationId>,
    pub weight: PatientWeight,
    pub concentration: Option<String>,
    pub locale: Locale,
}

/// Catalog-backed calculation pipeline.
#[derive(Debug)]
pub struct DosePipeline {
    library: DrugLibrary,
    resolver: WarningResolver,
}

impl DosePipeline {
    pub fn new(library: DrugLibrary) -> Self {
        let resolver = library.warning_resolver();
        Self { library, resolver }
    }

    pub fn library(&self) -> &DrugLibrary {
        &self.library
    }

    /// Run one calculation.
    ///
    /// A malformed guideline or a missing required input fails the whole
    /// request: no numbers are better than wrong numbers. A malformed
    /// concentration only suppresses the volume; the dose and a recorded
    /// error are still returned. Age-table guidelines skip the numeric
    /// stages entirely and pass the guideline text through as notes.
    pub fn calculate(&self, request: &CalculationRequest) -> Result<CalculationResult> {
        let span = info_span!("calculate", drug = %request.drug);
        let _guard = span.enter();

        let entry = self
            .library
            .drug(&request.drug)
            .ok_or_else(|| DoseError::UnknownDrug(request.drug.to_string()))?;
        let indication = match &request.indication {
            Some(indication) => indication.clone(),
            None => entry
                .default_indication()
                .cloned()
                .ok_or_else(|| DoseError::UnknownIndication {
                    drug: request.drug.to_string(),
                    indication: String::from("(default)"),
                })?,
        };
        let guideline = self
            .library
            .guideline(&request.drug, &indication)
            .ok_or_else(|| DoseError::UnknownIndication {
                drug: request.drug.to_string(),
                indication: indication.to_string(),
            })?;
        let concentration = match &request.concentration {
            Some(text) => text.clone(),
            None => entry
                .default_concentration()
                .map(str::to_string)
                .ok_or(DoseError::InvalidInput {
                    field: "concentration",
                })?,
        };

        let inputs = PatientInput {
            weight: request.weight,
            drug: request.drug.clone(),
            indication: indication.clone(),
            concentration: concentration.clone(),
        };

        let record = dose_guideline::interpret(&request.drug, &indication, &guideline.text)?;
        let warning = self.resolver.resolve(&inputs);

        if !record.basis.is_weight_based() {
            debug!(drug = %request.drug, "age-table guideline, skipping numeric stages");
            return Ok(CalculationResult {
                inputs,
                dose: None,
                volume: None,
                frequency: None,
                notes: record.text,
                warning,
                errors: vec![],
            });
        }

        let dose = compute_dose(request.weight, &record)?;
        debug!(
            min_mg = dose.min_mg(),
            max_mg = dose.max_mg(),
            "computed dose range"
        );

        let mut errors = Vec::new();
        let volume = match concentration.parse::<ConcentrationRatio>() {
            Ok(ratio) => Some(convert(&dose, &ratio)?),
            Err(error) => {
                warn!(%error, "concentration unusable, suppressing volume");
                errors.push(DoseError::Concentration(error).to_string());
                None
            }
        };

        let frequency = record
            .frequency
            .as_ref()
            .map(|frequency| format_frequency(frequency, request.locale));

        Ok(CalculationResult {
            inputs,
            dose: Some(format_dose(&dose, request.locale)),
            volume: volume.map(|volume| format_volume(&volume, request.locale)),
            frequency,
            notes: record.text,
            warning,
            errors,
        })
    }
}
