//! End-to-end pipeline tests over the embedded catalog.

use dose_catalog::DrugLibrary;
use dose_core::{CalculationRequest, DosePipeline};
use dose_format::Locale;
use dose_model::{DoseError, DrugId, IndicationId, PatientWeight};

fn pipeline() -> DosePipeline {
    DosePipeline::new(DrugLibrary::embedded().expect("embedded library"))
}

fn request(drug: &str, weight: PatientWeight) -> CalculationRequest {
    CalculationRequest {
        drug: DrugId::new(drug).expect("valid drug id"),
        indication: None,
        weight,
        concentration: None,
        locale: Locale::English,
    }
}

#[test]
fn per_dose_range_with_volume() {
    let pipeline = pipeline();
    let mut req = request("acetaminophen", PatientWeight::Known(12.0));
    req.concentration = Some("160 mg/5 ml".to_string());

    let result = pipeline.calculate(&req).expect("calculate");
    assert_eq!(result.dose.as_deref(), Some("120 to 180 mg"));
    assert_eq!(result.volume.as_deref(), Some("3.8 to 5.6 ml"));
    assert_eq!(result.frequency.as_deref(), Some("every 4 to 6 hours"));
    assert!(result.errors.is_empty());
}

#[test]
fn per_day_guideline_divides_across_administrations() {
    let pipeline = pipeline();
    let mut req = request("amoxicillin", PatientWeight::Known(20.0));
    req.indication = Some(IndicationId::new("mild-moderate-infection").expect("valid id"));
    req.concentration = Some("250 mg / 5 ml".to_string());

    // 25-50 mg/kg/day at 20 kg is 500-1000 mg daily; every 8-12 hours
    // divides by floor(24 / 8) = 3 administrations.
    let result = pipeline.calculate(&req).expect("calculate");
    assert_eq!(result.dose.as_deref(), Some("166.7 to 333.3 mg"));
    assert_eq!(result.volume.as_deref(), Some("3.3 to 6.7 ml"));
}

#[test]
fn weight_threshold_warns_below_and_clears_above() {
    let pipeline = pipeline();

    let result = pipeline
        .calculate(&request("ibuprofen", PatientWeight::Known(5.0)))
        .expect("calculate");
    assert!(result.warning.has_warning);
    assert!(result.warning.message.contains("less than 6 kg"));

    let result = pipeline
        .calculate(&request("ibuprofen", PatientWeight::Known(8.0)))
        .expect("calculate");
    assert!(!result.warning.has_warning);
    assert!(result.warning.message.contains("No safety issues"));
}

#[test]
fn malformed_concentration_keeps_dose_and_suppresses_volume() {
    let pipeline = pipeline();
    let mut req = request("acetaminophen", PatientWeight::Known(12.0));
    req.concentration = Some("160".to_string());

    let result = pipeline.calculate(&req).expect("calculate");
    assert_eq!(result.dose.as_deref(), Some("120 to 180 mg"));
    assert!(result.volume.is_none());
    assert!(result.has_errors());
    assert!(result.errors[0].contains("concentration parse error"));
}

#[test]
fn age_table_guideline_skips_numeric_stages() {
    let pipeline = pipeline();
    let result = pipeline
        .calculate(&request("cetirizine", PatientWeight::Unknown))
        .expect("calculate");

    assert!(result.dose.is_none());
    assert!(result.volume.is_none());
    assert!(result.frequency.is_none());
    assert!(result.notes.starts_with("For children 2-5 years"));
    assert!(result.errors.is_empty());
}

#[test]
fn unknown_drug_fails_the_request() {
    let pipeline = pipeline();
    let err = pipeline
        .calculate(&request("aspirin", PatientWeight::Known(20.0)))
        .unwrap_err();
    assert_eq!(err, DoseError::UnknownDrug("aspirin".to_string()));
}

#[test]
fn unknown_indication_fails_the_request() {
    let pipeline = pipeline();
    let mut req = request("acetaminophen", PatientWeight::Known(12.0));
    req.indication = Some(IndicationId::new("migraine").expect("valid id"));
    let err = pipeline.calculate(&req).unwrap_err();
    assert!(matches!(err, DoseError::UnknownIndication { .. }));
}

#[test]
fn missing_weight_for_weight_based_guideline_fails() {
    let pipeline = pipeline();
    let err = pipeline
        .calculate(&request("acetaminophen", PatientWeight::Unknown))
        .unwrap_err();
    assert_eq!(err, DoseError::InvalidInput { field: "weight" });
}

#[test]
fn persian_locale_renders_digits_and_range_word() {
    let pipeline = pipeline();
    let mut req = request("acetaminophen", PatientWeight::Known(12.0));
    req.locale = Locale::Persian;

    let result = pipeline.calculate(&req).expect("calculate");
    let dose = result.dose.expect("dose");
    assert!(dose.contains("تا"), "range word missing in {dose:?}");
    assert!(dose.contains('۱'), "persian digits missing in {dose:?}");
    assert!(!dose.contains('1'), "latin digits left in {dose:?}");
}

#[test]
fn defaults_fall_back_to_first_catalog_entries() {
    let pipeline = pipeline();
    assert_eq!(pipeline.library().drugs().len(), 4);
    let result = pipeline
        .calculate(&request("acetaminophen", PatientWeight::Known(10.0)))
        .expect("calculate");
    assert_eq!(result.inputs.concentration, "160 mg / 5 ml");
    assert_eq!(result.inputs.indication.as_str(), "fever-and-pain");
}
