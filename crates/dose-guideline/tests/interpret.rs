//! Interpreter contract tests over the catalog's guideline phrasings.

use dose_guideline::interpret;
use dose_model::{DosingBasis, DrugId, GuidelineParseError, IndicationId};

fn ids(drug: &str, indication: &str) -> (DrugId, IndicationId) {
    (
        DrugId::new(drug).expect("valid drug id"),
        IndicationId::new(indication).expect("valid indication id"),
    )
}

#[test]
fn per_dose_range_with_frequency_range() {
    let (drug, indication) = ids("acetaminophen", "fever-and-pain");
    let record = interpret(
        &drug,
        &indication,
        "10-15 mg/kg per dose every 4-6 hours. Do not exceed 5 doses in 24 hours.",
    )
    .expect("interpret guideline");

    assert_eq!(record.basis, DosingBasis::PerDose);
    let per_kg = record.per_kg.expect("per-kg bounds");
    assert_eq!(per_kg.min, 10.0);
    assert_eq!(per_kg.max, Some(15.0));
    let frequency = record.frequency.expect("frequency bounds");
    assert_eq!(frequency.min_hours, 4.0);
    assert_eq!(frequency.max_hours, Some(6.0));
}

#[test]
fn spelled_out_ranges_parse_like_hyphenated_ones() {
    let (drug, indication) = ids("acetaminophen", "fever-and-pain");
    let record = interpret(
        &drug,
        &indication,
        "10 to 15 mg/kg every 4 to 6 hours",
    )
    .expect("interpret guideline");

    assert_eq!(record.basis, DosingBasis::PerDose);
    let per_kg = record.per_kg.expect("per-kg bounds");
    assert_eq!((per_kg.min, per_kg.max), (10.0, Some(15.0)));
    let frequency = record.frequency.expect("frequency bounds");
    assert_eq!(
        (frequency.min_hours, frequency.max_hours),
        (4.0, Some(6.0))
    );
}

#[test]
fn per_day_guideline_keeps_daily_basis_and_interval() {
    let (drug, indication) = ids("amoxicillin", "mild-moderate-infection");
    let record = interpret(
        &drug,
        &indication,
        "For mild-moderate infections: 25-50 mg/kg/day in divided doses every 8-12 hours.",
    )
    .expect("interpret guideline");

    assert_eq!(record.basis, DosingBasis::PerDay);
    let per_kg = record.per_kg.expect("per-kg bounds");
    assert_eq!((per_kg.min, per_kg.max), (25.0, Some(50.0)));
    let frequency = record.frequency.expect("frequency bounds");
    assert_eq!(
        (frequency.min_hours, frequency.max_hours),
        (8.0, Some(12.0))
    );
}

#[test]
fn single_bound_guideline_yields_single_values() {
    let (drug, indication) = ids("amoxicillin", "prophylaxis");
    let record = interpret(&drug, &indication, "20 mg/kg per dose every 12 hours")
        .expect("interpret guideline");

    let per_kg = record.per_kg.expect("per-kg bounds");
    assert_eq!((per_kg.min, per_kg.max), (20.0, None));
    assert!(!per_kg.is_range());
    let frequency = record.frequency.expect("frequency bounds");
    assert_eq!((frequency.min_hours, frequency.max_hours), (12.0, None));
}

#[test]
fn age_table_guideline_passes_text_through_verbatim() {
    let (drug, indication) = ids("cetirizine", "allergic-rhinitis");
    let text = "For children 2-5 years: 2.5 mg once daily. For children >6 years and adults: \
                5-10 mg once daily.";
    let record = interpret(&drug, &indication, text).expect("interpret guideline");

    assert_eq!(record.basis, DosingBasis::AgeTable);
    assert_eq!(record.text, text);
    assert!(record.per_kg.is_none());
    assert!(record.frequency.is_none());
}

#[test]
fn once_daily_maps_to_a_24_hour_interval() {
    let (drug, indication) = ids("example", "maintenance");
    let record = interpret(&drug, &indication, "8 mg/kg per dose once daily")
        .expect("interpret guideline");

    let frequency = record.frequency.expect("frequency bounds");
    assert_eq!((frequency.min_hours, frequency.max_hours), (24.0, None));
    assert_eq!(frequency.doses_per_day(), 1);
}

#[test]
fn missing_dose_numbers_fail_interpretation() {
    let (drug, indication) = ids("example", "unspecified");
    let err = interpret(&drug, &indication, "consult a pediatrician before dosing").unwrap_err();
    assert_eq!(err, GuidelineParseError::MissingDoseTokens);
}

#[test]
fn empty_guideline_fails_interpretation() {
    let (drug, indication) = ids("example", "unspecified");
    let err = interpret(&drug, &indication, "   ").unwrap_err();
    assert_eq!(err, GuidelineParseError::Empty);
}

#[test]
fn unordered_dose_bounds_fail_interpretation() {
    let (drug, indication) = ids("example", "unspecified");
    let err = interpret(&drug, &indication, "15-10 mg/kg per dose every 6 hours").unwrap_err();
    assert_eq!(
        err,
        GuidelineParseError::UnorderedDoseBounds {
            min: 15.0,
            max: 10.0
        }
    );
}

#[test]
fn guideline_without_interval_has_no_frequency() {
    let (drug, indication) = ids("example", "single-administration");
    let record = interpret(&drug, &indication, "15 mg/kg as a single dose")
        .expect("interpret guideline");
    assert!(record.frequency.is_none());
}
