//! Catalog loading and lookup tests over the embedded library.

use std::path::Path;

use dose_catalog::{CatalogError, DrugLibrary};
use dose_model::{DrugId, IndicationId, PatientInput, PatientWeight};

fn drug(id: &str) -> DrugId {
    DrugId::new(id).expect("valid drug id")
}

fn indication(id: &str) -> IndicationId {
    IndicationId::new(id).expect("valid indication id")
}

#[test]
fn embedded_library_loads_and_validates() {
    let library = DrugLibrary::embedded().expect("embedded library");
    let ids: Vec<&str> = library.drugs().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["acetaminophen", "ibuprofen", "amoxicillin", "cetirizine"]
    );
}

#[test]
fn amoxicillin_carries_two_indications() {
    let library = DrugLibrary::embedded().expect("embedded library");
    let entry = library.drug(&drug("amoxicillin")).expect("amoxicillin");
    assert_eq!(entry.guidelines.len(), 2);
    assert_eq!(
        entry.default_indication(),
        Some(&indication("mild-moderate-infection"))
    );

    let severe = library
        .guideline(&drug("amoxicillin"), &indication("severe-infection"))
        .expect("severe guideline");
    assert!(severe.text.contains("80-90 mg/kg/day"));
}

#[test]
fn default_concentration_is_the_first_listed() {
    let library = DrugLibrary::embedded().expect("embedded library");
    let entry = library.drug(&drug("acetaminophen")).expect("acetaminophen");
    assert_eq!(entry.default_concentration(), Some("160 mg / 5 ml"));
}

#[test]
fn unknown_drug_lookup_is_none() {
    let library = DrugLibrary::embedded().expect("embedded library");
    assert!(library.drug(&drug("aspirin")).is_none());
}

#[test]
fn resolver_built_from_library_covers_every_listed_drug() {
    let library = DrugLibrary::embedded().expect("embedded library");
    let resolver = library.warning_resolver();

    // Cetirizine registers an empty rule set: supported, no warning.
    let result = resolver.resolve(&PatientInput {
        weight: PatientWeight::Unknown,
        drug: drug("cetirizine"),
        indication: indication("allergic-rhinitis"),
        concentration: "5 mg / 5 ml".to_string(),
    });
    assert!(!result.has_warning);

    // A drug outside the library falls through conservatively.
    let result = resolver.resolve(&PatientInput {
        weight: PatientWeight::Known(10.0),
        drug: drug("aspirin"),
        indication: indication("fever-and-pain"),
        concentration: "100 mg / 5 ml".to_string(),
    });
    assert!(result.has_warning);
}

#[test]
fn duplicate_indications_are_rejected() {
    let toml = r#"
        [[drug]]
        id = "example"
        name = "Example"
        concentrations = ["10 mg / 5 ml"]

        [[drug.guideline]]
        indication = "fever"
        text = "5 mg/kg per dose every 8 hours"

        [[drug.guideline]]
        indication = "fever"
        text = "10 mg/kg per dose every 8 hours"
    "#;
    let dir = std::env::temp_dir().join(format!("dose-catalog-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join("duplicate-indications.toml");
    std::fs::write(&path, toml).expect("write library file");

    let err = DrugLibrary::from_path(&path).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidLibrary { .. }));
    assert!(err.to_string().contains("repeats indication"));
}

#[test]
fn missing_library_file_reports_the_path() {
    let err = DrugLibrary::from_path(Path::new("/nonexistent/medicines.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/medicines.toml"));
}
