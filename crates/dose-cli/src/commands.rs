use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use comfy_table::Table;
use tracing::{debug, info};

use dose_catalog::DrugLibrary;
use dose_core::{CalculationRequest, DosePipeline};
use dose_format::Locale;
use dose_model::{CalculationResult, DrugId, IndicationId, PatientWeight};

use dose_cli::logging::redact_value;

use crate::cli::{CalculateArgs, DrugsArgs, GuidelineArgs, LocaleArg};
use crate::summary::{apply_table_style, print_result};

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Locale::English,
            LocaleArg::Fa => Locale::Persian,
        }
    }
}

fn load_library(path: Option<&PathBuf>) -> Result<DrugLibrary> {
    match path {
        Some(path) => DrugLibrary::from_path(path)
            .with_context(|| format!("load drug library {}", path.display())),
        None => DrugLibrary::embedded().context("load embedded drug library"),
    }
}

pub fn run_calculate(args: &CalculateArgs) -> Result<CalculationResult> {
    let library = load_library(args.library.as_ref())?;
    let pipeline = DosePipeline::new(library);

    let weight = match args.weight {
        Some(kg) => PatientWeight::known(kg).context("patient weight must be positive")?,
        None => PatientWeight::Unknown,
    };
    let weight_text = args
        .weight
        .map(|kg| kg.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    debug!(
        drug = %args.drug,
        weight = redact_value(&weight_text),
        "running calculation"
    );

    let locale = Locale::from(args.locale);
    let request = CalculationRequest {
        drug: DrugId::new(args.drug.as_str())?,
        indication: args
            .indication
            .as_deref()
            .map(IndicationId::new)
            .transpose()?,
        weight,
        concentration: args.concentration.clone(),
        locale,
    };

    let result = pipeline.calculate(&request).context("calculation failed")?;
    info!(drug = %request.drug, warning = result.warning.has_warning, "calculation complete");

    if let Some(path) = &args.save {
        save_result(path, &result)
            .with_context(|| format!("save calculation to {}", path.display()))?;
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("serialize result")?
        );
    } else {
        print_result(&result, locale);
    }
    Ok(result)
}

/// Append the result as one JSON line stamped with the save time. The
/// timestamp is an opaque key for external consumers; nothing in the engine
/// reads it back.
fn save_result(path: &Path, result: &CalculationResult) -> Result<()> {
    let record = serde_json::json!({
        "saved_at": Utc::now().to_rfc3339(),
        "result": result,
    });
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{record}")?;
    Ok(())
}

pub fn run_drugs(args: &DrugsArgs) -> Result<()> {
    let library = load_library(args.library.as_ref())?;
    let mut table = Table::new();
    table.set_header(vec!["Drug", "Name", "Indications", "Concentrations"]);
    apply_table_style(&mut table);
    for entry in library.drugs() {
        let indications: Vec<&str> = entry
            .guidelines
            .iter()
            .map(|guideline| guideline.indication.as_str())
            .collect();
        table.add_row(vec![
            entry.id.to_string(),
            entry.name.clone(),
            indications.join("\n"),
            entry.concentrations.join("\n"),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_guideline(args: &GuidelineArgs) -> Result<()> {
    let library = load_library(args.library.as_ref())?;
    let drug = DrugId::new(args.drug.as_str())?;
    let entry = library
        .drug(&drug)
        .ok_or_else(|| anyhow!("unknown drug: {drug}"))?;
    let indication = match &args.indication {
        Some(id) => IndicationId::new(id.as_str())?,
        None => entry
            .default_indication()
            .cloned()
            .ok_or_else(|| anyhow!("drug {drug} has no guidelines"))?,
    };
    let guideline = library
        .guideline(&drug, &indication)
        .ok_or_else(|| anyhow!("unknown indication {indication} for drug {drug}"))?;

    let record = dose_guideline::interpret(&drug, &indication, &guideline.text)
        .with_context(|| format!("interpret guideline for {drug} ({indication})"))?;

    println!("{}", guideline.text);
    println!();
    println!("basis: {}", record.basis);
    if let Some(per_kg) = record.per_kg {
        match per_kg.max {
            Some(max) => println!("dose: {} to {} mg/kg", per_kg.min, max),
            None => println!("dose: {} mg/kg", per_kg.min),
        }
    }
    if let Some(frequency) = record.frequency {
        match frequency.max_hours {
            Some(max) => println!(
                "interval: every {} to {} hours ({} doses/day)",
                frequency.min_hours,
                max,
                frequency.doses_per_day()
            ),
            None => println!(
                "interval: every {} hours ({} doses/day)",
                frequency.min_hours,
                frequency.doses_per_day()
            ),
        }
    }
    Ok(())
}
