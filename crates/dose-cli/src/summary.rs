use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use dose_format::Locale;
use dose_model::{CalculationResult, PatientWeight};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn value_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value).add_attribute(Attribute::Bold),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}

/// Build the result panel. Input fields echo what the calculation used,
/// with digits localized for display the same way the computed strings are.
pub fn result_table(result: &CalculationResult, locale: Locale) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);

    let weight = match result.inputs.weight {
        PatientWeight::Known(kg) => locale.localize_digits(&format!("{kg} kg")),
        PatientWeight::Unknown => "-".to_string(),
    };
    table.add_row(vec![
        Cell::new("Drug"),
        Cell::new(result.inputs.drug.as_str()),
    ]);
    table.add_row(vec![
        Cell::new("Indication"),
        Cell::new(result.inputs.indication.as_str()),
    ]);
    table.add_row(vec![Cell::new("Weight"), Cell::new(weight)]);
    table.add_row(vec![
        Cell::new("Concentration"),
        Cell::new(locale.localize_digits(&result.inputs.concentration)),
    ]);
    table.add_row(vec![Cell::new("Dose"), value_cell(result.dose.as_deref())]);
    table.add_row(vec![
        Cell::new("Volume"),
        value_cell(result.volume.as_deref()),
    ]);
    table.add_row(vec![
        Cell::new("Frequency"),
        value_cell(result.frequency.as_deref()),
    ]);
    table
}

pub fn print_result(result: &CalculationResult, locale: Locale) {
    println!("{}", result_table(result, locale));
    println!();
    if result.warning.has_warning {
        println!("Warning: {}", result.warning.message);
    } else {
        println!("{}", result.warning.message);
    }
    if !result.notes.is_empty() {
        println!("Notes: {}", result.notes);
    }
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}
