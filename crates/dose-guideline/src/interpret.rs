//! Guideline text interpretation.
//!
//! Dosing guidelines arrive as short prose strings ("10-15 mg/kg per dose
//! every 4-6 hours. Do not exceed 5 doses in 24 hours."). Interpretation
//! classifies the dosing basis from phrasing markers and extracts the
//! numeric parameters by token scanning:
//!
//! - dose-per-kg bounds: up to two numbers immediately preceding the first
//!   mass unit marker,
//! - frequency bounds: up to two numbers immediately preceding the first
//!   time unit marker, with "once daily" mapping to a 24-hour interval.
//!
//! Age-table guidelines ("For children 2-5 years: ...") never enter the
//! numeric pipeline; the text passes through verbatim as notes.

use tracing::debug;

use dose_model::{
    DosingBasis, DrugId, FrequencyBounds, GuidelineParseError, GuidelineRecord, IndicationId,
    PerKgBounds,
};

/// Interpret a stored guideline text for a (drug, indication) pair.
///
/// Weight-based guidelines must yield dose-per-kg bounds; a weight-based
/// text with no numeric dose tokens is malformed and fails rather than
/// proceeding with zero values.
pub fn interpret(
    drug: &DrugId,
    indication: &IndicationId,
    text: &str,
) -> Result<GuidelineRecord, GuidelineParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GuidelineParseError::Empty);
    }

    let lower = trimmed.to_lowercase();
    let basis = classify_basis(&lower);
    debug!(drug = %drug, indication = %indication, basis = %basis, "classified guideline");

    if basis == DosingBasis::AgeTable {
        return Ok(GuidelineRecord {
            drug: drug.clone(),
            indication: indication.clone(),
            text: trimmed.to_string(),
            basis,
            per_kg: None,
            frequency: None,
        });
    }

    let tokens = tokenize(&lower);
    let per_kg = extract_per_kg(&tokens)?;
    let frequency = extract_frequency(&tokens, &lower)?;

    Ok(GuidelineRecord {
        drug: drug.clone(),
        indication: indication.clone(),
        text: trimmed.to_string(),
        basis,
        per_kg: Some(per_kg),
        frequency,
    })
}

/// Classify the dosing basis from phrasing markers.
///
/// Precedence: an age bracket introducing the dosing clauses wins first,
/// then explicit per-dose markers (so a per-dose guideline mentioning a
/// "maximum daily dose" cap stays per-dose), then per-day markers. A
/// weight-based text with neither marker defaults to per-dose.
fn classify_basis(lower: &str) -> DosingBasis {
    if has_age_table_marker(lower) {
        return DosingBasis::AgeTable;
    }
    if lower.contains("per dose") || lower.contains("/dose") {
        return DosingBasis::PerDose;
    }
    if lower.contains("per day")
        || lower.contains("/day")
        || lower.contains("daily")
        || lower.contains("in divided doses")
    {
        return DosingBasis::PerDay;
    }
    DosingBasis::PerDose
}

/// An age unit immediately introducing a dosing clause ("2-5 years: ...")
/// marks an age-lookup guideline.
fn has_age_table_marker(lower: &str) -> bool {
    ["years:", "year:", "months:", "month:"]
        .iter()
        .any(|marker| lower.contains(marker))
}

/// Split into scan tokens, treating range and ratio punctuation as spaces
/// so "10-15" and "mg/kg/day" break apart.
fn tokenize(lower: &str) -> Vec<&str> {
    lower
        .split(|c: char| {
            c.is_whitespace() || matches!(c, '-' | '–' | '—' | '/' | ',' | ';' | ':' | '(' | ')')
        })
        .filter(|token| !token.is_empty())
        .collect()
}

fn is_mass_marker(token: &str) -> bool {
    token == "mg" || token.starts_with("mg.")
}

fn is_time_marker(token: &str) -> bool {
    token.starts_with("hour") || token.starts_with("hr")
}

/// Words allowed between the two numbers of a spelled-out range.
fn is_range_connector(token: &str) -> bool {
    matches!(token, "to" | "and" | "or")
}

/// Collect up to two numeric tokens immediately preceding `marker_index`,
/// skipping range connector words, in source order.
fn numbers_before(tokens: &[&str], marker_index: usize) -> Vec<f64> {
    let mut collected = Vec::new();
    for token in tokens[..marker_index].iter().rev() {
        if let Ok(value) = token.parse::<f64>() {
            collected.push(value);
            if collected.len() == 2 {
                break;
            }
        } else if is_range_connector(token) && !collected.is_empty() {
            continue;
        } else {
            break;
        }
    }
    collected.reverse();
    collected
}

/// Dose-per-kg bounds: the one or two numbers before the first mass marker.
fn extract_per_kg(tokens: &[&str]) -> Result<PerKgBounds, GuidelineParseError> {
    let marker_index = tokens
        .iter()
        .position(|token| is_mass_marker(token))
        .ok_or(GuidelineParseError::MissingDoseTokens)?;
    let numbers = numbers_before(tokens, marker_index);
    let (min, max) = match numbers.as_slice() {
        [] => return Err(GuidelineParseError::MissingDoseTokens),
        [single] => (*single, None),
        [min, max, ..] => (*min, Some(*max)),
    };
    if min <= 0.0 {
        return Err(GuidelineParseError::NonPositiveDose(min));
    }
    if let Some(max) = max
        && max < min
    {
        return Err(GuidelineParseError::UnorderedDoseBounds { min, max });
    }
    Ok(PerKgBounds { min, max })
}

/// Frequency bounds: the one or two numbers before the first time marker,
/// or a 24-hour interval for "once daily" phrasing. Absent when the text
/// states no interval.
fn extract_frequency(
    tokens: &[&str],
    lower: &str,
) -> Result<Option<FrequencyBounds>, GuidelineParseError> {
    let marker_index = tokens.iter().position(|token| is_time_marker(token));
    let numbers = match marker_index {
        Some(index) => numbers_before(tokens, index),
        None => Vec::new(),
    };
    let (min_hours, max_hours) = match numbers.as_slice() {
        [] => {
            if lower.contains("once daily") || lower.contains("once a day") {
                (24.0, None)
            } else {
                return Ok(None);
            }
        }
        [single] => (*single, None),
        [min, max, ..] => (*min, Some(*max)),
    };
    if min_hours <= 0.0 {
        return Err(GuidelineParseError::NonPositiveFrequency(min_hours));
    }
    if let Some(max_hours) = max_hours
        && max_hours < min_hours
    {
        return Err(GuidelineParseError::UnorderedFrequencyBounds {
            min: min_hours,
            max: max_hours,
        });
    }
    Ok(Some(FrequencyBounds {
        min_hours,
        max_hours,
    }))
}
