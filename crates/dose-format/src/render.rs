//! Range rendering with the engine's rounding policy.
//!
//! Values round to one decimal place, half away from zero. A whole value
//! renders without its trailing ".0"; inside a range, a fractional bound
//! forces one-decimal rendering on both bounds so the pair reads
//! consistently ("3.8 to 5.0 ml", never "3.8 to 5 ml").

use dose_model::{DoseRange, FrequencyBounds, VolumeRange};

use crate::locale::{Locale, Unit};

/// Round to one decimal place, half away from zero.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Render one rounded value, with or without a forced decimal place.
fn render_number(value: f64, force_decimal: bool) -> String {
    if force_decimal || value.fract() != 0.0 {
        format!("{value:.1}")
    } else {
        format!("{}", value as i64)
    }
}

/// Render a numeric range with a unit label in the given locale.
///
/// Bounds that coincide after rounding collapse to a single value. Digit
/// transliteration is applied last, to the finished string only.
pub fn format_quantity(min: f64, max: Option<f64>, unit: Unit, locale: Locale) -> String {
    let min = round1(min);
    let max = max.map(round1).filter(|max| *max != min);
    let text = match max {
        None => format!(
            "{} {}",
            render_number(min, false),
            locale.unit_label(unit)
        ),
        Some(max) => {
            let force_decimal = min.fract() != 0.0 || max.fract() != 0.0;
            format!(
                "{} {} {} {}",
                render_number(min, force_decimal),
                locale.range_word(),
                render_number(max, force_decimal),
                locale.unit_label(unit)
            )
        }
    };
    locale.localize_digits(&text)
}

pub fn format_dose(range: &DoseRange, locale: Locale) -> String {
    format_quantity(range.min_mg(), range.max_mg(), Unit::Milligrams, locale)
}

pub fn format_volume(range: &VolumeRange, locale: Locale) -> String {
    format_quantity(range.min_ml(), range.max_ml(), Unit::Milliliters, locale)
}

/// Render a frequency as an interval phrase ("every 6 hours",
/// "every 4 to 6 hours").
pub fn format_frequency(frequency: &FrequencyBounds, locale: Locale) -> String {
    let min = render_number(round1(frequency.min_hours), false);
    let max = frequency
        .max_hours
        .map(|hours| render_number(round1(hours), false));
    let text = match (locale, max) {
        (Locale::English, None) => format!("every {min} hours"),
        (Locale::English, Some(max)) => format!("every {min} to {max} hours"),
        (Locale::Persian, None) => format!("هر {min} ساعت"),
        (Locale::Persian, Some(max)) => format!("هر {min} تا {max} ساعت"),
    };
    locale.localize_digits(&text)
}
