//! Formatting contract tests: rounding policy, range words, digit scripts.

use dose_format::{
    Locale, Unit, format_quantity, format_volume, to_latin_digits, to_persian_digits,
};
use dose_model::VolumeRange;

#[test]
fn scenario_volume_range_renders_with_one_decimal() {
    let range = VolumeRange::new(3.75, Some(5.625)).expect("valid range");
    assert_eq!(format_volume(&range, Locale::English), "3.8 to 5.6 ml");
}

#[test]
fn single_value_round_trips_through_persian_digits() {
    for value in [4.4_f64, 140.0, 166.7, 0.5, 12.25] {
        let formatted = format_quantity(value, None, Unit::Milliliters, Locale::Persian);
        let latin = to_latin_digits(&formatted);
        let number = latin
            .split_whitespace()
            .next()
            .expect("leading number")
            .parse::<f64>()
            .expect("parse formatted number");
        let rounded = (value * 10.0).round() / 10.0;
        assert!(
            (number - rounded).abs() < 1e-9,
            "expected {rounded}, recovered {number} from {formatted:?}"
        );
    }
}

#[test]
fn transliterating_twice_is_a_no_op() {
    let formatted = format_quantity(120.0, Some(180.0), Unit::Milligrams, Locale::Persian);
    assert_eq!(to_persian_digits(&formatted), formatted);
}

#[test]
fn range_never_uses_a_hyphen() {
    let formatted = format_quantity(3.3, Some(6.7), Unit::Milliliters, Locale::English);
    assert!(!formatted.contains('-'));
    assert!(formatted.contains(" to "));
}
