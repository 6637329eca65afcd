//! Display locales and digit-script conversion.
//!
//! The arithmetic core always works in Latin digits; locales that use
//! another digit script transliterate the finished display string through a
//! fixed one-to-one mapping table as the very last step.

use serde::{Deserialize, Serialize};

/// Extended Arabic-Indic digits used by the Persian display layer, indexed
/// by the Latin digit value.
const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Display locale for formatted output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Persian,
}

/// Unit label attached to a formatted quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Milligrams,
    Milliliters,
}

impl Locale {
    /// Word joining the bounds of a range; never a hyphen.
    pub fn range_word(&self) -> &'static str {
        match self {
            Self::English => "to",
            Self::Persian => "تا",
        }
    }

    pub fn unit_label(&self, unit: Unit) -> &'static str {
        match (self, unit) {
            (Self::English, Unit::Milligrams) => "mg",
            (Self::English, Unit::Milliliters) => "ml",
            (Self::Persian, Unit::Milligrams) => "میلی\u{200c}گرم",
            (Self::Persian, Unit::Milliliters) => "میلی\u{200c}لیتر",
        }
    }

    /// Transliterate every Latin digit in `text` into this locale's digit
    /// script. Applied only to display strings, after all arithmetic; a
    /// second application is a no-op because the target script contains no
    /// Latin digits.
    pub fn localize_digits(&self, text: &str) -> String {
        match self {
            Self::English => text.to_string(),
            Self::Persian => to_persian_digits(text),
        }
    }
}

/// Map every ASCII digit to its Persian counterpart.
pub fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => PERSIAN_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// Map every Persian digit back to ASCII; the inverse of
/// [`to_persian_digits`] for round-tripping parsed values.
pub fn to_latin_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            match PERSIAN_DIGITS.iter().position(|&p| p == c) {
                Some(d) => char::from_digit(d as u32, 10).unwrap_or(c),
                None => c,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persian_digit_mapping_is_one_to_one() {
        assert_eq!(to_persian_digits("120.5"), "۱۲۰.۵");
        assert_eq!(to_latin_digits("۱۲۰.۵"), "120.5");
    }

    #[test]
    fn transliteration_is_idempotent() {
        let once = to_persian_digits("3.8 to 5.6 ml");
        let twice = to_persian_digits(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn english_locale_leaves_digits_alone() {
        assert_eq!(Locale::English.localize_digits("120 to 180 mg"), "120 to 180 mg");
    }
}
