pub mod locale;
pub mod render;

pub use locale::{Locale, Unit, to_latin_digits, to_persian_digits};
pub use render::{format_dose, format_frequency, format_quantity, format_volume};
