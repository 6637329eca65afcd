pub mod error;
pub mod library;

pub use error::CatalogError;
pub use library::{DrugEntry, DrugLibrary, GuidelineText};
