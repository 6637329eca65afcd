pub mod calculator;
pub mod pipeline;
pub mod volume;

pub use calculator::compute_dose;
pub use pipeline::{CalculationRequest, DosePipeline};
pub use volume::convert;
