pub mod interpret;

pub use interpret::interpret;
