//! Data module - CSV loading, filtering and variant classification

pub mod loader;
pub mod processor;
mod variant;

pub use loader::{DataLoader, LoaderError};
pub use processor::{DataProcessor, ProcessorError};
pub use variant::Variant;
