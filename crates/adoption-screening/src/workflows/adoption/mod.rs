pub mod applications;
pub mod batch;

pub use batch::{BatchImportError, BatchRow, BatchScorer};
