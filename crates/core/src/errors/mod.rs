//! Error types for pipelines that run past the typed arities

mod builders;
mod display;
mod types;

pub use types::{Error, Result};
