//! Error types for galaxy generation

use thiserror::Error;

/// Result type for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Errors that can occur while generating or persisting a galaxy
///
/// Unknown density levels and missing preference keys are not errors: both
/// resolve to defaults.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Star count {count} outside allowed range {min}..={max}")]
    InvalidStarCount { count: i32, min: i32, max: i32 },

    #[error("Preferences serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
