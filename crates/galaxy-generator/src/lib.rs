//! Density-preset galaxy generation
//!
//! Maps a user-selected density preset to the host's galaxy spacing
//! parameters and populates the galaxy with one seed star carrying a planet
//! plus planetless filler stars. Preferences round-trip through an opaque
//! JSON blob the host persists between sessions.

pub mod config;
pub mod density;
pub mod error;
pub mod generator;
pub mod options;
pub mod populator;
pub mod preferences;

// Re-export main types at crate root
pub use config::{GeneratorConfig, GeneratorInfo};
pub use density::{DEFAULT_DENSITY_INDEX, DensityLevel, DensityProfile};
pub use error::{GeneratorError, GeneratorResult};
pub use generator::{ConfigurableGenerator, DemoGenerator};
pub use options::{GeneratorOption, GeneratorOptions, OptionId};
pub use populator::{
    GalaxyPopulator, GalaxySettings, GalaxySink, MAX_STAR_COUNT, MIN_STAR_COUNT,
    SEED_PLANET_RADIUS, SeedPolicy, populate,
};
pub use preferences::{DENSITY_KEY, Preferences};

// Re-export star-catalog types for convenience
pub use star_catalog::{GalaxySpacingParams, PlanetRecord, SpectralType, StarRecord, StarType};

#[cfg(test)]
mod generator_test;
