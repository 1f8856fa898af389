//! Host-facing star catalog records
//!
//! This crate defines the records a galaxy generator hands to the host game:
//! stars with their planets, plus the galaxy-wide spacing parameters the host
//! feeds into its own layout pass. It carries no generation logic.

pub mod galaxy;
pub mod planet;
pub mod spectral;
pub mod star;

// Re-export main types at crate root
pub use galaxy::GalaxySpacingParams;
pub use planet::{PlanetRecord, VANILLA_RADIUS};
pub use spectral::{SpectralType, StarType};
pub use star::StarRecord;

#[cfg(test)]
mod planet_test;
