//! Star records appended to the host galaxy.

use serde::{Deserialize, Serialize};

use crate::planet::PlanetRecord;
use crate::spectral::{SpectralType, StarType};

/// A generated star and the planets orbiting it
///
/// Stars are append-only from the generator's point of view: once handed to
/// the host they are never revisited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarRecord {
    /// Host-side procedural seed for this star
    pub seed: i32,
    /// Display name
    pub name: String,
    pub spectral_type: SpectralType,
    pub star_type: StarType,
    /// Planets in orbit order
    pub planets: Vec<PlanetRecord>,
}

impl StarRecord {
    pub fn new(
        seed: i32,
        name: impl Into<String>,
        spectral_type: SpectralType,
        star_type: StarType,
        planets: Vec<PlanetRecord>,
    ) -> Self {
        Self {
            seed,
            name: name.into(),
            spectral_type,
            star_type,
            planets,
        }
    }

    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }

    pub fn has_planets(&self) -> bool {
        !self.planets.is_empty()
    }
}
