//! Planet records attached to generated stars
//!
//! Apart from `radius`, every field is pass-through data for the host: the
//! generator fills vanilla defaults and never reads them back.

use serde::{Deserialize, Serialize};

/// Radius the host gives a planet when nothing overrides it
pub const VANILLA_RADIUS: f32 = 200.0;

/// A single planet as handed to the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetRecord {
    /// Display name
    pub name: String,
    /// Surface theme tag (e.g. "Mediterranean")
    pub theme: String,
    /// Planet radius in host units
    pub radius: f32,
    /// Orbit radius around the host star (AU)
    pub orbit_radius: f32,
    /// Orbital inclination (degrees)
    pub orbit_inclination: f32,
    /// Longitude of the ascending node (degrees)
    pub orbit_longitude: f32,
    /// Orbital period (seconds of game time)
    pub orbital_period: f32,
    /// Starting orbital phase (degrees)
    pub orbit_phase: f32,
    /// Axial tilt (degrees)
    pub obliquity: f32,
    /// Rotation period (seconds of game time)
    pub rotation_period: f32,
    /// Starting rotation phase (degrees)
    pub rotation_phase: f32,
    /// Light multiplier received from the host star
    pub luminosity: f32,
}

impl PlanetRecord {
    /// Create a planet with vanilla orbital and physical defaults
    ///
    /// # Example
    /// ```
    /// use star_catalog::{PlanetRecord, VANILLA_RADIUS};
    ///
    /// let planet = PlanetRecord::new("Urf", "Mediterranean");
    /// assert_eq!(planet.radius, VANILLA_RADIUS);
    /// assert_eq!(planet.orbital_period, 1000.0);
    /// ```
    pub fn new(name: impl Into<String>, theme: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            theme: theme.into(),
            radius: VANILLA_RADIUS,
            orbit_radius: 1.0,
            orbit_inclination: 0.0,
            orbit_longitude: 0.0,
            orbital_period: 1000.0,
            orbit_phase: 0.0,
            obliquity: 0.0,
            rotation_period: 1000.0,
            rotation_phase: 0.0,
            luminosity: 1.0,
        }
    }

    /// Override the radius (builder pattern)
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }
}
