//! Density presets and their spacing parameters
//!
//! The five presets are hand-tuned values, so they live in a closed table
//! rather than being derived from a formula.

use std::fmt;

use serde::{Deserialize, Serialize};
use star_catalog::GalaxySpacingParams;

/// Preference index used whenever no density has been stored
pub const DEFAULT_DENSITY_INDEX: i32 = 2;

/// User-facing star packing preset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DensityLevel {
    Densest,
    Denser,
    #[default]
    Default,
    Sparse,
    Sparsest,
}

impl DensityLevel {
    /// All presets in combobox order
    pub const ALL: [DensityLevel; 5] = [
        DensityLevel::Densest,
        DensityLevel::Denser,
        DensityLevel::Default,
        DensityLevel::Sparse,
        DensityLevel::Sparsest,
    ];

    /// Stored preference index of this preset
    pub fn index(&self) -> i32 {
        match self {
            Self::Densest => 0,
            Self::Denser => 1,
            Self::Default => 2,
            Self::Sparse => 3,
            Self::Sparsest => 4,
        }
    }

    /// Resolve a stored index, `None` if it names no preset
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Self::Densest),
            1 => Some(Self::Denser),
            2 => Some(Self::Default),
            3 => Some(Self::Sparse),
            4 => Some(Self::Sparsest),
            _ => None,
        }
    }

    /// Label shown in the density selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::Densest => "Densest",
            Self::Denser => "Denser",
            Self::Default => "Default",
            Self::Sparse => "Sparse",
            Self::Sparsest => "Sparsest",
        }
    }

    pub fn profile(&self) -> DensityProfile {
        match self {
            Self::Densest => DensityProfile::new(1.2, 1.5, 1.2),
            Self::Denser => DensityProfile::new(1.6, 2.5, 1.7),
            Self::Default => DensityProfile::new(2.0, 3.5, 2.3),
            Self::Sparse => DensityProfile::new(2.2, 5.0, 2.2),
            Self::Sparsest => DensityProfile::new(3.0, 7.0, 3.0),
        }
    }
}

impl fmt::Display for DensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Spacing values for one density preset
///
/// Invariants: `0 < min_step_length <= max_step_length` and `min_distance > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityProfile {
    pub min_step_length: f32,
    pub max_step_length: f32,
    pub min_distance: f32,
}

impl DensityProfile {
    const fn new(min_step_length: f32, max_step_length: f32, min_distance: f32) -> Self {
        Self {
            min_step_length,
            max_step_length,
            min_distance,
        }
    }

    /// Look up the profile for a stored density index
    ///
    /// Total over all integers: anything that is not a known preset (a corrupt
    /// preference, an option removed in a later version) gets the Default row.
    ///
    /// # Example
    /// ```
    /// use galaxy_generator::DensityProfile;
    ///
    /// let densest = DensityProfile::lookup(0);
    /// assert_eq!(densest.max_step_length, 1.5);
    ///
    /// assert_eq!(DensityProfile::lookup(99), DensityProfile::lookup(2));
    /// ```
    pub fn lookup(level: i32) -> Self {
        DensityLevel::from_index(level)
            .unwrap_or_default()
            .profile()
    }

    /// Galaxy-wide parameters the host applies to its layout
    pub fn spacing(&self) -> GalaxySpacingParams {
        GalaxySpacingParams::new(self.min_step_length, self.max_step_length, self.min_distance)
    }
}

impl Default for DensityProfile {
    fn default() -> Self {
        DensityLevel::Default.profile()
    }
}
