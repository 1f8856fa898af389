//! Galaxy population pipeline
//!
//! Emits one seed star carrying a single miniature planet, followed by
//! planetless filler stars up to the requested count. Star placement is left
//! to the host: the populator only hands back the spacing parameters of the
//! selected density preset.

use rand::SeedableRng;
use rand::seq::index;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use star_catalog::{GalaxySpacingParams, PlanetRecord, SpectralType, StarRecord, StarType};
use tracing::debug;

use crate::density::DensityProfile;
use crate::error::{GeneratorError, GeneratorResult};

/// Smallest star count the host may request
pub const MIN_STAR_COUNT: i32 = 1;

/// Largest star count the host can handle without crashing
pub const MAX_STAR_COUNT: i32 = 1024;

/// Radius given to the seed star's planet (vanilla is 200)
pub const SEED_PLANET_RADIUS: f32 = 5.0;

const DEFAULT_SEED_NAME: &str = "BeetleJuice";
const SEED_PLANET_NAME: &str = "Urf";
const SEED_PLANET_THEME: &str = "Mediterranean";

// =============================================================================
// Sinks
// =============================================================================

/// Host-owned destination for generated stars
///
/// The populator assumes exclusive write access for the duration of a call.
pub trait GalaxySink {
    /// Append one star; called in generation order
    fn add_star(&mut self, star: StarRecord);

    /// Receive the galaxy-wide spacing parameters
    fn apply_spacing(&mut self, _params: GalaxySpacingParams) {}
}

impl GalaxySink for Vec<StarRecord> {
    fn add_star(&mut self, star: StarRecord) {
        self.push(star);
    }
}

/// In-memory stand-in for the host's galaxy settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalaxySettings {
    pub stars: Vec<StarRecord>,
    /// `None` until a generator applies its spacing
    pub galaxy_params: Option<GalaxySpacingParams>,
}

impl GalaxySink for GalaxySettings {
    fn add_star(&mut self, star: StarRecord) {
        self.stars.push(star);
    }

    fn apply_spacing(&mut self, params: GalaxySpacingParams) {
        self.galaxy_params = Some(params);
    }
}

// =============================================================================
// Seeds
// =============================================================================

/// How star seeds are assigned
///
/// The host derives procedural detail from each star's seed, so a shared seed
/// makes every star identical downstream. `Fixed(1)` stays the default to
/// match the demo generator's output; `Distinct` is opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Every star gets the same seed
    Fixed(i32),
    /// Pairwise-distinct non-negative seeds, reproducible from `base`
    Distinct { base: u64 },
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self::Fixed(1)
    }
}

impl SeedPolicy {
    fn seeds(&self, count: usize) -> Vec<i32> {
        match *self {
            Self::Fixed(seed) => vec![seed; count],
            Self::Distinct { base } => {
                let mut rng = ChaChaRng::seed_from_u64(base);
                // Indices below i32::MAX always fit
                index::sample(&mut rng, i32::MAX as usize, count)
                    .into_iter()
                    .map(|i| i as i32)
                    .collect()
            }
        }
    }
}

// =============================================================================
// Populator
// =============================================================================

/// Deterministic galaxy populator
#[derive(Debug, Clone, PartialEq)]
pub struct GalaxyPopulator {
    seed_name: String,
    seed_policy: SeedPolicy,
    min_star_count: i32,
    max_star_count: i32,
}

impl Default for GalaxyPopulator {
    fn default() -> Self {
        Self {
            seed_name: DEFAULT_SEED_NAME.to_string(),
            seed_policy: SeedPolicy::default(),
            min_star_count: MIN_STAR_COUNT,
            max_star_count: MAX_STAR_COUNT,
        }
    }
}

impl GalaxyPopulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name given to the first star (builder pattern)
    pub fn with_seed_name(mut self, name: impl Into<String>) -> Self {
        self.seed_name = name.into();
        self
    }

    pub fn with_seed_policy(mut self, policy: SeedPolicy) -> Self {
        self.seed_policy = policy;
        self
    }

    /// Narrow or widen the accepted star-count range
    pub fn with_star_count_bounds(mut self, min: i32, max: i32) -> Self {
        self.min_star_count = min;
        self.max_star_count = max;
        self
    }

    pub fn seed_name(&self) -> &str {
        &self.seed_name
    }

    pub fn seed_policy(&self) -> SeedPolicy {
        self.seed_policy
    }

    /// Check a requested star count against the accepted range
    pub fn validate_star_count(&self, star_count: i32) -> GeneratorResult<usize> {
        if star_count < self.min_star_count.max(1) || star_count > self.max_star_count {
            return Err(GeneratorError::InvalidStarCount {
                count: star_count,
                min: self.min_star_count,
                max: self.max_star_count,
            });
        }
        Ok(star_count as usize)
    }

    /// Populate `sink` with `star_count` stars
    ///
    /// The count is validated before anything is emitted, so a rejected call
    /// leaves the sink untouched. Unknown density levels resolve to the
    /// Default preset.
    ///
    /// # Example
    /// ```
    /// use galaxy_generator::GalaxyPopulator;
    /// use star_catalog::StarRecord;
    ///
    /// let mut stars: Vec<StarRecord> = Vec::new();
    /// let spacing = GalaxyPopulator::new().populate(5, 0, &mut stars).unwrap();
    ///
    /// assert_eq!(stars.len(), 5);
    /// assert_eq!(stars[0].planets.len(), 1);
    /// assert_eq!(stars[4].name, "Star4");
    /// assert_eq!(spacing.max_step_length, 1.5);
    /// ```
    pub fn populate<S>(
        &self,
        star_count: i32,
        density_level: i32,
        sink: &mut S,
    ) -> GeneratorResult<GalaxySpacingParams>
    where
        S: GalaxySink + ?Sized,
    {
        let count = self.validate_star_count(star_count)?;
        let profile = DensityProfile::lookup(density_level);

        debug!(
            star_count = count,
            density_level,
            ?profile,
            "Populating galaxy"
        );

        let seeds = self.seed_policy.seeds(count);
        sink.add_star(self.seed_star(seeds[0]));
        for (i, &seed) in seeds.iter().enumerate().skip(1) {
            sink.add_star(filler_star(seed, i));
        }

        Ok(profile.spacing())
    }

    /// The one star with content: an O-type main sequence star with a tiny planet
    fn seed_star(&self, seed: i32) -> StarRecord {
        let planet =
            PlanetRecord::new(SEED_PLANET_NAME, SEED_PLANET_THEME).with_radius(SEED_PLANET_RADIUS);

        StarRecord::new(
            seed,
            self.seed_name.clone(),
            SpectralType::O,
            StarType::MainSequence,
            vec![planet],
        )
    }
}

/// Empty F-type giant, visually distinct from the seed star
fn filler_star(seed: i32, index: usize) -> StarRecord {
    StarRecord::new(
        seed,
        format!("Star{}", index),
        SpectralType::F,
        StarType::GiantStar,
        Vec::new(),
    )
}

/// Populate `sink` using the default populator
///
/// Convenience wrapper for [`GalaxyPopulator::populate`].
pub fn populate<S>(
    star_count: i32,
    density_level: i32,
    sink: &mut S,
) -> GeneratorResult<GalaxySpacingParams>
where
    S: GalaxySink + ?Sized,
{
    GalaxyPopulator::default().populate(star_count, density_level, sink)
}
