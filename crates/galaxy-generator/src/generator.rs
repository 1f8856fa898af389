//! Generator plugin surface
//!
//! [`ConfigurableGenerator`] is the contract the host drives: it reads the
//! declaration once, restores preferences at session start, asks for a
//! galaxy, and saves preferences at session end. [`DemoGenerator`] is the
//! density-preset implementation.

use star_catalog::GalaxySpacingParams;
use tracing::{debug, info};

use crate::config::{GeneratorConfig, GeneratorInfo};
use crate::density::{DEFAULT_DENSITY_INDEX, DensityLevel, DensityProfile};
use crate::error::GeneratorResult;
use crate::options::{GeneratorOption, GeneratorOptions, OptionId};
use crate::populator::{GalaxyPopulator, GalaxySink, MAX_STAR_COUNT, MIN_STAR_COUNT};
use crate::preferences::{DENSITY_KEY, Preferences};

/// A galaxy generator the host can register, configure and run
pub trait ConfigurableGenerator {
    fn info(&self) -> &GeneratorInfo;

    fn config(&self) -> &GeneratorConfig;

    fn options(&self) -> &GeneratorOptions;

    /// Called after registration, before any other hook
    ///
    /// Registering options more than once must not duplicate them.
    fn init(&mut self);

    /// Restore the preferences exported at the end of the previous session
    fn import(&mut self, prefs: Preferences);

    /// Preferences for the host to persist
    fn export(&self) -> &Preferences;

    /// Write a galaxy of `star_count` stars into `sink`
    fn generate(&mut self, star_count: i32, sink: &mut dyn GalaxySink) -> GeneratorResult<()>;
}

/// Sample generator: one star with a tiny planet plus empty filler stars,
/// spaced according to a user-selected density preset
#[derive(Debug, Clone)]
pub struct DemoGenerator {
    info: GeneratorInfo,
    config: GeneratorConfig,
    options: GeneratorOptions,
    density_combobox: Option<OptionId>,
    preferences: Preferences,
    profile: DensityProfile,
    populator: GalaxyPopulator,
}

impl Default for DemoGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoGenerator {
    pub fn new() -> Self {
        Self {
            info: GeneratorInfo::demo(),
            config: GeneratorConfig::default(),
            options: GeneratorOptions::new(),
            density_combobox: None,
            preferences: Preferences::new(),
            profile: DensityProfile::default(),
            populator: GalaxyPopulator::default(),
        }
    }

    /// Replace the populator, e.g. to opt into distinct star seeds
    pub fn with_populator(mut self, populator: GalaxyPopulator) -> Self {
        self.populator = populator;
        self
    }

    /// Spacing profile currently in effect
    pub fn active_profile(&self) -> DensityProfile {
        self.profile
    }

    pub fn density_combobox(&self) -> Option<OptionId> {
        self.density_combobox
    }

    /// Store a density index and activate its profile
    ///
    /// The raw index is kept in the preferences even when it names no preset,
    /// so a value written by another version survives a round trip. Only the
    /// active profile falls back to Default.
    pub fn set_density(&mut self, index: i32) {
        self.preferences.set(DENSITY_KEY, index);
        self.profile = DensityProfile::lookup(index);

        match DensityLevel::from_index(index) {
            Some(level) => debug!(%level, "Density set"),
            None => debug!(index, "Unknown density index, using Default profile"),
        }
    }

    /// Selection callback for the density combobox
    pub fn on_density_selected(&mut self, index: i32) {
        self.set_density(index);
    }

    /// Post-construction hook: show the stored density in the combobox
    pub fn initialize_density_select(&mut self) {
        let Some(id) = self.density_combobox else {
            return;
        };
        let level = DensityLevel::from_index(
            self.preferences.get_int(DENSITY_KEY, DEFAULT_DENSITY_INDEX),
        )
        .unwrap_or_default();
        self.options.set_selected(id, level.index() as usize);
    }

    /// Populate `sink` and return the spacing that was applied to it
    pub fn generate_galaxy(
        &mut self,
        star_count: i32,
        sink: &mut dyn GalaxySink,
    ) -> GeneratorResult<GalaxySpacingParams> {
        let density = self.preferences.get_int(DENSITY_KEY, DEFAULT_DENSITY_INDEX);
        self.set_density(density);

        info!(star_count, density, "Generating galaxy");
        let params = self.populator.populate(star_count, density, sink)?;
        sink.apply_spacing(params);

        Ok(params)
    }
}

impl ConfigurableGenerator for DemoGenerator {
    fn info(&self) -> &GeneratorInfo {
        &self.info
    }

    fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    fn init(&mut self) {
        if self.density_combobox.is_some() {
            return;
        }
        info!(generator = %self.info.name, "Initializing Demo Generator");

        self.config.disable_seed_input = true;
        self.config.disable_star_count_slider = false;
        self.config.min_star_count = MIN_STAR_COUNT;
        self.config.max_star_count = MAX_STAR_COUNT;
        self.populator = self
            .populator
            .clone()
            .with_star_count_bounds(self.config.min_star_count, self.config.max_star_count);

        let labels = DensityLevel::ALL
            .iter()
            .map(|level| level.label().to_string())
            .collect();
        let id = self
            .options
            .add(GeneratorOption::combobox(DENSITY_KEY, labels));
        self.density_combobox = Some(id);
    }

    fn import(&mut self, prefs: Preferences) {
        let density = prefs.get_int(DENSITY_KEY, DEFAULT_DENSITY_INDEX);
        self.preferences = prefs;
        self.set_density(density);
    }

    fn export(&self) -> &Preferences {
        &self.preferences
    }

    fn generate(&mut self, star_count: i32, sink: &mut dyn GalaxySink) -> GeneratorResult<()> {
        self.generate_galaxy(star_count, sink).map(|_| ())
    }
}
