use approx::assert_relative_eq;

use crate::density::{DensityLevel, DensityProfile};
use crate::generator::{ConfigurableGenerator, DemoGenerator};
use crate::options::GeneratorOption;
use crate::populator::{GalaxyPopulator, GalaxySettings, SeedPolicy};
use crate::preferences::{DENSITY_KEY, Preferences};

fn prefs_with_density(index: i32) -> Preferences {
    let mut prefs = Preferences::new();
    prefs.set(DENSITY_KEY, index);
    prefs
}

fn selected_density(generator: &DemoGenerator) -> usize {
    let id = generator.density_combobox().expect("combobox registered by init");
    match generator.options().get(id) {
        Some(GeneratorOption::Combobox { selected, .. }) => *selected,
        other => panic!("unexpected option {:?}", other),
    }
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn init_declares_config_and_density_combobox() {
    let mut generator = DemoGenerator::new();
    generator.init();

    let config = generator.config();
    assert!(config.disable_seed_input);
    assert!(!config.disable_star_count_slider);
    assert_eq!(config.min_star_count, 1);
    assert_eq!(config.max_star_count, 1024);

    assert_eq!(generator.options().len(), 1);
    match generator.options().iter().next() {
        Some(GeneratorOption::Combobox { label, items, .. }) => {
            assert_eq!(label, "Density");
            assert_eq!(items, &["Densest", "Denser", "Default", "Sparse", "Sparsest"]);
        }
        other => panic!("unexpected option {:?}", other),
    }
    assert_eq!(generator.info().name, "Demo");
}

#[test]
fn repeated_init_registers_density_once() {
    let mut generator = DemoGenerator::new();
    generator.init();
    let id = generator.density_combobox();
    generator.init();

    assert_eq!(generator.options().len(), 1);
    assert_eq!(generator.density_combobox(), id);
}

// ============================================================================
// Preferences
// ============================================================================

#[test]
fn import_activates_stored_density() {
    let mut generator = DemoGenerator::new();
    generator.import(prefs_with_density(4));

    assert_eq!(generator.active_profile(), DensityLevel::Sparsest.profile());
}

#[test]
fn import_without_density_uses_default() {
    let mut generator = DemoGenerator::new();
    generator.import(Preferences::new());

    assert_eq!(generator.active_profile(), DensityProfile::default());
    assert_eq!(generator.export().get_int(DENSITY_KEY, -1), 2);
}

#[test]
fn export_import_roundtrip() {
    for index in [0, 3, -7, 99] {
        let prefs = prefs_with_density(index);
        let mut generator = DemoGenerator::new();
        generator.import(prefs.clone());

        assert_eq!(generator.export(), &prefs, "index {}", index);
    }
}

#[test]
fn density_callback_updates_preferences() {
    let mut generator = DemoGenerator::new();
    generator.init();
    generator.on_density_selected(1);

    assert_eq!(generator.export().get_int(DENSITY_KEY, -1), 1);
    assert_eq!(generator.active_profile(), DensityLevel::Denser.profile());
}

#[test]
fn unknown_density_keeps_raw_value() {
    let mut generator = DemoGenerator::new();
    generator.set_density(-7);

    assert_eq!(generator.export().get_int(DENSITY_KEY, 0), -7);
    assert_eq!(generator.active_profile(), DensityProfile::default());
}

#[test]
fn initialize_density_select_shows_stored_index() {
    let mut generator = DemoGenerator::new();
    generator.init();
    generator.import(prefs_with_density(3));
    generator.initialize_density_select();

    assert_eq!(selected_density(&generator), 3);
}

#[test]
fn initialize_density_select_maps_unknown_to_default() {
    let mut generator = DemoGenerator::new();
    generator.init();
    generator.import(prefs_with_density(42));
    generator.initialize_density_select();

    assert_eq!(selected_density(&generator), 2);
}

#[test]
fn initialize_density_select_before_init_is_noop() {
    let mut generator = DemoGenerator::new();
    generator.initialize_density_select();

    assert!(generator.density_combobox().is_none());
    assert!(generator.options().is_empty());
}

// ============================================================================
// Generation
// ============================================================================

#[test]
fn generate_writes_stars_and_spacing() {
    let mut generator = DemoGenerator::new();
    generator.init();
    generator.import(prefs_with_density(0));

    let mut galaxy = GalaxySettings::default();
    generator.generate(5, &mut galaxy).unwrap();

    assert_eq!(galaxy.stars.len(), 5);
    let params = galaxy.galaxy_params.expect("spacing applied");
    assert_relative_eq!(params.min_step_length, 1.2);
    assert_relative_eq!(params.max_step_length, 1.5);
    assert_relative_eq!(params.min_distance, 1.2);
}

#[test]
fn generate_without_import_uses_default_density() {
    let mut generator = DemoGenerator::new();
    let mut galaxy = GalaxySettings::default();
    let params = generator.generate_galaxy(1, &mut galaxy).unwrap();

    assert_eq!(params, DensityProfile::default().spacing());
    assert_eq!(generator.export().get_int(DENSITY_KEY, -1), 2);
}

#[test]
fn generate_rejects_star_count_above_ceiling() {
    let mut generator = DemoGenerator::new();
    generator.init();

    let mut galaxy = GalaxySettings::default();
    assert!(generator.generate(1025, &mut galaxy).is_err());
    assert!(galaxy.stars.is_empty());
    assert!(galaxy.galaxy_params.is_none());
}

#[test]
fn generate_with_distinct_seeds() {
    let mut generator = DemoGenerator::new()
        .with_populator(GalaxyPopulator::new().with_seed_policy(SeedPolicy::Distinct { base: 7 }));
    generator.init();

    let mut galaxy = GalaxySettings::default();
    generator.generate(3, &mut galaxy).unwrap();

    assert_ne!(galaxy.stars[0].seed, galaxy.stars[1].seed);
    assert_ne!(galaxy.stars[1].seed, galaxy.stars[2].seed);
}
