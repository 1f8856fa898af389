use crate::planet::{PlanetRecord, VANILLA_RADIUS};

#[test]
fn new_planet_uses_vanilla_defaults() {
    let planet = PlanetRecord::new("Urf", "Mediterranean");

    assert_eq!(planet.name, "Urf");
    assert_eq!(planet.theme, "Mediterranean");
    assert_eq!(planet.radius, VANILLA_RADIUS);
    assert_eq!(planet.orbit_radius, 1.0);
    assert_eq!(planet.orbital_period, 1000.0);
    assert_eq!(planet.rotation_period, 1000.0);
    assert_eq!(planet.luminosity, 1.0);
    assert_eq!(planet.orbit_inclination, 0.0);
    assert_eq!(planet.obliquity, 0.0);
}

#[test]
fn with_radius_only_touches_radius() {
    let vanilla = PlanetRecord::new("Urf", "Mediterranean");
    let tiny = vanilla.clone().with_radius(5.0);

    assert_eq!(tiny.radius, 5.0);
    assert_eq!(
        PlanetRecord {
            radius: VANILLA_RADIUS,
            ..tiny
        },
        vanilla
    );
}

#[test]
fn planet_serializes_camel_case() {
    let planet = PlanetRecord::new("Urf", "Mediterranean");
    let json = serde_json::to_value(&planet).unwrap();

    assert_eq!(json["orbitRadius"], 1.0);
    assert_eq!(json["rotationPeriod"], 1000.0);
    assert!(json.get("orbit_radius").is_none());
}
