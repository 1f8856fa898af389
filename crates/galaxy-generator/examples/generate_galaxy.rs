//! Run one host session and dump the generated galaxy as JSON
//!
//! Usage: cargo run -p galaxy-generator --example generate_galaxy -- [star_count] [density]
//!
//! Set `RUST_LOG=debug` to see density resolution.

use galaxy_generator::{
    ConfigurableGenerator, DENSITY_KEY, DemoGenerator, GalaxySettings, Preferences,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let star_count: i32 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(8);
    let density: i32 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(2);

    let mut generator = DemoGenerator::new();
    generator.init();

    let mut prefs = Preferences::new();
    prefs.set(DENSITY_KEY, density);
    generator.import(prefs);

    let mut galaxy = GalaxySettings::default();
    generator.generate(star_count, &mut galaxy)?;

    println!("{}", serde_json::to_string_pretty(&galaxy)?);
    eprintln!("preferences: {}", generator.export().to_json()?);

    Ok(())
}
