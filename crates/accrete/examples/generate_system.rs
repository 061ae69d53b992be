//! Generate one stellar system and print it
//!
//! Usage: cargo run -p accrete --example generate_system -- [name] [config.ron] [--json]
//!
//! The same name always produces the same system. Set RUST_LOG=accrete=debug
//! (or protodisk=debug) to watch the accretion.

use std::error::Error;

use accrete::{GenerationConfig, generate_stellar_system_named};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|arg| arg == "--json");
    args.retain(|arg| arg != "--json");

    let name = args.first().map(String::as_str).unwrap_or("sol");
    let config = match args.get(1) {
        Some(path) => GenerationConfig::from_ron(&std::fs::read_to_string(path)?)?,
        None => GenerationConfig::default(),
    };

    let system = generate_stellar_system_named(&config, name)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&system)?);
        return Ok(());
    }

    let star = &system.star;
    println!("System {} ({})", name, system.id);
    println!(
        "  star: {:.3} M☉, {:.3} L☉, age {:.2} Gyr, ecosphere {:.3} AU",
        star.mass_ratio(),
        star.luminosity,
        star.age.to_years() / 1.0e9,
        star.ecosphere_radius.to_au()
    );
    println!("  #   a (AU)     e      mass (M⊕)   radius (km)  zone  surface");

    for (idx, planet) in system.planets.iter().enumerate() {
        let surface = match (planet.gas_giant, planet.surface_temp) {
            (true, _) => "gas giant".to_string(),
            (false, Some(temp)) => format!("{:.0} °C, {}", temp.to_celsius(), planet.smallest_retained_gas()),
            (false, None) => "-".to_string(),
        };
        println!(
            "  {:<3} {:<10.3} {:<6.3} {:<11.3} {:<12.0} {:<5} {}",
            idx + 1,
            planet.a.to_au(),
            planet.e,
            planet.mass_in_earth_masses(),
            planet.radius_in_km(),
            planet.orbit_zone.number(),
            surface
        );
    }

    println!(
        "  {} planets, {} gas giants, {} habitable candidates, {:.2} M⊕ total",
        system.planet_count(),
        system.gas_giants().count(),
        system.habitable_candidates().count(),
        system.total_planetary_mass().to_earth_masses()
    );

    Ok(())
}
