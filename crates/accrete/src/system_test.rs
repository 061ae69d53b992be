use approx::assert_relative_eq;
use stellar::Star;
use units::{Mass, Time};
use uuid::Uuid;

use crate::config::GenerationConfig;
use crate::generation::generate_stellar_system_named;
use crate::system::StellarSystem;

fn sun_like() -> StellarSystem {
    generate_stellar_system_named(&GenerationConfig::with_stellar_mass(1.0), "summary-helpers")
        .expect("sun-like system generates")
}

#[test]
fn test_empty_system_summaries() {
    let system = StellarSystem {
        id: Uuid::nil(),
        star: Star::with_age(1.0, Time::from_gyr(4.6)),
        planets: Vec::new(),
    };

    assert_eq!(system.planet_count(), 0);
    assert_eq!(system.gas_giants().count(), 0);
    assert_eq!(system.habitable_candidates().count(), 0);
    assert_eq!(system.total_planetary_mass(), Mass::zero());
}

#[test]
fn test_summaries_agree_with_planets() {
    let system = sun_like();

    assert_eq!(system.planet_count(), system.planets.len());
    assert!(system.gas_giants().all(|planet| planet.gas_giant));
    assert_eq!(
        system.gas_giants().count(),
        system.planets.iter().filter(|planet| planet.gas_giant).count()
    );
    assert!(system.habitable_candidates().all(|planet| !planet.gas_giant));

    let expected: f64 = system.planets.iter().map(|planet| planet.mass.to_solar_masses()).sum();
    assert_relative_eq!(system.total_planetary_mass().to_solar_masses(), expected, max_relative = 1e-12);
}

#[test]
fn test_json_uses_camel_case() {
    let system = sun_like();
    let json = serde_json::to_value(&system).expect("serializable");

    assert!(json.get("id").is_some());
    assert!(json["star"].get("mainSequenceLifetime").is_some());
    assert!(json["star"].get("ecosphereRadius").is_some());

    let planets = json["planets"].as_array().expect("planet array");
    assert_eq!(planets.len(), system.planet_count());
    if let Some(first) = planets.first() {
        assert!(first.get("gasGiant").is_some());
        assert!(first.get("orbitZone").is_some());
    }
}
