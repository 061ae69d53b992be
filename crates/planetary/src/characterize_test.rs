//! Tests for planet characterization

use protodisk::Protoplanet;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use stellar::{OrbitalZone, Star};
use units::{Length, Mass, Time};

use crate::characterize::characterize;
use crate::temperature::DEFAULT_MAX_SURFACE_TEMP_ITERATIONS;

fn sun() -> Star {
    Star::with_age(1.0, Time::from_gyr(4.6))
}

fn rocky(a: f64, earth_masses: f64) -> Protoplanet {
    Protoplanet::new(Length::from_au(a), 0.02, Mass::from_earth_masses(earth_masses))
}

fn giant(a: f64, earth_masses: f64) -> Protoplanet {
    Protoplanet {
        gas_giant: true,
        ..Protoplanet::new(Length::from_au(a), 0.05, Mass::from_earth_masses(earth_masses))
    }
}

#[test]
fn test_earth_analogue() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let planet = characterize(&mut rng, &rocky(1.0, 1.0), &sun(), DEFAULT_MAX_SURFACE_TEMP_ITERATIONS);

    assert!(!planet.gas_giant);
    assert_eq!(planet.orbit_zone, OrbitalZone::Inner);
    assert!((6000.0..6800.0).contains(&planet.radius.to_km()));
    assert!((5.0..6.0).contains(&planet.density));
    assert!((360.0..370.0).contains(&planet.orbital_period.to_days()));
    assert!(!planet.greenhouse_effect);

    let gravity = planet.surface_grav.expect("rocky planets have surface gravity");
    assert!((0.9..1.1).contains(&gravity));

    let pressure = planet.surface_pressure.expect("rocky planets have a surface pressure");
    assert!((800.0..1200.0).contains(&pressure.to_millibars()));
    assert!(planet.boil_point.is_some());
    assert!(planet.surface_temp.is_some());
    assert!(planet.hydrosphere.is_some() && planet.cloud_cover.is_some() && planet.ice_cover.is_some());
    assert!(planet.temperature_converged);
}

#[test]
fn test_gas_giant_has_no_surface() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let planet = characterize(&mut rng, &giant(5.2, 318.0), &sun(), DEFAULT_MAX_SURFACE_TEMP_ITERATIONS);

    assert!(planet.gas_giant);
    assert_eq!(planet.orbit_zone, OrbitalZone::Middle);
    assert_eq!(planet.surface_grav, None);
    assert_eq!(planet.surface_pressure, None);
    assert_eq!(planet.boil_point, None);
    assert_eq!(planet.surface_temp, None);
    assert_eq!(planet.volatile_gas_inventory, None);
    assert_eq!(planet.hydrosphere, None);
    assert!(!planet.greenhouse_effect);
    assert!((0.4..=0.6).contains(&planet.albedo));
    assert!(planet.radius.to_km() > 30_000.0);
    assert!(planet.surface_accel > 0.0);
}

#[test]
fn test_small_hot_body_is_airless() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let planet = characterize(&mut rng, &rocky(0.4, 0.01), &sun(), DEFAULT_MAX_SURFACE_TEMP_ITERATIONS);

    assert_eq!(planet.volatile_gas_inventory, Some(0.0));
    assert!(planet.surface_pressure.is_some_and(|p| p.is_zero()));
    assert_eq!(planet.boil_point, None);
    assert_eq!(planet.hydrosphere, Some(0.0));
}

#[test]
fn test_close_inner_planet_runs_away() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let planet = characterize(&mut rng, &rocky(0.7, 0.8), &sun(), DEFAULT_MAX_SURFACE_TEMP_ITERATIONS);

    assert!(planet.greenhouse_effect);
    let pressure = planet.surface_pressure.expect("rocky");
    assert!(pressure.to_bars() > 10.0, "Runaway greenhouse should be thick, got {:?}", pressure);
}

#[test]
fn test_characterize_is_reproducible() {
    let body = rocky(1.3, 0.5);
    let first = characterize(&mut ChaChaRng::seed_from_u64(9), &body, &sun(), DEFAULT_MAX_SURFACE_TEMP_ITERATIONS);
    let second = characterize(&mut ChaChaRng::seed_from_u64(9), &body, &sun(), DEFAULT_MAX_SURFACE_TEMP_ITERATIONS);
    assert_eq!(first, second);
}

#[test]
fn test_tiny_distant_body_has_finite_surface() {
    let body = Protoplanet::new(Length::from_au(25.3), 0.0066, Mass::from_solar_masses(7.08e-10));

    for seed in 0..100 {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let planet = characterize(&mut rng, &body, &sun(), DEFAULT_MAX_SURFACE_TEMP_ITERATIONS);

        let inventory = planet.volatile_gas_inventory.expect("rocky");
        let pressure = planet.surface_pressure.expect("rocky");
        let temp = planet.surface_temp.expect("rocky");

        assert!(inventory >= 0.0, "seed {}: inventory {}", seed, inventory);
        assert!(pressure.to_millibars() >= 0.0, "seed {}: pressure {:?}", seed, pressure);
        assert!(temp.to_kelvin().is_finite(), "seed {}: temperature {:?}", seed, temp);
        assert!(planet.temperature_converged, "seed {} did not settle", seed);
        if pressure.is_zero() {
            assert_eq!(planet.boil_point, None);
        }
    }
}
