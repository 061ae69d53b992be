//! Tests for gas retention, volatiles and pressure

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use stellar::OrbitalZone;
use units::{Length, Mass, Pressure, Velocity};

use crate::atmosphere::{
    boiling_point, escape_velocity, greenhouse, molecule_limit, rms_velocity, surface_acceleration,
    surface_gravity, surface_pressure, volatile_inventory,
};

fn earth_mass() -> Mass {
    Mass::from_earth_masses(1.0)
}

fn earth_radius() -> Length {
    Length::from_km(6378.0)
}

#[test]
fn test_escape_velocity_earth() {
    let v = escape_velocity(earth_mass(), earth_radius());
    assert!(
        (v.to_km_per_sec() - 11.2).abs() < 0.2,
        "Earth escape velocity should be ~11.2 km/s, got {}",
        v.to_km_per_sec()
    );
}

#[test]
fn test_rms_velocity_of_nitrogen_at_one_au() {
    let v = rms_velocity(28.0, Length::from_au(1.0));
    let expected = (3.0 * 8314.41 * 1273.0 / 28.0_f64).sqrt() * 100.0;
    assert_relative_eq!(v.to_cm_per_sec(), expected, max_relative = 1e-12);
}

#[test]
fn test_rms_velocity_falls_with_distance() {
    let near = rms_velocity(28.0, Length::from_au(0.5));
    let far = rms_velocity(28.0, Length::from_au(2.0));
    assert_relative_eq!(near / far, 4.0, max_relative = 1e-12);
}

#[test]
fn test_earth_retains_nitrogen() {
    let limit = molecule_limit(earth_mass(), earth_radius());
    assert!(limit < 28.0, "Earth should hold N2, limit {}", limit);
    assert!(limit > 2.0, "Earth should lose H2, limit {}", limit);
}

#[test]
fn test_surface_gravity_earth() {
    let accel = surface_acceleration(earth_mass(), earth_radius());
    assert_relative_eq!(surface_gravity(accel), 1.0, epsilon = 0.03);
}

#[test]
fn test_greenhouse_needs_inner_zone_and_close_orbit() {
    let radius = Length::from_au(0.93);
    assert!(greenhouse(OrbitalZone::Inner, Length::from_au(0.7), radius));
    assert!(!greenhouse(OrbitalZone::Inner, Length::from_au(1.0), radius));
    assert!(!greenhouse(OrbitalZone::Middle, Length::from_au(0.7), radius));
}

#[test]
fn test_volatile_inventory_zero_below_retention_threshold() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let inventory = volatile_inventory(
        &mut rng,
        earth_mass(),
        Velocity::from_km_per_sec(4.9),
        Velocity::from_km_per_sec(1.0),
        Mass::from_solar_masses(1.0),
        OrbitalZone::Inner,
        false,
    );
    assert_eq!(inventory, 0.0);
}

#[test]
fn test_volatile_inventory_never_negative_for_tiny_bodies() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    let inventories: Vec<f64> = (0..100)
        .map(|_| {
            volatile_inventory(
                &mut rng,
                Mass::from_solar_masses(7.0e-10),
                Velocity::from_km_per_sec(1.0),
                Velocity::from_km_per_sec(0.1),
                Mass::from_solar_masses(1.0),
                OrbitalZone::Outer,
                false,
            )
        })
        .collect();

    assert!(inventories.iter().all(|&inventory| inventory >= 0.0));
    assert!(inventories.contains(&0.0), "Spread should clamp some draws to zero");
}

#[test]
fn test_volatile_inventory_earth_like() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    for _ in 0..50 {
        let inventory = volatile_inventory(
            &mut rng,
            earth_mass(),
            Velocity::from_km_per_sec(11.2),
            Velocity::from_km_per_sec(1.0),
            Mass::from_solar_masses(1.0),
            OrbitalZone::Inner,
            false,
        );
        let expected = 100_000.0 * earth_mass().to_earth_masses() / 100.0;
        assert!((inventory - expected).abs() <= 0.2 / 100.0 + 1e-9, "Inventory {}", inventory);
    }
}

#[test]
fn test_greenhouse_keeps_volatiles_in_the_air() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let inventory = volatile_inventory(
        &mut rng,
        earth_mass(),
        Velocity::from_km_per_sec(11.2),
        Velocity::from_km_per_sec(1.0),
        Mass::from_solar_masses(1.0),
        OrbitalZone::Inner,
        true,
    );
    assert!(inventory > 99_000.0);
}

#[test]
fn test_surface_pressure_earth() {
    let pressure = surface_pressure(1000.0, earth_radius(), 1.0);
    assert_relative_eq!(pressure.to_millibars(), 1000.0, max_relative = 1e-9);
}

#[test]
fn test_boiling_point_at_one_bar() {
    let boil = boiling_point(Pressure::from_bars(1.0)).expect("atmosphere present");
    assert_relative_eq!(boil.to_kelvin(), 373.0, epsilon = 1e-9);
}

#[test]
fn test_boiling_point_rises_with_pressure() {
    let low = boiling_point(Pressure::from_bars(0.1)).expect("atmosphere present");
    let high = boiling_point(Pressure::from_bars(90.0)).expect("atmosphere present");
    assert!(high > low);
}

#[test]
fn test_no_boiling_point_without_atmosphere() {
    assert_eq!(boiling_point(Pressure::zero()), None);
}

#[test]
fn test_no_boiling_point_below_zero_pressure() {
    assert_eq!(boiling_point(Pressure::from_millibars(-1.88e-7)), None);
    assert_eq!(boiling_point(Pressure::from_millibars(f64::NAN)), None);
}
