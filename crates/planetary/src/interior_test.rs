//! Tests for radius and density

use approx::assert_relative_eq;
use stellar::OrbitalZone;
use units::{Length, Mass};

use crate::interior::{empirical_density, kothari_radius, volume_density, volume_radius};

#[test]
fn test_kothari_radius_earth() {
    let radius = kothari_radius(Mass::from_earth_masses(1.0), false, OrbitalZone::Inner);
    assert!(
        (6000.0..6800.0).contains(&radius.to_km()),
        "Earth radius should be ~6400 km, got {}",
        radius.to_km()
    );
}

#[test]
fn test_kothari_radius_grows_with_mass() {
    let small = kothari_radius(Mass::from_earth_masses(0.1), false, OrbitalZone::Inner);
    let large = kothari_radius(Mass::from_earth_masses(5.0), false, OrbitalZone::Inner);
    assert!(large > small);
}

#[test]
fn test_kothari_radius_lighter_material_is_larger() {
    let mass = Mass::from_earth_masses(1.0);
    let inner = kothari_radius(mass, false, OrbitalZone::Inner);
    let outer = kothari_radius(mass, false, OrbitalZone::Outer);
    assert!(outer > inner, "Icy composition should be less compact");

    // Rocky bodies in the middle and outer zones share a composition
    assert_eq!(
        kothari_radius(mass, false, OrbitalZone::Middle),
        kothari_radius(mass, false, OrbitalZone::Outer)
    );
}

#[test]
fn test_earth_density_from_kothari_radius() {
    let mass = Mass::from_earth_masses(1.0);
    let radius = kothari_radius(mass, false, OrbitalZone::Inner);
    let density = volume_density(mass, radius);
    assert!((5.0..6.0).contains(&density), "Earth density should be ~5.5, got {}", density);
}

#[test]
fn test_empirical_density_jupiter() {
    let density = empirical_density(Mass::from_earth_masses(318.0), Length::from_au(5.2), Length::from_au(1.0), true);
    let expected = 318.0_f64.powf(1.0 / 8.0) * (1.0 / 5.2_f64).powf(0.25) * 1.2;
    assert_relative_eq!(density, expected, max_relative = 1e-9);
}

#[test]
fn test_empirical_density_rocky_factor() {
    let mass = Mass::from_earth_masses(1.0);
    let rocky = empirical_density(mass, Length::from_au(1.0), Length::from_au(1.0), false);
    let giant = empirical_density(mass, Length::from_au(1.0), Length::from_au(1.0), true);
    assert_relative_eq!(rocky / giant, 5.5 / 1.2, max_relative = 1e-12);
}

#[test]
fn test_volume_radius_inverts_volume_density() {
    let mass = Mass::from_earth_masses(318.0);
    let radius = volume_radius(mass, 1.33);
    assert_relative_eq!(volume_density(mass, radius), 1.33, max_relative = 1e-9);
    assert!(
        (60_000.0..80_000.0).contains(&radius.to_km()),
        "Jupiter-like radius, got {} km",
        radius.to_km()
    );
}
