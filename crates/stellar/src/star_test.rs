use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use units::{Length, Time};

use crate::star::{Star, luminosity, main_sequence_lifetime};

#[test]
fn test_solar_luminosity() {
    assert_relative_eq!(luminosity(1.0), 1.0, epsilon = 1e-12);
}

#[test]
fn test_luminosity_exponent_branches() {
    // Below one solar mass: n = 1.75 (m - 0.1) + 3.325
    let n_low = 1.75 * (0.8 - 0.1) + 3.325;
    assert_relative_eq!(luminosity(0.8), 0.8_f64.powf(n_low), epsilon = 1e-12);

    // Above: n = 0.5 (2 - m) + 4.4
    let n_high = 0.5 * (2.0 - 1.2) + 4.4;
    assert_relative_eq!(luminosity(1.2), 1.2_f64.powf(n_high), epsilon = 1e-12);
}

#[test]
fn test_luminosity_increases_with_mass() {
    let masses = [0.6, 0.8, 1.0, 1.1, 1.3];
    for pair in masses.windows(2) {
        assert!(luminosity(pair[1]) > luminosity(pair[0]));
    }
}

#[test]
fn test_solar_lifetime() {
    let lifetime = main_sequence_lifetime(1.0, 1.0);
    assert_relative_eq!(lifetime.to_years(), 1.0e10, epsilon = 1.0);
}

#[test]
fn test_sun_like_star_scalars() {
    let star = Star::with_age(1.0, Time::from_gyr(4.6));

    assert_relative_eq!(star.luminosity, 1.0, epsilon = 1e-12);
    assert_relative_eq!(star.ecosphere_radius.to_au(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(star.greenhouse_radius.to_au(), 0.93, epsilon = 1e-12);
    assert_relative_eq!(star.age.to_years(), 4.6e9, epsilon = 1.0);
}

#[test]
fn test_disk_limits_scale_with_cube_root_of_mass() {
    let sun = Star::with_age(1.0, Time::from_gyr(4.6));
    assert_relative_eq!(sun.dust_limit().to_au(), 200.0, epsilon = 1e-9);
    assert_relative_eq!(sun.innermost_planet().to_au(), 0.3, epsilon = 1e-12);
    assert_relative_eq!(sun.outermost_planet().to_au(), 50.0, epsilon = 1e-9);

    let heavy = Star::with_age(8.0, Time::from_gyr(0.01));
    assert_relative_eq!(heavy.dust_limit().to_au(), 400.0, epsilon = 1e-9);
    assert_relative_eq!(heavy.outermost_planet().to_au(), 100.0, epsilon = 1e-9);
}

#[test]
fn test_sampled_age_bounds() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    for _ in 0..200 {
        let sun = Star::new(&mut rng, 1.0);
        let age = sun.age.to_years();
        assert!((1.0e9..=6.0e9).contains(&age), "Age {} out of range", age);
    }
}

#[test]
fn test_short_lived_star_age_capped_by_lifetime() {
    let mut rng = ChaChaRng::seed_from_u64(7);

    for _ in 0..200 {
        let star = Star::new(&mut rng, 1.3);
        assert!(star.main_sequence_lifetime.to_years() < 6.0e9);
        assert!(star.age.to_years() <= star.main_sequence_lifetime.to_years());
        assert!(star.age.to_years() >= 1.0e9);
    }
}

#[test]
fn test_star_orbital_zone_uses_luminosity() {
    let sun = Star::with_age(1.0, Time::from_gyr(4.6));
    assert_eq!(sun.orbital_zone(Length::from_au(1.0)).number(), 1);
    assert_eq!(sun.orbital_zone(Length::from_au(5.0)).number(), 2);
    assert_eq!(sun.orbital_zone(Length::from_au(30.0)).number(), 3);
}
