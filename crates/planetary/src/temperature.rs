//! Surface environment of rocky planets.
//!
//! The surface temperature depends on the albedo, which depends on how much
//! of the surface is water, ice and cloud, which in turn depend on the
//! temperature. [`iterate_surface_temp`] walks that loop until successive
//! temperatures agree to within a kelvin.
//!
//! # References
//! - Fogg (1985) - "Extra-Solar Planetary Systems", eqs. 19-24
//! - Hart (1978) - "The Evolution of the Atmosphere of the Earth", Icarus 33

use std::f64::consts::PI;

use rand::Rng;
use serde::{Deserialize, Serialize};
use stellar::sampling::about;
use tracing::warn;
use units::{EARTH_RADIUS_IN_KM, EARTH_SURFACE_PRESSURE_MB, Length, Pressure, Temperature};
use units::temperature::FREEZING_POINT_OF_WATER;

use crate::constants::{
    AIRLESS_ICE_ALBEDO, AIRLESS_ROCKY_ALBEDO, CLOUD_ALBEDO, CLOUD_COVERAGE_FACTOR, EARTH_ALBEDO,
    EARTH_CONVECTION_FACTOR, EARTH_EFFECTIVE_TEMP, EARTH_WATER_MASS_PER_AREA, ICE_ALBEDO, Q2_36,
    ROCKY_ALBEDO, WATER_ALBEDO,
};
use crate::molecule::WATER_VAPOR_WEIGHT;

/// Successive estimates closer than this (K) end the iteration
const CONVERGENCE_THRESHOLD: f64 = 1.0;

/// Default cap on surface temperature iterations
pub const DEFAULT_MAX_SURFACE_TEMP_ITERATIONS: usize = 10_000;

/// Fraction of the surface covered by oceans (Earth's 71% scaled by
/// inventory and surface area).
pub fn hydrosphere_fraction(volatile_inventory: f64, radius: Length) -> f64 {
    let fraction = (0.71 * volatile_inventory / 1000.0) * (EARTH_RADIUS_IN_KM / radius.to_km()).powi(2);
    fraction.min(1.0)
}

/// Fraction of the surface under cloud.
///
/// Planets that cannot hold water vapour have no clouds.
pub fn cloud_fraction(surface_temp: Temperature, molecule_weight: f64, radius: Length, hydrosphere: f64) -> f64 {
    if molecule_weight > WATER_VAPOR_WEIGHT {
        return 0.0;
    }

    let surface_area = 4.0 * PI * radius.to_km().powi(2);
    let hydrosphere_mass = hydrosphere * surface_area * EARTH_WATER_MASS_PER_AREA;
    let water_vapor = 1.0e-8 * hydrosphere_mass * (Q2_36 * (surface_temp.to_kelvin() - 288.0)).exp();

    (CLOUD_COVERAGE_FACTOR * water_vapor / surface_area).min(1.0)
}

/// Fraction of the surface under ice.
pub fn ice_fraction(hydrosphere: f64, surface_temp: Temperature) -> f64 {
    let t = surface_temp.to_kelvin().min(328.0);
    ((328.0 - t) / 90.0).powi(5).min(1.5 * hydrosphere).min(1.0)
}

/// Effective (radiative equilibrium) temperature.
pub fn effective_temp(ecosphere_radius: Length, a: Length, albedo: f64) -> Temperature {
    let kelvin = (ecosphere_radius / a).sqrt() * ((1.0 - albedo) / 0.7).powf(0.25) * EARTH_EFFECTIVE_TEMP;
    Temperature::from_kelvin(kelvin)
}

/// Temperature rise from the greenhouse effect.
pub fn greenhouse_rise(optical_depth: f64, effective_temp: Temperature, surface_pressure: Pressure) -> f64 {
    let convection = EARTH_CONVECTION_FACTOR * (surface_pressure.to_millibars() / EARTH_SURFACE_PRESSURE_MB).powf(0.25);
    ((1.0 + 0.75 * optical_depth).powf(0.25) - 1.0) * effective_temp.to_kelvin() * convection
}

/// Optical depth of the atmosphere.
pub fn opacity(molecule_weight: f64, surface_pressure: Pressure) -> f64 {
    let base = match molecule_weight {
        w if (0.0..10.0).contains(&w) => 3.0,
        w if (10.0..20.0).contains(&w) => 2.34,
        w if (20.0..30.0).contains(&w) => 1.0,
        w if (30.0..45.0).contains(&w) => 0.15,
        w if (45.0..100.0).contains(&w) => 0.05,
        _ => 0.0,
    };

    let atmospheres = surface_pressure.to_earth_atmospheres();
    let thickening = if atmospheres >= 70.0 {
        8.333
    } else if atmospheres >= 50.0 {
        6.666
    } else if atmospheres >= 30.0 {
        3.333
    } else if atmospheres >= 10.0 {
        2.0
    } else if atmospheres >= 5.0 {
        1.5
    } else {
        1.0
    };

    base * thickening
}

/// Randomised albedo blend of cloud, rock, water and ice.
///
/// Clouds obscure an equal share of each surface component underneath.
pub fn planet_albedo<R: Rng + ?Sized>(
    rng: &mut R,
    water: f64,
    clouds: f64,
    ice: f64,
    surface_pressure: Pressure,
) -> f64 {
    let rock = 1.0 - water - ice;
    let components = [water, ice, rock].iter().filter(|&&fraction| fraction > 0.0).count();
    let adjustment = clouds / components.max(1) as f64;

    let rock = (rock - adjustment).max(0.0);
    let water = (water - adjustment).max(0.0);
    let ice = (ice - adjustment).max(0.0);
    let airless = surface_pressure.is_zero();

    let cloud_part = clouds * about(rng, CLOUD_ALBEDO, 0.2);
    let rock_part = if airless {
        rock * about(rng, AIRLESS_ROCKY_ALBEDO, 0.3)
    } else {
        rock * about(rng, ROCKY_ALBEDO, 0.1)
    };
    let water_part = water * about(rng, WATER_ALBEDO, 0.2);
    let ice_part = if airless {
        ice * about(rng, AIRLESS_ICE_ALBEDO, 0.4)
    } else {
        ice * about(rng, ICE_ALBEDO, 0.1)
    };

    cloud_part + rock_part + water_part + ice_part
}

/// What the surface solver needs to know about a rocky planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceInputs {
    pub a: Length,
    pub radius: Length,
    pub molecule_weight: f64,
    pub volatile_inventory: f64,
    pub surface_pressure: Pressure,
    /// `None` when there is no atmosphere to keep water liquid
    pub boil_point: Option<Temperature>,
    pub ecosphere_radius: Length,
}

/// Settled surface state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceConditions {
    pub surface_temp: Temperature,
    pub albedo: f64,
    pub hydrosphere: f64,
    pub cloud_cover: f64,
    pub ice_cover: f64,
    pub converged: bool,
    pub iterations: usize,
}

fn surface_temp(inputs: &SurfaceInputs, optical_depth: f64, albedo: f64) -> Temperature {
    let effective = effective_temp(inputs.ecosphere_radius, inputs.a, albedo);
    let rise = greenhouse_rise(optical_depth, effective, inputs.surface_pressure);
    Temperature::from_kelvin(effective.to_kelvin() + rise)
}

fn liquid_water_possible(temp: Temperature, boil_point: Option<Temperature>) -> bool {
    match boil_point {
        Some(boil) => temp < boil && temp.to_kelvin() > FREEZING_POINT_OF_WATER,
        None => false,
    }
}

/// Iterates surface temperature, albedo and cover fractions to a fixed point.
///
/// Stops once two successive temperatures differ by at most 1 K, or after
/// `max_iterations` passes. In the latter case the last estimate is returned
/// with `converged` unset. A non-finite estimate also stops the iteration
/// unconverged, keeping the last finite state when there is one.
pub fn iterate_surface_temp<R: Rng + ?Sized>(
    rng: &mut R,
    inputs: &SurfaceInputs,
    max_iterations: usize,
) -> SurfaceConditions {
    let optical_depth = opacity(inputs.molecule_weight, inputs.surface_pressure);

    let mut conditions = SurfaceConditions {
        surface_temp: surface_temp(inputs, optical_depth, EARTH_ALBEDO),
        albedo: EARTH_ALBEDO,
        hydrosphere: 0.0,
        cloud_cover: 0.0,
        ice_cover: 0.0,
        converged: false,
        iterations: 0,
    };
    if !conditions.surface_temp.to_kelvin().is_finite() {
        warn!(a = inputs.a.to_au(), "Surface temperature estimate is not finite");
        return conditions;
    }
    let mut previous = conditions.surface_temp.to_kelvin() - 5.0;

    while (conditions.surface_temp.to_kelvin() - previous).abs() > CONVERGENCE_THRESHOLD {
        if conditions.iterations >= max_iterations {
            warn!(
                a = inputs.a.to_au(),
                iterations = conditions.iterations,
                surface_temp = conditions.surface_temp.to_kelvin(),
                "Surface temperature did not converge"
            );
            return conditions;
        }
        conditions.iterations += 1;

        let temp = conditions.surface_temp;
        previous = temp.to_kelvin();

        let mut water = hydrosphere_fraction(inputs.volatile_inventory, inputs.radius);
        let clouds = cloud_fraction(temp, inputs.molecule_weight, inputs.radius, water);
        let ice = ice_fraction(water, temp);
        if !liquid_water_possible(temp, inputs.boil_point) {
            water = 0.0;
        }

        let albedo = planet_albedo(rng, water, clouds, ice, inputs.surface_pressure);
        let next = surface_temp(inputs, optical_depth, albedo);
        if !next.to_kelvin().is_finite() {
            warn!(
                a = inputs.a.to_au(),
                iterations = conditions.iterations,
                albedo,
                "Surface temperature estimate is not finite"
            );
            return conditions;
        }

        conditions.hydrosphere = water;
        conditions.cloud_cover = clouds;
        conditions.ice_cover = ice;
        conditions.albedo = albedo;
        conditions.surface_temp = next;
    }

    conditions.converged = true;
    conditions
}
