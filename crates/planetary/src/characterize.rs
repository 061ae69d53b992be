//! Turns an accreted protoplanet into a [`Planet`].

use protodisk::Protoplanet;
use rand::Rng;
use stellar::Star;
use stellar::sampling::about;

use crate::atmosphere::{
    boiling_point, escape_velocity, greenhouse, molecule_limit, rms_velocity, surface_acceleration,
    surface_gravity, surface_pressure, volatile_inventory,
};
use crate::constants::GAS_GIANT_ALBEDO;
use crate::interior::{empirical_density, kothari_radius, volume_density, volume_radius};
use crate::molecule::MOLECULAR_NITROGEN_WEIGHT;
use crate::planet::Planet;
use crate::rotation::{axial_tilt, day_length, orbital_period};
use crate::temperature::{SurfaceInputs, iterate_surface_temp};

/// Derives every physical and environmental attribute of `body`.
///
/// Rocky bodies run the surface temperature solver, capped at
/// `max_surface_temp_iterations` passes.
pub fn characterize<R: Rng + ?Sized>(
    rng: &mut R,
    body: &Protoplanet,
    star: &Star,
    max_surface_temp_iterations: usize,
) -> Planet {
    let zone = star.orbital_zone(body.a);

    let (radius, density) = if body.gas_giant {
        let density = empirical_density(body.mass, body.a, star.ecosphere_radius, true);
        (volume_radius(body.mass, density), density)
    } else {
        let radius = kothari_radius(body.mass, false, zone);
        (radius, volume_density(body.mass, radius))
    };

    let period = orbital_period(body.a, body.mass, star.mass);
    let rotation = day_length(body.mass, radius, period, body.e, body.gas_giant);
    let tilt = axial_tilt(rng, body.a);

    let v_escape = escape_velocity(body.mass, radius);
    let accel = surface_acceleration(body.mass, radius);
    let v_rms = rms_velocity(MOLECULAR_NITROGEN_WEIGHT, body.a);
    let molecule_weight = molecule_limit(body.mass, radius);

    let mut planet = Planet {
        a: body.a,
        e: body.e,
        mass: body.mass,
        gas_giant: body.gas_giant,
        orbit_zone: zone,
        radius,
        density,
        orbital_period: period,
        day: rotation.day,
        resonant_period: rotation.resonant,
        axial_tilt: tilt,
        escape_velocity: v_escape,
        surface_accel: accel,
        surface_grav: None,
        rms_velocity: v_rms,
        molecule_weight,
        volatile_gas_inventory: None,
        surface_pressure: None,
        greenhouse_effect: false,
        boil_point: None,
        albedo: 0.0,
        surface_temp: None,
        hydrosphere: None,
        cloud_cover: None,
        ice_cover: None,
        temperature_converged: true,
    };

    if body.gas_giant {
        planet.albedo = about(rng, GAS_GIANT_ALBEDO, 0.1);
        return planet;
    }

    let gravity = surface_gravity(accel);
    let greenhouse_effect = greenhouse(zone, body.a, star.greenhouse_radius);
    let inventory = volatile_inventory(rng, body.mass, v_escape, v_rms, star.mass, zone, greenhouse_effect);
    let pressure = surface_pressure(inventory, radius, gravity);
    let boil_point = boiling_point(pressure);

    let inputs = SurfaceInputs {
        a: body.a,
        radius,
        molecule_weight,
        volatile_inventory: inventory,
        surface_pressure: pressure,
        boil_point,
        ecosphere_radius: star.ecosphere_radius,
    };
    let surface = iterate_surface_temp(rng, &inputs, max_surface_temp_iterations);

    planet.surface_grav = Some(gravity);
    planet.greenhouse_effect = greenhouse_effect;
    planet.volatile_gas_inventory = Some(inventory);
    planet.surface_pressure = Some(pressure);
    planet.boil_point = boil_point;
    planet.albedo = surface.albedo;
    planet.surface_temp = Some(surface.surface_temp);
    planet.hydrosphere = Some(surface.hydrosphere);
    planet.cloud_cover = Some(surface.cloud_cover);
    planet.ice_cover = Some(surface.ice_cover);
    planet.temperature_converged = surface.converged;
    planet
}
