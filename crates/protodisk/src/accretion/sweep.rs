use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use units::{Length, Mass};

use super::context::AccretionContext;
use crate::disk::constants::{CONVERGENCE_TOLERANCE, K};
use crate::disk::{DustBand, DustDisk, FormationZone};
use crate::error::AccretionError;

/// Result of growing one body to convergence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accretion {
    /// Seed mass plus everything collected
    pub mass: Mass,
    /// Inner edge of the depleted annulus
    pub inner_reach: Length,
    /// Outer edge of the depleted annulus
    pub outer_reach: Length,
    pub iterations: usize,
}

/// Density of material a body of `current_mass` picks up from `band`.
///
/// Past the critical mass a body also captures gas, at up to `K` times the
/// dust density.
pub fn swept_density(current_mass: Mass, crit_mass: Mass, dust_density: f64, band: &DustBand) -> f64 {
    if !band.dust_present {
        return 0.0;
    }

    if band.gas_present && current_mass >= crit_mass {
        K * dust_density / (1.0 + (crit_mass / current_mass).sqrt() * (K - 1.0))
    } else {
        dust_density
    }
}

/// Mass a body of `current_mass` at `(a, e)` would sweep from the disk.
pub fn collect_dust(disk: &DustDisk, current_mass: Mass, a: Length, e: f64, ctx: &AccretionContext) -> Mass {
    let reduced = current_mass.reduced();
    let (r_inner, r_outer) = ctx.effect_limits(a, e, current_mass);
    let bandwidth = (r_outer - r_inner).to_au();
    let ring = 4.0 * PI * a.to_au().powi(2) * reduced;

    let collected = disk
        .bands()
        .iter()
        .filter(|band| band.outer_edge > r_inner && band.inner_edge < r_outer)
        .fold(0.0, |total, band| {
            let beyond = (r_outer - band.outer_edge).to_au().max(0.0);
            let before = (band.inner_edge - r_inner).to_au().max(0.0);
            let width = bandwidth - beyond - before;
            let volume = ring * (1.0 - e * (beyond - before) / bandwidth) * width;

            total + volume * swept_density(current_mass, ctx.critical_mass, ctx.dust_density, band)
        });

    Mass::from_solar_masses(collected)
}

/// Grows `seed` at `(a, e)` until the collected mass converges, then sweeps
/// the annulus it covered out of the disk.
pub fn accrete_dust(
    disk: &mut DustDisk,
    seed: Mass,
    a: Length,
    e: f64,
    ctx: &AccretionContext,
    zone: FormationZone,
) -> Result<Accretion, AccretionError> {
    let mut collected = seed;
    let mut swept_with;
    let mut iterations = 0;

    loop {
        if iterations >= ctx.max_iterations {
            return Err(AccretionError::NotConverged { iterations });
        }
        iterations += 1;

        swept_with = collected;
        collected = collect_dust(disk, swept_with, a, e, ctx);

        if collected - swept_with < swept_with * CONVERGENCE_TOLERANCE {
            break;
        }
    }

    let mass = seed + collected;
    let (inner_reach, outer_reach) = ctx.effect_limits(a, e, swept_with);
    disk.deplete(inner_reach, outer_reach, mass, ctx.critical_mass, zone);

    Ok(Accretion {
        mass,
        inner_reach,
        outer_reach,
        iterations,
    })
}
