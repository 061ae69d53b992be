use serde::{Deserialize, Serialize};
use units::{Length, Mass};

/// Dust disk extent per cube root of stellar mass, in AU
const DUST_LIMIT_COEFF: f64 = 200.0;
const INNERMOST_PLANET_COEFF: f64 = 0.3;
const OUTERMOST_PLANET_COEFF: f64 = 50.0;

/// Zone boundaries per square root of luminosity, in AU
const INNER_ZONE_LIMIT: f64 = 4.0;
const MIDDLE_ZONE_LIMIT: f64 = 15.0;

/// Outer edge of the dust disk around a star of the given mass.
pub fn stellar_dust_limit(stellar_mass: Mass) -> Length {
    Length::from_au(DUST_LIMIT_COEFF * stellar_mass.powf(1.0 / 3.0))
}

pub fn innermost_planet(stellar_mass: Mass) -> Length {
    Length::from_au(INNERMOST_PLANET_COEFF * stellar_mass.powf(1.0 / 3.0))
}

pub fn outermost_planet(stellar_mass: Mass) -> Length {
    Length::from_au(OUTERMOST_PLANET_COEFF * stellar_mass.powf(1.0 / 3.0))
}

/// Coarse temperature class of an orbit, used to pick composition constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrbitalZone {
    /// Hot region inside ~4 AU for a solar-luminosity star
    Inner,
    /// Temperate region out to ~15 AU
    Middle,
    /// Cold outer region
    Outer,
}

impl OrbitalZone {
    pub fn for_orbit(semi_major_axis: Length, luminosity: f64) -> Self {
        let scale = luminosity.sqrt();
        let a = semi_major_axis.to_au();

        if a < INNER_ZONE_LIMIT * scale {
            OrbitalZone::Inner
        } else if a < MIDDLE_ZONE_LIMIT * scale {
            OrbitalZone::Middle
        } else {
            OrbitalZone::Outer
        }
    }

    /// Classic zone number: 1 hot, 2 temperate, 3 cold.
    pub fn number(&self) -> u8 {
        match self {
            OrbitalZone::Inner => 1,
            OrbitalZone::Middle => 2,
            OrbitalZone::Outer => 3,
        }
    }
}
