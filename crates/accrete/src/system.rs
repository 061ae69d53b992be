//! The generated stellar system record.

use planetary::Planet;
use serde::{Deserialize, Serialize};
use stellar::Star;
use units::Mass;
use uuid::Uuid;

/// A star and the planets that accreted around it, nearest first.
///
/// The `id` is the seed source: regenerating with the same id and config
/// reproduces the system exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarSystem {
    pub id: Uuid,
    pub star: Star,
    pub planets: Vec<Planet>,
}

impl StellarSystem {
    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }

    pub fn gas_giants(&self) -> impl Iterator<Item = &Planet> {
        self.planets.iter().filter(|planet| planet.gas_giant)
    }

    pub fn habitable_candidates(&self) -> impl Iterator<Item = &Planet> {
        self.planets.iter().filter(|planet| planet.is_habitable_candidate())
    }

    /// Sum of all planetary masses.
    pub fn total_planetary_mass(&self) -> Mass {
        self.planets.iter().fold(Mass::zero(), |total, planet| total + planet.mass)
    }
}
