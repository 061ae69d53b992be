use serde::{Deserialize, Serialize};
use tracing::debug;
use units::{Length, Mass};

use super::protoplanet::{Protoplanet, merged_orbit};
use crate::accretion::{AccretionContext, accrete_dust};
use crate::disk::{DustDisk, FormationZone};
use crate::error::AccretionError;

/// What happens to the list order when a merge moves a body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderingPolicy {
    /// Move the merged body so the list stays sorted by semi-major axis
    #[default]
    Resort,
    /// Leave the merged body where it was, even if that breaks the order
    KeepInPlace,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoalescenceOutcome {
    /// The candidate became a new planet at `index`
    Inserted { index: usize },
    /// The candidate merged into the planet now at `index`
    Merged { index: usize, mass: Mass },
}

/// Planets formed so far, nearest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProtoplanetList {
    planets: Vec<Protoplanet>,
    ordering: OrderingPolicy,
}

impl ProtoplanetList {
    pub fn new(ordering: OrderingPolicy) -> Self {
        Self {
            planets: Vec::new(),
            ordering,
        }
    }

    pub fn planets(&self) -> &[Protoplanet] {
        &self.planets
    }

    pub fn into_planets(self) -> Vec<Protoplanet> {
        self.planets
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    fn insertion_index(&self, a: Length) -> usize {
        self.planets
            .iter()
            .position(|planet| planet.a >= a)
            .unwrap_or(self.planets.len())
    }

    /// Adds a converged candidate, merging it into the first planet whose
    /// orbit it crosses.
    ///
    /// A merged body re-accretes from its new orbit, depleting `disk` again.
    pub fn coalesce(
        &mut self,
        disk: &mut DustDisk,
        mut candidate: Protoplanet,
        ctx: &AccretionContext,
        zone: FormationZone,
    ) -> Result<CoalescenceOutcome, AccretionError> {
        let Some(mut index) = self.planets.iter().position(|planet| candidate.overlaps(planet)) else {
            candidate.gas_giant = candidate.mass >= ctx.critical_mass;
            let index = self.insertion_index(candidate.a);
            debug!(
                a = candidate.a.to_au(),
                earth_masses = candidate.mass.to_earth_masses(),
                gas_giant = candidate.gas_giant,
                "Injected protoplanet"
            );
            self.planets.insert(index, candidate);
            return Ok(CoalescenceOutcome::Inserted { index });
        };

        let existing = self.planets[index];
        let (a, e) = merged_orbit(&existing, &candidate);
        let accretion = accrete_dust(disk, existing.mass + candidate.mass, a, e, ctx, zone)?;

        debug!(
            from_a = existing.a.to_au(),
            candidate_a = candidate.a.to_au(),
            merged_a = a.to_au(),
            earth_masses = accretion.mass.to_earth_masses(),
            "Collision between planetesimals"
        );

        let merged = Protoplanet {
            a,
            e,
            mass: accretion.mass,
            gas_giant: existing.gas_giant || accretion.mass >= ctx.critical_mass,
        };

        match self.ordering {
            OrderingPolicy::Resort => {
                self.planets.remove(index);
                index = self.insertion_index(a);
                self.planets.insert(index, merged);
            }
            OrderingPolicy::KeepInPlace => self.planets[index] = merged,
        }

        Ok(CoalescenceOutcome::Merged {
            index,
            mass: accretion.mass,
        })
    }
}
