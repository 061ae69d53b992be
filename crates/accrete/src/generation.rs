//! Stellar system generation pipeline
//!
//! Protoplanets are injected at random orbits inside the planet-forming
//! zone until no dust within their reach is left. Each one sweeps its
//! annulus of the disk, then either joins the planet list or merges with a
//! planet whose orbit it crosses. The survivors are characterized against
//! the host star.

use planetary::{Planet, characterize};
use protodisk::disk::constants::protoplanet_mass;
use protodisk::{AccretionContext, DustDisk, FormationZone, Protoplanet, ProtoplanetList, accrete_dust};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use stellar::{Star, random_eccentricity, random_number};
use tracing::{debug, info, trace};
use units::Length;
use uuid::Uuid;

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::system::StellarSystem;

/// Accretes planets out of a dust disk spanning `[inner_dust, outer_dust]`.
///
/// A disk with no extent, or one that never reaches the planet-forming
/// zone, yields no planets. Fails if the disk is still dusty after
/// `config.max_candidates` injections.
pub fn distribute_planetary_masses<R: Rng + ?Sized>(
    rng: &mut R,
    star: &Star,
    inner_dust: Length,
    outer_dust: Length,
    config: &GenerationConfig,
) -> Result<Vec<Protoplanet>, GenerationError> {
    let (inner, outer) = (inner_dust.to_au(), outer_dust.to_au());
    if !inner.is_finite() || !outer.is_finite() || inner < 0.0 {
        return Err(GenerationError::InvalidDiskLimits { inner, outer });
    }

    let zone = FormationZone::new(star.innermost_planet(), star.outermost_planet());
    let mut disk = DustDisk::for_zone(inner_dust, outer_dust, zone);
    let mut planets = ProtoplanetList::new(config.ordering);
    let seed = protoplanet_mass();
    let mut steps = 0;

    while disk.dust_left() {
        if steps >= config.max_candidates {
            return Err(GenerationError::StepBudgetExhausted { steps });
        }
        steps += 1;

        let a = Length::from_au(random_number(rng, zone.inner.to_au(), zone.outer.to_au()));
        let e = random_eccentricity(rng);
        let ctx = AccretionContext::for_orbit(star, a, e).with_max_iterations(config.max_accretion_iterations);

        let (reach_inner, reach_outer) = ctx.effect_limits(a, e, seed);
        if !disk.available(reach_inner, reach_outer) {
            trace!(a = a.to_au(), e, "No dust within reach");
            continue;
        }

        debug!(a = a.to_au(), e, "Checking protoplanet");
        let accretion = accrete_dust(&mut disk, seed, a, e, &ctx, zone)?;

        if accretion.mass == seed {
            debug!(a = a.to_au(), "Protoplanet blocked by a large neighbour");
            continue;
        }

        planets.coalesce(&mut disk, Protoplanet::new(a, e, accretion.mass), &ctx, zone)?;
    }

    debug!(steps, planets = planets.len(), "Dust disk exhausted");
    Ok(planets.into_planets())
}

/// Generates a system from an explicit random source.
///
/// The stellar mass comes from `config.stellar_mass`, or is drawn from
/// `config.stellar_mass_range` when unset.
pub fn generate_stellar_system_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GenerationConfig,
    id: Uuid,
) -> Result<StellarSystem, GenerationError> {
    let mass = match config.stellar_mass {
        Some(mass) => mass,
        None => {
            let (low, high) = config.stellar_mass_range;
            random_number(rng, low, high)
        }
    };
    if !mass.is_finite() || mass <= 0.0 {
        return Err(GenerationError::InvalidStellarParameters { mass });
    }

    let star = Star::new(rng, mass);
    let bodies = distribute_planetary_masses(rng, &star, Length::zero(), star.dust_limit(), config)?;

    let planets: Vec<Planet> = bodies
        .iter()
        .map(|body| characterize(rng, body, &star, config.max_surface_temp_iterations))
        .collect();

    let system = StellarSystem { id, star, planets };
    info!(
        %id,
        stellar_mass = mass,
        planets = system.planet_count(),
        gas_giants = system.gas_giants().count(),
        habitable = system.habitable_candidates().count(),
        "Generated stellar system"
    );

    Ok(system)
}

/// Generate a stellar system with a specific UUID
///
/// The UUID seeds the random number generator, so the same id and config
/// always produce the same system.
///
/// # Example
/// ```ignore
/// use accrete::{GenerationConfig, generate_stellar_system};
/// use uuid::Uuid;
///
/// let id = Uuid::new_v4();
/// let system = generate_stellar_system(&GenerationConfig::default(), id)?;
/// assert_eq!(system.id, id);
/// ```
pub fn generate_stellar_system(config: &GenerationConfig, id: Uuid) -> Result<StellarSystem, GenerationError> {
    let seed = id.as_u64_pair().0;
    let mut rng = ChaChaRng::seed_from_u64(seed);
    generate_stellar_system_with_rng(&mut rng, config, id)
}

/// Generate a stellar system with a random UUID
pub fn generate_stellar_system_random(config: &GenerationConfig) -> Result<StellarSystem, GenerationError> {
    generate_stellar_system(config, Uuid::new_v4())
}

/// Generate a stellar system with a deterministic UUID from a name
///
/// # Example
/// ```ignore
/// use accrete::{GenerationConfig, generate_stellar_system_named};
///
/// let config = GenerationConfig::default();
/// let system = generate_stellar_system_named(&config, "sol-like-42")?;
/// // Calling again with same name produces identical system
/// ```
pub fn generate_stellar_system_named(config: &GenerationConfig, name: &str) -> Result<StellarSystem, GenerationError> {
    let id = Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes());
    generate_stellar_system(config, id)
}
