//! Planetesimal mass accretion.
//!
//! A protoplanet sweeps an annulus bounded by its perihelion and aphelion,
//! widened by its gravitational reach (the reduced mass) and the dust
//! particles' own eccentricity. Each sweep uses the mass collected by the
//! previous one, repeating until the gain falls below a relative tolerance.

mod context;
mod sweep;


pub use context::{AccretionContext, critical_mass, dust_density, inner_effect_limit, outer_effect_limit};
pub use sweep::{Accretion, accrete_dust, collect_dust, swept_density};
