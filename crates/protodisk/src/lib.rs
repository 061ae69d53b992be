//! Dole/Fogg dust-accretion planet formation.
//!
//! The protoplanetary disk is a partition of dust bands. Injected
//! protoplanets sweep dust (and gas once past their critical mass) from the
//! annulus their eccentric orbit and gravitational reach cover, until their
//! mass converges. Converged bodies are then inserted into an ordered list,
//! merging with any neighbour whose orbit they cross.

pub mod accretion;
pub mod bodies;
pub mod disk;
pub mod error;

pub use accretion::{Accretion, AccretionContext, accrete_dust, collect_dust, swept_density};
pub use bodies::{CoalescenceOutcome, OrderingPolicy, Protoplanet, ProtoplanetList};
pub use disk::{DustBand, DustDisk, FormationZone};
pub use error::AccretionError;
