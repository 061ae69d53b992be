//! The protoplanetary dust disk.
//!
//! The disk is an ordered partition of `[inner, outer]` into contiguous
//! bands, each tagged with whether dust and gas are still present. Depletion
//! carves bands at the edges of a swept annulus, and neighbours with equal
//! tags are merged straight back together.

pub mod constants;
mod dust_disk;


pub use dust_disk::{DustBand, DustDisk, FormationZone};
