//! Protoplanets and their collisions.
//!
//! Converged bodies are kept in a list ordered by semi-major axis. A newcomer
//! whose orbit comes within reach of an existing body merges with it instead
//! of being inserted; the merged body then sweeps the disk again from its new
//! orbit.

mod coalescence;
mod protoplanet;


pub use coalescence::{CoalescenceOutcome, OrderingPolicy, ProtoplanetList};
pub use protoplanet::{Protoplanet, merged_orbit};
