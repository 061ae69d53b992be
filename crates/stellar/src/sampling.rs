//! Uniform sampling helpers shared by every stage of generation.
//!
//! All helpers draw from the open interval (0, 1) so that derived values such
//! as eccentricities never land exactly on their bounds. They are generic over
//! any [`Rng`], so tests can inject a seeded `ChaChaRng`.

use rand::Rng;
use rand::distr::Open01;

/// Exponent of Dole's eccentricity distribution
pub const ECCENTRICITY_COEFF: f64 = 0.077;

fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.sample(Open01)
}

/// Uniform value between two bounds, in either order.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use stellar::sampling::random_number;
///
/// let mut rng = ChaChaRng::seed_from_u64(7);
/// let a = random_number(&mut rng, 50.0, 0.3);
/// assert!(a > 0.3 && a < 50.0);
/// ```
pub fn random_number<R: Rng + ?Sized>(rng: &mut R, inner: f64, outer: f64) -> f64 {
    let delta = (outer - inner).abs();
    inner.min(outer) + delta * unit(rng)
}

/// A value within `variation` of `value`, uniformly distributed.
pub fn about<R: Rng + ?Sized>(rng: &mut R, value: f64, variation: f64) -> f64 {
    (value - variation) + 2.0 * variation * unit(rng)
}

/// Orbital eccentricity from Dole's distribution, `1 - u^0.077`.
///
/// Heavily weighted toward nearly circular orbits; always in `[0, 1)`.
pub fn random_eccentricity<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    1.0 - unit(rng).powf(ECCENTRICITY_COEFF)
}
