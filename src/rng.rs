//! Seedable RNG construction
//!
//! All generation randomness flows through an injected `StdRng`, so
//! identical seeds reproduce identical layouts.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build the generator RNG: a fixed seed for reproducible layouts,
/// `None` for entropy-backed production use
pub fn seeded(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}
