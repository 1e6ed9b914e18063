//! RNG oracle for reproducible monster spawns.
//!
//! Rolls are derived from a session seed and the session nonce instead of a
//! hidden global generator, so a session replays identically given the same
//! seed and tests can swap in a fixed oracle.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Pick an index in `0..len` (returns 0 for an empty range).
    fn pick_index(&self, seed: u64, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.next_u32(seed) as usize % len
    }
}

impl<T: RngOracle + ?Sized> RngOracle for std::sync::Arc<T> {
    fn next_u32(&self, seed: u64) -> u32 {
        (**self).next_u32(seed)
    }

    fn pick_index(&self, seed: u64, len: usize) -> usize {
        (**self).pick_index(seed, len)
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Stateless: every call derives its output from the supplied seed, which
/// [`compute_seed`] makes unique per tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Oracle that always returns the same value. Handy for pinning spawns.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedRng(pub u32);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

/// Compute a per-roll seed from the session seed, the tick nonce and a context
/// discriminator (use distinct contexts for independent rolls in one tick).
pub fn compute_seed(session_seed: u64, nonce: u64, context: u32) -> u64 {
    let mut hash = session_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // SplitMix64-style avalanche
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
