//! Per-instance deterministic RNG.
//!
//! # Seeding strategy
//!
//! Every simulation instance owns exactly one `SimRng`; nothing random is
//! global.  Two constructors cover the two ways a run is started:
//!
//! - [`SimRng::new`]: explicit seed.  Same seed, same stream, bit for bit.
//! - [`SimRng::from_instance_entropy`]: no seed given.  The seed is mixed
//!   from wall-clock nanoseconds, the OS process id, and a process-wide
//!   instance counter, then passed through SplitMix64:
//!
//!   seed = splitmix64(nanos ^ rotl(pid, 32) ^ counter * MIXING_CONSTANT)
//!
//!   The counter separates instances created in the same process within one
//!   clock tick; the pid separates worker processes forked at the same
//!   instant.  The derived seed is kept so an unseeded run can be replayed
//!   with `SimRng::new(rng.seed())`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use log::trace;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Instances created so far by this process.
static INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Simulation-instance RNG.
///
/// Not `Clone`.  Parallel replicates each construct their own.
pub struct SimRng {
    rng:  SmallRng,
    seed: u64,
}

impl SimRng {
    /// Deterministic generator from an explicit seed.
    pub fn new(seed: u64) -> Self {
        trace!("seeding SimRng explicitly (seed={seed})");
        SimRng { rng: SmallRng::seed_from_u64(seed), seed }
    }

    /// Generator whose seed is unique to this instance (see module docs).
    pub fn from_instance_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        let pid = u64::from(std::process::id());
        let counter = INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed);

        let seed = splitmix64(nanos ^ pid.rotate_left(32) ^ counter.wrapping_mul(MIXING_CONSTANT));
        trace!("derived SimRng seed {seed} (pid={pid}, instance={counter})");
        SimRng { rng: SmallRng::seed_from_u64(seed), seed }
    }

    /// `new(seed)` when a seed is configured, otherwise
    /// `from_instance_entropy()`.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None       => Self::from_instance_entropy(),
        }
    }

    /// The seed this generator started from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive a child `SimRng` with a different seed offset, for
    /// seeding replicate instances deterministically from one root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.rng.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng::new(child_seed)
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.rng.r#gen()
    }

    /// Uniform draw from `range`, e.g. a day offset or a fractional threshold.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.rng.gen_range(range)
    }
}

/// SplitMix64 finaliser.  A bijection on `u64`, so distinct inputs never
/// collide.
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(MIXING_CONSTANT);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
