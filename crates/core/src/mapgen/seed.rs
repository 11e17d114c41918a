//! Seed text hashing, runtime entropy fallback, and PRNG construction.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use serde::Serialize;

const FNV_OFFSET_BASIS: u64 = 0xCBF2_9CE4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

/// 64-bit FNV-1a. Stable across platforms and releases, unlike `std`'s hashers.
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(FNV_OFFSET_BASIS, |hash, &byte| (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME))
}

/// Where the numeric seed of a run came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum SeedSource {
    /// Seed text supplied by the caller, hashed with FNV-1a.
    Text { text: String, hash: u64 },
    /// A numeric seed supplied directly, e.g. replaying an earlier entropy run.
    Value(u64),
    /// No seed supplied; drawn from runtime entropy.
    Entropy(u64),
}

impl SeedSource {
    pub fn resolve(text: &str) -> Self {
        if text.is_empty() {
            Self::Entropy(runtime_entropy_seed())
        } else {
            Self::Text { text: text.to_string(), hash: fnv1a_64(text.as_bytes()) }
        }
    }

    pub fn value(&self) -> u64 {
        match self {
            Self::Text { hash, .. } => *hash,
            Self::Value(seed) | Self::Entropy(seed) => *seed,
        }
    }

    pub fn is_reproducible(&self) -> bool {
        !matches!(self, Self::Entropy(_))
    }
}

static ENTROPY_COUNTER: AtomicU64 = AtomicU64::new(0);

pub(crate) fn runtime_entropy_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = ENTROPY_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

pub(super) fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
