//! Seeded pseudo-random functions
//!
//! Every function here is pure: the same seed always gives the same value.
//! Callers derive independent seeds with [`derive_seed`] instead of keeping
//! generator state around.

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// SplitMix64 output function
pub fn mix(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Uniform value in `[0, 1)`
pub fn seeded_unit(seed: u64) -> f64 {
    (mix(seed) >> 11) as f64 / (1u64 << 53) as f64
}

/// Value in the inclusive range `[min, max]`; `min` when the range is empty
pub fn seeded_range(seed: u64, min: u64, max: u64) -> u64 {
    if min >= max {
        return min;
    }
    match (max - min).checked_add(1) {
        Some(span) => min + mix(seed) % span,
        None => mix(seed),
    }
}

/// Element of `items` chosen by `seed`
pub fn seeded_pick<T>(seed: u64, items: &[T]) -> Option<&T> {
    if items.is_empty() {
        return None;
    }
    let index = seeded_range(seed, 0, items.len() as u64 - 1) as usize;
    items.get(index)
}

/// Independent seed for the `stream`-th consumer of `seed`
pub fn derive_seed(seed: u64, stream: u64) -> u64 {
    mix(seed ^ mix(stream))
}

/// FNV-1a hash, used to fold request contents into a seed
pub fn seed_from_bytes(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}
