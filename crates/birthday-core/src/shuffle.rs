//! Deterministic Shuffle
//!
//! A seed string is hashed with 32-bit FNV-1a and drives a mulberry32
//! generator. All arithmetic wraps at 2^32 so the same seed yields the
//! same permutation on every platform and every run.

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;
const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;
const U32_RANGE: f64 = 4_294_967_296.0;

/// Hash a seed string into the initial generator state.
///
/// Hashes UTF-16 code units so non-ASCII seeds match what a browser's
/// `charCodeAt` would produce.
pub fn seed_hash(seed: &str) -> u32 {
    seed.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// Seeded pseudo-random generator (mulberry32)
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    pub fn new(seed: &str) -> Self {
        Self::from_state(seed_hash(seed))
    }

    pub fn from_state(state: u32) -> Self {
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let s = self.state;
        let mut t = (s ^ (s >> 15)).wrapping_mul(1 | s);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t));
        t ^ (t >> 14)
    }

    /// Next draw in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / U32_RANGE
    }

    /// Uniform index in `[0, bound)` drawn as `floor(random * bound)`
    fn next_index(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64) as usize
    }
}

impl Iterator for SeededRandom {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

/// Fisher-Yates from the last index down to 1, one draw per step
pub fn shuffle_in_place<T>(rng: &mut SeededRandom, items: &mut [T]) {
    for index in (1..items.len()).rev() {
        let swap_with = rng.next_index(index + 1);
        items.swap(index, swap_with);
    }
}

/// Shuffled copy of `items`; the input is left untouched.
pub fn shuffle<T: Clone>(seed: &str, items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffle_in_place(&mut SeededRandom::new(seed), &mut shuffled);
    shuffled
}
