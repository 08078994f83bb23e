//! Deterministic PRNG based on the RC4 key schedule and keystream generator.
//!
//! Keyed by an arbitrary-length seed string, producing a reproducible
//! sequence of bytes and floats. Same seed always produces the same sequence
//! across all platforms (pure integer arithmetic in the core algorithm).
//! Used strictly as a PRNG for reproducible palettes, not for encryption.

/// RC4-based deterministic byte stream. Same seed always produces the same
/// sequence.
///
/// Holds the 256-entry permutation table scrambled from the seed by the
/// standard swap-based key-scheduling algorithm, plus the two generation
/// indices. Every draw mutates the table, so a stream must be exclusively
/// owned by one generation call.
#[derive(Debug, Clone)]
pub struct Rc4Stream {
    state: [u8; 256],
    i: u8,
    j: u8,
}

impl Rc4Stream {
    /// Creates a new stream keyed by `seed`.
    ///
    /// Seed bytes are cycled with modulo indexing when the seed is shorter
    /// than the 256-entry table. An empty seed keys the stream as if every
    /// seed byte were zero; the stream never fails to construct.
    pub fn new(seed: &str) -> Self {
        let key = seed.as_bytes();
        let mut state = [0u8; 256];
        for (k, slot) in state.iter_mut().enumerate() {
            *slot = k as u8;
        }

        let mut j = 0u8;
        for i in 0..256 {
            let seed_byte = if key.is_empty() {
                0
            } else {
                key[i % key.len()]
            };
            j = j.wrapping_add(state[i]).wrapping_add(seed_byte);
            state.swap(i, usize::from(j));
        }

        Self { state, i: 0, j: 0 }
    }

    /// Advances the stream and returns the next byte.
    ///
    /// The standard keystream step: increment `i`, accumulate `j` from
    /// `state[i]`, swap the two entries, and return
    /// `state[(state[i] + state[j]) mod 256]`.
    pub fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        self.j = self.j.wrapping_add(self.state[usize::from(self.i)]);
        self.state.swap(usize::from(self.i), usize::from(self.j));
        let index = self.state[usize::from(self.i)].wrapping_add(self.state[usize::from(self.j)]);
        self.state[usize::from(index)]
    }

    /// Returns a uniformly distributed f64 in [0, 1).
    ///
    /// Accumulates 8 drawn bytes little-endian (byte k weighted by 256^k)
    /// into a u64 and divides by 2^64, for full 64-bit granularity.
    pub fn next_f64(&mut self) -> f64 {
        let mut number = 0u64;
        let mut multiplier = 1u64;
        for _ in 0..8 {
            number = number.wrapping_add(u64::from(self.next_byte()).wrapping_mul(multiplier));
            multiplier = multiplier.wrapping_mul(256);
        }
        number as f64 / 18_446_744_073_709_551_616.0
    }
}
