//! Randomness source selection and small numeric helpers.
//!
//! Every draw in a generation call routes through a [`RandomSource`]: either
//! the ambient thread-local source, or a seeded [`Rc4Stream`] when the caller
//! asked for reproducible output. The source is an explicit enum so callers
//! pick the variant up front; nothing inspects types at runtime.

use crate::prng::Rc4Stream;

/// Where a generation call draws its randomness from.
///
/// A `Seeded` source owns its stream: the internal indices mutate on every
/// draw, so a source belongs to exactly one call and is never shared.
#[derive(Debug)]
pub enum RandomSource {
    /// The process-wide non-deterministic source (`rand`'s thread RNG).
    Ambient,
    /// A deterministic stream; same seed and draw order, same values.
    Seeded(Rc4Stream),
}

impl RandomSource {
    /// Builds a source from an optional seed string.
    pub fn from_seed(seed: Option<&str>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(Rc4Stream::new(seed)),
            None => Self::Ambient,
        }
    }

    /// Draws one f64 in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        match self {
            Self::Ambient => rand::random::<f64>(),
            Self::Seeded(stream) => stream.next_f64(),
        }
    }
}

/// Random integer with inclusive bounds: `floor(draw * (max - min + 1)) + min`.
///
/// Bounds are f64 so callers can shift the lattice by a fractional base
/// (the base-anchored hue draw passes `base.h ± 5`); with integer bounds the
/// result is an integer in `[min, max]`. Consumes exactly one draw.
pub fn random_int(min: f64, max: f64, source: &mut RandomSource) -> f64 {
    (source.next_f64() * (max - min + 1.0)).floor() + min
}

/// Random float in `[min, max)`. Consumes exactly one draw.
pub fn random_float(min: f64, max: f64, source: &mut RandomSource) -> f64 {
    source.next_f64() * (max - min) + min
}

/// Standard clamp: `max(min, min(x, max))`.
pub fn clamp(x: f64, min: f64, max: f64) -> f64 {
    x.min(max).max(min)
}
