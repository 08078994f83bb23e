#![deny(unsafe_code)]
//! Deterministic color generation: conversions, seeded random colors, and
//! fixed-pattern color schemes.
//!
//! Provides RGB/HSV/hex conversions (`Rgb`, `Hsv`), a CSS named-color table,
//! an RC4-keystream PRNG (`Rc4Stream`) for reproducible output, constrained
//! random color generation (`make_color`/`ColorOptions`), and six scheme
//! families (`make_scheme`/`SchemeOptions`).

pub mod color;
pub mod error;
pub mod format;
pub mod generate;
pub mod names;
pub mod options;
pub mod prng;
pub mod random;

pub use color::{hex_to_hsv, hsv_to_hex, hsv_to_rgb, rgb_to_hsv, Hsv, Rgb, FALLBACK_RGB};
pub use error::ColorError;
pub use format::{convert, Color, ColorFormat};
pub use generate::{make_color, make_scheme};
pub use names::{name_to_hex, name_to_hsv, name_to_rgb};
pub use options::{ColorOptions, SchemeKind, SchemeOptions};
pub use prng::Rc4Stream;
pub use random::{clamp, random_float, random_int, RandomSource};
