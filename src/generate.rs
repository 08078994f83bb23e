//! Random color generation and scheme derivation.
//!
//! [`make_color`] draws one or more random HSV colors under the constraints
//! in [`ColorOptions`], optionally anchored to a base color and optionally
//! seeded for reproducible output. [`make_scheme`] expands one HSV color
//! into a fixed-pattern palette. Both hand their HSV results to
//! [`crate::format::convert`] for output shaping.

use crate::color::{hex_to_hsv, Hsv};
use crate::format::{convert, Color};
use crate::names::name_to_hsv;
use crate::options::{ColorOptions, SchemeKind, SchemeOptions};
use crate::random::{clamp, random_float, random_int, RandomSource};

/// Reciprocal golden ratio, used to space successive random hues with low
/// visual repetition.
const PHI: f64 = 0.618033988749895;

/// Saturation used when no mode or override decides it.
const DEFAULT_SATURATION: f64 = 0.4;
/// Value used when no mode or override decides it.
const DEFAULT_VALUE: f64 = 0.75;

/// True when the string is shaped like a 3- or 6-digit hex color.
fn looks_like_hex(s: &str) -> bool {
    let digits = s.strip_prefix('#').unwrap_or(s);
    (digits.len() == 3 || digits.len() == 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Resolves a `base_color` option: hex-shaped strings parse as hex, anything
/// else is looked up as a color name. Both paths degrade to the fallback
/// sentinel on bad input rather than failing.
fn resolve_base(base: &str) -> Hsv {
    if looks_like_hex(base) {
        hex_to_hsv(base)
    } else {
        name_to_hsv(base)
    }
}

/// One candidate anchored near `base`: hue within +-5 degrees (clamped to
/// [0, 360]), saturation and value redrawn in [0.4, 0.85). A zero-saturation
/// base stays achromatic. Anchoring ignores the greyscale/golden/full_random
/// modes and the explicit h/s/v overrides.
fn draw_anchored(base: Hsv, source: &mut RandomSource) -> Hsv {
    let h = clamp(
        random_int(base.h - 5.0, base.h + 5.0, source),
        0.0,
        360.0,
    );
    let s = if base.s == 0.0 {
        0.0
    } else {
        random_float(0.4, 0.85, source)
    };
    let v = random_float(0.4, 0.85, source);
    Hsv { h, s, v }
}

/// One candidate drawn from the mode ladder: greyscale, then golden, then
/// full_random / explicit overrides / defaults.
fn draw_free(options: &ColorOptions, source: &mut RandomSource) -> Hsv {
    // Drawn before any branch, used or not, so seeded draw order is the
    // same for every option combination.
    let random_hue = random_int(0.0, 360.0, source);

    let h = if options.greyscale {
        0.0
    } else if options.golden {
        (random_hue + random_hue / PHI) % 360.0
    } else {
        match options.hue {
            Some(hue) if !options.full_random => clamp(hue, 0.0, 360.0),
            _ => random_hue,
        }
    };

    let s = if options.greyscale {
        0.0
    } else if options.full_random {
        random_float(0.0, 1.0, source)
    } else {
        match options.saturation {
            Some(s) => clamp(s, 0.0, 1.0),
            None => DEFAULT_SATURATION,
        }
    };

    let v = if options.full_random {
        random_float(0.0, 1.0, source)
    } else if options.greyscale {
        random_float(0.15, 0.75, source)
    } else {
        match options.value {
            Some(v) => clamp(v, 0.0, 1.0),
            None => DEFAULT_VALUE,
        }
    };

    Hsv { h, s, v }
}

/// Generates `options.colors_returned` random colors in `options.format`.
///
/// With a seed, every draw routes through a private [`Rc4Stream`] and the
/// call is a pure function of the options: same options, same palette.
/// `colors_returned` of zero yields an empty vector; supplying a sensible
/// count (>= 1) is the caller's responsibility.
///
/// [`Rc4Stream`]: crate::prng::Rc4Stream
pub fn make_color(options: &ColorOptions) -> Vec<Color> {
    let mut source = RandomSource::from_seed(options.seed.as_deref());

    let base = options
        .base_color
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(resolve_base);

    let mut colors = Vec::with_capacity(options.colors_returned);
    for _ in 0..options.colors_returned {
        let hsv = match base {
            Some(base) => draw_anchored(base, &mut source),
            None => draw_free(options, &mut source),
        };
        colors.push(hsv);
    }

    convert(options.format, &colors)
}

/// Clones `base` with a replaced hue.
fn with_hue(base: Hsv, h: f64) -> Hsv {
    Hsv { h, ..base }
}

/// Expands `hsv` into a fixed-pattern palette in `options.format`.
///
/// The unmodified input is always element 0; the variants appended after it
/// depend on `options.scheme_type`. Variants clone saturation and value from
/// the base except where the monochromatic rules shift them.
pub fn make_scheme(hsv: Hsv, options: &SchemeOptions) -> Vec<Color> {
    let mut scheme = vec![hsv];

    match options.scheme_type {
        SchemeKind::Monochromatic => {
            for i in 1..=2 {
                let shift = 0.1 * f64::from(i);
                scheme.push(Hsv {
                    h: hsv.h,
                    s: clamp(hsv.s + shift, 0.0, 1.0),
                    v: clamp(hsv.v + shift, 0.0, 1.0),
                });
            }
            for i in 1..=2 {
                let shift = 0.1 * f64::from(i);
                scheme.push(Hsv {
                    h: hsv.h,
                    s: clamp(hsv.s - shift, 0.0, 1.0),
                    v: clamp(hsv.v - shift, 0.0, 1.0),
                });
            }
        }
        SchemeKind::Complementary => {
            scheme.push(with_hue(hsv, (hsv.h + 180.0) % 360.0));
        }
        SchemeKind::SplitComplementary => {
            scheme.push(with_hue(hsv, (hsv.h + 165.0) % 360.0));
            // Negative intermediates fold via abs, not modular wraparound.
            // Compatibility with existing palettes depends on this.
            scheme.push(with_hue(hsv, ((hsv.h - 165.0) % 360.0).abs()));
        }
        SchemeKind::DoubleComplementary => {
            // The working value is complemented, offset by 30, and
            // re-complemented in place while shared by the first two output
            // slots, so both land on the same final hue; the last element
            // is a stale clone taken before the re-complement.
            // Compatibility with existing palettes depends on this exact
            // sequence.
            let offset = (hsv.h + 180.0 + 30.0) % 360.0;
            let folded = (offset + 180.0) % 360.0;
            scheme.push(with_hue(hsv, folded));
            scheme.push(with_hue(hsv, folded));
            scheme.push(with_hue(hsv, offset));
        }
        SchemeKind::Analogous => {
            for i in 1..=5 {
                scheme.push(with_hue(hsv, (hsv.h + 20.0 * f64::from(i)) % 360.0));
            }
        }
        SchemeKind::Triadic => {
            for i in 1..=2 {
                scheme.push(with_hue(hsv, (hsv.h + 120.0 * f64::from(i)) % 360.0));
            }
        }
    }

    convert(options.format, &scheme)
}
