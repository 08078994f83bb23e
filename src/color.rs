//! Color types and conversion functions.
//!
//! Provides the two working representations (`Rgb`, `Hsv`) and pure
//! conversion functions between them and the `#rrggbb` hex string form.
//! All generation and scheme math happens in HSV, because hue rotation and
//! saturation/value shifts are linear there; RGB is the common intermediate
//! for hex parsing and formatting.

use crate::error::ColorError;
use serde::{Deserialize, Serialize};

/// Absolute device-space color with integer channels in [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSV color: hue in degrees [0, 360), saturation and value in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Substitute color for malformed hex input in the degrading conversion
/// paths (`hex_to_hsv`, name lookups that fall through). The exact value is
/// part of the engine's observable contract; do not change it.
pub const FALLBACK_RGB: Rgb = Rgb { r: 10, g: 10, b: 0 };

impl Rgb {
    /// Parses a hex color like `"#b272bf"`, `"b272bf"`, or `"#abc"`.
    ///
    /// Case insensitive, `#` optional. 3-digit shorthand expands by doubling
    /// each digit (`#abc` -> `#aabbcc`). Anything else is
    /// `ColorError::MalformedHex`.
    pub fn from_hex(hex: &str) -> Result<Rgb, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::MalformedHex(hex.to_string()));
        }
        let expanded;
        let digits = match digits.len() {
            6 => digits,
            3 => {
                expanded = digits.chars().flat_map(|c| [c, c]).collect::<String>();
                &expanded
            }
            _ => return Err(ColorError::MalformedHex(hex.to_string())),
        };
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorError::MalformedHex(hex.to_string()))
        };
        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Formats the color as a lowercase hex string like `"#b272bf"`.
    ///
    /// Each channel is zero-padded to two digits.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Scales a unit-interval channel to [0, 255], flooring (never rounding).
fn scale_channel(x: f64) -> u8 {
    (x * 255.0).floor() as u8
}

/// Converts HSV to RGB via the standard hex-cone conversion.
///
/// `s == 0` short-circuits to the achromatic grey `(v, v, v)` before any
/// sector math. Otherwise the hue sector `i = floor(h/60) mod 6` selects
/// `(r, g, b)` from the canonical p/q/t table. Channels scale by x255 with
/// floor in both branches.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv { h, s, v } = hsv;

    if s == 0.0 {
        let grey = scale_channel(v);
        return Rgb {
            r: grey,
            g: grey,
            b: grey,
        };
    }

    let h = h / 60.0;
    // The mod 6 folds h=360 into sector 0 instead of falling off the table.
    let i = (h.floor() as i64).rem_euclid(6);
    let f = h - h.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match i {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb {
        r: scale_channel(r),
        g: scale_channel(g),
        b: scale_channel(b),
    }
}

/// Converts RGB to HSV.
///
/// Achromatic input (`min == max`) returns `{h: 0, s: 0, v: min}`. Otherwise
/// value is the max channel, saturation is `(max - min) / max`, and hue comes
/// from the piecewise formula keyed on which channel is the minimum, folded
/// into [0, 360).
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let min = r.min(g.min(b));
    let max = r.max(g.max(b));

    if min == max {
        return Hsv {
            h: 0.0,
            s: 0.0,
            v: min,
        };
    }

    let (d, sector) = if r == min {
        (g - b, 3.0)
    } else if b == min {
        (r - g, 1.0)
    } else {
        (b - r, 5.0)
    };

    Hsv {
        h: (60.0 * (sector - d / (max - min))).rem_euclid(360.0),
        s: (max - min) / max,
        v: max,
    }
}

/// Converts HSV to a hex string, through RGB.
pub fn hsv_to_hex(hsv: Hsv) -> String {
    hsv_to_rgb(hsv).to_hex()
}

/// Converts a hex string to HSV, through RGB.
///
/// Never fails: malformed input logs a warning and substitutes
/// [`FALLBACK_RGB`], so pipelines like base-color resolution stay non-fatal.
pub fn hex_to_hsv(hex: &str) -> Hsv {
    let rgb = Rgb::from_hex(hex).unwrap_or_else(|err| {
        log::warn!("{err}, using fallback color");
        FALLBACK_RGB
    });
    rgb_to_hsv(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    // -- Hex parsing --

    #[test]
    fn from_hex_parses_six_digits_with_hash() {
        let c = Rgb::from_hex("#b272bf").unwrap();
        assert_eq!(
            c,
            Rgb {
                r: 178,
                g: 114,
                b: 191
            }
        );
    }

    #[test]
    fn from_hex_parses_without_hash() {
        let c = Rgb::from_hex("b272bf").unwrap();
        assert_eq!(
            c,
            Rgb {
                r: 178,
                g: 114,
                b: 191
            }
        );
    }

    #[test]
    fn from_hex_is_case_insensitive() {
        assert_eq!(
            Rgb::from_hex("#B272BF").unwrap(),
            Rgb::from_hex("#b272bf").unwrap()
        );
    }

    #[test]
    fn from_hex_expands_three_digit_shorthand() {
        let c = Rgb::from_hex("#abc").unwrap();
        assert_eq!(
            c,
            Rgb {
                r: 0xaa,
                g: 0xbb,
                b: 0xcc
            }
        );
    }

    #[test]
    fn from_hex_rejects_malformed_input() {
        for bad in ["", "#", "#zzzzzz", "#ab", "#abcd", "#aabbccdd", "rgb(1,2,3)"] {
            assert!(
                Rgb::from_hex(bad).is_err(),
                "expected MalformedHex for {bad:?}"
            );
        }
    }

    #[test]
    fn from_hex_rejects_sign_characters() {
        // u8::from_str_radix alone would accept "+a" as a digit pair.
        assert!(Rgb::from_hex("#+1+2+3").is_err());
    }

    // -- Hex formatting --

    #[test]
    fn to_hex_known_color() {
        let c = Rgb {
            r: 178,
            g: 114,
            b: 191,
        };
        assert_eq!(c.to_hex(), "#b272bf");
    }

    #[test]
    fn to_hex_zero_pads_channels() {
        let c = Rgb { r: 0, g: 5, b: 255 };
        assert_eq!(c.to_hex(), "#0005ff");
    }

    #[test]
    fn hex_round_trip_normalizes_to_lowercase() {
        let c = Rgb::from_hex("#B272BF").unwrap();
        assert_eq!(c.to_hex(), "#b272bf");
    }

    // -- HSV -> RGB --

    #[test]
    fn hsv_to_rgb_pure_red() {
        let rgb = hsv_to_rgb(Hsv {
            h: 0.0,
            s: 1.0,
            v: 1.0,
        });
        assert_eq!(rgb, Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn hsv_to_rgb_pure_green() {
        let rgb = hsv_to_rgb(Hsv {
            h: 120.0,
            s: 1.0,
            v: 1.0,
        });
        assert_eq!(rgb, Rgb { r: 0, g: 255, b: 0 });
    }

    #[test]
    fn hsv_to_rgb_pure_blue() {
        let rgb = hsv_to_rgb(Hsv {
            h: 240.0,
            s: 1.0,
            v: 1.0,
        });
        assert_eq!(rgb, Rgb { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn hsv_to_rgb_achromatic_scales_value() {
        let rgb = hsv_to_rgb(Hsv {
            h: 123.0,
            s: 0.0,
            v: 0.5,
        });
        // floor(0.5 * 255) = 127 on every channel
        assert_eq!(
            rgb,
            Rgb {
                r: 127,
                g: 127,
                b: 127
            }
        );
    }

    #[test]
    fn hsv_to_rgb_hue_360_wraps_to_red() {
        let rgb = hsv_to_rgb(Hsv {
            h: 360.0,
            s: 1.0,
            v: 1.0,
        });
        assert_eq!(rgb, Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn hsv_to_rgb_floors_channels() {
        // v = 0.999: floor(0.999 * 255) = floor(254.745) = 254, not 255
        let rgb = hsv_to_rgb(Hsv {
            h: 0.0,
            s: 0.0,
            v: 0.999,
        });
        assert_eq!(rgb.r, 254);
    }

    // -- RGB -> HSV --

    #[test]
    fn rgb_to_hsv_pure_red() {
        let hsv = rgb_to_hsv(Rgb { r: 255, g: 0, b: 0 });
        assert!(approx_eq(hsv.h, 0.0), "h: {}", hsv.h);
        assert!(approx_eq(hsv.s, 1.0), "s: {}", hsv.s);
        assert!(approx_eq(hsv.v, 1.0), "v: {}", hsv.v);
    }

    #[test]
    fn rgb_to_hsv_pure_green() {
        let hsv = rgb_to_hsv(Rgb { r: 0, g: 255, b: 0 });
        assert!(approx_eq(hsv.h, 120.0), "h: {}", hsv.h);
    }

    #[test]
    fn rgb_to_hsv_pure_blue() {
        let hsv = rgb_to_hsv(Rgb { r: 0, g: 0, b: 255 });
        assert!(approx_eq(hsv.h, 240.0), "h: {}", hsv.h);
    }

    #[test]
    fn rgb_to_hsv_achromatic_grey() {
        let hsv = rgb_to_hsv(Rgb {
            r: 128,
            g: 128,
            b: 128,
        });
        assert_eq!(hsv.h, 0.0);
        assert_eq!(hsv.s, 0.0);
        assert!(approx_eq(hsv.v, 128.0 / 255.0), "v: {}", hsv.v);
    }

    #[test]
    fn rgb_to_hsv_black_and_white() {
        let black = rgb_to_hsv(Rgb { r: 0, g: 0, b: 0 });
        assert_eq!((black.h, black.s, black.v), (0.0, 0.0, 0.0));
        let white = rgb_to_hsv(Rgb {
            r: 255,
            g: 255,
            b: 255,
        });
        assert_eq!((white.h, white.s, white.v), (0.0, 0.0, 1.0));
    }

    // -- Compositions --

    #[test]
    fn hsv_to_hex_routes_through_rgb() {
        let hex = hsv_to_hex(Hsv {
            h: 0.0,
            s: 1.0,
            v: 1.0,
        });
        assert_eq!(hex, "#ff0000");
    }

    #[test]
    fn hex_to_hsv_valid_input() {
        let hsv = hex_to_hsv("#00ff00");
        assert!(approx_eq(hsv.h, 120.0), "h: {}", hsv.h);
        assert!(approx_eq(hsv.s, 1.0), "s: {}", hsv.s);
        assert!(approx_eq(hsv.v, 1.0), "v: {}", hsv.v);
    }

    #[test]
    fn hex_to_hsv_malformed_uses_fallback() {
        // FALLBACK_RGB {10, 10, 0} in HSV: h=60, s=1, v=10/255
        let hsv = hex_to_hsv("not-a-color");
        assert!(approx_eq(hsv.h, 60.0), "h: {}", hsv.h);
        assert!(approx_eq(hsv.s, 1.0), "s: {}", hsv.s);
        assert!(approx_eq(hsv.v, 10.0 / 255.0), "v: {}", hsv.v);
    }

    #[test]
    fn hex_to_hsv_empty_string_uses_fallback() {
        assert_eq!(hex_to_hsv(""), rgb_to_hsv(FALLBACK_RGB));
    }

    // -- Serde --

    #[test]
    fn rgb_serializes_as_channel_object() {
        let json = serde_json::to_string(&Rgb {
            r: 178,
            g: 114,
            b: 191,
        })
        .unwrap();
        assert_eq!(json, r#"{"r":178,"g":114,"b":191}"#);
    }

    #[test]
    fn hsv_json_round_trip() {
        let original = Hsv {
            h: 210.0,
            s: 0.4,
            v: 0.75,
        };
        let json = serde_json::to_string(&original).unwrap();
        let restored: Hsv = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rgb_hsv_round_trip_within_one(r: u8, g: u8, b: u8) {
                let original = Rgb { r, g, b };
                let round_tripped = hsv_to_rgb(rgb_to_hsv(original));
                // Floor-based quantization loses at most one step per channel.
                prop_assert!(
                    (i16::from(round_tripped.r) - i16::from(original.r)).abs() <= 1,
                    "r: {} vs {}", round_tripped.r, original.r
                );
                prop_assert!(
                    (i16::from(round_tripped.g) - i16::from(original.g)).abs() <= 1,
                    "g: {} vs {}", round_tripped.g, original.g
                );
                prop_assert!(
                    (i16::from(round_tripped.b) - i16::from(original.b)).abs() <= 1,
                    "b: {} vs {}", round_tripped.b, original.b
                );
            }

            #[test]
            fn hex_round_trip_is_lowercase_identity(value in "[0-9a-f]{6}") {
                let hex = format!("#{value}");
                let round_tripped = Rgb::from_hex(&hex).unwrap().to_hex();
                prop_assert_eq!(round_tripped, hex);
            }

            #[test]
            fn rgb_to_hsv_ranges_hold(r: u8, g: u8, b: u8) {
                let hsv = rgb_to_hsv(Rgb { r, g, b });
                prop_assert!(hsv.h >= 0.0 && hsv.h < 360.0, "h out of range: {}", hsv.h);
                prop_assert!(hsv.s >= 0.0 && hsv.s <= 1.0, "s out of range: {}", hsv.s);
                prop_assert!(hsv.v >= 0.0 && hsv.v <= 1.0, "v out of range: {}", hsv.v);
            }

            #[test]
            fn hsv_to_rgb_never_panics_for_valid_hsv(
                h in 0.0_f64..360.0,
                s in 0.0_f64..=1.0,
                v in 0.0_f64..=1.0,
            ) {
                // Channels are u8 by type; this checks the conversion is total.
                let _ = hsv_to_rgb(Hsv { h, s, v });
            }

            #[test]
            fn three_digit_shorthand_doubles_each_digit(value in "[0-9a-f]{3}") {
                let short = Rgb::from_hex(&format!("#{value}")).unwrap();
                let digits: Vec<char> = value.chars().collect();
                let long: String = digits.iter().flat_map(|&c| [c, c]).collect();
                let full = Rgb::from_hex(&format!("#{long}")).unwrap();
                prop_assert_eq!(short, full);
            }
        }
    }
}
