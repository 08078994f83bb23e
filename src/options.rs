//! Option records for generation and scheme calls.
//!
//! Both records are concrete structs with a `Default` impl; sparse overrides
//! are written with struct-update syntax, e.g.
//! `ColorOptions { greyscale: true, ..Default::default() }`. They also
//! deserialize from partial JSON objects (every field has a serde default),
//! so an embedding layer can pass user settings straight through.

use crate::error::ColorError;
use crate::format::ColorFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Options for [`crate::make_color`].
///
/// `hue`, `saturation`, and `value` are overrides: `None` means "use the
/// engine default for the active mode". `base_color` accepts a hex string or
/// a CSS color name and anchors generation near that color, taking precedence
/// over the other knobs. `seed` makes the whole call reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOptions {
    /// Fixed hue in [0, 360], used when neither greyscale, golden, nor
    /// full_random decides the hue.
    pub hue: Option<f64>,
    /// Fixed saturation in [0, 1].
    pub saturation: Option<f64>,
    /// Fixed value in [0, 1].
    pub value: Option<f64>,
    /// Hex string or color name to anchor generation to.
    pub base_color: Option<String>,
    /// Zero saturation, dimmed value range. Both spellings are accepted on
    /// deserialization.
    #[serde(alias = "grayscale")]
    pub greyscale: bool,
    /// Golden-ratio hue spacing for well-distributed hues across calls.
    pub golden: bool,
    /// Randomize hue, saturation, and value unconditionally.
    pub full_random: bool,
    /// Number of independently drawn colors to return.
    pub colors_returned: usize,
    /// Output representation.
    pub format: ColorFormat,
    /// Seed string for reproducible output; `None` uses the ambient source.
    pub seed: Option<String>,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            hue: None,
            saturation: None,
            value: None,
            base_color: None,
            greyscale: false,
            golden: true,
            full_random: false,
            colors_returned: 1,
            format: ColorFormat::Hex,
            seed: None,
        }
    }
}

/// The six scheme families understood by [`crate::make_scheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemeKind {
    Monochromatic,
    Complementary,
    SplitComplementary,
    DoubleComplementary,
    #[default]
    Analogous,
    Triadic,
}

impl FromStr for SchemeKind {
    type Err = ColorError;

    /// Parses a scheme name or any of its documented synonyms,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monochromatic" | "mono" => Ok(Self::Monochromatic),
            "complementary" | "complement" | "comp" => Ok(Self::Complementary),
            "split-complementary" | "split-complement" | "split" => Ok(Self::SplitComplementary),
            "double-complementary" | "double-complement" | "double" => {
                Ok(Self::DoubleComplementary)
            }
            "analogous" | "ana" => Ok(Self::Analogous),
            "triadic" | "triad" | "tri" => Ok(Self::Triadic),
            _ => Err(ColorError::UnrecognizedScheme(s.to_string())),
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Monochromatic => "monochromatic",
            Self::Complementary => "complementary",
            Self::SplitComplementary => "split-complementary",
            Self::DoubleComplementary => "double-complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
        };
        f.write_str(name)
    }
}

/// Options for [`crate::make_scheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemeOptions {
    pub scheme_type: SchemeKind,
    pub format: ColorFormat,
}
