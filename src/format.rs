//! Output shaping: converting generated HSV sequences to the caller's format.

use crate::color::{hsv_to_rgb, Hsv, Rgb};
use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output representation for a generation or scheme call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorFormat {
    /// `"#rrggbb"` strings.
    #[default]
    Hex,
    /// [`Rgb`] structs.
    Rgb,
    /// `"rgb(r,g,b)"` strings.
    RgbString,
    /// Raw [`Hsv`] values, unconverted.
    Hsv,
}

impl FromStr for ColorFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "rgb-string" => Ok(Self::RgbString),
            "hsv" => Ok(Self::Hsv),
            _ => Err(ColorError::UnrecognizedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::RgbString => "rgb-string",
            Self::Hsv => "hsv",
        };
        f.write_str(name)
    }
}

/// A single generated color, shaped per [`ColorFormat`].
///
/// Every color in one call's output carries the same variant. Serializes
/// untagged, so a swatch consumer receives the bare string, channel object,
/// or HSV object directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Color {
    Hex(String),
    Rgb(Rgb),
    RgbString(String),
    Hsv(Hsv),
}

/// Maps every HSV element to the requested format, preserving length and
/// order.
pub fn convert(format: ColorFormat, colors: &[Hsv]) -> Vec<Color> {
    colors
        .iter()
        .map(|&hsv| match format {
            ColorFormat::Hex => Color::Hex(hsv_to_rgb(hsv).to_hex()),
            ColorFormat::Rgb => Color::Rgb(hsv_to_rgb(hsv)),
            ColorFormat::RgbString => {
                let Rgb { r, g, b } = hsv_to_rgb(hsv);
                Color::RgbString(format!("rgb({r},{g},{b})"))
            }
            ColorFormat::Hsv => Color::Hsv(hsv),
        })
        .collect()
}
